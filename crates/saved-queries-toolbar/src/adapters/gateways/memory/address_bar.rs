use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use url::Url;

use crate::use_cases::ports::AddressBar;

/// Address bar holding one URL in memory, standing in for a browser
/// location
pub struct MemoryAddressBar {
    url: Mutex<Url>,
    replaces: AtomicUsize,
}

impl MemoryAddressBar {
    pub fn new(url: Url) -> Self {
        Self {
            url: Mutex::new(url),
            replaces: AtomicUsize::new(0),
        }
    }

    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }

    /// How many times the URL has been replaced
    pub fn replace_count(&self) -> usize {
        self.replaces.load(Ordering::SeqCst)
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost/playground").expect("static url parses"))
    }
}

impl AddressBar for MemoryAddressBar {
    fn current_url(&self) -> Url {
        match self.url.lock() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace_url(&self, url: Url) {
        if let Ok(mut current) = self.url.lock() {
            *current = url;
        }
        self.replaces.fetch_add(1, Ordering::SeqCst);
    }
}
