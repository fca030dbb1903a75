use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use url::Url;

use crate::entities::QueryId;
use crate::use_cases::ports::AddressBar;

/// Search parameter carrying a shared query id
pub const QUERY_SEARCH_PARAM: &str = "playgroundQuery";

/// Grace period before the shared-query parameter is stripped from the
/// address bar, leaving room for late subscribers to read it
pub const STRIP_DELAY: Duration = Duration::from_millis(50);

/// Return `url` with the shared-query parameter set to `id`, replacing any
/// existing occurrence
pub fn with_query_param(url: &Url, id: &QueryId) -> Url {
    let mut stripped = without_query_param(url);
    stripped
        .query_pairs_mut()
        .append_pair(QUERY_SEARCH_PARAM, id.as_str());
    stripped
}

/// Return `url` with the shared-query parameter removed, leaving every
/// other parameter in place
pub fn without_query_param(url: &Url) -> Url {
    let remaining: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k.as_ref() != QUERY_SEARCH_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut url = url.clone();
    url.set_query(None);
    if !remaining.is_empty() {
        url.query_pairs_mut().extend_pairs(remaining);
    }
    url
}

/// Build a shareable link for `id` on top of the current page URL
pub fn create_query_sharing_url(address_bar: &dyn AddressBar, id: &QueryId) -> Url {
    with_query_param(&address_bar.current_url(), id)
}

/// Read the shared-query id off the address bar, then strip it.
///
/// The strip is deferred so that a second caller racing this one still
/// observes the parameter. After the delay the URL is only replaced when
/// the parameter is still present, which keeps repeated plucks from
/// stacking redundant replaces. Without a runtime the strip happens
/// immediately.
pub fn pluck_query_id_from_url(address_bar: &Arc<dyn AddressBar>) -> Option<QueryId> {
    let url = address_bar.current_url();
    let id = url
        .query_pairs()
        .find(|(k, _)| k.as_ref() == QUERY_SEARCH_PARAM)
        .map(|(_, v)| QueryId::new(v.into_owned()))?;

    match Handle::try_current() {
        Ok(handle) => {
            let address_bar = Arc::clone(address_bar);
            handle.spawn(async move {
                tokio::time::sleep(STRIP_DELAY).await;
                let current = address_bar.current_url();
                let stripped = without_query_param(&current);
                if stripped != current {
                    address_bar.replace_url(stripped);
                }
            });
        }
        Err(_) => {
            address_bar.replace_url(without_query_param(&url));
        }
    }

    Some(id)
}
