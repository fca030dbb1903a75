use url::Url;

/// The page location the toolbar reads shared-query links from.
///
/// `replace_url` swaps the visible location without creating a history
/// entry, matching how a browser shell strips one-shot parameters.
pub trait AddressBar: Send + Sync {
    fn current_url(&self) -> Url;
    fn replace_url(&self, url: Url);
}
