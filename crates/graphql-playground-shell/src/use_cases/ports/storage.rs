/// Key-value storage for editor payloads (headers, variables, tab state)
pub trait EditorStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}
