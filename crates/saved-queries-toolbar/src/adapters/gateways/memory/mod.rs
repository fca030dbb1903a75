mod address_bar;
mod clipboard;
mod oracle;
mod persistence;

pub use address_bar::MemoryAddressBar;
pub use clipboard::MemoryClipboard;
pub use oracle::PermissiveOracle;
pub use persistence::InMemoryPersistence;
