mod address_bar;
mod clipboard;
mod oracle;
mod persistence;
mod toast_sink;

pub use address_bar::AddressBar;
pub use clipboard::Clipboard;
pub use oracle::QueryValidityOracle;
pub use persistence::QueryPersistence;
pub use toast_sink::ToastSink;
