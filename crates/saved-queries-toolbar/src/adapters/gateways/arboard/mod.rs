mod clipboard;

pub use clipboard::Arboard;
