mod editor;
mod fetcher;
mod storage;

pub use editor::EditorSurface;
pub use fetcher::Fetcher;
pub use storage::EditorStorage;
