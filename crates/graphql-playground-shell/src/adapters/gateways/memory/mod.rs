mod editor;

pub use editor::MemoryEditor;
