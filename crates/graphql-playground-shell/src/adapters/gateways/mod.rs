mod memory;
#[cfg(feature = "reqwest")]
mod reqwest;

pub use memory::MemoryEditor;
#[cfg(feature = "reqwest")]
pub use self::reqwest::Reqwest;
