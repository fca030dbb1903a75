#[cfg(feature = "apollo-parser")]
mod apollo_parser;
#[cfg(feature = "arboard")]
mod arboard;
mod memory;

#[cfg(feature = "apollo-parser")]
pub use self::apollo_parser::ApolloParser;
#[cfg(feature = "arboard")]
pub use self::arboard::Arboard;
pub use memory::{InMemoryPersistence, MemoryAddressBar, MemoryClipboard, PermissiveOracle};
