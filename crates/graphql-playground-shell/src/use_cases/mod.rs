pub mod build_playground;
pub mod extend_fetcher;
pub mod ports;

pub use build_playground::{Playground, PlaygroundBuilder};
pub use extend_fetcher::{ValidatingFetcher, INTROSPECTION_OPERATION};
