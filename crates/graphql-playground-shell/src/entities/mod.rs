mod fetcher;

pub use fetcher::{FetcherOptions, GraphQLRequest};
