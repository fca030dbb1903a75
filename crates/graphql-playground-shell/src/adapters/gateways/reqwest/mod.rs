mod fetcher;

pub use fetcher::Reqwest;
