use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{FetcherOptions, GraphQLRequest};
use crate::error::ShellError;
use crate::use_cases::ports::Fetcher;

/// HTTP fetcher posting requests through a shared reqwest client
pub struct Reqwest {
    client: reqwest::Client,
    options: FetcherOptions,
}

impl Reqwest {
    pub fn new(options: FetcherOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }
}

#[async_trait]
impl Fetcher for Reqwest {
    async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError> {
        let mut builder = self.client.post(self.options.url.clone()).json(&request);
        for (name, value) in &self.options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ShellError::FetcherError(e.to_string()))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ShellError::FetcherError(e.to_string()))
    }
}
