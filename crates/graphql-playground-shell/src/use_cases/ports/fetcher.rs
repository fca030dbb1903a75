use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::GraphQLRequest;
use crate::error::ShellError;

/// Transport executing GraphQL requests against an endpoint
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError>;
}

#[async_trait]
impl Fetcher for Arc<dyn Fetcher> {
    async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError> {
        self.as_ref().fetch(request).await
    }
}
