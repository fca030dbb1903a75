use async_trait::async_trait;
use serde_json::{json, Value};

use crate::entities::GraphQLRequest;
use crate::error::ShellError;
use crate::use_cases::ports::Fetcher;

/// Operation name GraphiQL-style clients use for schema introspection
pub const INTROSPECTION_OPERATION: &str = "IntrospectionQuery";

/// Fetcher wrapper that refuses to send syntactically broken queries.
///
/// Instead of a network round trip the caller gets a response shaped like
/// a GraphQL error payload, so result panes render it natively.
/// Introspection requests skip the check; they are tool-generated.
pub struct ValidatingFetcher<F> {
    inner: F,
}

impl<F> ValidatingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for ValidatingFetcher<F> {
    async fn fetch(&self, request: GraphQLRequest) -> Result<Value, ShellError> {
        if request.operation_name.as_deref() != Some(INTROSPECTION_OPERATION) {
            let tree = apollo_parser::Parser::new(&request.query).parse();
            let errors: Vec<Value> = tree
                .errors()
                .map(|error| json!({ "message": error.message() }))
                .collect();
            if !errors.is_empty() {
                return Ok(json!({ "data": null, "errors": errors }));
            }
        }
        self.inner.fetch(request).await
    }
}
