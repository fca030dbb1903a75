use apollo_parser::Parser;

use crate::use_cases::ports::QueryValidityOracle;

/// Syntax oracle backed by the apollo-rs parser
#[derive(Debug, Default)]
pub struct ApolloParser;

impl ApolloParser {
    pub fn new() -> Self {
        Self
    }
}

impl QueryValidityOracle for ApolloParser {
    fn has_syntax_errors(&self, source: &str) -> bool {
        Parser::new(source).parse().errors().next().is_some()
    }
}
