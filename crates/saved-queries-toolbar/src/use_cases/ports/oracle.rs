/// Syntax check for query sources.
///
/// Usually backed by a real parser, but the editor surface hosting the
/// toolbar may already know, in which case it can answer directly.
pub trait QueryValidityOracle: Send + Sync {
    fn has_syntax_errors(&self, source: &str) -> bool;
}
