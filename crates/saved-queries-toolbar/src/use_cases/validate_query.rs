use thiserror::Error;

use crate::entities::{QueryId, SavedQuery, SnackbarNotice};
use crate::use_cases::ports::QueryValidityOracle;

/// Reasons a save is refused before any backend call
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("query name is empty")]
    NameEmpty,
    #[error("query name is already taken")]
    NameTaken,
    #[error("query source is empty")]
    QueryEmpty,
    #[error("query source has syntax errors")]
    QueryInvalid,
}

impl From<ValidationError> for SnackbarNotice {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::NameEmpty => SnackbarNotice::NameEmpty,
            ValidationError::NameTaken => SnackbarNotice::NameTaken,
            ValidationError::QueryEmpty => SnackbarNotice::QueryEmpty,
            ValidationError::QueryInvalid => SnackbarNotice::QueryInvalid,
        }
    }
}

/// Check a candidate name against the collection.
///
/// `updated_id` excludes the query being renamed from the collision scan,
/// so saving a query under its own name stays legal.
pub fn validate_query_name(
    name: &str,
    queries: &[SavedQuery],
    updated_id: Option<&QueryId>,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    let taken = queries
        .iter()
        .filter(|q| Some(&q.id) != updated_id)
        .any(|q| q.name == name);
    if taken {
        return Err(ValidationError::NameTaken);
    }
    Ok(())
}

/// Check a candidate source: it must contain more than whitespace and
/// pass the syntax oracle.
pub fn validate_query_source(
    source: &str,
    oracle: &dyn QueryValidityOracle,
) -> Result<(), ValidationError> {
    if source.chars().all(char::is_whitespace) {
        return Err(ValidationError::QueryEmpty);
    }
    if oracle.has_syntax_errors(source) {
        return Err(ValidationError::QueryInvalid);
    }
    Ok(())
}

/// Full pre-save check. The name is checked first; a bad name short-circuits
/// before the source is looked at.
pub fn validate_query(
    name: &str,
    source: &str,
    queries: &[SavedQuery],
    updated_id: Option<&QueryId>,
    oracle: &dyn QueryValidityOracle,
) -> Result<(), ValidationError> {
    validate_query_name(name, queries, updated_id)?;
    validate_query_source(source, oracle)?;
    Ok(())
}
