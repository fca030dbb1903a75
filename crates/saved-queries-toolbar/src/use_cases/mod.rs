pub mod ports;
pub mod share_query;
pub mod toolbar;
pub mod validate_query;

pub use share_query::{
    create_query_sharing_url, pluck_query_id_from_url, QUERY_SEARCH_PARAM, STRIP_DELAY,
};
pub use toolbar::{
    QueryAction, SavedQueriesToolbar, ToolbarBuilder, ToolbarOptions, NEW_QUERY_NAME,
};
pub use validate_query::{
    validate_query, validate_query_name, validate_query_source, ValidationError,
};
