#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup.query_empty")]
    QueryEmpty,
    #[error("lookup.not_found")]
    NotFound,
    #[error("lookup.unavailable")]
    Unavailable,
}
