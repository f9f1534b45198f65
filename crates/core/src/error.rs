/// Domain-level errors raised before any storage call is made.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A path identifier that does not parse as an integer.
    #[error("Invalid {entity} ID")]
    InvalidId { entity: &'static str, raw: String },

    /// A request payload that could not be bound to the expected shape.
    #[error("{0}")]
    Validation(String),
}
