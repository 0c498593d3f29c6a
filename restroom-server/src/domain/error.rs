//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A coordinate was not finite or outside its valid range
    #[error("invalid {axis}: {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    /// A facility type string did not match any known category
    #[error("unknown facility type: {0}")]
    UnknownFacilityType(String),
}
