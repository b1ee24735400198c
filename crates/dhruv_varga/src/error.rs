//! Error types for varga calculations.

use crate::body::Body;

/// Errors from divisional chart evaluation and assembly.
///
/// Every failure is detected at the offending call and aborts the whole
/// operation; no partial chart is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum VargaError {
    /// Longitude is NaN or infinite.
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// Chart kind identifier is not one of the sixteen supported kinds.
    #[error("invalid chart kind: {0}")]
    InvalidChartKind(String),
    /// Mode is unknown, or was supplied for a kind that takes none.
    #[error("invalid mode: {0}")]
    InvalidMode(String),
    /// Base chart is missing one of the ten required bodies.
    #[error("incomplete base chart: missing {0}")]
    IncompleteBaseChart(Body),
    /// Body name is not one of the ten chart bodies.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// Sign index outside 0..=11.
    #[error("invalid sign index: {0}")]
    InvalidSign(u8),
    /// Configuration text could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
