//! Shared angle utilities.

use crate::error::VargaError;

/// Normalize an angle to [0, 360) degrees.
///
/// Uses the Euclidean remainder, so large harmonic products (up to 60 x 360)
/// reduce in one correctly rounded step. A tiny negative input whose
/// remainder rounds up to exactly 360 folds back to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // -0.0 + 0.0 == +0.0
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Reject NaN and infinite longitudes.
pub fn validate_longitude(deg: f64) -> Result<f64, VargaError> {
    if deg.is_finite() {
        Ok(deg)
    } else {
        Err(VargaError::InvalidLongitude(deg))
    }
}
