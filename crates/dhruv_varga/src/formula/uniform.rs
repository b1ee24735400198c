//! Uniform multiplication: the whole longitude scaled by the harmonic.

use super::{VargaFormula, VargaPlacement};
use crate::error::VargaError;
use crate::rashi::SignPosition;
use crate::util::normalize_360;

/// `result = floor(normalize(N * longitude) / 30)`.
///
/// For N = 9, 16, 20 and 27 this reproduces the classical element- and
/// modality-based starting signs, since `N * 30 mod 360` steps the start
/// forward by a fixed number of signs per natal sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uniform {
    harmonic: u16,
}

impl Uniform {
    pub const fn new(harmonic: u16) -> Self {
        Self { harmonic }
    }

    pub const fn divisions(&self) -> u16 {
        self.harmonic
    }

    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        let scaled = normalize_360(f64::from(self.harmonic) * pos.longitude());
        let sign_index = ((scaled / 30.0).floor() as u8).min(11);
        VargaPlacement {
            sign_index,
            division: None,
            varga_degrees: scaled - f64::from(sign_index) * 30.0,
        }
    }
}

impl VargaFormula for Uniform {
    fn divisions(&self) -> u16 {
        self.harmonic
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}
