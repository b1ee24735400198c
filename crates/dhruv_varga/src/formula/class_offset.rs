//! Offset by sign class, with no natal-sign term.
//!
//! `base = degrees_in_sign * N`, then `floor((base + OFFSET) / 30) mod 12`
//! where OFFSET depends only on the natal sign's class: modality for D45,
//! parity for D24 in Parasara mode.

use super::{VargaFormula, VargaPlacement, division_index, scaled_in_division};
use crate::error::VargaError;
use crate::rashi::{Modality, SignPosition, is_odd_sign, modality};

/// D45 movable signs start from Mesha.
pub const AKSHAVEDAMSHA_MOVABLE_OFFSET_DEG: u16 = 0;
/// D45 fixed signs start from Simha.
pub const AKSHAVEDAMSHA_FIXED_OFFSET_DEG: u16 = 120;
/// D45 dual signs start from Dhanu.
pub const AKSHAVEDAMSHA_DUAL_OFFSET_DEG: u16 = 240;

/// D24 odd signs start from Simha.
pub const CHATURVIMSHAMSHA_ODD_OFFSET_DEG: u16 = 120;
/// D24 even signs start from Karka.
pub const CHATURVIMSHAMSHA_EVEN_OFFSET_DEG: u16 = 90;

pub const AKSHAVEDAMSHA: ClassOffset = ClassOffset::new(
    45,
    SignClassOffsets::Modality {
        movable_deg: AKSHAVEDAMSHA_MOVABLE_OFFSET_DEG,
        fixed_deg: AKSHAVEDAMSHA_FIXED_OFFSET_DEG,
        dual_deg: AKSHAVEDAMSHA_DUAL_OFFSET_DEG,
    },
);

pub const CHATURVIMSHAMSHA: ClassOffset = ClassOffset::new(
    24,
    SignClassOffsets::Parity {
        odd_deg: CHATURVIMSHAMSHA_ODD_OFFSET_DEG,
        even_deg: CHATURVIMSHAMSHA_EVEN_OFFSET_DEG,
    },
);

/// How the natal sign selects its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignClassOffsets {
    /// Classically odd / even (EVEN / ODD 0-based index).
    Parity { odd_deg: u16, even_deg: u16 },
    /// Movable / fixed / dual.
    Modality {
        movable_deg: u16,
        fixed_deg: u16,
        dual_deg: u16,
    },
}

impl SignClassOffsets {
    /// Offset in degrees for a 0-based sign index.
    pub const fn offset_deg(&self, sign_index: u8) -> u16 {
        match *self {
            Self::Parity { odd_deg, even_deg } => {
                if is_odd_sign(sign_index) {
                    odd_deg
                } else {
                    even_deg
                }
            }
            Self::Modality {
                movable_deg,
                fixed_deg,
                dual_deg,
            } => match modality(sign_index) {
                Modality::Movable => movable_deg,
                Modality::Fixed => fixed_deg,
                Modality::Dual => dual_deg,
            },
        }
    }
}

/// Class-selected fixed starting sign, independent of the natal sign itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassOffset {
    harmonic: u16,
    offsets: SignClassOffsets,
}

impl ClassOffset {
    pub const fn new(harmonic: u16, offsets: SignClassOffsets) -> Self {
        Self { harmonic, offsets }
    }

    pub const fn divisions(&self) -> u16 {
        self.harmonic
    }

    pub const fn offsets(&self) -> SignClassOffsets {
        self.offsets
    }

    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        let div_idx = division_index(pos.degrees_in_sign, self.harmonic);
        let offset_signs = self.offsets.offset_deg(pos.sign_index) / 30;
        VargaPlacement {
            sign_index: ((div_idx + offset_signs) % 12) as u8,
            division: Some(div_idx + 1),
            varga_degrees: scaled_in_division(pos.degrees_in_sign, self.harmonic, div_idx),
        }
    }
}

impl VargaFormula for ClassOffset {
    fn divisions(&self) -> u16 {
        self.harmonic
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}
