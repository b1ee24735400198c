//! Direction by sign parity (Saptamsha, Dashamsha, Khavedamsha, and the
//! own-sign progressions of Dwadashamsha and Shashtiamsha).
//!
//! `base = sign_index * 30 + degrees_in_sign * N`. A classically odd sign
//! (EVEN 0-based index) places at `floor(base / 30)`; a classically even
//! sign (ODD 0-based index) at `floor((base + OFFSET) / 30)`, all mod 12.
//! Swapping the two branches silently misplaces every body in an even sign,
//! so the offsets below are named and each has its own regression test.

use super::{VargaFormula, VargaPlacement, division_index, scaled_in_division};
use crate::error::VargaError;
use crate::rashi::{SignPosition, is_odd_sign};

/// D7: even signs count from the 7th sign.
pub const SAPTAMSHA_EVEN_OFFSET_DEG: u16 = 180;
/// D10: even signs count from the 9th sign.
pub const DASHAMSHA_EVEN_OFFSET_DEG: u16 = 240;
/// D40: even signs count from the 7th sign.
pub const KHAVEDAMSHA_EVEN_OFFSET_DEG: u16 = 180;
/// D12: every sign counts from itself.
pub const DWADASHAMSHA_EVEN_OFFSET_DEG: u16 = 0;
/// D60: every sign counts from itself.
pub const SHASHTIAMSHA_EVEN_OFFSET_DEG: u16 = 0;

const _: () = assert!(SAPTAMSHA_EVEN_OFFSET_DEG % 30 == 0);
const _: () = assert!(DASHAMSHA_EVEN_OFFSET_DEG % 30 == 0);
const _: () = assert!(KHAVEDAMSHA_EVEN_OFFSET_DEG % 30 == 0);

pub const SAPTAMSHA: ParityDirected = ParityDirected::new(7, SAPTAMSHA_EVEN_OFFSET_DEG);
pub const DASHAMSHA: ParityDirected = ParityDirected::new(10, DASHAMSHA_EVEN_OFFSET_DEG);
pub const DWADASHAMSHA: ParityDirected = ParityDirected::new(12, DWADASHAMSHA_EVEN_OFFSET_DEG);
pub const KHAVEDAMSHA: ParityDirected = ParityDirected::new(40, KHAVEDAMSHA_EVEN_OFFSET_DEG);
pub const SHASHTIAMSHA: ParityDirected = ParityDirected::new(60, SHASHTIAMSHA_EVEN_OFFSET_DEG);

/// Sign-relative progression with a parity-dependent starting offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParityDirected {
    harmonic: u16,
    even_offset_deg: u16,
}

impl ParityDirected {
    pub const fn new(harmonic: u16, even_offset_deg: u16) -> Self {
        Self {
            harmonic,
            even_offset_deg,
        }
    }

    pub const fn divisions(&self) -> u16 {
        self.harmonic
    }

    /// Offset applied to classically even signs, in degrees.
    pub const fn even_offset_deg(&self) -> u16 {
        self.even_offset_deg
    }

    /// Integer form of `floor((base + offset) / 30) mod 12`: the sign term
    /// and the offset are whole multiples of 30, so only the
    /// `degrees_in_sign * N` term needs flooring.
    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        let div_idx = division_index(pos.degrees_in_sign, self.harmonic);
        let offset_signs = if is_odd_sign(pos.sign_index) {
            0
        } else {
            self.even_offset_deg / 30
        };
        let sign_index = ((u16::from(pos.sign_index) + div_idx + offset_signs) % 12) as u8;
        VargaPlacement {
            sign_index,
            division: Some(div_idx + 1),
            varga_degrees: scaled_in_division(pos.degrees_in_sign, self.harmonic, div_idx),
        }
    }
}

impl VargaFormula for ParityDirected {
    fn divisions(&self) -> u16 {
        self.harmonic
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}
