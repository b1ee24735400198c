//! Parasara rules for Hora (D2), Drekkana (D3) and Chaturthamsha (D4).
//!
//! The sign is cut into N equal parts of `30 / N` degrees. The part index
//! `l` (capped at N - 1) then selects the target by a sign-specific rule:
//!
//! - Hora: odd signs give Simha then Karka, even signs Karka then Simha.
//! - Drekkana: the natal sign, then the 5th and 9th from it (`+4 * l`).
//! - Chaturthamsha: the natal sign, then the 4th, 7th and 10th (`+3 * l`).
//!
//! These do not match every external reference on every chart. The
//! `Continuous` mode and the [`VargaFormula`] seam exist for that reason.

use super::{VargaFormula, VargaPlacement, division_index, scaled_in_division};
use crate::error::VargaError;
use crate::rashi::{Rashi, SignPosition, is_odd_sign};

/// Hora targets for classically odd signs: Sun's hora first.
pub const HORA_ODD_TARGETS: [Rashi; 2] = [Rashi::Simha, Rashi::Karka];
/// Hora targets for classically even signs: Moon's hora first.
pub const HORA_EVEN_TARGETS: [Rashi; 2] = [Rashi::Karka, Rashi::Simha];

/// Drekkana steps forward four signs per part (trines).
pub const DREKKANA_STEP_SIGNS: u16 = 4;
/// Chaturthamsha steps forward three signs per part (kendras).
pub const CHATURTHAMSHA_STEP_SIGNS: u16 = 3;

pub const HORA: ParasaraDivision = ParasaraDivision::new(ParasaraRule::Hora);
pub const DREKKANA: ParasaraDivision = ParasaraDivision::new(ParasaraRule::Drekkana);
pub const CHATURTHAMSHA: ParasaraDivision = ParasaraDivision::new(ParasaraRule::Chaturthamsha);

/// Which Parasara rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParasaraRule {
    Hora,
    Drekkana,
    Chaturthamsha,
}

impl ParasaraRule {
    pub const fn divisions(self) -> u16 {
        match self {
            Self::Hora => 2,
            Self::Drekkana => 3,
            Self::Chaturthamsha => 4,
        }
    }

    /// Target sign for part `l` of a natal sign.
    pub const fn target(self, sign_index: u8, l: u16) -> u8 {
        match self {
            Self::Hora => {
                let targets = if is_odd_sign(sign_index) {
                    HORA_ODD_TARGETS
                } else {
                    HORA_EVEN_TARGETS
                };
                targets[l as usize].index()
            }
            Self::Drekkana => ((sign_index as u16 + DREKKANA_STEP_SIGNS * l) % 12) as u8,
            Self::Chaturthamsha => {
                ((sign_index as u16 + CHATURTHAMSHA_STEP_SIGNS * l) % 12) as u8
            }
        }
    }
}

/// Parasara-mode formula for the dual-mode kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParasaraDivision {
    rule: ParasaraRule,
}

impl ParasaraDivision {
    pub const fn new(rule: ParasaraRule) -> Self {
        Self { rule }
    }

    pub const fn rule(&self) -> ParasaraRule {
        self.rule
    }

    pub const fn divisions(&self) -> u16 {
        self.rule.divisions()
    }

    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        let n = self.rule.divisions();
        let l = division_index(pos.degrees_in_sign, n);
        VargaPlacement {
            sign_index: self.rule.target(pos.sign_index, l),
            division: Some(l + 1),
            varga_degrees: scaled_in_division(pos.degrees_in_sign, n, l),
        }
    }
}

impl VargaFormula for ParasaraDivision {
    fn divisions(&self) -> u16 {
        self.rule.divisions()
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}
