//! Trimshamsha (D30): five unequal degree ranges per sign.
//!
//! The sign is cut at 5, 10, 18 and 25 degrees. Each range maps to a fixed
//! target sign, with one sequence for classically odd signs and another for
//! classically even signs. Within a range, the position is stretched
//! linearly onto the target sign: the 5-degree ranges cover the full 30
//! degrees (6 per degree), the 8-degree range 10..18 covers 15 degrees and
//! the 7-degree range 18..25 covers 30 degrees.

use super::{BELOW_30, VargaFormula, VargaPlacement};
use crate::error::VargaError;
use crate::rashi::{Rashi, SignPosition, is_odd_sign};

/// Upper bound of each range, exclusive. Ranges are `[prev, bound)`.
pub const TRIMSHAMSHA_BREAKPOINTS: [u8; 5] = [5, 10, 18, 25, 30];

/// Targets for classically odd signs, in range order.
pub const TRIMSHAMSHA_ODD_TARGETS: [Rashi; 5] = [
    Rashi::Mesha,
    Rashi::Kumbha,
    Rashi::Dhanu,
    Rashi::Mithuna,
    Rashi::Tula,
];

/// Targets for classically even signs, in range order.
pub const TRIMSHAMSHA_EVEN_TARGETS: [Rashi; 5] = [
    Rashi::Vrishabha,
    Rashi::Kanya,
    Rashi::Meena,
    Rashi::Makara,
    Rashi::Vrischika,
];

/// Degrees of the target sign covered by each range.
pub const TRIMSHAMSHA_SPANS: [u8; 5] = [30, 30, 15, 30, 30];

/// The D30 piecewise table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trimshamsha;

impl Trimshamsha {
    pub const fn divisions(&self) -> u16 {
        30
    }

    /// 0-based range index for a degree within the sign.
    ///
    /// Breakpoints are small integers, exactly representable, so a
    /// degree sitting on a breakpoint always opens the next range.
    pub fn range_index(degrees_in_sign: f64) -> usize {
        TRIMSHAMSHA_BREAKPOINTS
            .iter()
            .position(|&hi| degrees_in_sign < f64::from(hi))
            .unwrap_or(TRIMSHAMSHA_BREAKPOINTS.len() - 1)
    }

    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        let idx = Self::range_index(pos.degrees_in_sign);
        let target = if is_odd_sign(pos.sign_index) {
            TRIMSHAMSHA_ODD_TARGETS[idx]
        } else {
            TRIMSHAMSHA_EVEN_TARGETS[idx]
        };
        let lo = if idx == 0 {
            0.0
        } else {
            f64::from(TRIMSHAMSHA_BREAKPOINTS[idx - 1])
        };
        let width = f64::from(TRIMSHAMSHA_BREAKPOINTS[idx]) - lo;
        let span = f64::from(TRIMSHAMSHA_SPANS[idx]);
        let varga_degrees = ((pos.degrees_in_sign - lo) * span / width).clamp(0.0, BELOW_30);
        VargaPlacement {
            sign_index: target.index(),
            division: Some(idx as u16 + 1),
            varga_degrees,
        }
    }
}

impl VargaFormula for Trimshamsha {
    fn divisions(&self) -> u16 {
        30
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(sign_index: u8, deg: f64) -> VargaPlacement {
        Trimshamsha.place(SignPosition::new(sign_index, deg).unwrap())
    }

    #[test]
    fn odd_sign_ranges() {
        assert_eq!(place(0, 0.0).sign_index, Rashi::Mesha.index());
        assert_eq!(place(0, 7.0).sign_index, Rashi::Kumbha.index());
        assert_eq!(place(0, 12.0).sign_index, Rashi::Dhanu.index());
        assert_eq!(place(0, 20.0).sign_index, Rashi::Mithuna.index());
        assert_eq!(place(0, 29.0).sign_index, Rashi::Tula.index());
    }

    #[test]
    fn even_sign_ranges() {
        assert_eq!(place(1, 0.0).sign_index, Rashi::Vrishabha.index());
        assert_eq!(place(1, 7.0).sign_index, Rashi::Kanya.index());
        assert_eq!(place(1, 12.0).sign_index, Rashi::Meena.index());
        assert_eq!(place(1, 20.0).sign_index, Rashi::Makara.index());
        assert_eq!(place(1, 29.0).sign_index, Rashi::Vrischika.index());
    }

    #[test]
    fn range_index_at_breakpoints() {
        assert_eq!(Trimshamsha::range_index(4.999_999), 0);
        assert_eq!(Trimshamsha::range_index(5.0), 1);
        assert_eq!(Trimshamsha::range_index(10.0), 2);
        assert_eq!(Trimshamsha::range_index(18.0), 3);
        assert_eq!(Trimshamsha::range_index(25.0), 4);
        assert_eq!(Trimshamsha::range_index(29.999_999), 4);
    }

    #[test]
    fn uniform_ranges_scale_six_per_degree() {
        assert_eq!(place(0, 2.5).varga_degrees, 15.0);
        assert_eq!(place(0, 7.0).varga_degrees, 12.0);
        assert_eq!(place(0, 26.0).varga_degrees, 6.0);
    }

    #[test]
    fn uneven_ranges_interpolate() {
        // 10..18 covers 15 degrees: 14 -> 4 * 15 / 8 = 7.5
        assert_eq!(place(2, 14.0).varga_degrees, 7.5);
        // 18..25 covers 30 degrees: 21.5 -> 3.5 * 30 / 7 = 15
        assert_eq!(place(2, 21.5).varga_degrees, 15.0);
    }

    #[test]
    fn breakpoint_opens_range_at_zero_degrees() {
        for deg in [5.0, 10.0, 18.0, 25.0] {
            assert_eq!(place(4, deg).varga_degrees, 0.0, "deg={deg}");
        }
    }

    #[test]
    fn division_is_range_number() {
        assert_eq!(place(0, 0.0).division, Some(1));
        assert_eq!(place(0, 18.0).division, Some(4));
        assert_eq!(place(0, 29.0).division, Some(5));
    }
}
