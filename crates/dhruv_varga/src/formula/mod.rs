//! Formula registry and varga evaluator.
//!
//! Every chart kind resolves, together with its [`Mode`], to exactly one of
//! five formula shapes:
//!
//! | Shape | Kinds |
//! |---|---|
//! | [`Uniform`] | D1, D9, D16, D20, D27; D2/D3/D4/D24 in `Continuous` mode |
//! | [`ParityDirected`] | D7, D10, D40, and D12/D60 with zero offset |
//! | [`ClassOffset`] | D45 (by modality), D24 in `Parasara` mode (by parity) |
//! | [`Trimshamsha`] | D30 |
//! | [`ParasaraDivision`] | D2, D3, D4 in `Parasara` mode |
//!
//! The registry is a `match` over the closed [`VargaKind`] enum returning
//! `const` formula values; there is no runtime string dispatch and no
//! mutable state.
//!
//! The Parasara rules for D3, D4 and D24 do not agree with every external
//! reference on every chart, and those references disagree among
//! themselves. The registry therefore offers [`Mode`] as a switch and
//! [`VargaFormula`] as an open seam: callers needing another authority's
//! rule can implement the trait and pass it to
//! [`assemble_with`](crate::chart::assemble_with).

mod class_offset;
mod parasara;
mod parity;
mod trimshamsha;
mod uniform;

pub use class_offset::{
    AKSHAVEDAMSHA, AKSHAVEDAMSHA_DUAL_OFFSET_DEG, AKSHAVEDAMSHA_FIXED_OFFSET_DEG,
    AKSHAVEDAMSHA_MOVABLE_OFFSET_DEG, CHATURVIMSHAMSHA, CHATURVIMSHAMSHA_EVEN_OFFSET_DEG,
    CHATURVIMSHAMSHA_ODD_OFFSET_DEG, ClassOffset, SignClassOffsets,
};
pub use parasara::{
    CHATURTHAMSHA, CHATURTHAMSHA_STEP_SIGNS, DREKKANA, DREKKANA_STEP_SIGNS, HORA,
    HORA_EVEN_TARGETS, HORA_ODD_TARGETS, ParasaraDivision, ParasaraRule,
};
pub use parity::{
    DASHAMSHA, DASHAMSHA_EVEN_OFFSET_DEG, DWADASHAMSHA, DWADASHAMSHA_EVEN_OFFSET_DEG,
    KHAVEDAMSHA, KHAVEDAMSHA_EVEN_OFFSET_DEG, ParityDirected, SAPTAMSHA,
    SAPTAMSHA_EVEN_OFFSET_DEG, SHASHTIAMSHA, SHASHTIAMSHA_EVEN_OFFSET_DEG,
};
pub use trimshamsha::{
    TRIMSHAMSHA_BREAKPOINTS, TRIMSHAMSHA_EVEN_TARGETS, TRIMSHAMSHA_ODD_TARGETS,
    TRIMSHAMSHA_SPANS, Trimshamsha,
};
pub use uniform::Uniform;

use serde::Serialize;

use crate::error::VargaError;
use crate::rashi::SignPosition;
use crate::varga::{Mode, VargaKind, VargaRequest};

// ---------------------------------------------------------------------------
// Formula trait and output
// ---------------------------------------------------------------------------

/// Result of placing one sign position in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VargaPlacement {
    /// 0-based sign index in the divisional chart.
    pub sign_index: u8,
    /// 1-based division of the natal sign the position fell in.
    ///
    /// `None` for uniform multiplication, which never divides the sign.
    pub division: Option<u16>,
    /// Degrees within the resulting sign, [0, 30).
    pub varga_degrees: f64,
}

/// A degree-to-sign mapping rule for one divisional chart.
pub trait VargaFormula {
    /// Number of divisions per natal sign.
    fn divisions(&self) -> u16;

    /// Place one natal sign position.
    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError>;
}

/// The five formula shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Uniform,
    ParityDirected,
    ClassOffset,
    PiecewiseTable,
    DualMode,
}

/// Largest `f64` strictly below 30.
pub(crate) const BELOW_30: f64 = f64::from_bits(30.0_f64.to_bits() - 1);

/// Division index `floor(degrees_in_sign * n / 30)`, capped at `n - 1`.
pub(crate) fn division_index(degrees_in_sign: f64, n: u16) -> u16 {
    ((degrees_in_sign * f64::from(n) / 30.0).floor() as u16).min(n - 1)
}

/// Degrees within the division, rescaled to a full 30-degree sign.
pub(crate) fn scaled_in_division(degrees_in_sign: f64, n: u16, div_idx: u16) -> f64 {
    let frac = degrees_in_sign * f64::from(n) / 30.0 - f64::from(div_idx);
    (frac * 30.0).clamp(0.0, BELOW_30)
}

// ---------------------------------------------------------------------------
// Formula (closed dispatch)
// ---------------------------------------------------------------------------

/// A resolved built-in formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    Uniform(Uniform),
    ParityDirected(ParityDirected),
    ClassOffset(ClassOffset),
    Trimshamsha(Trimshamsha),
    Parasara(ParasaraDivision),
}

impl Formula {
    /// Which of the five shapes this formula is.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Uniform(_) => Shape::Uniform,
            Self::ParityDirected(_) => Shape::ParityDirected,
            Self::ClassOffset(_) => Shape::ClassOffset,
            Self::Trimshamsha(_) => Shape::PiecewiseTable,
            Self::Parasara(_) => Shape::DualMode,
        }
    }

    /// Place a sign position. Built-in formulas cannot fail.
    pub fn place(&self, pos: SignPosition) -> VargaPlacement {
        match self {
            Self::Uniform(f) => f.place(pos),
            Self::ParityDirected(f) => f.place(pos),
            Self::ClassOffset(f) => f.place(pos),
            Self::Trimshamsha(f) => f.place(pos),
            Self::Parasara(f) => f.place(pos),
        }
    }
}

impl VargaFormula for Formula {
    fn divisions(&self) -> u16 {
        match self {
            Self::Uniform(f) => f.divisions(),
            Self::ParityDirected(f) => f.divisions(),
            Self::ClassOffset(f) => f.divisions(),
            Self::Trimshamsha(f) => f.divisions(),
            Self::Parasara(f) => f.divisions(),
        }
    }

    fn evaluate(&self, pos: SignPosition) -> Result<VargaPlacement, VargaError> {
        Ok(self.place(pos))
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Resolve a chart kind and optional mode to its formula.
///
/// Fails with [`VargaError::InvalidMode`] when a mode is given for a kind
/// with a single formula.
pub fn formula(kind: VargaKind, mode: Option<Mode>) -> Result<Formula, VargaError> {
    let mode = VargaRequest { kind, mode }.effective_mode()?;
    let f = match (kind, mode) {
        (VargaKind::D1, _) => Formula::Uniform(Uniform::new(1)),

        // Dual-mode kinds collapse to uniform multiplication when continuous.
        (VargaKind::D2 | VargaKind::D3 | VargaKind::D4 | VargaKind::D24, Some(Mode::Continuous)) => {
            Formula::Uniform(Uniform::new(kind.divisions()))
        }
        (VargaKind::D2, _) => Formula::Parasara(HORA),
        (VargaKind::D3, _) => Formula::Parasara(DREKKANA),
        (VargaKind::D4, _) => Formula::Parasara(CHATURTHAMSHA),
        (VargaKind::D24, _) => Formula::ClassOffset(CHATURVIMSHAMSHA),

        (VargaKind::D7, _) => Formula::ParityDirected(SAPTAMSHA),
        (VargaKind::D10, _) => Formula::ParityDirected(DASHAMSHA),
        (VargaKind::D12, _) => Formula::ParityDirected(DWADASHAMSHA),
        (VargaKind::D40, _) => Formula::ParityDirected(KHAVEDAMSHA),
        (VargaKind::D60, _) => Formula::ParityDirected(SHASHTIAMSHA),

        (VargaKind::D9 | VargaKind::D16 | VargaKind::D20 | VargaKind::D27, _) => {
            Formula::Uniform(Uniform::new(kind.divisions()))
        }

        (VargaKind::D30, _) => Formula::Trimshamsha(Trimshamsha),
        (VargaKind::D45, _) => Formula::ClassOffset(AKSHAVEDAMSHA),
    };
    Ok(f)
}

/// Shape a kind and mode resolve to.
pub fn shape(kind: VargaKind, mode: Option<Mode>) -> Result<Shape, VargaError> {
    Ok(formula(kind, mode)?.shape())
}

/// Evaluate one decomposed position.
pub fn evaluate(
    kind: VargaKind,
    mode: Option<Mode>,
    pos: SignPosition,
) -> Result<VargaPlacement, VargaError> {
    Ok(formula(kind, mode)?.place(pos))
}

/// Evaluate one sidereal longitude.
pub fn varga_placement(
    sidereal_lon: f64,
    kind: VargaKind,
    mode: Option<Mode>,
) -> Result<VargaPlacement, VargaError> {
    let pos = SignPosition::from_longitude(sidereal_lon)?;
    evaluate(kind, mode, pos)
}

/// Divisional sign index of one sidereal longitude.
pub fn varga_sign(
    sidereal_lon: f64,
    kind: VargaKind,
    mode: Option<Mode>,
) -> Result<u8, VargaError> {
    Ok(varga_placement(sidereal_lon, kind, mode)?.sign_index)
}

/// Batch: one longitude through several requests.
pub fn varga_placements(
    sidereal_lon: f64,
    requests: &[VargaRequest],
) -> Result<Vec<VargaPlacement>, VargaError> {
    let pos = SignPosition::from_longitude(sidereal_lon)?;
    requests
        .iter()
        .map(|req| evaluate(req.kind, req.mode, pos))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::varga::SHODASHAVARGA;

    fn sign(lon: f64, kind: VargaKind, mode: Option<Mode>) -> u8 {
        varga_sign(lon, kind, mode).unwrap()
    }

    #[test]
    fn registry_shapes() {
        use VargaKind::*;
        let expected = [
            (D1, Shape::Uniform),
            (D2, Shape::DualMode),
            (D3, Shape::DualMode),
            (D4, Shape::DualMode),
            (D7, Shape::ParityDirected),
            (D9, Shape::Uniform),
            (D10, Shape::ParityDirected),
            (D12, Shape::ParityDirected),
            (D16, Shape::Uniform),
            (D20, Shape::Uniform),
            (D24, Shape::ClassOffset),
            (D27, Shape::Uniform),
            (D30, Shape::PiecewiseTable),
            (D40, Shape::ParityDirected),
            (D45, Shape::ClassOffset),
            (D60, Shape::ParityDirected),
        ];
        for (kind, s) in expected {
            assert_eq!(shape(kind, None), Ok(s), "{kind}");
        }
    }

    #[test]
    fn continuous_collapses_to_uniform() {
        for kind in [VargaKind::D2, VargaKind::D3, VargaKind::D4, VargaKind::D24] {
            let f = formula(kind, Some(Mode::Continuous)).unwrap();
            assert_eq!(f, Formula::Uniform(Uniform::new(kind.divisions())));
        }
    }

    #[test]
    fn mode_rejected_for_single_formula_kinds() {
        for kind in SHODASHAVARGA.iter().filter(|k| !k.accepts_mode()) {
            for mode in [Mode::Parasara, Mode::Continuous] {
                assert!(
                    matches!(formula(*kind, Some(mode)), Err(VargaError::InvalidMode(_))),
                    "{kind} {mode}"
                );
            }
        }
    }

    #[test]
    fn divisions_match_kind() {
        for &kind in &SHODASHAVARGA {
            let f = formula(kind, None).unwrap();
            assert_eq!(f.divisions(), kind.divisions(), "{kind}");
        }
    }

    #[test]
    fn d1_identity() {
        for i in 0..12u8 {
            let lon = f64::from(i) * 30.0 + 15.0;
            let p = varga_placement(lon, VargaKind::D1, None).unwrap();
            assert_eq!(p.sign_index, i);
            assert_eq!(p.varga_degrees, 15.0);
        }
    }

    #[test]
    fn d9_navamsha_by_element() {
        // Fire from Mesha, earth from Makara, air from Tula, water from Karka
        assert_eq!(sign(5.0, VargaKind::D9, None), 1);
        assert_eq!(sign(45.5, VargaKind::D9, None), 1);
        assert_eq!(sign(60.0, VargaKind::D9, None), 6);
        assert_eq!(sign(90.0, VargaKind::D9, None), 3);
        assert_eq!(sign(30.0, VargaKind::D9, None), 9);
    }

    #[test]
    fn d12_starts_from_own_sign() {
        // Karka 26 deg: 11th division -> Karka + 10 = Vrishabha
        assert_eq!(sign(116.0, VargaKind::D12, None), 1);
        assert_eq!(sign(90.0, VargaKind::D12, None), 3);
        // Vrishabha 2.5 deg: exactly the second division
        assert_eq!(sign(32.5, VargaKind::D12, None), 2);
    }

    #[test]
    fn d16_and_d20_starts() {
        // D16: movable Mesha, fixed Simha, dual Dhanu
        assert_eq!(sign(0.5, VargaKind::D16, None), 0);
        assert_eq!(sign(30.5, VargaKind::D16, None), 4);
        assert_eq!(sign(60.5, VargaKind::D16, None), 8);
        // D20: movable Mesha, fixed Dhanu, dual Simha
        assert_eq!(sign(90.5, VargaKind::D20, None), 0);
        assert_eq!(sign(120.5, VargaKind::D20, None), 8);
        assert_eq!(sign(150.5, VargaKind::D20, None), 4);
    }

    #[test]
    fn d27_starts_by_element() {
        // fire Mesha, earth Karka, air Tula, water Makara
        assert_eq!(sign(0.5, VargaKind::D27, None), 0);
        assert_eq!(sign(30.5, VargaKind::D27, None), 3);
        assert_eq!(sign(60.5, VargaKind::D27, None), 6);
        assert_eq!(sign(90.5, VargaKind::D27, None), 9);
    }

    #[test]
    fn d60_from_own_sign() {
        // Simha 29.9 deg: 60th division -> Simha + 59 = Karka
        assert_eq!(sign(149.9, VargaKind::D60, None), 3);
        assert_eq!(sign(120.2, VargaKind::D60, None), 4);
    }

    #[test]
    fn all_kinds_output_in_range() {
        let lons = [0.0, 15.0, 29.999, 45.5, 90.0, 180.0, 270.0, 359.999, -10.0, 725.0];
        for &lon in &lons {
            for &kind in &SHODASHAVARGA {
                for mode in [None, kind.accepts_mode().then_some(Mode::Continuous)] {
                    let p = varga_placement(lon, kind, mode).unwrap();
                    assert!(p.sign_index < 12, "{kind} lon={lon}");
                    assert!(
                        (0.0..30.0).contains(&p.varga_degrees),
                        "{kind} lon={lon} deg={}",
                        p.varga_degrees
                    );
                    if let Some(d) = p.division {
                        assert!((1..=kind.divisions()).contains(&d), "{kind} div={d}");
                    }
                }
            }
        }
    }

    #[test]
    fn division_index_capped() {
        assert_eq!(division_index(0.0, 9), 0);
        assert_eq!(division_index(29.999_999_999, 9), 8);
        assert_eq!(division_index(10.0, 3), 1);
        assert_eq!(division_index(BELOW_30, 60), 59);
    }

    #[test]
    fn batch_matches_individual() {
        let requests = [
            VargaRequest::new(VargaKind::D9),
            VargaRequest::with_mode(VargaKind::D3, Mode::Continuous),
            VargaRequest::new(VargaKind::D30),
        ];
        let batch = varga_placements(100.0, &requests).unwrap();
        for (req, got) in requests.iter().zip(&batch) {
            assert_eq!(*got, varga_placement(100.0, req.kind, req.mode).unwrap());
        }
    }

    #[test]
    fn batch_fails_atomically() {
        let requests = [
            VargaRequest::new(VargaKind::D9),
            VargaRequest::with_mode(VargaKind::D10, Mode::Parasara),
        ];
        assert!(varga_placements(100.0, &requests).is_err());
    }

    #[test]
    fn invalid_longitude_rejected() {
        assert!(matches!(
            varga_placement(f64::NAN, VargaKind::D9, None),
            Err(VargaError::InvalidLongitude(_))
        ));
    }
}
