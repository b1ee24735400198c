//! Divisional (varga) charts derived from sidereal longitudes.
//!
//! This crate provides:
//! - Sign decomposition of a longitude into sign index and degrees in sign
//! - The sixteen Shodashavarga divisional formulas, with a mode switch for
//!   the kinds whose classical rule is disputed
//! - Whole-sign house assignment from the divisional ascendant
//! - Assembly of a complete derived chart from a ten-body base chart
//!
//! Input longitudes are assumed to be sidereal already; no ayanamsha is
//! applied here. All computation is pure and deterministic.

pub mod body;
pub mod chart;
pub mod config;
pub mod error;
pub mod formula;
pub mod house;
pub mod rashi;
pub mod util;
pub mod varga;

pub use body::{ALL_BODIES, Body, ketu_from_rahu};
pub use chart::{
    BaseChart, DerivedChart, DerivedPlacement, assemble, assemble_many, assemble_request,
    assemble_shodashavarga, assemble_with,
};
pub use config::VargaConfig;
pub use error::VargaError;
pub use formula::{
    Formula, Shape, VargaFormula, VargaPlacement, evaluate, formula, shape, varga_placement,
    varga_placements, varga_sign,
};
pub use house::whole_sign_house;
pub use rashi::{ALL_RASHIS, Dms, Modality, Rashi, SignPosition, is_odd_sign, modality};
pub use util::{normalize_360, validate_longitude};
pub use varga::{Mode, SHODASHAVARGA, VargaKind, VargaRequest};
