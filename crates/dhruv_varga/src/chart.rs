//! Base charts and derived divisional charts.
//!
//! A [`BaseChart`] holds the ten sidereal longitudes supplied by the
//! ephemeris collaborator. Assembly runs every body through one formula and
//! counts whole-sign houses from the divisional ascendant, which is itself
//! run through the same formula first. Assembly is all-or-nothing: the first
//! failing body aborts it and no partial chart is produced.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::body::{ALL_BODIES, Body};
use crate::config::VargaConfig;
use crate::error::VargaError;
use crate::formula::{VargaFormula, formula};
use crate::house::whole_sign_house;
use crate::rashi::{Rashi, SignPosition};
use crate::varga::{Mode, SHODASHAVARGA, VargaKind, VargaRequest};

// ---------------------------------------------------------------------------
// BaseChart
// ---------------------------------------------------------------------------

/// Ten validated sidereal longitudes, one per [`Body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct BaseChart {
    positions: [SignPosition; 10],
}

impl BaseChart {
    /// Build from longitudes in [`ALL_BODIES`] order.
    pub fn new(longitudes: [f64; 10]) -> Result<Self, VargaError> {
        let mut positions = [SignPosition {
            sign_index: 0,
            degrees_in_sign: 0.0,
        }; 10];
        for (slot, lon) in positions.iter_mut().zip(longitudes) {
            *slot = SignPosition::from_longitude(lon)?;
        }
        Ok(Self { positions })
    }

    /// Build from (body name, longitude) pairs.
    ///
    /// Names are matched as in [`Body::from_str`](std::str::FromStr). Every
    /// one of the ten bodies must be present; a later duplicate replaces an
    /// earlier one.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, VargaError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut longitudes: [Option<f64>; 10] = [None; 10];
        for (name, lon) in entries {
            let body: Body = name.as_ref().parse()?;
            longitudes[body.index()] = Some(lon);
        }
        let mut out = [0.0; 10];
        for body in ALL_BODIES {
            out[body.index()] =
                longitudes[body.index()].ok_or(VargaError::IncompleteBaseChart(body))?;
        }
        Self::new(out)
    }

    /// Normalized longitude of a body, [0, 360).
    pub fn longitude(&self, body: Body) -> f64 {
        self.positions[body.index()].longitude()
    }

    /// Natal sign position of a body.
    pub fn position(&self, body: Body) -> SignPosition {
        self.positions[body.index()]
    }

    /// (body, position) pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, SignPosition)> + '_ {
        ALL_BODIES.iter().map(|&b| (b, self.position(b)))
    }
}

impl TryFrom<BTreeMap<String, f64>> for BaseChart {
    type Error = VargaError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::from_entries(map)
    }
}

impl From<BaseChart> for BTreeMap<String, f64> {
    fn from(chart: BaseChart) -> Self {
        chart
            .iter()
            .map(|(b, pos)| (b.name().to_string(), pos.longitude()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// DerivedChart
// ---------------------------------------------------------------------------

/// One body's placement in a divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedPlacement {
    /// 0-based sign index in the divisional chart.
    pub sign_index: u8,
    /// Western name of that sign.
    pub sign_name: &'static str,
    /// Whole-sign house from the divisional ascendant, 1-12.
    pub house: u8,
    /// Degrees within the natal (D1) sign.
    pub degrees_in_sign: f64,
    /// Degrees within the divisional sign.
    pub varga_degrees: f64,
    /// 1-based division of the natal sign, when the formula divides it.
    pub division: Option<u16>,
}

impl DerivedPlacement {
    pub const fn rashi(&self) -> Rashi {
        Rashi::from_index(self.sign_index)
    }
}

/// A complete divisional chart for one base chart, kind and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedChart {
    kind: VargaKind,
    mode: Option<Mode>,
    placements: [DerivedPlacement; 10],
}

impl DerivedChart {
    pub const fn kind(&self) -> VargaKind {
        self.kind
    }

    /// Mode the chart was computed with; `None` for single-formula kinds
    /// and caller-supplied formulas.
    pub const fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn placement(&self, body: Body) -> &DerivedPlacement {
        &self.placements[body.index()]
    }

    pub fn ascendant(&self) -> &DerivedPlacement {
        self.placement(Body::Ascendant)
    }

    /// (body, placement) pairs in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, &DerivedPlacement)> + '_ {
        ALL_BODIES.iter().map(|&b| (b, self.placement(b)))
    }
}

struct PlacementMap<'a>(&'a DerivedChart);

impl Serialize for PlacementMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(b, p)| (b.name(), p)))
    }
}

impl Serialize for DerivedChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DerivedChart", 3)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("mode", &self.mode)?;
        s.serialize_field("placements", &PlacementMap(self))?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn build<F: VargaFormula + ?Sized>(
    base: &BaseChart,
    kind: VargaKind,
    mode: Option<Mode>,
    formula: &F,
) -> Result<DerivedChart, VargaError> {
    let asc_sign = formula.evaluate(base.position(Body::Ascendant))?.sign_index;
    let mut placements = [DerivedPlacement::default(); 10];
    for (body, pos) in base.iter() {
        let p = formula.evaluate(pos)?;
        let rashi = Rashi::from_index(p.sign_index);
        placements[body.index()] = DerivedPlacement {
            sign_index: rashi.index(),
            sign_name: rashi.western_name(),
            house: whole_sign_house(asc_sign, rashi.index()),
            degrees_in_sign: pos.degrees_in_sign,
            varga_degrees: p.varga_degrees,
            division: p.division,
        };
    }
    Ok(DerivedChart {
        kind,
        mode,
        placements,
    })
}

/// Assemble one divisional chart.
pub fn assemble(
    base: &BaseChart,
    kind: VargaKind,
    mode: Option<Mode>,
) -> Result<DerivedChart, VargaError> {
    assemble_request(base, &VargaRequest { kind, mode })
}

/// Assemble one divisional chart from a request.
pub fn assemble_request(
    base: &BaseChart,
    request: &VargaRequest,
) -> Result<DerivedChart, VargaError> {
    let mode = request.effective_mode()?;
    let f = formula(request.kind, request.mode)?;
    build(base, request.kind, mode, &f)
}

/// Batch: many chart kinds against one base chart. Fails as a whole.
pub fn assemble_many(
    base: &BaseChart,
    requests: &[VargaRequest],
) -> Result<Vec<DerivedChart>, VargaError> {
    requests
        .iter()
        .map(|req| assemble_request(base, req))
        .collect()
}

/// All sixteen charts, modes taken from `config`.
pub fn assemble_shodashavarga(
    base: &BaseChart,
    config: &VargaConfig,
) -> Result<Vec<DerivedChart>, VargaError> {
    let requests: Vec<_> = SHODASHAVARGA.iter().map(|&k| config.request(k)).collect();
    assemble_many(base, &requests)
}

/// Assemble with a caller-supplied formula in place of the registry's.
pub fn assemble_with<F: VargaFormula + ?Sized>(
    base: &BaseChart,
    kind: VargaKind,
    formula: &F,
) -> Result<DerivedChart, VargaError> {
    build(base, kind, None, formula)
}
