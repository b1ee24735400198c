//! Divisional chart kinds (Shodashavarga) and formula modes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VargaError;

// ---------------------------------------------------------------------------
// VargaKind (16 variants)
// ---------------------------------------------------------------------------

/// The 16 Shodashavarga divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VargaKind {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All 16 kinds in order.
pub const SHODASHAVARGA: [VargaKind; 16] = [
    VargaKind::D1,
    VargaKind::D2,
    VargaKind::D3,
    VargaKind::D4,
    VargaKind::D7,
    VargaKind::D9,
    VargaKind::D10,
    VargaKind::D12,
    VargaKind::D16,
    VargaKind::D20,
    VargaKind::D24,
    VargaKind::D27,
    VargaKind::D30,
    VargaKind::D40,
    VargaKind::D45,
    VargaKind::D60,
];

impl VargaKind {
    /// Number of divisions per sign (the harmonic N).
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Numeric D-number code.
    pub const fn code(self) -> u16 {
        self.divisions()
    }

    /// Short identifier, "D1".."D60".
    pub const fn id(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D16 => "D16",
            Self::D20 => "D20",
            Self::D24 => "D24",
            Self::D27 => "D27",
            Self::D30 => "D30",
            Self::D40 => "D40",
            Self::D45 => "D45",
            Self::D60 => "D60",
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Bhamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
        }
    }

    /// 0-based index into SHODASHAVARGA.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this kind has competing formulas selected by [`Mode`].
    pub const fn accepts_mode(self) -> bool {
        matches!(self, Self::D2 | Self::D3 | Self::D4 | Self::D24)
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Option<VargaKind> {
        SHODASHAVARGA.iter().copied().find(|k| k.code() == code)
    }
}

impl Display for VargaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VargaKind {
    type Err = VargaError;

    /// Parses "D9", "d9" or a bare "9".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let digits = key
            .strip_prefix('D')
            .or_else(|| key.strip_prefix('d'))
            .unwrap_or(key);
        digits
            .parse::<u16>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| VargaError::InvalidChartKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Formula variant for kinds with more than one attested rule.
///
/// D2, D3 and D4: `Parasara` applies the sign-specific classical rule and
/// `Continuous` multiplies the full longitude by N. D24: `Parasara` is the
/// parity-offset rule ("method 1") and `Continuous` the uniform
/// multiplication ("method 2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Parasara,
    Continuous,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parasara => "parasara",
            Self::Continuous => "continuous",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = VargaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parasara" | "parashari" | "parashara" => Ok(Self::Parasara),
            "continuous" => Ok(Self::Continuous),
            _ => Err(VargaError::InvalidMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// VargaRequest
// ---------------------------------------------------------------------------

/// One chart kind plus an optional mode, for batch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VargaRequest {
    pub kind: VargaKind,
    pub mode: Option<Mode>,
}

impl VargaRequest {
    /// Request with no explicit mode.
    pub fn new(kind: VargaKind) -> Self {
        Self { kind, mode: None }
    }

    /// Request with a specific mode.
    pub fn with_mode(kind: VargaKind, mode: Mode) -> Self {
        Self {
            kind,
            mode: Some(mode),
        }
    }

    /// Mode the registry will use.
    ///
    /// Kinds that accept a mode resolve `None` to [`Mode::Parasara`]. Kinds
    /// that take no mode resolve to `None`; an explicit mode on such a kind
    /// is rejected with [`VargaError::InvalidMode`].
    pub fn effective_mode(&self) -> Result<Option<Mode>, VargaError> {
        match (self.kind.accepts_mode(), self.mode) {
            (true, mode) => Ok(Some(mode.unwrap_or_default())),
            (false, None) => Ok(None),
            (false, Some(mode)) => Err(VargaError::InvalidMode(format!(
                "{mode} is not applicable to {}",
                self.kind
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shodashavarga_count() {
        assert_eq!(SHODASHAVARGA.len(), 16);
    }

    #[test]
    fn kind_index_sequential() {
        for (i, &kind) in SHODASHAVARGA.iter().enumerate() {
            assert_eq!(kind.index() as usize, i);
        }
    }

    #[test]
    fn kind_code_roundtrip() {
        for &kind in &SHODASHAVARGA {
            assert_eq!(VargaKind::from_code(kind.code()), Some(kind));
            assert_eq!(kind.id().parse::<VargaKind>(), Ok(kind));
        }
    }

    #[test]
    fn kind_from_code_invalid() {
        assert_eq!(VargaKind::from_code(0), None);
        assert_eq!(VargaKind::from_code(5), None);
        assert_eq!(VargaKind::from_code(144), None);
    }

    #[test]
    fn kind_parse_forms() {
        assert_eq!("d9".parse::<VargaKind>(), Ok(VargaKind::D9));
        assert_eq!(" D60 ".parse::<VargaKind>(), Ok(VargaKind::D60));
        assert_eq!("24".parse::<VargaKind>(), Ok(VargaKind::D24));
    }

    #[test]
    fn kind_parse_invalid() {
        for s in ["D5", "D144", "", "Navamsha", "D-9"] {
            assert_eq!(
                s.parse::<VargaKind>(),
                Err(VargaError::InvalidChartKind(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn mode_parse() {
        assert_eq!("Parasara".parse::<Mode>(), Ok(Mode::Parasara));
        assert_eq!("continuous".parse::<Mode>(), Ok(Mode::Continuous));
        assert!(matches!("method3".parse::<Mode>(), Err(VargaError::InvalidMode(_))));
    }

    #[test]
    fn mode_applicability() {
        let with_mode: Vec<_> = SHODASHAVARGA
            .iter()
            .filter(|k| k.accepts_mode())
            .copied()
            .collect();
        assert_eq!(
            with_mode,
            [VargaKind::D2, VargaKind::D3, VargaKind::D4, VargaKind::D24]
        );
    }

    #[test]
    fn effective_mode_defaults_to_parasara() {
        let req = VargaRequest::new(VargaKind::D3);
        assert_eq!(req.effective_mode(), Ok(Some(Mode::Parasara)));
        let req = VargaRequest::with_mode(VargaKind::D3, Mode::Continuous);
        assert_eq!(req.effective_mode(), Ok(Some(Mode::Continuous)));
    }

    #[test]
    fn effective_mode_rejects_mode_on_single_formula_kind() {
        assert_eq!(VargaRequest::new(VargaKind::D9).effective_mode(), Ok(None));
        let req = VargaRequest::with_mode(VargaKind::D9, Mode::Parasara);
        assert!(matches!(
            req.effective_mode(),
            Err(VargaError::InvalidMode(_))
        ));
    }
}
