//! Per-kind mode selection for the dual-mode charts.

use serde::{Deserialize, Serialize};

use crate::error::VargaError;
use crate::varga::{Mode, VargaKind, VargaRequest};

/// Modes for D2, D3, D4 and D24. Every field defaults to [`Mode::Parasara`].
///
/// ```toml
/// drekkana = "continuous"
/// chaturvimshamsha = "parasara"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VargaConfig {
    pub hora: Mode,
    pub drekkana: Mode,
    pub chaturthamsha: Mode,
    pub chaturvimshamsha: Mode,
}

impl VargaConfig {
    /// Parse from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, VargaError> {
        toml::from_str(text).map_err(|e| VargaError::InvalidConfig(e.message().to_string()))
    }

    /// Render as TOML text.
    pub fn to_toml_string(&self) -> Result<String, VargaError> {
        toml::to_string(self).map_err(|e| VargaError::InvalidConfig(e.to_string()))
    }

    /// Configured mode for a kind, `None` for kinds that take no mode.
    pub const fn mode_for(&self, kind: VargaKind) -> Option<Mode> {
        match kind {
            VargaKind::D2 => Some(self.hora),
            VargaKind::D3 => Some(self.drekkana),
            VargaKind::D4 => Some(self.chaturthamsha),
            VargaKind::D24 => Some(self.chaturvimshamsha),
            _ => None,
        }
    }

    /// Request for a kind carrying its configured mode.
    pub const fn request(&self, kind: VargaKind) -> VargaRequest {
        VargaRequest {
            kind,
            mode: self.mode_for(kind),
        }
    }
}
