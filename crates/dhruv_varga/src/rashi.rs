//! Rashi (zodiac sign) decomposition and sign classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 degrees. Given a sidereal longitude we
//! identify the sign it falls in and the degrees elapsed within that sign.
//!
//! Longitudes are taken as already sidereal: no ayanamsha is applied here.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::VargaError;
use crate::util::{normalize_360, validate_longitude};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, reduced mod 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Classically odd sign (Mesha, Mithuna, Simha, Tula, Dhanu, Kumbha).
    ///
    /// These sit at EVEN 0-based indices.
    pub const fn is_odd(self) -> bool {
        is_odd_sign(self.index())
    }

    /// Movable / fixed / dual classification.
    pub const fn modality(self) -> Modality {
        modality(self.index())
    }
}

/// Whether a 0-based sign index is a classically odd sign.
///
/// Classical numbering is 1-based, so Aries (index 0) is sign 1 and odd.
/// Odd signs therefore sit at even 0-based indices: 0, 2, 4, 6, 8, 10.
pub const fn is_odd_sign(sign_index: u8) -> bool {
    sign_index % 2 == 0
}

/// Sign modality (chara / sthira / dvisvabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    /// Mesha, Karka, Tula, Makara.
    Movable,
    /// Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

/// Modality of a 0-based sign index.
pub const fn modality(sign_index: u8) -> Modality {
    match sign_index % 3 {
        0 => Modality::Movable,
        1 => Modality::Fixed,
        _ => Modality::Dual,
    }
}

// ---------------------------------------------------------------------------
// Sign position (decomposer)
// ---------------------------------------------------------------------------

/// A longitude split into sign index and degrees within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignPosition {
    /// 0-based sign index, 0..=11.
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
}

impl SignPosition {
    /// Decompose a sidereal longitude.
    ///
    /// `30 * sign_index + degrees_in_sign` reproduces the normalized
    /// longitude exactly: the subtraction below is exact in binary floating
    /// point because the normalized longitude lies within a factor of two of
    /// `30 * sign_index` (or the index is zero).
    pub fn from_longitude(lon: f64) -> Result<Self, VargaError> {
        let lon = normalize_360(validate_longitude(lon)?);
        let sign_index = ((lon / 30.0).floor() as u8).min(11);
        Ok(Self {
            sign_index,
            degrees_in_sign: lon - f64::from(sign_index) * 30.0,
        })
    }

    /// Build from an already-decomposed pair.
    pub fn new(sign_index: u8, degrees_in_sign: f64) -> Result<Self, VargaError> {
        if sign_index > 11 {
            return Err(VargaError::InvalidSign(sign_index));
        }
        let degrees_in_sign = validate_longitude(degrees_in_sign)?;
        if !(0.0..30.0).contains(&degrees_in_sign) {
            return Self::from_longitude(f64::from(sign_index) * 30.0 + degrees_in_sign);
        }
        Ok(Self {
            sign_index,
            degrees_in_sign,
        })
    }

    /// Recombine into a longitude in [0, 360).
    pub fn longitude(self) -> f64 {
        f64::from(self.sign_index) * 30.0 + self.degrees_in_sign
    }

    /// The sign as a [`Rashi`].
    pub const fn rashi(self) -> Rashi {
        Rashi::from_index(self.sign_index)
    }

    /// Degrees within the sign as degrees, arc-minutes and arc-seconds.
    pub fn dms(self) -> Dms {
        Dms::from_degrees(self.degrees_in_sign)
    }
}

impl Display for SignPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rashi().name(), self.dms())
    }
}

// ---------------------------------------------------------------------------
// DMS
// ---------------------------------------------------------------------------

/// An angle split into whole degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    /// 0..=59
    pub minutes: u8,
    /// [0, 60), fractional
    pub seconds: f64,
}

impl Dms {
    /// Split a non-negative angle. The sign of a negative input is dropped.
    pub fn from_degrees(deg: f64) -> Self {
        let deg = deg.abs();
        let whole = deg.floor();
        let arcmin = (deg - whole) * 60.0;
        let minutes = arcmin.floor();
        Self {
            degrees: whole as u16,
            minutes: minutes as u8,
            seconds: (arcmin - minutes) * 60.0,
        }
    }

    /// Back to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}\u{b0}{:02}'{:05.2}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}
