//! Pasquill–Gifford stability classes and their dispersion coefficients.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::meter};

use super::DispersionError;

/// Atmospheric stability class, from very unstable (A) to very stable (F).
///
/// The set is closed: any other label is rejected when parsed.
///
/// ```
/// use plume_models::models::atmospheric::plume::StabilityClass;
///
/// let class: StabilityClass = "D".parse().unwrap();
/// assert_eq!(class, StabilityClass::D);
/// assert!("G".parse::<StabilityClass>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StabilityClass {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl StabilityClass {
    /// All classes, ordered from most to least turbulent.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Returns the power-law spread coefficients for this class.
    #[must_use]
    pub fn coefficients(self) -> DispersionCoefficients {
        let (a, b, c, d) = match self {
            Self::A => (0.527, 0.865, 0.28, 0.90),
            Self::B => (0.371, 0.866, 0.23, 0.85),
            Self::C => (0.209, 0.897, 0.22, 0.80),
            Self::D => (0.128, 0.905, 0.20, 0.76),
            Self::E => (0.098, 0.902, 0.15, 0.73),
            Self::F => (0.065, 0.902, 0.12, 0.67),
        };
        DispersionCoefficients { a, b, c, d }
    }

    /// Single-letter label used on the wire.
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// Human-readable turbulence description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::A => "very unstable",
            Self::B => "unstable",
            Self::C => "slightly unstable",
            Self::D => "neutral",
            Self::E => "stable",
            Self::F => "very stable",
        }
    }
}

impl fmt::Display for StabilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<char> for StabilityClass {
    type Error = DispersionError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        match label {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            other => Err(DispersionError::InvalidStabilityClass {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for StabilityClass {
    type Err = DispersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Self::try_from(label),
            _ => Err(DispersionError::InvalidStabilityClass {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StabilityClass {
    type Error = DispersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StabilityClass> for String {
    fn from(class: StabilityClass) -> Self {
        class.label().to_string()
    }
}

/// Coefficients of the power-law plume spread fits.
///
/// Spreads are `σy = a · x^b` and `σz = c · x^d` with `x` in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl DispersionCoefficients {
    /// Horizontal (crosswind) spread at downwind distance `x`.
    #[must_use]
    pub fn sigma_y(&self, x: Length) -> Length {
        Length::new::<meter>(self.a * x.get::<meter>().powf(self.b))
    }

    /// Vertical spread at downwind distance `x`.
    #[must_use]
    pub fn sigma_z(&self, x: Length) -> Length {
        Length::new::<meter>(self.c * x.get::<meter>().powf(self.d))
    }
}
