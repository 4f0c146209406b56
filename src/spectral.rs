//! Harvard spectral classes and their display colors.
//!
//! A star's color is chosen from the first character of its spectral type
//! (`spect` in the HYG catalog), e.g. `"G2V"` is drawn as a G star.

use crate::catalog::Value;
use crate::color::Rgba;

/// Color used for stars without a recognized spectral class.
pub const FALLBACK_COLOR: Rgba = Rgba::grey(100);

/// The seven main-sequence spectral classes, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralClass {
    /// Blue, > 30,000 K.
    O,
    /// Blue-white.
    B,
    /// White.
    A,
    /// Yellow-white.
    F,
    /// Yellow (the Sun).
    G,
    /// Orange.
    K,
    /// Red.
    M,
}

impl SpectralClass {
    /// All classes in temperature order.
    pub const ALL: [Self; 7] = [Self::O, Self::B, Self::A, Self::F, Self::G, Self::K, Self::M];

    /// Look up the class for a single code character. Case-sensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Classify a full spectral type string by its first character.
    #[must_use]
    pub fn from_spectral_type(spect: &str) -> Option<Self> {
        spect.chars().next().and_then(Self::from_code)
    }

    /// Classify a catalog field. Numeric and empty values have no class.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        value.and_then(Value::as_text).and_then(Self::from_spectral_type)
    }

    /// Fill color for this class.
    #[must_use]
    pub const fn color(self) -> Rgba {
        match self {
            Self::O => Rgba::rgb(0, 0, 180),
            Self::B => Rgba::rgb(30, 30, 255),
            Self::A => Rgba::rgb(255, 255, 255),
            Self::F => Rgba::rgb(255, 255, 153),
            Self::G => Rgba::rgb(255, 255, 60),
            Self::K => Rgba::rgb(255, 165, 0),
            Self::M => Rgba::rgb(180, 0, 0),
        }
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::O => "darkblue",
            Self::B => "lightblue",
            Self::A => "white",
            Self::F => "lightyellow",
            Self::G => "yellow",
            Self::K => "orange",
            Self::M => "red",
        }
    }
}

/// Fill color for a catalog field, falling back to [`FALLBACK_COLOR`].
#[must_use]
pub fn color_for(value: Option<&Value>) -> Rgba {
    SpectralClass::from_value(value).map_or(FALLBACK_COLOR, SpectralClass::color)
}
