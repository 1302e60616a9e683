//! Configuration surface
//!
//! Three enumerated settings: the [`Algorithm`], the sequence [`Size`] and the
//! playback [`Speed`].  Values outside their sets are rejected here with a
//! [`ConfigError`] so nothing downstream ever sees them.

use crate::compiler::Algorithm;
use crate::error::ConfigError;
use std::fmt;

/// Allowed sequence lengths
pub const SIZES: [usize; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Sequence length, one of [`SIZES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size(usize);

impl Size {
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        if SIZES.contains(&len) {
            Ok(Size(len))
        } else {
            Err(ConfigError::InvalidSize(len))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Next larger size, saturating at the largest
    pub fn next(self) -> Self {
        let i = self.position();
        Size(SIZES[(i + 1).min(SIZES.len() - 1)])
    }

    /// Next smaller size, saturating at the smallest
    pub fn prev(self) -> Self {
        Size(SIZES[self.position().saturating_sub(1)])
    }

    fn position(self) -> usize {
        SIZES.iter().position(|&s| s == self.0).unwrap_or(0)
    }
}

impl Default for Size {
    fn default() -> Self {
        Size(SIZES[0])
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl Speed {
    pub const ALL: [Speed; 5] = [
        Speed::Half,
        Speed::ThreeQuarters,
        Speed::Normal,
        Speed::Double,
        Speed::Quadruple,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::ThreeQuarters => 0.75,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
            Speed::Quadruple => 4.0,
        }
    }

    pub fn from_multiplier(multiplier: f64) -> Result<Self, ConfigError> {
        Speed::ALL
            .into_iter()
            .find(|s| (s.multiplier() - multiplier).abs() < f64::EPSILON)
            .ok_or(ConfigError::InvalidSpeed(multiplier))
    }

    /// Faster setting, saturating at the fastest
    pub fn faster(self) -> Self {
        let i = self.position();
        Speed::ALL[(i + 1).min(Speed::ALL.len() - 1)]
    }

    /// Slower setting, saturating at the slowest
    pub fn slower(self) -> Self {
        Speed::ALL[self.position().saturating_sub(1)]
    }

    fn position(self) -> usize {
        Speed::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.multiplier())
    }
}

/// The full configuration of the next run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub size: Size,
    pub speed: Speed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_validation() {
        assert_eq!(Size::new(30).map(Size::get), Ok(30));
        assert_eq!(Size::new(15), Err(ConfigError::InvalidSize(15)));
        assert!(Size::new(0).is_err());
        assert!(Size::new(110).is_err());
    }

    #[test]
    fn test_size_stepping_saturates() {
        let smallest = Size::default();
        assert_eq!(smallest.prev(), smallest);
        assert_eq!(smallest.next().get(), 20);

        let largest = Size::new(100).unwrap();
        assert_eq!(largest.next(), largest);
    }

    #[test]
    fn test_speed_validation() {
        assert_eq!(Speed::from_multiplier(0.75), Ok(Speed::ThreeQuarters));
        assert_eq!(Speed::from_multiplier(4.0), Ok(Speed::Quadruple));
        assert_eq!(
            Speed::from_multiplier(3.0),
            Err(ConfigError::InvalidSpeed(3.0))
        );
    }

    #[test]
    fn test_speed_stepping_saturates() {
        assert_eq!(Speed::Normal.faster(), Speed::Double);
        assert_eq!(Speed::Quadruple.faster(), Speed::Quadruple);
        assert_eq!(Speed::Half.slower(), Speed::Half);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.algorithm, Algorithm::Bubble);
        assert_eq!(settings.size.get(), 10);
        assert_eq!(settings.speed, Speed::Normal);
    }
}
