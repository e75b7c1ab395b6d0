use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

/// Saber color a note belongs to.
///
/// Mirrors the host's `ColorType`, including its `None` value (-1), which
/// is never a valid scoring lane.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
pub enum ColorType {
    ColorA,
    ColorB,
    None,
}

impl ColorType {
    /// Convert a host color value. Anything outside `-1..=1` maps to `None`.
    pub fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::ColorA,
            1 => Self::ColorB,
            _ => Self::None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::ColorA => 0,
            Self::ColorB => 1,
            Self::None => -1,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ColorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_i32() {
        assert_eq!(ColorType::from_i32(0), ColorType::ColorA);
        assert_eq!(ColorType::from_i32(1), ColorType::ColorB);
        assert_eq!(ColorType::from_i32(-1), ColorType::None);
        assert_eq!(ColorType::from_i32(7), ColorType::None);
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(ColorType::ColorB.to_string(), "ColorB");
        assert_eq!(ColorType::from_str("ColorA").unwrap(), ColorType::ColorA);
        assert!(ColorType::from_str("ColorC").is_err());
    }
}
