use serde::{Deserialize, Serialize};

pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MAX: u8 = 100;
pub const SLIDER_DEFAULT: u8 = 50;

/// Integer slider position, always within `SLIDER_MIN..=SLIDER_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct SliderValue(u8);

impl SliderValue {
    /// Clamps any host-provided integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(SLIDER_MIN as i64, SLIDER_MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn message(self) -> String {
        format!("The selected number is: {}", self.0)
    }
}

impl Default for SliderValue {
    fn default() -> Self {
        Self(SLIDER_DEFAULT)
    }
}

impl From<i64> for SliderValue {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<SliderValue> for u8 {
    fn from(value: SliderValue) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fifty() {
        assert_eq!(SliderValue::default().get(), 50);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(SliderValue::clamped(-4).get(), 0);
        assert_eq!(SliderValue::clamped(250).get(), 100);
        assert_eq!(SliderValue::clamped(73).get(), 73);
    }

    #[test]
    fn test_deserialize_clamps() {
        let value: SliderValue = serde_json::from_str("140").unwrap();
        assert_eq!(value.get(), 100);
        assert_eq!(value.message(), "The selected number is: 100");
    }
}
