//! Color types.
//!
//! Colors are entered as `R,G,B` triples in the configuration wizard and
//! serialized the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Message shown when a color cannot be parsed.
pub const COLOR_FORMAT_HINT: &str = "Invalid color format. Use: R,G,B (e.g., 255,0,0 for red)";

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Returns the color as an `image` pixel.
    #[must_use]
    pub const fn to_rgb(self) -> image::Rgb<u8> { image::Rgb([self.r, self.g, self.b]) }
}

/// Parses a color in `R,G,B` format.
///
/// Each component must be an integer in `0..=255`; whitespace around
/// components is ignored.
///
/// # Returns
///
/// `Some(Color)` for a well-formed triple, `None` otherwise.
#[must_use]
pub fn parse_color(input: &str) -> Option<Color> {
    let mut channels = [0u8; 3];
    let mut parts = input.split(',');

    for channel in &mut channels {
        let value = parts.next()?.trim().parse::<i64>().ok()?;
        *channel = u8::try_from(value).ok()?;
    }

    if parts.next().is_some() {
        return None;
    }

    let [r, g, b] = channels;
    Some(Color::new(r, g, b))
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| COLOR_FORMAT_HINT.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self { color.to_rgb() }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_valid() {
        assert_eq!(parse_color("255,0,0"), Some(Color::new(255, 0, 0)));
        assert_eq!(parse_color("0,0,0"), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn test_parse_color_tolerates_whitespace() {
        assert_eq!(parse_color(" 43 , 43,43 "), Some(Color::new(43, 43, 43)));
    }

    #[test]
    fn test_parse_color_rejects_out_of_range() {
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("-1,0,0"), None);
    }

    #[test]
    fn test_parse_color_rejects_wrong_arity() {
        assert_eq!(parse_color("1,2"), None);
        assert_eq!(parse_color("1,2,3,4"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_parse_color_rejects_non_numeric() {
        assert_eq!(parse_color("red"), None);
        assert_eq!(parse_color("1,two,3"), None);
        assert_eq!(parse_color("1.5,2,3"), None);
    }

    #[test]
    fn test_from_str_error_message() {
        let err = "nope".parse::<Color>().unwrap_err();
        assert_eq!(err, COLOR_FORMAT_HINT);
    }

    #[test]
    fn test_display_matches_input_format() {
        assert_eq!(Color::new(169, 169, 169).to_string(), "169,169,169");
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Color::new(1, 2, 3).to_rgb(), image::Rgb([1, 2, 3]));
    }

    #[test]
    fn test_serializes_as_triple_string() {
        let json = serde_json::to_string(&Color::new(60, 60, 60)).unwrap();
        assert_eq!(json, "\"60,60,60\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(60, 60, 60));
    }
}
