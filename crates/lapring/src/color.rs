use derive_more::{AsRef, Deref, From, Into};
use palette::{Srgb, Srgba, WithAlpha};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Deref, From, Into, AsRef, SerializeDisplay, DeserializeFromStr,
)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue).with_alpha(u8::MAX).into_format())
    }

    pub fn components(&self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color '{0}' (expected #rgb, #rrggbb or #rrggbbaa)")]
    Invalid(String),
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::Invalid(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let (rgb, alpha) = match hex.len() {
            3 | 6 => (hex, u8::MAX),
            8 => (
                &hex[..6],
                u8::from_str_radix(&hex[6..], 16).map_err(|_| invalid())?,
            ),
            _ => return Err(invalid()),
        };

        let rgb: Srgb<u8> = rgb.parse().map_err(|_| invalid())?;
        Ok(Self(rgb.with_alpha(alpha).into_format()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: Srgba<u8> = self.0.into_format();
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            c.red, c.green, c.blue, c.alpha
        )
    }
}
