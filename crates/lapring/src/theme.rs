use crate::color::Color;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub dark: Color,
    pub mid: Color,
    pub light: Color,
    pub background: Color,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Ocean,
    Sunset,
    Forest,
    Mono,
}

impl Preset {
    pub fn colors(self) -> ThemeColors {
        match self {
            Self::Ocean => ThemeColors {
                dark: Color::rgb8(0x1e, 0x3a, 0x8a),
                mid: Color::rgb8(0x3b, 0x82, 0xf6),
                light: Color::rgb8(0x93, 0xc5, 0xfd),
                background: Color::rgb8(0xe5, 0xe7, 0xeb),
            },
            Self::Sunset => ThemeColors {
                dark: Color::rgb8(0x9a, 0x34, 0x12),
                mid: Color::rgb8(0xf9, 0x73, 0x16),
                light: Color::rgb8(0xfd, 0xe0, 0x47),
                background: Color::rgb8(0xfe, 0xf3, 0xc7),
            },
            Self::Forest => ThemeColors {
                dark: Color::rgb8(0x14, 0x53, 0x2d),
                mid: Color::rgb8(0x22, 0xc5, 0x5e),
                light: Color::rgb8(0xbb, 0xf7, 0xd0),
                background: Color::rgb8(0xdc, 0xfc, 0xe7),
            },
            Self::Mono => ThemeColors {
                dark: Color::rgb8(0x11, 0x18, 0x27),
                mid: Color::rgb8(0x6b, 0x72, 0x80),
                light: Color::rgb8(0xd1, 0xd5, 0xdb),
                background: Color::new(0.0, 0.0, 0.0, 0.1),
            },
        }
    }
}

impl From<Preset> for ThemeColors {
    fn from(preset: Preset) -> Self {
        preset.colors()
    }
}
