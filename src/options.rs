//! Generation options and their closed value sets
//!
//! Defines the user-selectable knobs for a generation run: the asset kind
//! the prompts target, background and audio handling, the visual style,
//! and how many prompts to request.

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationType {
    Video,
    Image,
}

impl GenerationType {
    /// Noun used when instruction text refers to the generated asset.
    pub fn subject_noun(self) -> &'static str {
        match self {
            GenerationType::Video => "animation",
            GenerationType::Image => "image",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationType::Video => write!(f, "video"),
            GenerationType::Image => write!(f, "image"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Background {
    Detailed,
    Greenscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Auto,
    #[value(name = "3d_render")]
    ThreeDRender,
    #[value(name = "flat_design")]
    FlatDesign,
    Cartoon,
    #[value(name = "pixel_art")]
    PixelArt,
    Watercolor,
    Isometric,
    Cinematic,
    Realistic,
    Surrealism,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Audio {
    #[value(name = "with_audio")]
    WithAudio,
    #[value(name = "no_audio")]
    NoAudio,
}

/// Number of prompts to request. Construction clamps into `[MIN, MAX]`,
/// so a held value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptCount(u8);

impl PromptCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(count: u32) -> Self {
        Self(count.clamp(Self::MIN as u32, Self::MAX as u32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PromptCount {
    fn default() -> Self {
        Self(3)
    }
}

/// Everything one generation run needs from the user.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub idea: String,
    pub generation_type: GenerationType,
    pub background: Background,
    pub style: Style,
    /// Only consulted for video generation; image prompts are always silent.
    pub audio: Audio,
    pub count: PromptCount,
}
