//! Wallpaper generation.
//!
//! Rendering happens in two steps. [`WallpaperRenderer::plan`] lays out
//! every layer with absolute geometry for the chosen resolution; the
//! [`Canvas`] rasterizer then paints the plan. Text layers are drawn with
//! the embedded [`Typeface`]; characters it has no glyph for are skipped.

pub mod canvas;
pub mod png;
pub mod typeface;

pub use canvas::Canvas;
pub use typeface::Typeface;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::config;
use crate::error::{AlmanacError, Result};
use crate::models::{ZodiacInfo, ZodiacSign};

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "2k")]
    QuadHd,
    #[serde(rename = "4k")]
    UltraHd,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::FullHd, Resolution::QuadHd, Resolution::UltraHd];

    pub fn id(&self) -> &'static str {
        match self {
            Resolution::FullHd => "1080p",
            Resolution::QuadHd => "2k",
            Resolution::UltraHd => "4k",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::FullHd => (1920, 1080),
            Resolution::QuadHd => (2560, 1440),
            Resolution::UltraHd => (3840, 2160),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Resolution {
    type Err = AlmanacError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Resolution::ALL
            .into_iter()
            .find(|r| r.id() == wanted)
            .ok_or_else(|| AlmanacError::InvalidInput(format!("Unknown resolution: '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// Theme / palette
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Nebula,
    Scroll,
    Altar,
}

/// Colors a theme paints with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub gradient: [Rgb; 3],
    pub star: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
    pub glow: Rgb,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Nebula, Theme::Scroll, Theme::Altar];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Nebula => "nebula",
            Theme::Scroll => "scroll",
            Theme::Altar => "altar",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Nebula => Palette {
                gradient: [Rgb::hex(0x0D0A1A), Rgb::hex(0x1A1238), Rgb::hex(0x2D2366)],
                star: Rgb::hex(0x7B2FFD),
                text: Rgb::hex(0xF0E6FF),
                accent: Rgb::hex(0xFFD700),
                glow: Rgb::hex(0x7B2FFD),
            },
            Theme::Scroll => Palette {
                gradient: [Rgb::hex(0x2B1D0E), Rgb::hex(0x4A3520), Rgb::hex(0x7A5C3A)],
                star: Rgb::hex(0xFFD700),
                text: Rgb::hex(0xFFF4E0),
                accent: Rgb::hex(0xC9A227),
                glow: Rgb::hex(0xE0B060),
            },
            Theme::Altar => Palette {
                gradient: [Rgb::hex(0x050505), Rgb::hex(0x1A0A14), Rgb::hex(0x3D0F2A)],
                star: Rgb::hex(0xFF6B9D),
                text: Rgb::hex(0xF0E6FF),
                accent: Rgb::hex(0xFF6B9D),
                glow: Rgb::hex(0xB0104A),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = AlmanacError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| AlmanacError::InvalidInput(format!("Unknown theme: '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// WallpaperConfig / plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperConfig {
    pub sign: ZodiacSign,
    pub theme: Theme,
    pub caption: Option<String>,
    pub resolution: Resolution,
}

impl WallpaperConfig {
    pub fn new(sign: ZodiacSign) -> Self {
        Self {
            sign,
            theme: Theme::default(),
            caption: None,
            resolution: Resolution::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Caption to draw: trimmed, `None` when blank.
    fn effective_caption(&self) -> Result<Option<&str>> {
        let Some(caption) = self.caption.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if caption.is_empty() {
            return Ok(None);
        }
        if caption.chars().count() > config::MAX_CAPTION_CHARS {
            return Err(AlmanacError::InvalidInput(format!(
                "Caption is longer than {} characters",
                config::MAX_CAPTION_CHARS
            )));
        }
        Ok(Some(caption))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    Symbol,
    Name,
    DateRange,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgb,
}

/// One drawing instruction, in painting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Layer {
    /// Linear gradient across the whole canvas from `start` to `end`.
    Gradient {
        start: (f32, f32),
        end: (f32, f32),
        stops: Vec<GradientStop>,
    },
    Star {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        opacity: f32,
    },
    /// Centred text with an optional glow of the given blur radius.
    Text {
        role: TextRole,
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Rgb,
        opacity: f32,
        glow: Option<(Rgb, f32)>,
    },
    /// Four-point star glyph; `filled` is ✦, otherwise ✧.
    Ornament {
        x: f32,
        y: f32,
        size: f32,
        filled: bool,
        color: Rgb,
        opacity: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallpaperPlan {
    pub sign: ZodiacSign,
    pub theme: Theme,
    pub resolution: Resolution,
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl WallpaperPlan {
    pub fn texts(&self) -> impl Iterator<Item = (TextRole, &str)> {
        self.layers.iter().filter_map(|layer| match layer {
            Layer::Text { role, text, .. } => Some((*role, text.as_str())),
            _ => None,
        })
    }

    /// Paint the plan onto a fresh canvas with the embedded typeface.
    pub fn rasterize(&self) -> Result<Canvas> {
        let typeface = Typeface::embedded()?;
        let mut canvas = Canvas::new(self.width, self.height);
        for layer in &self.layers {
            canvas.paint(layer, &typeface);
        }
        Ok(canvas)
    }
}

// ---------------------------------------------------------------------------
// WallpaperRenderer
// ---------------------------------------------------------------------------

/// Lays out and renders wallpapers for a sign.
pub struct WallpaperRenderer<'a> {
    catalog: &'a Catalog,
}

impl<'a> WallpaperRenderer<'a> {
    /// Create a new `WallpaperRenderer` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Lay out a wallpaper with the thread-local random source.
    pub fn plan(&self, config: &WallpaperConfig) -> Result<WallpaperPlan> {
        self.plan_with(&mut rand::thread_rng(), config)
    }

    /// Lay out a wallpaper; `rng` places the decorative points.
    pub fn plan_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        config: &WallpaperConfig,
    ) -> Result<WallpaperPlan> {
        let caption = config.effective_caption()?;
        let info = self.catalog.info(config.sign);
        let palette = config.theme.palette();
        let (width, height) = config.resolution.dimensions();
        let (w, h) = (width as f32, height as f32);

        let mut layers = Vec::with_capacity(config::WALLPAPER_STAR_COUNT + 9);

        layers.push(Layer::Gradient {
            start: (0.0, 0.0),
            end: (w, h),
            stops: [0.0, 0.5, 1.0]
                .into_iter()
                .zip(palette.gradient)
                .map(|(offset, color)| GradientStop { offset, color })
                .collect(),
        });

        for _ in 0..config::WALLPAPER_STAR_COUNT {
            layers.push(Layer::Star {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                radius: rng.gen_range(1.0..4.0),
                color: palette.star,
                opacity: rng.gen_range(0.2..0.7),
            });
        }

        layers.extend(text_layers(info, caption, palette, w, h));

        for (fx, fy, filled) in [
            (0.1, 0.15, true),
            (0.9, 0.15, false),
            (0.1, 0.85, true),
            (0.9, 0.85, false),
        ] {
            layers.push(Layer::Ornament {
                x: w * fx,
                y: h * fy,
                size: w * 0.03,
                filled,
                color: palette.star,
                opacity: 0.5,
            });
        }

        tracing::debug!(
            sign = %config.sign,
            theme = %config.theme,
            resolution = %config.resolution,
            layers = layers.len(),
            "Planned wallpaper"
        );

        Ok(WallpaperPlan {
            sign: config.sign,
            theme: config.theme,
            resolution: config.resolution,
            width,
            height,
            layers,
        })
    }

    /// Plan and rasterize.
    pub fn render(&self, config: &WallpaperConfig) -> Result<Canvas> {
        self.plan(config)?.rasterize()
    }

    /// Render and save as PNG under `dir`, returning the written path.
    pub fn export(&self, config: &WallpaperConfig, dir: &Path) -> Result<PathBuf> {
        let canvas = self.render(config)?;
        let path = dir.join(file_name(self.catalog.info(config.sign)));
        canvas.save_png(&path)?;
        Ok(path)
    }
}

/// `<EnglishName>_<unix-millis>.png`
pub fn file_name(info: &ZodiacInfo) -> String {
    format!("{}_{}.png", info.name_en, chrono::Utc::now().timestamp_millis())
}

fn text_layers(
    info: &ZodiacInfo,
    caption: Option<&str>,
    palette: Palette,
    w: f32,
    h: f32,
) -> Vec<Layer> {
    let (cx, cy) = (w / 2.0, h / 2.0);

    let mut layers = vec![
        Layer::Text {
            role: TextRole::Symbol,
            text: info.symbol.clone(),
            x: cx,
            y: cy,
            font_size: w * 0.15,
            color: palette.text,
            opacity: 1.0,
            glow: Some((palette.glow, 50.0)),
        },
        Layer::Text {
            role: TextRole::Name,
            text: info.name_en.clone(),
            x: cx,
            y: cy + w * 0.12,
            font_size: w * 0.04,
            color: palette.accent,
            opacity: 1.0,
            glow: Some((palette.glow, 20.0)),
        },
        Layer::Text {
            role: TextRole::DateRange,
            text: info.date_range.clone(),
            x: cx,
            y: cy + w * 0.16,
            font_size: w * 0.02,
            color: palette.text,
            opacity: 0.7,
            glow: Some((palette.glow, 20.0)),
        },
    ];

    if let Some(caption) = caption {
        layers.push(Layer::Text {
            role: TextRole::Caption,
            text: caption.to_string(),
            x: cx,
            y: h * 0.85,
            font_size: w * 0.025,
            color: palette.text,
            opacity: 1.0,
            glow: Some((palette.glow, 20.0)),
        });
    }

    layers
}
