//! Glyph layout and coverage for wallpaper text layers.

use ab_glyph::{point, Font, FontRef, GlyphId, PxScale, ScaleFont};

use crate::error::{AlmanacError, Result};

/// DejaVu Sans; covers Latin text and the zodiac symbols U+2648..U+2653.
static EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// The font text layers are drawn with.
#[derive(Debug, Clone)]
pub struct Typeface {
    font: FontRef<'static>,
}

impl Typeface {
    pub fn embedded() -> Result<Self> {
        let font = FontRef::try_from_slice(EMBEDDED_FONT)
            .map_err(|e| AlmanacError::InvalidData(format!("Embedded font: {e}")))?;
        Ok(Self { font })
    }

    /// Whether the font has a glyph for `c`.
    pub fn covers(&self, c: char) -> bool {
        self.font.glyph_id(c) != GlyphId(0)
    }

    /// Advance width of `text` at `size` px, skipping uncovered characters.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for id in self.glyphs(text) {
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Lay `text` out centred on (cx, cy) and report each covered pixel.
    ///
    /// `plot` receives pixel coordinates, which may fall off the canvas,
    /// and a coverage in 0..=1.
    pub fn draw_centered<F>(&self, text: &str, cx: f32, cy: f32, size: f32, mut plot: F)
    where
        F: FnMut(i32, i32, f32),
    {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = cy + (scaled.ascent() + scaled.descent()) / 2.0;
        let mut caret = cx - self.measure(text, size) / 2.0;
        let mut previous: Option<GlyphId> = None;

        for id in self.glyphs(text) {
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|x, y, coverage| plot(left + x as i32, top + y as i32, coverage));
            }
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
    }

    fn glyphs<'t>(&'t self, text: &'t str) -> impl Iterator<Item = GlyphId> + 't {
        text.chars()
            .map(|c| self.font.glyph_id(c))
            .filter(|id| *id != GlyphId(0))
    }
}
