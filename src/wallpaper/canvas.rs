//! A minimal RGB raster the wallpaper plan is painted on.

use std::path::Path;

use super::{png, GradientStop, Layer, Rgb, Typeface};
use crate::error::Result;

/// Packed 8-bit RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    pub fn paint(&mut self, layer: &Layer, typeface: &Typeface) {
        match layer {
            Layer::Gradient { start, end, stops } => self.fill_gradient(*start, *end, stops),
            Layer::Star {
                x,
                y,
                radius,
                color,
                opacity,
            } => self.fill_disc(*x, *y, *radius, *color, *opacity),
            Layer::Text {
                text,
                x,
                y,
                font_size,
                color,
                opacity,
                glow,
                ..
            } => {
                if let Some((glow_color, blur)) = glow {
                    let rx = typeface.measure(text, *font_size) / 2.0 + blur;
                    let ry = font_size * 0.5 + blur;
                    self.fill_halo(*x, *y, rx, ry, *glow_color, 0.35 * opacity);
                }
                self.fill_text(typeface, text, (*x, *y), *font_size, *color, *opacity);
            }
            Layer::Ornament {
                x,
                y,
                size,
                filled,
                color,
                opacity,
            } => self.fill_sparkle(*x, *y, *size / 2.0, *filled, *color, *opacity),
        }
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        png::encode(self.width, self.height, &self.pixels)
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_png()?)?;
        tracing::info!(
            path = %path.display(),
            width = self.width,
            height = self.height,
            "Saved wallpaper"
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Primitives
    // -----------------------------------------------------------------------

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let i = self.offset(x, y);
        for (channel, src) in [color.0, color.1, color.2].into_iter().enumerate() {
            let dst = self.pixels[i + channel] as f32;
            self.pixels[i + channel] = (dst + (src as f32 - dst) * alpha).round() as u8;
        }
    }

    /// Clamped pixel bounds of the box centred on (cx, cy).
    fn bounds(&self, cx: f32, cy: f32, rx: f32, ry: f32) -> Option<(u32, u32, u32, u32)> {
        let x0 = (cx - rx).floor().max(0.0) as u32;
        let y0 = (cy - ry).floor().max(0.0) as u32;
        let x1 = ((cx + rx).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((cy + ry).ceil().max(0.0) as u32).min(self.height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn fill_gradient(&mut self, start: (f32, f32), end: (f32, f32), stops: &[GradientStop]) {
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);
        let length2 = (dx * dx + dy * dy).max(f32::EPSILON);

        for y in 0..self.height {
            for x in 0..self.width {
                let px = x as f32 + 0.5 - start.0;
                let py = y as f32 + 0.5 - start.1;
                let t = ((px * dx + py * dy) / length2).clamp(0.0, 1.0);
                if let Some(color) = sample(stops, t) {
                    let i = self.offset(x, y);
                    self.pixels[i] = color.0;
                    self.pixels[i + 1] = color.1;
                    self.pixels[i + 2] = color.2;
                }
            }
        }
    }

    fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, opacity: f32) {
        let Some((x0, y0, x1, y1)) = self.bounds(cx, cy, radius + 1.0, radius + 1.0) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let d = ((x as f32 + 0.5 - cx).powi(2) + (y as f32 + 0.5 - cy).powi(2)).sqrt();
                let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage * opacity);
            }
        }
    }

    /// Elliptical glow fading quadratically to nothing at its rim.
    fn fill_halo(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgb, strength: f32) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.bounds(cx, cy, rx, ry) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let nx = (x as f32 + 0.5 - cx) / rx;
                let ny = (y as f32 + 0.5 - cy) / ry;
                let d = (nx * nx + ny * ny).sqrt();
                if d < 1.0 {
                    self.blend(x, y, color, strength * (1.0 - d).powi(2));
                }
            }
        }
    }

    /// Glyph coverage of `text` centred on `anchor`, scaled by `opacity`.
    fn fill_text(
        &mut self,
        typeface: &Typeface,
        text: &str,
        anchor: (f32, f32),
        size: f32,
        color: Rgb,
        opacity: f32,
    ) {
        let (width, height) = (self.width as i32, self.height as i32);
        typeface.draw_centered(text, anchor.0, anchor.1, size, |x, y, coverage| {
            if (0..width).contains(&x) && (0..height).contains(&y) {
                self.blend(x as u32, y as u32, color, coverage * opacity);
            }
        });
    }

    /// Four-point star: an astroid of half-width `r`, hollow when not filled.
    fn fill_sparkle(&mut self, cx: f32, cy: f32, r: f32, filled: bool, color: Rgb, opacity: f32) {
        if r <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.bounds(cx, cy, r, r) else {
            return;
        };
        let inner = 0.55;
        for y in y0..y1 {
            for x in x0..x1 {
                let nx = ((x as f32 + 0.5 - cx) / r).abs();
                let ny = ((y as f32 + 0.5 - cy) / r).abs();
                let shape = nx.sqrt() + ny.sqrt();
                let inside = shape <= 1.0;
                let hollow = !filled && shape <= inner;
                if inside && !hollow {
                    self.blend(x, y, color, opacity);
                }
            }
        }
    }
}

/// Colour at `t` along sorted gradient stops.
fn sample(stops: &[GradientStop], t: f32) -> Option<Rgb> {
    let first = stops.first()?;
    if t <= first.offset {
        return Some(first.color);
    }
    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = (b.offset - a.offset).max(f32::EPSILON);
            return Some(lerp(a.color, b.color, (t - a.offset) / span));
        }
    }
    stops.last().map(|s| s.color)
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::TextRole;

    fn paint(canvas: &mut Canvas, layer: Layer) {
        canvas.paint(&layer, &Typeface::embedded().unwrap());
    }

    fn text(text: &str, glow: Option<(Rgb, f32)>) -> Layer {
        Layer::Text {
            role: TextRole::Caption,
            text: text.to_string(),
            x: 60.0,
            y: 20.0,
            font_size: 24.0,
            color: Rgb(255, 255, 255),
            opacity: 1.0,
            glow,
        }
    }

    fn stops() -> Vec<GradientStop> {
        vec![
            GradientStop {
                offset: 0.0,
                color: Rgb(0, 0, 0),
            },
            GradientStop {
                offset: 1.0,
                color: Rgb(200, 100, 0),
            },
        ]
    }

    #[test]
    fn gradient_runs_corner_to_corner() {
        let mut canvas = Canvas::new(64, 32);
        paint(&mut canvas, Layer::Gradient {
            start: (0.0, 0.0),
            end: (64.0, 32.0),
            stops: stops(),
        });
        let top_left = canvas.pixel(0, 0).unwrap();
        let bottom_right = canvas.pixel(63, 31).unwrap();
        assert!(top_left.0 < 10);
        assert!(bottom_right.0 > 190);
    }

    #[test]
    fn sample_interpolates_midpoint() {
        assert_eq!(sample(&stops(), 0.5), Some(Rgb(100, 50, 0)));
        assert_eq!(sample(&[], 0.5), None);
    }

    #[test]
    fn disc_blends_with_opacity() {
        let mut canvas = Canvas::new(10, 10);
        paint(&mut canvas, Layer::Star {
            x: 5.0,
            y: 5.0,
            radius: 2.0,
            color: Rgb(200, 200, 200),
            opacity: 0.5,
        });
        assert_eq!(canvas.pixel(5, 5), Some(Rgb(100, 100, 100)));
        assert_eq!(canvas.pixel(0, 0), Some(Rgb(0, 0, 0)));
    }

    #[test]
    fn shapes_off_canvas_are_clipped() {
        let mut canvas = Canvas::new(4, 4);
        paint(&mut canvas, Layer::Ornament {
            x: -50.0,
            y: -50.0,
            size: 10.0,
            filled: true,
            color: Rgb(255, 255, 255),
            opacity: 1.0,
        });
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn hollow_sparkle_leaves_centre_untouched() {
        let mut canvas = Canvas::new(41, 41);
        paint(&mut canvas, Layer::Ornament {
            x: 20.5,
            y: 20.5,
            size: 40.0,
            filled: false,
            color: Rgb(255, 255, 255),
            opacity: 1.0,
        });
        assert_eq!(canvas.pixel(20, 20), Some(Rgb(0, 0, 0)));
        assert_eq!(canvas.pixel(20, 3), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn text_is_drawn_in_its_colour() {
        let mut canvas = Canvas::new(120, 40);
        paint(&mut canvas, text("HELLO", None));
        let lit = canvas.as_raw().chunks(3).filter(|px| px[0] > 200).count();
        assert!(lit > 50, "{}", lit);
        assert_eq!(canvas.pixel(0, 0), Some(Rgb(0, 0, 0)));
    }

    #[test]
    fn different_strings_paint_different_pixels() {
        let mut hello = Canvas::new(120, 40);
        paint(&mut hello, text("HELLO", None));
        let mut other = Canvas::new(120, 40);
        paint(&mut other, text("XXXXX", None));
        assert_ne!(hello, other);
    }

    #[test]
    fn glow_surrounds_the_glyphs() {
        let mut plain = Canvas::new(120, 40);
        paint(&mut plain, text("Leo", None));
        let mut glowing = Canvas::new(120, 40);
        paint(&mut glowing, text("Leo", Some((Rgb(0, 0, 255), 10.0))));
        // Above the glyphs, inside the halo.
        assert_eq!(plain.pixel(60, 5), Some(Rgb(0, 0, 0)));
        assert!(glowing.pixel(60, 5).unwrap().2 > 0);
    }

    #[test]
    fn uncovered_characters_are_skipped() {
        let mut canvas = Canvas::new(120, 40);
        paint(&mut canvas, text("\u{661F}", None));
        assert!(canvas.as_raw().iter().all(|&b| b == 0));
    }
}
