use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use crate::builtin_font;
use crate::fonts::IconFont;

/// Tight box around the inked pixels of a label, in layout coordinates
/// (origin at the left edge of the line, y growing down from the top of the ascent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

fn layout(font: &FontVec, scale: PxScale, text: &str) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = point(0.0, scaled.ascent());
    let mut prev: Option<GlyphId> = None;

    let mut glyphs = Vec::with_capacity(text.len());
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret.x += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, caret));
        caret.x += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

/// Ink bounds of `text`, or `None` when nothing would be drawn
pub fn measure(font: &IconFont, text: &str) -> Option<TextBounds> {
    match font {
        IconFont::Scalable { font, scale, .. } => layout(font, *scale, text)
            .into_iter()
            .filter_map(|g| font.outline_glyph(g))
            .map(|outlined| {
                let b = outlined.px_bounds();
                TextBounds { min_x: b.min.x, min_y: b.min.y, max_x: b.max.x, max_y: b.max.y }
            })
            .reduce(TextBounds::union),
        IconFont::Builtin => builtin_font::pixels(text)
            .into_iter()
            .map(|(x, y)| TextBounds {
                min_x: x as f32,
                min_y: y as f32,
                max_x: (x + 1) as f32,
                max_y: (y + 1) as f32,
            })
            .reduce(TextBounds::union),
    }
}

/// Translation that centers `bounds` on a square canvas, each axis independently.
/// Side bearings and the ascent offset are cancelled so the ink itself is centered,
/// rather than placing the layout origin at `(canvas - width) / 2`.
pub fn centered_offset(canvas: u32, bounds: &TextBounds) -> (i32, i32) {
    let x = (canvas as f32 - bounds.width()) / 2.0 - bounds.min_x;
    let y = (canvas as f32 - bounds.height()) / 2.0 - bounds.min_y;
    (x.round() as i32, y.round() as i32)
}

pub fn blend(background: Rgb<u8>, foreground: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let c = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| (b as f32 + (f as f32 - b as f32) * c).round() as u8;
    Rgb([
        mix(background[0], foreground[0]),
        mix(background[1], foreground[1]),
        mix(background[2], foreground[2]),
    ])
}

fn put_blended(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let blended = blend(*img.get_pixel(x, y), color, coverage);
    img.put_pixel(x, y, blended);
}

/// Square canvas filled with `background`, `label` centered in `foreground`
pub fn render_icon(
    size: u32,
    label: &str,
    font: &IconFont,
    background: [u8; 3],
    foreground: [u8; 3],
) -> RgbImage {
    let mut img = RgbImage::from_pixel(size, size, Rgb(background));
    let color = Rgb(foreground);

    let Some(bounds) = measure(font, label) else {
        return img;
    };
    let (dx, dy) = centered_offset(size, &bounds);

    match font {
        IconFont::Scalable { font, scale, .. } => {
            for glyph in layout(font, *scale, label) {
                if let Some(outlined) = font.outline_glyph(glyph) {
                    let b = outlined.px_bounds();
                    let left = b.min.x as i32 + dx;
                    let top = b.min.y as i32 + dy;
                    outlined.draw(|x, y, coverage| {
                        put_blended(&mut img, left + x as i32, top + y as i32, color, coverage);
                    });
                }
            }
        }
        IconFont::Builtin => {
            for (x, y) in builtin_font::pixels(label) {
                put_blended(&mut img, x as i32 + dx, y as i32 + dy, color, 1.0);
            }
        }
    }

    img
}
