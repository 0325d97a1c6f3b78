use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog needs at least one image")]
    Empty,
    #[error("remote template must contain an {{index}} placeholder: {0}")]
    BadTemplate(String),
}

/// Where the catalog's image data comes from.
#[derive(Clone, Debug)]
pub enum CatalogSource {
    /// Self-contained generated swatches; no network dependency.
    Generated,
    /// Templated placeholder URLs; `{index}` is substituted per entry.
    Remote { template: String },
}

/// A generated RGBA8 raster, straight (non-premultiplied) alpha.
#[derive(Clone, Debug)]
pub struct SwatchImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[derive(Clone, Debug)]
pub enum PlaneImage {
    Swatch(SwatchImage),
    Remote(String),
}

/// One moodboard entry. Placement is decided once at catalog build time
/// and never mutates afterwards; only the per-frame derived transform varies.
#[derive(Clone, Debug)]
pub struct PlaneDescriptor {
    pub image: PlaneImage,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec2,
}

pub struct Catalog {
    pub planes: Vec<PlaneDescriptor>,
}

impl Catalog {
    /// Build the full catalog: ring/layer placement with seeded jitter,
    /// plus the image source for each entry.
    pub fn build(source: &CatalogSource, count: usize, seed: u64) -> Result<Self, CatalogError> {
        if count == 0 {
            return Err(CatalogError::Empty);
        }
        if let CatalogSource::Remote { template } = source {
            if !template.contains("{index}") {
                return Err(CatalogError::BadTemplate(template.clone()));
            }
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut planes = Vec::with_capacity(count);
        for i in 0..count {
            let layer = i % LAYER_COUNT;
            let angle = (i as f32 / count as f32) * std::f32::consts::TAU + jitter(&mut rng, 0.2);
            let radius = RING_RADIUS + layer as f32 * RING_RADIUS_STEP + jitter(&mut rng, 1.5);
            let position = Vec3::new(
                angle.cos() * radius,
                angle.sin() * radius * RING_FLATTEN + jitter(&mut rng, 1.0),
                -(layer as f32) * LAYER_DEPTH + jitter(&mut rng, 1.0),
            );
            let rotation = Vec3::new(
                jitter(&mut rng, 0.12),
                jitter(&mut rng, 0.12),
                jitter(&mut rng, 0.05),
            );
            let w = 3.0 + rng.gen::<f32>() * 1.5;
            let image = match source {
                CatalogSource::Generated => PlaneImage::Swatch(swatch(
                    SWATCH_WIDTH,
                    SWATCH_HEIGHT,
                    swatch_base_color(i),
                    &format!("IMAGE {i}"),
                )),
                CatalogSource::Remote { template } => {
                    PlaneImage::Remote(template.replace("{index}", &i.to_string()))
                }
            };
            planes.push(PlaneDescriptor {
                image,
                position,
                rotation,
                scale: Vec2::new(w, w * 0.7),
            });
        }
        log::info!("[catalog] built {} planes (seed {})", planes.len(), seed);
        Ok(Self { planes })
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

#[inline]
fn jitter(rng: &mut impl Rng, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * span
}

/// Render a placeholder swatch: vertical gradient from the opaque base
/// colour to the same colour at reduced alpha, with a centered label.
pub fn swatch(width: u32, height: u32, base_rgb: [u8; 3], label: &str) -> SwatchImage {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    let h_span = (height.saturating_sub(1)).max(1) as f32;
    for y in 0..height {
        let t = y as f32 / h_span;
        let alpha = (255.0 + (SWATCH_MIN_ALPHA as f32 - 255.0) * t) as u8;
        for x in 0..width {
            let o = ((y * width + x) * 4) as usize;
            pixels[o] = base_rgb[0];
            pixels[o + 1] = base_rgb[1];
            pixels[o + 2] = base_rgb[2];
            pixels[o + 3] = alpha;
        }
    }
    draw_label(&mut pixels, width, height, label);
    SwatchImage {
        width,
        height,
        pixels,
    }
}

/// Base colour for generated swatch `index`, spaced by the golden angle
/// so neighbours never share a hue.
pub fn swatch_base_color(index: usize) -> [u8; 3] {
    let [r, g, b] = hsl_to_rgb(hue_for_index(index), 0.45, 0.42);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Flat colour substituted when a plane's texture fails to load.
/// Depends solely on the instance index.
pub fn fallback_color(index: usize) -> [f32; 3] {
    hsl_to_rgb(hue_for_index(index), 0.55, 0.55)
}

#[inline]
pub fn hue_for_index(index: usize) -> f32 {
    (index as f32 * SWATCH_HUE_STEP_DEG).rem_euclid(360.0)
}

pub fn hsl_to_rgb(h_deg: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h_deg.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r1 + m, g1 + m, b1 + m]
}

// ---------------- Label rendering (built-in 5x7 glyphs) ----------------

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const GLYPH_SCALE: u32 = 4;
const GLYPH_GAP: u32 = 1; // columns of spacing between glyphs

fn draw_label(pixels: &mut [u8], width: u32, height: u32, label: &str) {
    let advance = (GLYPH_COLS + GLYPH_GAP) * GLYPH_SCALE;
    let text_w = label.chars().count() as u32 * advance;
    let text_h = GLYPH_ROWS * GLYPH_SCALE;
    if text_w > width || text_h > height {
        return;
    }
    let x0 = (width - text_w) / 2;
    let y0 = (height - text_h) / 2;
    for (ci, ch) in label.chars().enumerate() {
        let rows = glyph_rows(ch);
        let gx = x0 + ci as u32 * advance;
        for (ry, row) in rows.iter().enumerate() {
            for cx in 0..GLYPH_COLS {
                if (row >> (GLYPH_COLS - 1 - cx)) & 1 == 0 {
                    continue;
                }
                for sy in 0..GLYPH_SCALE {
                    for sx in 0..GLYPH_SCALE {
                        let px = gx + cx * GLYPH_SCALE + sx;
                        let py = y0 + ry as u32 * GLYPH_SCALE + sy;
                        let o = ((py * width + px) * 4) as usize;
                        pixels[o] = 0xF2;
                        pixels[o + 1] = 0xF2;
                        pixels[o + 2] = 0xF2;
                        pixels[o + 3] = 0xFF;
                    }
                }
            }
        }
    }
}

// Classic 5x7 uppercase/digit bitmaps; bit 4 is the leftmost column.
// Unknown characters render as a blank cell.
fn glyph_rows(c: char) -> [u8; GLYPH_ROWS as usize] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => [0x00; GLYPH_ROWS as usize],
    }
}
