//! Label typesetting with the embedded DejaVu Sans Bold face, which covers Vietnamese.

use ab_glyph::{Font, FontRef, Glyph, InvalidFont, PxScale, ScaleFont, point};

static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

pub const LABEL_SCALE: PxScale = PxScale { x: 56.0, y: 56.0 };

pub fn label_font() -> Result<FontRef<'static>, InvalidFont> {
    FontRef::try_from_slice(FONT_DATA)
}

fn line_width<F: Font, SF: ScaleFont<F>>(font: &SF, line: &str) -> f32 {
    let mut width = 0.0;
    let mut previous = None;

    for c in line.chars() {
        let id = font.glyph_id(c);
        if let Some(previous) = previous {
            width += font.kern(previous, id);
        }
        width += font.h_advance(id);
        previous = Some(id);
    }

    width
}

/// Positions the glyphs of `text` so the block of lines is centered in a `width`×`height` area.
#[allow(clippy::cast_precision_loss)]
pub fn layout(
    font: &impl Font,
    scale: PxScale,
    text: &str,
    width: f32,
    height: f32,
) -> Vec<Glyph> {
    let font = font.as_scaled(scale);
    let lines: Vec<&str> = text.lines().collect();

    let line_height = font.height() + font.line_gap();
    let block_height = line_height * lines.len() as f32 - font.line_gap();
    let top = (height - block_height) / 2.0;

    let mut glyphs = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let baseline = top + line_height * index as f32 + font.ascent();
        let mut caret = (width - line_width(&font, line)) / 2.0;
        let mut previous = None;

        for c in line.chars() {
            let id = font.glyph_id(c);
            if let Some(previous) = previous {
                caret += font.kern(previous, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
            caret += font.h_advance(id);
            previous = Some(id);
        }
    }

    glyphs
}
