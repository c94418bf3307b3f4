use crate::{
    font::{self, LABEL_SCALE},
    palette::{HexColor, InvalidHexColorError, Thumbnail},
};
use ab_glyph::{Font, Glyph};
use image::{ColorType, ImageError, Rgb, RgbImage, codecs::jpeg::JpegEncoder};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;
pub const JPEG_QUALITY: u8 = 85;

const TEXT_COLOR: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Color(#[from] InvalidHexColorError),
    #[error("Error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error encoding {path}: {source}")]
    Encode { path: PathBuf, source: ImageError },
}

/// Draws the thumbnail: its color as background with its label centered in white.
#[allow(clippy::cast_precision_loss)]
pub fn render(font: &impl Font, thumbnail: &Thumbnail) -> Result<RgbImage, InvalidHexColorError> {
    let HexColor(background) = thumbnail.color.parse()?;
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, background);

    let glyphs = font::layout(
        font,
        LABEL_SCALE,
        thumbnail.label,
        WIDTH as f32,
        HEIGHT as f32,
    );
    for glyph in glyphs {
        draw_glyph(&mut image, font, glyph);
    }

    Ok(image)
}

#[allow(clippy::cast_possible_truncation)]
fn draw_glyph(image: &mut RgbImage, font: &impl Font, glyph: Glyph) {
    // Whitespace has no outline.
    let Some(outlined) = font.outline_glyph(glyph) else {
        return;
    };

    let bounds = outlined.px_bounds();
    let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
    let (width, height) = image.dimensions();

    outlined.draw(|x, y, coverage| {
        let (Ok(px), Ok(py)) = (
            u32::try_from(left + i64::from(x)),
            u32::try_from(top + i64::from(y)),
        ) else {
            return;
        };

        if px < width && py < height {
            let pixel = image.get_pixel_mut(px, py);
            *pixel = blend(*pixel, coverage);
        }
    });
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend(pixel: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let coverage = coverage.clamp(0.0, 1.0);
    let mut channels = pixel.0;

    for (channel, text) in channels.iter_mut().zip(TEXT_COLOR.0) {
        let value = f32::from(*channel) + (f32::from(text) - f32::from(*channel)) * coverage;
        *channel = value.round().clamp(0.0, 255.0) as u8;
    }

    Rgb(channels)
}

/// Renders the thumbnail into `out_dir/<key>.jpg`, replacing any existing file.
pub fn write(
    font: &impl Font,
    thumbnail: &Thumbnail,
    out_dir: &Path,
) -> Result<PathBuf, RenderError> {
    let image = render(font, thumbnail)?;
    let path = out_dir.join(format!("{}.jpg", thumbnail.key));

    let io_error = |source| RenderError::Io {
        path: path.clone(),
        source,
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .map_err(|source| RenderError::Encode {
            path: path.clone(),
            source,
        })?;
    writer.flush().map_err(io_error)?;

    Ok(path)
}
