use std::path::Path;

use image::{
    imageops, imageops::FilterType, io::Reader as ImageReader, DynamicImage, ImageBuffer,
    ImageError, Rgba, RgbaImage,
};

use crate::error::{IconError, Result};

type PremultipliedImage = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Decodes the image at `path` and normalizes it to 8-bit RGBA.
///
/// The format is sniffed from the file contents, the extension is ignored.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let map_err = |source| IconError::Decode {
        path: path.to_owned(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(ImageError::from)
        .map_err(map_err)?
        .decode()
        .map_err(map_err)?;

    Ok(into_rgba(img))
}

/// Formats without alpha get a fully opaque channel.
pub fn into_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(buf) => buf,
        other => other.to_rgba8(),
    }
}

/// Resamples to an `edge` x `edge` square with Lanczos3, ignoring aspect ratio.
///
/// Filtering happens on premultiplied alpha so transparent pixels do not
/// darken the edges they border.
pub fn resample(src: &RgbaImage, edge: u32) -> RgbaImage {
    let resized = imageops::resize(&premultiply(src), edge, edge, FilterType::Lanczos3);
    unpremultiply(&resized)
}

fn premultiply(src: &RgbaImage) -> PremultipliedImage {
    ImageBuffer::from_fn(src.width(), src.height(), |x, y| {
        let Rgba([r, g, b, a]) = *src.get_pixel(x, y);
        let a = a as f32 / 255.0;
        Rgba([
            r as f32 / 255.0 * a,
            g as f32 / 255.0 * a,
            b as f32 / 255.0 * a,
            a,
        ])
    })
}

fn unpremultiply(src: &PremultipliedImage) -> RgbaImage {
    RgbaImage::from_fn(src.width(), src.height(), |x, y| {
        let Rgba([r, g, b, a]) = *src.get_pixel(x, y);
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encodes losslessly as RGBA PNG with the smallest output the encoder offers.
///
/// `path` is only used for error reporting.
pub fn encode_png(img: &RgbaImage, path: &Path) -> Result<Vec<u8>> {
    let map_err = |source| IconError::Encode {
        path: path.to_owned(),
        source,
    };

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Best);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);

        let mut writer = encoder.write_header().map_err(map_err)?;
        writer.write_image_data(img.as_raw()).map_err(map_err)?;
        writer.finish().map_err(map_err)?;
    }

    Ok(buf)
}
