use std::io::Cursor;
use std::sync::Arc;

use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use crate::error::ConvertError;
use crate::models::{DataUri, Dimensions, PNG_MEDIA_TYPE};

/// Renders SVG content to PNG at the document's intrinsic size.
///
/// Output is always 8-bit RGBA with the surface left transparent. The
/// document is drawn at the origin, scaled independently in x and y to fill
/// the full target box, with no aspect-ratio correction.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer backed by the system font collection.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::debug!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Rasterize and encode in one pass, returning the PNG as a data URI
    /// together with the dimensions it was produced at.
    pub fn convert(&self, svg: &DataUri) -> Result<(DataUri, Dimensions), ConvertError> {
        let (pixmap, dimensions) = self.rasterize(svg)?;
        let png_bytes = encode_png(&pixmap)?;

        tracing::debug!(
            %dimensions,
            png_len = png_bytes.len(),
            "Encoded PNG"
        );

        Ok((DataUri::new(PNG_MEDIA_TYPE, png_bytes), dimensions))
    }

    /// Decode SVG content and draw it into a freshly allocated pixmap.
    ///
    /// The target size is the document's intrinsic size; a document that
    /// declares no usable size resolves to `Dimensions::FALLBACK`.
    pub fn rasterize(&self, svg: &DataUri) -> Result<(Pixmap, Dimensions), ConvertError> {
        let mut options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        // A document with no width/height/viewBox decodes at the fallback
        // size instead of usvg's 100x100 default.
        if let Some(default_size) = usvg::Size::from_wh(
            Dimensions::FALLBACK.width as f32,
            Dimensions::FALLBACK.height as f32,
        ) {
            options.default_size = default_size;
        }

        let tree = usvg::Tree::from_data(svg.data(), &options)
            .map_err(|e| ConvertError::Decode(e.to_string()))?;

        let svg_size = tree.size();
        let intrinsic = svg_size.to_int_size();
        let dimensions = Dimensions::from_intrinsic(intrinsic.width(), intrinsic.height());

        let mut pixmap = Pixmap::new(dimensions.width, dimensions.height).ok_or(
            ConvertError::SurfaceUnavailable {
                width: dimensions.width,
                height: dimensions.height,
            },
        )?;

        let scale_x = dimensions.width as f32 / svg_size.width();
        let scale_y = dimensions.height as f32 / svg_size.height();
        resvg::render(
            &tree,
            Transform::from_scale(scale_x, scale_y),
            &mut pixmap.as_mut(),
        );

        Ok((pixmap, dimensions))
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a pixmap as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ConvertError> {
    // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SVG_MEDIA_TYPE;

    fn svg_uri(content: &str) -> DataUri {
        DataUri::new(SVG_MEDIA_TYPE, content.as_bytes().to_vec())
    }

    #[test]
    fn test_rasterize_at_intrinsic_size() {
        let renderer = SvgRenderer::new();
        let svg = svg_uri(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#ff0000"/></svg>"##,
        );

        let (pixmap, dimensions) = renderer.rasterize(&svg).unwrap();
        assert_eq!(
            dimensions,
            Dimensions {
                width: 64,
                height: 64
            }
        );

        // Center of the square must be opaque red.
        let pixel = pixmap.pixel(32, 32).unwrap();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (255, 0, 0, 255)
        );
    }

    #[test]
    fn test_missing_intrinsic_size_uses_fallback() {
        let renderer = SvgRenderer::new();
        let svg = svg_uri(
            r##"<svg xmlns="http://www.w3.org/2000/svg"><circle cx="20" cy="20" r="10" fill="#00ff00"/></svg>"##,
        );

        let (_, dimensions) = renderer.rasterize(&svg).unwrap();
        assert_eq!(dimensions, Dimensions::FALLBACK);
    }

    #[test]
    fn test_background_stays_transparent() {
        let renderer = SvgRenderer::new();
        let svg = svg_uri(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect x="4" y="4" width="2" height="2" fill="#000000"/></svg>"##,
        );

        let (pixmap, _) = renderer.rasterize(&svg).unwrap();
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(corner.alpha(), 0);
    }

    #[test]
    fn test_malformed_document_is_a_decode_error() {
        let renderer = SvgRenderer::new();
        let svg = svg_uri("<svg this is not xml");

        let result = renderer.rasterize(&svg);
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn test_convert_produces_decodable_png() {
        let renderer = SvgRenderer::new();
        let svg = svg_uri(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="16"><rect width="32" height="16" fill="#0000ff"/></svg>"##,
        );

        let (png_uri, dimensions) = renderer.convert(&svg).unwrap();
        assert_eq!(png_uri.media_type(), PNG_MEDIA_TYPE);

        let decoder = png::Decoder::new(Cursor::new(png_uri.data().to_vec()));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (dimensions.width, dimensions.height));
        assert_eq!(info.color_type, png::ColorType::Rgba);
    }
}
