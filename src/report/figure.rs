//! Embedding raster figures into the document.
//!
//! Wraps `genpdf::elements::Image` with decoding through the [`image`]
//! crate for descriptive errors, plus scale-to-width arithmetic so a chart
//! can be given a fixed millimetre width and centered on the page.

use std::path::Path;

use image::GenericImageView;

use genpdf::elements::Image;
use genpdf::error::{Context as _, Error};
use genpdf::style::Style;
use genpdf::{render, Alignment, Element, Mm, RenderResult, Scale, Size};

const IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Loads an image from the given path with descriptive errors.
pub fn decode_image_from_path(path: impl AsRef<Path>) -> Result<image::DynamicImage, Error> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine image format")?
        .decode()
        .with_context(|| format!("Failed to decode image file {}", path.display()))
}

fn natural_size(image: &image::DynamicImage) -> Size {
    let (px_width, px_height) = image.dimensions();
    Size::new(
        mm_from_f64(MM_PER_INCH * f64::from(px_width) / IMAGE_DPI),
        mm_from_f64(MM_PER_INCH * f64::from(px_height) / IMAGE_DPI),
    )
}

/// An image element rescaled to a requested width, preserving aspect
/// ratio, with horizontal alignment within the content area.
pub struct ScaledImage {
    image: Image,
    alignment: Alignment,
    natural_size: Size,
    requested_width: Option<Mm>,
}

impl ScaledImage {
    /// Creates the element from the image file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let dynamic = decode_image_from_path(path)?;
        let size = natural_size(&dynamic);
        let image = Image::from_dynamic_image(dynamic)?;
        Ok(Self {
            image,
            alignment: Alignment::Left,
            natural_size: size,
            requested_width: None,
        })
    }

    /// Sets the horizontal alignment and returns the updated element.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Constrains the rendered width and returns the updated element.
    pub fn with_width(mut self, width: impl Into<Option<Mm>>) -> Self {
        self.requested_width = width.into();
        self
    }

    fn apply(&mut self) {
        self.image.set_alignment(self.alignment);
        match self.requested_width {
            Some(width) => {
                let natural = mm_to_f64(self.natural_size.width);
                if natural > f64::EPSILON {
                    let scale = mm_to_f64(width) / natural;
                    self.image.set_scale(Scale::new(scale, scale));
                }
            }
            None => self.image.set_scale(Scale::new(1.0, 1.0)),
        }
    }
}

impl Element for ScaledImage {
    fn render(
        &mut self,
        context: &genpdf::Context,
        area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        self.apply();
        self.image.render(context, area, style)
    }
}
