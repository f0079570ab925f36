//! Image provider boundary.
//!
//! Decoding is delegated to the `image` crate. The rest of the crate only
//! ever looks at [`ImageHandle::dimensions`]; the pixel buffer is carried
//! along for the render surface.

use std::path::Path;
use std::sync::Arc;

pub use image::RgbaImage;

use crate::error::{Result, StageviewError};
use crate::geometry::Dimensions;

/// A decoded bitmap plus its natural size.
#[derive(Clone, Debug)]
pub struct ImageHandle {
    pub dimensions: Dimensions,
    pub pixels: Arc<RgbaImage>,
}

impl ImageHandle {
    /// Wrap an in-memory bitmap. Zero-sized bitmaps are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (w, h) = pixels.dimensions();
        let dimensions = Dimensions::new(f64::from(w), f64::from(h))?;
        Ok(Self {
            dimensions,
            pixels: Arc::new(pixels),
        })
    }

    pub fn pixel_size(&self) -> [usize; 2] {
        [self.pixels.width() as usize, self.pixels.height() as usize]
    }
}

/// Decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<ImageHandle> {
    let img = image::open(path)?;
    let handle = ImageHandle::from_rgba(img.to_rgba8())?;
    tracing::debug!(
        path = %path.display(),
        width = handle.dimensions.width,
        height = handle.dimensions.height,
        "Image decoded"
    );
    Ok(handle)
}

/// Read only the header to learn an image's size.
pub fn probe_dimensions(path: &Path) -> Result<Dimensions> {
    let (w, h) = image::image_dimensions(path)?;
    if w == 0 || h == 0 {
        return Err(StageviewError::InvalidDimensions {
            width: f64::from(w),
            height: f64::from(h),
        });
    }
    Ok(Dimensions::from_pixels(w, h))
}
