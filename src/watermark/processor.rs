//! Single-image watermarking.
//!
//! Runs the full pipeline for one base image:
//!
//! ```text
//! decode logo + base → parse ratio → resize logo → anchor offset → composite → encode
//! ```
//!
//! Every failure is caught here. [`Watermarker::watermark`] logs the failing
//! path with its cause and reports `false`; nothing propagates further.
//!
//! # Example
//!
//! ```no_run
//! use logomark::watermark::{Anchor, Watermarker};
//!
//! let watermarker = Watermarker::new("logo.png", Anchor::BottomRight, "5:2");
//! let ok = watermarker.watermark("input.jpg", "output.jpg");
//! ```

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};

use super::compositor::composite;
use super::position::{calculate_position, is_visible, Anchor, Dimensions, Placement};
use super::ratio::parse_ratio;
use super::resize::{resize_logo, target_logo_size};
use super::WatermarkError;
use crate::constants::DEFAULT_MARGIN;

/// Something that can watermark one file into another.
///
/// The batch runner only depends on this seam, so its bookkeeping can be
/// exercised without decoding real images.
pub trait FileWatermarker {
    fn try_watermark(&self, input: &Path, output: &Path) -> Result<Applied, WatermarkError>;
}

/// What happened to one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub base: Dimensions,
    pub logo: Dimensions,
    pub position: Placement,
}

/// Watermarks images with one logo, anchor and ratio.
#[derive(Debug, Clone)]
pub struct Watermarker {
    logo_path: PathBuf,
    anchor: Anchor,
    ratio: String,
    margin: u32,
}

impl Watermarker {
    pub fn new(logo_path: impl Into<PathBuf>, anchor: Anchor, ratio: impl Into<String>) -> Self {
        Self {
            logo_path: logo_path.into(),
            anchor,
            ratio: ratio.into(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Override the edge margin (default 20px).
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn logo_path(&self) -> &Path {
        &self.logo_path
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn ratio(&self) -> &str {
        &self.ratio
    }

    /// Watermark `input` into `output`, logging any failure.
    ///
    /// Returns `true` on success.
    pub fn watermark(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> bool {
        let input = input.as_ref();
        match self.try_watermark(input, output.as_ref()) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    path = %input.display(),
                    error = %e,
                    "Error processing {}: {}",
                    input.display(),
                    e
                );
                false
            }
        }
    }

    /// Apply the logo to an already decoded base image.
    pub fn apply(
        &self,
        base: &DynamicImage,
        logo: &DynamicImage,
    ) -> Result<(DynamicImage, Applied), WatermarkError> {
        apply_logo(base, logo, self.anchor, &self.ratio, self.margin)
    }
}

impl FileWatermarker for Watermarker {
    fn try_watermark(&self, input: &Path, output: &Path) -> Result<Applied, WatermarkError> {
        let logo = open_image(&self.logo_path)?;
        let base = open_image(input)?;

        let (result, applied) = self.apply(&base, &logo)?;
        save_image(&result, output)?;
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            x = applied.position.x,
            y = applied.position.y,
            "Watermark written"
        );
        Ok(applied)
    }
}

/// Resize, place and composite `logo` onto `base`.
pub fn apply_logo(
    base: &DynamicImage,
    logo: &DynamicImage,
    anchor: Anchor,
    ratio: &str,
    margin: u32,
) -> Result<(DynamicImage, Applied), WatermarkError> {
    let scale = parse_ratio(ratio).scale();

    let base_dims = Dimensions::new(base.width(), base.height());
    let logo_rgba: RgbaImage = logo.to_rgba8();
    let native = Dimensions::new(logo_rgba.width(), logo_rgba.height());
    if native.width == 0 || native.height == 0 {
        return Err(WatermarkError::Resize(format!(
            "Logo has no area ({native})"
        )));
    }

    let target = target_logo_size(base_dims.width, native, scale);
    let resized = resize_logo(&logo_rgba, target)?;

    tracing::info!(
        image_size = %base_dims,
        logo_from = %native,
        logo_to = %target,
        "Logo resized from {} to {} for {} image ({:.1}% of image width)",
        native,
        target,
        base_dims,
        scale * 100.0
    );

    let position = calculate_position(anchor, base_dims, target, margin);
    if !is_visible(position, base_dims, target) {
        tracing::warn!(
            anchor = %anchor,
            x = position.x,
            y = position.y,
            "Logo falls outside the image and will not be visible"
        );
    }

    let result = composite(base, &resized, position);
    Ok((
        result,
        Applied {
            base: base_dims,
            logo: target,
            position,
        },
    ))
}

fn open_image(path: &Path) -> Result<DynamicImage, WatermarkError> {
    image::open(path).map_err(|source| WatermarkError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn save_image(image: &DynamicImage, path: &Path) -> Result<(), WatermarkError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| WatermarkError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    image.save(path).map_err(|source| WatermarkError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
