//! Logo sizing relative to the base image.
//!
//! The logo width is `floor(base_width * scale)`; the height follows the logo's
//! own aspect ratio. Resampling uses a Lanczos3 convolution so that small
//! logos stay crisp.

use std::num::NonZeroU32;

use fast_image_resize::{FilterType, Image, MulDiv, PixelType, ResizeAlg, Resizer};
use image::RgbaImage;

use super::position::Dimensions;
use super::WatermarkError;
use crate::constants::MAX_LOGO_PIXELS;

/// Compute the target logo size for a base image of `base_width` pixels.
///
/// Either dimension may come out as 0 for a tiny base or a very wide logo;
/// that is not an error, the logo then simply has no visible area.
pub fn target_logo_size(base_width: u32, logo: Dimensions, scale: f64) -> Dimensions {
    let target_width = (base_width as f64 * scale).floor();
    let aspect = logo.height as f64 / logo.width as f64;
    let target_height = (target_width * aspect).floor();

    // `as` saturates, so absurd scales cannot wrap around
    Dimensions::new(target_width as u32, target_height as u32)
}

/// Resize a logo to exactly `target` using Lanczos3.
///
/// A 0-area target yields an empty image. Targets above
/// [`MAX_LOGO_PIXELS`] are rejected before any buffer is allocated.
pub fn resize_logo(logo: &RgbaImage, target: Dimensions) -> Result<RgbaImage, WatermarkError> {
    if target.width == 0 || target.height == 0 {
        return Ok(RgbaImage::new(target.width, target.height));
    }
    if logo.dimensions() == (target.width, target.height) {
        return Ok(logo.clone());
    }
    check_target_size(target)?;

    let src_width = NonZeroU32::new(logo.width())
        .ok_or_else(|| WatermarkError::Resize("Source width is 0".to_string()))?;
    let src_height = NonZeroU32::new(logo.height())
        .ok_or_else(|| WatermarkError::Resize("Source height is 0".to_string()))?;
    let dst_width = NonZeroU32::new(target.width)
        .ok_or_else(|| WatermarkError::Resize("Target width is 0".to_string()))?;
    let dst_height = NonZeroU32::new(target.height)
        .ok_or_else(|| WatermarkError::Resize("Target height is 0".to_string()))?;

    let mut src_image = Image::from_vec_u8(
        src_width,
        src_height,
        logo.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(|e| WatermarkError::Resize(format!("Failed to create source image: {:?}", e)))?;

    // Convolution over straight alpha bleeds the color of transparent pixels
    // into the edges, so resample premultiplied and undo it afterwards.
    let alpha = MulDiv::default();
    alpha
        .multiply_alpha_inplace(&mut src_image.view_mut())
        .map_err(|e| WatermarkError::Resize(format!("Failed to premultiply alpha: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);
    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| WatermarkError::Resize(format!("Resize operation failed: {:?}", e)))?;

    alpha
        .divide_alpha_inplace(&mut dst_image.view_mut())
        .map_err(|e| WatermarkError::Resize(format!("Failed to unpremultiply alpha: {:?}", e)))?;

    RgbaImage::from_raw(target.width, target.height, dst_image.into_vec())
        .ok_or_else(|| WatermarkError::Resize("Failed to create output image buffer".to_string()))
}

/// Reject targets whose RGBA buffer would overflow or exceed [`MAX_LOGO_PIXELS`].
fn check_target_size(target: Dimensions) -> Result<(), WatermarkError> {
    let too_large = || {
        WatermarkError::Resize(format!(
            "Target logo size {target} exceeds the limit of {MAX_LOGO_PIXELS} pixels"
        ))
    };

    let pixels = u64::from(target.width)
        .checked_mul(u64::from(target.height))
        .ok_or_else(too_large)?;
    let bytes = pixels.checked_mul(4).ok_or_else(too_large)?;
    if pixels > MAX_LOGO_PIXELS || bytes > u64::from(u32::MAX) {
        return Err(too_large());
    }
    Ok(())
}
