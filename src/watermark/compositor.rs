//! Logo compositor.
//!
//! Alpha-blends a logo onto a base image at a pixel offset. The base is
//! promoted to RGBA for blending and the result is demoted to opaque RGB,
//! since JPEG and BMP outputs cannot carry transparency.
//!
//! Offsets may be negative or past the far edge; the part of the logo that
//! falls outside the base is clipped.

use image::{DynamicImage, Rgba, RgbaImage};

use super::position::Placement;

/// Composite `logo` onto `base` at `at` and return an opaque RGB image.
///
/// `base` and `logo` are left untouched.
pub fn composite(base: &DynamicImage, logo: &RgbaImage, at: Placement) -> DynamicImage {
    let mut canvas = base.to_rgba8();
    overlay(&mut canvas, logo, at);
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8())
}

/// Blend `logo` onto `target` in place, clipping to the target bounds.
pub fn overlay(target: &mut RgbaImage, logo: &RgbaImage, at: Placement) {
    let target_width = i64::from(target.width());
    let target_height = i64::from(target.height());
    let x0 = i64::from(at.x);
    let y0 = i64::from(at.y);

    // Visible region in target coordinates
    let x_start = x0.max(0);
    let y_start = y0.max(0);
    let x_end = (x0 + i64::from(logo.width())).min(target_width);
    let y_end = (y0 + i64::from(logo.height())).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let logo_pixel = logo.get_pixel((tx - x0) as u32, (ty - y0) as u32);
            let target_pixel = target.get_pixel_mut(tx as u32, ty as u32);
            *target_pixel = blend_pixels(*target_pixel, *logo_pixel);
        }
    }
}

/// Porter-Duff "over": result = foreground + background * (1 - foreground.alpha)
fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    match foreground[3] {
        0 => return background,
        255 => return foreground,
        _ => {}
    }

    let fg_alpha = f32::from(foreground[3]) / 255.0;
    let bg_alpha = f32::from(background[3]) / 255.0;
    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = f32::from(fg) / 255.0;
        let bg_f = f32::from(bg) / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
