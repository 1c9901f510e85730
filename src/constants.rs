// Constants module - centralized default values
//
// Defaults shared by the watermark pipeline, the batch runner and the CLI.

// =============================================================================
// Geometry defaults
// =============================================================================

/// Inset in pixels between the logo and the base image edge (non-center anchors)
pub const DEFAULT_MARGIN: u32 = 20;

/// Largest resized logo accepted, in pixels (100 megapixels, 400 MB as RGBA)
pub const MAX_LOGO_PIXELS: u64 = 100_000_000;

// =============================================================================
// Ratio defaults
// =============================================================================

/// Ratio used when none is given on the command line (image:watermark)
pub const DEFAULT_RATIO: &str = "5:2";

/// Image part of the fallback ratio
pub const DEFAULT_RATIO_IMAGE_PART: f64 = 5.0;

/// Watermark part of the fallback ratio
pub const DEFAULT_RATIO_WATERMARK_PART: f64 = 2.0;

/// Scale derived from the fallback ratio (2 / 5)
pub const DEFAULT_SCALE: f64 = 0.4;

// =============================================================================
// Batch defaults
// =============================================================================

/// File extensions picked up in batch mode (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "bmp", "jpg", "gif", "jpeg"];
