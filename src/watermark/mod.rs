//! Logo watermarking for photographs.
//!
//! A logo is scaled to a fraction of the base image width, placed at one of
//! five anchors and alpha-blended onto the image.
//!
//! # Pipeline
//!
//! - **ratio**: `"image:watermark"` string to a scale factor (default `5:2`)
//! - **resize**: target logo size from the scale, aspect preserved, Lanczos3
//! - **position**: anchor to pixel offset with a 20px edge margin
//! - **compositor**: alpha blend, clipped, output normalized to RGB
//! - **processor**: one image end to end, failures caught and logged
//! - **batch**: a whole directory, one failing file never stops the run
//!
//! # Ratio Examples
//!
//! | Ratio | Logo width |
//! |-------|------------|
//! | `5:2` | 40% of image width |
//! | `4:1` | 25% (smaller) |
//! | `3:1` | 33% (larger) |

pub mod batch;
pub mod compositor;
pub mod error;
pub mod position;
pub mod processor;
pub mod ratio;
pub mod resize;

// Re-export main types for convenience
pub use batch::{
    collect_image_files, is_supported_image, BatchError, BatchReport, BatchResult,
    BatchWatermarker, FileOutcome, FileStatus,
};
pub use compositor::{composite, overlay};
pub use error::WatermarkError;
pub use position::{calculate_position, is_visible, Anchor, Dimensions, Placement, UnknownAnchor};
pub use processor::{apply_logo, Applied, FileWatermarker, Watermarker};
pub use ratio::{parse_ratio, Ratio, RatioOutcome, RatioParseError};
pub use resize::{resize_logo, target_logo_size};
