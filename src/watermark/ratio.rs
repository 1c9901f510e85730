//! Ratio parsing for logo sizing.
//!
//! A ratio is written `image:watermark` (e.g. `5:2`). The watermark width is
//! `watermark / image` of the base image width, so `5:2` makes the logo 40%
//! as wide as the photo.
//!
//! Parsing never fails from the caller's point of view: a malformed ratio
//! falls back to the default `5:2`, and the fallback is reported through a
//! [`RatioOutcome::Defaulted`] value and a warning event.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DEFAULT_RATIO_IMAGE_PART, DEFAULT_RATIO_WATERMARK_PART};

/// Why a ratio string was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatioParseError {
    #[error("expected exactly two parts separated by ':'")]
    WrongShape,

    #[error("'{0}' is not a number")]
    NotNumeric(String),

    #[error("ratio parts must be positive")]
    NonPositive,
}

/// A validated `image:watermark` proportion. Both parts are finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ratio {
    image_part: f64,
    watermark_part: f64,
}

impl Ratio {
    pub fn new(image_part: f64, watermark_part: f64) -> Result<Self, RatioParseError> {
        if !(image_part > 0.0 && watermark_part > 0.0) {
            return Err(RatioParseError::NonPositive);
        }
        Ok(Self {
            image_part,
            watermark_part,
        })
    }

    pub fn image_part(&self) -> f64 {
        self.image_part
    }

    pub fn watermark_part(&self) -> f64 {
        self.watermark_part
    }

    /// Fraction of the base image width the logo should occupy.
    pub fn scale(&self) -> f64 {
        self.watermark_part / self.image_part
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self {
            image_part: DEFAULT_RATIO_IMAGE_PART,
            watermark_part: DEFAULT_RATIO_WATERMARK_PART,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.image_part, self.watermark_part)
    }
}

impl FromStr for Ratio {
    type Err = RatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [image_part, watermark_part] = parts.as_slice() else {
            return Err(RatioParseError::WrongShape);
        };

        Ratio::new(parse_part(image_part)?, parse_part(watermark_part)?)
    }
}

fn parse_part(part: &str) -> Result<f64, RatioParseError> {
    let trimmed = part.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RatioParseError::NotNumeric(trimmed.to_string())),
    }
}

/// Result of [`parse_ratio`]: either the operator's ratio or the default.
#[derive(Debug, Clone, PartialEq)]
pub enum RatioOutcome {
    Parsed(Ratio),
    Defaulted {
        input: String,
        reason: RatioParseError,
    },
}

impl RatioOutcome {
    /// The ratio actually in effect.
    pub fn ratio(&self) -> Ratio {
        match self {
            Self::Parsed(ratio) => *ratio,
            Self::Defaulted { .. } => Ratio::default(),
        }
    }

    pub fn scale(&self) -> f64 {
        self.ratio().scale()
    }

    pub fn is_default_fallback(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }
}

/// Parse a ratio string, falling back to `5:2` on any error.
pub fn parse_ratio(input: &str) -> RatioOutcome {
    match input.parse::<Ratio>() {
        Ok(ratio) => {
            tracing::info!(
                ratio = input,
                scale = ratio.scale(),
                "Using ratio {} - watermark will be {:.2}% of image width",
                input,
                ratio.scale() * 100.0
            );
            RatioOutcome::Parsed(ratio)
        }
        Err(reason) => {
            tracing::warn!(
                ratio = input,
                reason = %reason,
                "Invalid ratio '{}'. Using default 5:2",
                input
            );
            RatioOutcome::Defaulted {
                input: input.to_string(),
                reason,
            }
        }
    }
}
