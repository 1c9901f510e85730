// Configuration module
//
// Turns the raw command-line invocation into a validated `WatermarkJob`.
// Validation only reads the filesystem; it never creates files or directories,
// so a rejected invocation leaves no trace.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::DEFAULT_RATIO;
use crate::watermark::{Anchor, UnknownAnchor, Watermarker};

/// Invocation problems detected before any processing starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Logo file '{}' not found.", .0.display())]
    MissingLogo(PathBuf),

    #[error(transparent)]
    InvalidAnchor(#[from] UnknownAnchor),

    #[error("Input path '{}' not found.", .0.display())]
    MissingInput(PathBuf),

    #[error("Ratio '{0}' must be in format 'image:watermark' (e.g., '5:2', '4:1')")]
    MalformedRatio(String),
}

/// Single image or whole directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Single,
    Batch,
}

impl Mode {
    /// Batch when `input` is an existing directory, single file otherwise.
    pub fn detect(input: &Path) -> Self {
        if input.is_dir() {
            Mode::Batch
        } else {
            Mode::Single
        }
    }
}

/// Positional arguments as given by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
    pub logo: PathBuf,
    pub anchor: String,
    pub ratio: Option<String>,
}

impl Invocation {
    /// Validate in the order an operator would fix things: logo, position,
    /// input, ratio.
    pub fn validate(self) -> Result<WatermarkJob, ConfigError> {
        if !self.logo.exists() {
            return Err(ConfigError::MissingLogo(self.logo));
        }

        let anchor: Anchor = self.anchor.parse()?;

        if !self.input.exists() {
            return Err(ConfigError::MissingInput(self.input));
        }

        let ratio = match self.ratio {
            Some(ratio) if !ratio.contains(':') => return Err(ConfigError::MalformedRatio(ratio)),
            Some(ratio) => ratio,
            None => DEFAULT_RATIO.to_string(),
        };

        Ok(WatermarkJob {
            mode: Mode::detect(&self.input),
            input: self.input,
            output: self.output,
            logo: self.logo,
            anchor,
            ratio,
        })
    }
}

/// A validated watermarking request, consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkJob {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub logo: PathBuf,
    pub anchor: Anchor,
    pub ratio: String,
}

impl WatermarkJob {
    pub fn watermarker(&self) -> Watermarker {
        Watermarker::new(&self.logo, self.anchor, self.ratio.as_str())
    }
}
