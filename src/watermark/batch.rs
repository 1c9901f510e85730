//! Directory batch processing.
//!
//! Every recognized image in a source directory is watermarked into a file of
//! the same name in the destination directory. A failing file is recorded and
//! skipped; the batch always runs to the end and finishes with a
//! `succeeded/total` summary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use super::processor::FileWatermarker;
use crate::constants::SUPPORTED_EXTENSIONS;

/// Errors that stop a batch before any file is processed.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Error accessing input directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    Succeeded,
    Failed { cause: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub file: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.status == FileStatus::Succeeded
    }
}

/// Per-file outcomes of a batch run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    outcomes: Vec<FileOutcome>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, file: impl Into<String>) {
        self.outcomes.push(FileOutcome {
            file: file.into(),
            status: FileStatus::Succeeded,
        });
    }

    pub fn record_failure(&mut self, file: impl Into<String>, cause: impl ToString) {
        self.outcomes.push(FileOutcome {
            file: file.into(),
            status: FileStatus::Failed {
                cause: cause.to_string(),
            },
        });
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Serializable view with totals, for `--report`.
    pub fn report(&self) -> BatchReport<'_> {
        BatchReport {
            total: self.total(),
            succeeded: self.succeeded(),
            failed: self.failed(),
            files: &self.outcomes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files: &'a [FileOutcome],
}

/// Whether `path` has one of the batch extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// List recognized image files directly inside `dir`, sorted by name.
pub fn collect_image_files(dir: &Path) -> Result<Vec<OsString>, BatchError> {
    let access = |source: std::io::Error| BatchError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(access)? {
        let entry = entry.map_err(access)?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            || entry.path().is_file();
        if is_file && is_supported_image(Path::new(&entry.file_name())) {
            files.push(entry.file_name());
        }
    }
    files.sort();
    Ok(files)
}

/// Runs a [`FileWatermarker`] over a directory.
#[derive(Debug, Clone)]
pub struct BatchWatermarker<W> {
    watermarker: W,
}

impl<W: FileWatermarker> BatchWatermarker<W> {
    pub fn new(watermarker: W) -> Self {
        Self { watermarker }
    }

    /// Watermark every recognized image in `input_dir` into `output_dir`.
    ///
    /// The output directory is created if missing. An empty result (no
    /// matching files) is not an error.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchResult, BatchError> {
        if !output_dir.is_dir() {
            if let Err(source) = std::fs::create_dir_all(output_dir) {
                let e = BatchError::CreateOutputDir {
                    path: output_dir.to_path_buf(),
                    source,
                };
                tracing::error!(path = %output_dir.display(), error = %e, "Batch aborted");
                return Err(e);
            }
            tracing::info!(path = %output_dir.display(), "Created output directory");
        }

        let files = match collect_image_files(input_dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::error!(path = %input_dir.display(), error = %e, "Batch aborted");
                return Err(e);
            }
        };

        let mut result = BatchResult::new();
        let total = files.len();
        if total == 0 {
            tracing::info!(
                path = %input_dir.display(),
                "No image files found in the input directory"
            );
            return Ok(result);
        }

        tracing::info!(count = total, "Found {} image files to process", total);

        for (index, file) in files.iter().enumerate() {
            let name = file.to_string_lossy().into_owned();
            let input = input_dir.join(file);
            let output = output_dir.join(file);

            tracing::info!(file = %name, "Processing {} ({} of {})", name, index + 1, total);

            match self.watermarker.try_watermark(&input, &output) {
                Ok(_) => {
                    tracing::info!(file = %name, "Successfully processed: {}", name);
                    result.record_success(name);
                }
                Err(e) => {
                    tracing::error!(
                        file = %name,
                        path = %input.display(),
                        error = %e,
                        "Failed to process: {}",
                        name
                    );
                    result.record_failure(name, e);
                }
            }
        }

        tracing::info!(
            succeeded = result.succeeded(),
            total = result.total(),
            "Batch complete: {}/{} images processed successfully",
            result.succeeded(),
            result.total()
        );

        Ok(result)
    }
}
