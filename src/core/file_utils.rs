//! File utilities for safe stylesheet reading.
//!
//! Stylesheets are read with UTF-8 validation and a lossy fallback; files that
//! look binary are rejected before their contents are decoded.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::core::errors::{ClasslintError, Result};

/// Number of leading bytes sampled when sniffing for binary content.
const SAMPLE_SIZE: usize = 1024;

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        if Self::is_likely_binary(file_path)? {
            return Err(ClasslintError::validation(format!(
                "File appears to be binary: {}",
                file_path.display()
            )));
        }

        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                let bytes = fs::read(file_path).map_err(|err| {
                    ClasslintError::io(
                        format!("Failed to read file as bytes: {}", file_path.display()),
                        err,
                    )
                })?;

                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            Err(e) => Err(ClasslintError::io(
                format!("Failed to read file: {}", file_path.display()),
                e,
            )),
        }
    }

    /// Check if a file is likely to be binary by sampling its first bytes.
    pub fn is_likely_binary(file_path: &Path) -> Result<bool> {
        let mut file = fs::File::open(file_path).map_err(|e| {
            ClasslintError::io(
                format!("Failed to open file: {}", file_path.display()),
                e,
            )
        })?;

        let mut buffer = Vec::with_capacity(SAMPLE_SIZE);
        file.by_ref()
            .take(SAMPLE_SIZE as u64)
            .read_to_end(&mut buffer)
            .map_err(|e| {
                ClasslintError::io(
                    format!("Failed to read file sample: {}", file_path.display()),
                    e,
                )
            })?;

        Ok(looks_binary(&buffer))
    }
}

/// More than 1% NUL bytes in the sample marks content as binary.
fn looks_binary(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }
    let null_bytes = sample.iter().filter(|&&b| b == 0).count();
    null_bytes * 100 > sample.len()
}
