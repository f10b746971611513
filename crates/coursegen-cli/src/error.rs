// Dweve Coursegen - Course Outline Structure Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI error types.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error, aggregating the pipeline's failure modes.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input CSV could not be read or parsed.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying CSV or I/O error.
        source: csv::Error,
    },

    /// Validation failed; nothing was written.
    #[error(transparent)]
    Outline(#[from] coursegen_core::OutlineError),

    /// Rendering failed while writing output.
    #[error(transparent)]
    Render(#[from] coursegen_xml::RenderError),

    /// I/O failure outside the renderers (directory management, single
    /// file creation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_error_is_transparent() {
        let err = CliError::from(coursegen_core::OutlineError::UnknownTag {
            line: 1,
            tag: "widget".to_string(),
            row: "\"widget\"".to_string(),
        });
        assert!(err.to_string().contains("unknown entry \"widget\""));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::from(io_err);
        assert!(err.to_string().contains("I/O error"));
    }
}
