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

//! Error types for outline validation and construction.

use thiserror::Error;

/// Outline construction error types.
///
/// Both variants are fatal: validation runs eagerly over the whole row
/// sequence before any tree is built or any file is written, so a bad row
/// can never produce partial output.
///
/// # Examples
///
/// ```
/// use coursegen_core::OutlineError;
///
/// let err = OutlineError::UnknownTag {
///     line: 3,
///     tag: "widget".to_string(),
///     row: "\"widget\", \"w1\"".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "unknown entry \"widget\" at line 3 (full row: \"widget\", \"w1\")"
/// );
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    /// A row's type tag is not in the recognized set.
    #[error("unknown entry \"{tag}\" at line {line} (full row: {row})")]
    UnknownTag {
        /// Source line number (1-based).
        line: usize,
        /// The unrecognized tag, as normalized.
        tag: String,
        /// The offending row, quoted field by field.
        row: String,
    },

    /// A row nests more than one level deeper than the preceding context.
    #[error("inappropriate order of entries: cannot have \"{tag}\" {context} at line {line} (full row: {row})")]
    StructuralOrder {
        /// Source line number (1-based).
        line: usize,
        /// The tag that jumped too deep.
        tag: String,
        /// Expected-context phrase: "to begin with", "after chapter", or
        /// "after sequential".
        context: &'static str,
        /// The offending row, quoted field by field.
        row: String,
    },
}

/// Convenience type alias for `Result` with `OutlineError`.
pub type Result<T> = std::result::Result<T, OutlineError>;
