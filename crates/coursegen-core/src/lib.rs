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

//! Core data model and outline builder for coursegen.
//!
//! This crate turns a flat tabular description of a course outline into a
//! rooted tree with deterministic identifiers. The pipeline is strictly
//! one-directional:
//!
//! ```text
//! raw records → normalize → validate → build → Outline
//! ```
//!
//! - [`normalize`] trims and filters raw field lists into [`Row`]s.
//! - [`validate`] enforces the nesting grammar (depth may grow by at most
//!   one level per row) and resolves tags into typed [`Entry`]s.
//! - [`build`] constructs the [`Outline`]: a rooted [`Node`] tree plus the
//!   final per-type [`Counts`], assigning generated identifiers to nodes
//!   that lack an explicit name.
//!
//! Validation is eager and fail-fast: a single bad row aborts the run
//! before any tree exists, so callers can rely on never producing partial
//! output. Renderers and auditors consume the finished tree through the
//! [`OutlineVisitor`] traversal contract.
//!
//! # Examples
//!
//! ```
//! use coursegen_core::{outline, ItemType};
//!
//! let records = vec![
//!     vec!["course".to_string()],
//!     vec!["chapter".to_string(), "".to_string(), "Ch One".to_string()],
//!     vec!["sequential".to_string()],
//!     vec!["vertical".to_string()],
//!     vec!["html".to_string(), "".to_string(), "Page".to_string()],
//! ];
//!
//! let outline = outline(records).unwrap();
//! let chapter = &outline.root.children[0];
//! assert_eq!(chapter.url_name, "chap-1");
//! assert_eq!(chapter.children[0].children[0].children[0].url_name, "html-1");
//! assert_eq!(outline.counts.get(ItemType::Chapter), 1);
//! assert_eq!(outline.counts.get(ItemType::Html), 1);
//! ```

mod builder;
mod error;
mod node;
mod row;
mod taxonomy;
mod traverse;
mod validate;

// Re-export public API
pub use builder::build;
pub use error::{OutlineError, Result};
pub use node::{Counts, Node, Outline};
pub use row::{normalize, Row};
pub use taxonomy::{ItemType, LEAF_DEPTH, SLOT_COUNT};
pub use traverse::{walk, OutlineVisitor};
pub use validate::{validate, Entry};

/// Run the full pipeline: normalize, validate, and build in one call.
///
/// # Errors
///
/// Returns the first [`OutlineError`] raised by validation; nothing is
/// built in that case.
pub fn outline(records: Vec<Vec<String>>) -> Result<Outline> {
    let rows = normalize(records);
    let entries = validate(rows)?;
    Ok(build(entries))
}
