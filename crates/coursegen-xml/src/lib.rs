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

//! XML rendering for coursegen outlines.
//!
//! Two independent renderers over the same finished tree:
//!
//! - [`write_single`] / [`render_single`]: one combined document with the
//!   whole hierarchy nested inline.
//! - [`write_tree`]: one file per branch node, filed under a subdirectory
//!   named for its type tag, with children referenced by self-closing link
//!   stubs instead of being inlined.
//!
//! The renderers share the tree-traversal contract from `coursegen-core`
//! but no formatting code: the two output shapes diverge structurally
//! (inline nesting vs. per-file link stubs), and keeping them as separate
//! strategies avoids contorting either around the other.
//!
//! # Examples
//!
//! ```
//! use coursegen_core::outline;
//! use coursegen_xml::render_single;
//!
//! let out = outline(vec![
//!     vec!["chapter".to_string(), "".to_string(), "Week 1".to_string()],
//! ])
//! .unwrap();
//!
//! let doc = render_single(&out).unwrap();
//! assert!(doc.contains("<chapter url_name=\"chap-1\" display_name=\"Week 1\">"));
//! ```

mod error;
mod single;
mod tree;

// Re-export public API
pub use error::{RenderError, Result};
pub use single::{render_single, write_single, INDENT};
pub use tree::write_tree;
