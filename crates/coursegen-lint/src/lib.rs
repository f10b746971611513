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

//! Naming audit for coursegen outlines.
//!
//! Scans a built outline for naming anomalies: names occurring on more
//! than one node, and names with embedded whitespace. Findings are
//! advisory warnings only; they never alter or block output.
//!
//! # Quick Start
//!
//! ```
//! use coursegen_core::outline;
//! use coursegen_lint::audit_names;
//!
//! let out = outline(vec![
//!     vec!["chapter".to_string(), "dup".to_string()],
//!     vec!["chapter".to_string(), "dup".to_string()],
//! ])
//! .unwrap();
//!
//! let diagnostics = audit_names(&out);
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].message().contains("2 instances"));
//! ```

mod audit;
mod diagnostic;

pub use audit::audit_names;
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
