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

//! The name auditor: post-construction scan for naming anomalies.
//!
//! Runs after identifiers have been resolved into names, so generated and
//! explicit names are audited alike. The root's seeded name participates.
//! All findings are advisory: anomalous names are written to output
//! regardless.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use coursegen_core::{walk, Node, Outline, OutlineVisitor};
use std::collections::HashMap;
use std::convert::Infallible;

#[derive(Default)]
struct NameCollector {
    /// Unique names in first-seen traversal order.
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl OutlineVisitor for NameCollector {
    type Error = Infallible;

    fn enter(&mut self, node: &Node) -> Result<(), Self::Error> {
        let count = self.counts.entry(node.url_name.clone()).or_insert(0);
        if *count == 0 {
            self.order.push(node.url_name.clone());
        }
        *count += 1;
        Ok(())
    }
}

/// Audit every node name in the outline.
///
/// Emits one warning per name containing a space and one per name that
/// occurs on more than one node (with the occurrence count). Emission
/// order is deterministic: names in first-seen traversal order, the
/// whitespace finding before the duplicate finding for the same name.
pub fn audit_names(outline: &Outline) -> Vec<Diagnostic> {
    let mut collector = NameCollector::default();
    // The collector is infallible.
    let _ = walk(&outline.root, &mut collector);

    let mut diagnostics = Vec::new();
    for name in &collector.order {
        if name.contains(' ') {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::NameWhitespace,
                format!("The url_name \"{}\" has spaces in it.", name),
            ));
        }
        let count = collector.counts.get(name).copied().unwrap_or(0);
        if count > 1 {
            diagnostics.push(Diagnostic::warning(
                DiagnosticKind::DuplicateName,
                format!("The url_name \"{}\" has {} instances.", name, count),
            ));
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_core::outline;

    fn audit(data: &[&[&str]]) -> Vec<Diagnostic> {
        let records = data
            .iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect();
        audit_names(&outline(records).unwrap())
    }

    #[test]
    fn test_clean_outline_has_no_findings() {
        let diags = audit(&[
            &["chapter", "a"],
            &["sequential", "b"],
            &["chapter", "c"],
        ]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_duplicate_name_reported_once_with_count() {
        let diags = audit(&[
            &["chapter", "dup"],
            &["sequential", "s1"],
            &["chapter", "dup"],
        ]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), &DiagnosticKind::DuplicateName);
        assert_eq!(
            diags[0].message(),
            "The url_name \"dup\" has 2 instances."
        );
    }

    #[test]
    fn test_whitespace_name_reported() {
        let diags = audit(&[&["chapter", "week one"]]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), &DiagnosticKind::NameWhitespace);
        assert_eq!(
            diags[0].message(),
            "The url_name \"week one\" has spaces in it."
        );
    }

    #[test]
    fn test_whitespace_duplicate_gets_both_findings() {
        let diags = audit(&[&["chapter", "week one"], &["chapter", "week one"]]);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].kind(), &DiagnosticKind::NameWhitespace);
        assert_eq!(diags[1].kind(), &DiagnosticKind::DuplicateName);
    }

    #[test]
    fn test_root_name_participates() {
        // A chapter explicitly named "course" collides with the root's
        // seeded name.
        let diags = audit(&[&["chapter", "course"]]);
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message(),
            "The url_name \"course\" has 2 instances."
        );
    }

    #[test]
    fn test_generated_ids_cannot_collide() {
        let diags = audit(&[
            &["chapter"],
            &["chapter"],
            &["chapter"],
        ]);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_explicit_name_matching_generated_pattern_collides() {
        // An explicit "chap-2" collides with the second generated chapter
        // identifier.
        let diags = audit(&[&["chapter", "chap-2"], &["chapter"]]);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message().contains("chap-2"));
    }
}
