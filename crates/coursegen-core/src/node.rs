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

//! Outline tree nodes, per-type counters, and the built outline.

use crate::taxonomy::{ItemType, SLOT_COUNT};
use crate::validate::Entry;

/// A node in the outline tree.
///
/// Invariants: a node's depth is exactly one greater than its parent's,
/// except the root (depth 0, no parent); content items (depth 4) never
/// have children; children preserve input order and are owned exclusively
/// by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Resolved item type.
    pub item_type: ItemType,
    /// The node's name as written to output. Filled with the generated
    /// identifier when the row left it empty.
    pub url_name: String,
    /// Display name, possibly empty.
    pub display_name: String,
    /// Extra attribute strings, emitted verbatim after the display name.
    pub extras: Vec<String>,
    /// Child nodes in input order.
    pub children: Vec<Node>,
    /// Generated identifier. Assigned once by the builder, never mutated
    /// after. `None` only for the synthesized root, which does not pass
    /// through the assigner.
    id: Option<String>,
}

impl Node {
    /// Create a node from a validated entry. No identifier yet; the
    /// builder assigns it against the running counters.
    pub fn new(entry: Entry) -> Self {
        Self {
            item_type: entry.item_type,
            url_name: entry.url_name,
            display_name: entry.display_name,
            extras: entry.extras,
            children: Vec::new(),
            id: None,
        }
    }

    /// The synthesized root. The root is seeded with the name "course"
    /// rather than a generated identifier.
    pub fn root() -> Self {
        Self {
            item_type: ItemType::Course,
            url_name: "course".to_string(),
            display_name: String::new(),
            extras: Vec::new(),
            children: Vec::new(),
            id: None,
        }
    }

    /// Structural depth, 0 through 4.
    pub fn depth(&self) -> usize {
        self.item_type.depth()
    }

    /// Whether this node is a content item (never has children).
    pub fn is_leaf(&self) -> bool {
        self.item_type.is_leaf()
    }

    /// The generated identifier, if one was assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The extras as a single space-joined string, prefixed with one
    /// space when non-empty, ready to append to an opening tag.
    pub fn extra_text(&self) -> String {
        if self.extras.is_empty() {
            String::new()
        } else {
            format!(" {}", self.extras.join(" "))
        }
    }

    /// Assign the generated identifier from the post-increment counter
    /// value, and fill in `url_name` iff the row left it empty.
    pub(crate) fn assign_identifier(&mut self, count: usize) {
        debug_assert!(self.id.is_none(), "identifier assigned twice");
        let id = self.item_type.identifier(count);
        if self.url_name.trim().is_empty() {
            self.url_name = id.clone();
        }
        self.id = Some(id);
    }

    /// Merge an explicit course row into the synthesized root. The seeded
    /// name is kept unless the row supplies one.
    pub(crate) fn absorb(&mut self, entry: Entry) {
        if !entry.url_name.trim().is_empty() {
            self.url_name = entry.url_name;
        }
        if !entry.display_name.is_empty() {
            self.display_name = entry.display_name;
        }
        if !entry.extras.is_empty() {
            self.extras = entry.extras;
        }
    }
}

/// Per-type node counters, indexed by counter slot.
///
/// Created fresh per run. Slot 0 is seeded to 1: the synthesized root
/// consumes the course slot implicitly without passing through the
/// identifier assigner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    slots: [usize; SLOT_COUNT],
}

impl Counts {
    /// Fresh counters with the root's course slot already consumed.
    pub(crate) fn seeded() -> Self {
        let mut slots = [0; SLOT_COUNT];
        slots[ItemType::Course.slot()] = 1;
        Self { slots }
    }

    /// Increment the slot for `item_type` and return the post-increment
    /// value, which feeds the identifier assigner.
    pub(crate) fn record(&mut self, item_type: ItemType) -> usize {
        let slot = &mut self.slots[item_type.slot()];
        *slot += 1;
        *slot
    }

    /// Final count for an item type.
    pub fn get(&self, item_type: ItemType) -> usize {
        self.slots[item_type.slot()]
    }
}

/// The built outline: the root node plus the final counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Root node of depth 0.
    pub root: Node,
    /// Final per-type counts, read after the whole tree is built.
    pub counts: Counts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item_type: ItemType, url_name: &str, display_name: &str, extras: &[&str]) -> Entry {
        Entry {
            item_type,
            url_name: url_name.to_string(),
            display_name: display_name.to_string(),
            extras: extras.iter().map(|e| e.to_string()).collect(),
            line: 1,
        }
    }

    #[test]
    fn test_assign_fills_empty_url_name() {
        let mut node = Node::new(entry(ItemType::Chapter, "", "Week 1", &[]));
        node.assign_identifier(1);
        assert_eq!(node.url_name, "chap-1");
        assert_eq!(node.id(), Some("chap-1"));
    }

    #[test]
    fn test_assign_keeps_explicit_url_name() {
        let mut node = Node::new(entry(ItemType::Chapter, "intro", "Week 1", &[]));
        node.assign_identifier(1);
        assert_eq!(node.url_name, "intro");
        // The identifier still exists as a transient value.
        assert_eq!(node.id(), Some("chap-1"));
    }

    #[test]
    fn test_assign_treats_whitespace_name_as_empty() {
        let mut node = Node::new(entry(ItemType::Video, "   ", "", &[]));
        node.assign_identifier(2);
        assert_eq!(node.url_name, "video-2");
    }

    #[test]
    fn test_extra_text_rendering() {
        let node = Node::new(entry(
            ItemType::Sequential,
            "s1",
            "",
            &["start=\"2026-01-01\"", "graded=\"true\""],
        ));
        assert_eq!(node.extra_text(), " start=\"2026-01-01\" graded=\"true\"");

        let bare = Node::new(entry(ItemType::Sequential, "s1", "", &[]));
        assert_eq!(bare.extra_text(), "");
    }

    #[test]
    fn test_root_is_seeded_not_generated() {
        let root = Node::root();
        assert_eq!(root.url_name, "course");
        assert_eq!(root.id(), None);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_absorb_keeps_seed_when_fields_empty() {
        let mut root = Node::root();
        root.absorb(entry(ItemType::Course, "", "", &[]));
        assert_eq!(root.url_name, "course");
        assert_eq!(root.display_name, "");
    }

    #[test]
    fn test_absorb_takes_supplied_fields() {
        let mut root = Node::root();
        root.absorb(entry(ItemType::Course, "2026", "My Course", &["org=\"x\""]));
        assert_eq!(root.url_name, "2026");
        assert_eq!(root.display_name, "My Course");
        assert_eq!(root.extras, vec!["org=\"x\""]);
    }

    #[test]
    fn test_counts_seeding_and_recording() {
        let mut counts = Counts::seeded();
        assert_eq!(counts.get(ItemType::Course), 1);
        assert_eq!(counts.get(ItemType::Chapter), 0);

        assert_eq!(counts.record(ItemType::Chapter), 1);
        assert_eq!(counts.record(ItemType::Chapter), 2);
        assert_eq!(counts.record(ItemType::Video), 1);
        assert_eq!(counts.get(ItemType::Chapter), 2);
        assert_eq!(counts.get(ItemType::Video), 1);
        // The html and problem slots are untouched by video recordings.
        assert_eq!(counts.get(ItemType::Html), 0);
        assert_eq!(counts.get(ItemType::Problem), 0);
    }
}
