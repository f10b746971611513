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

//! Building the outline tree from validated entries.
//!
//! The builder tracks the last open node at each depth as a stack it owns:
//! `open[i]` is the currently open node at depth `i + 1`, the root is held
//! separately. A new node at depth `d` closes everything deeper than
//! `d - 1` into its parent, then opens at `d`. A new sibling scope at some
//! depth therefore supersedes the previous node at that depth, exactly the
//! "last node at each depth" cursor array.

use crate::node::{Counts, Node, Outline};
use crate::taxonomy::ItemType;
use crate::validate::Entry;

/// Build the outline tree.
///
/// The root is synthesized rather than parsed from a row; an explicit
/// course row, when present, only refines the root's name and display
/// fields. Each built node increments its counter slot and receives its
/// identifier from the post-increment value, so identifiers are unique and
/// deterministic by construction.
pub fn build(entries: Vec<Entry>) -> Outline {
    let mut counts = Counts::seeded();
    let mut root = Node::root();
    let mut open: Vec<Node> = Vec::new();

    for entry in entries {
        if entry.item_type == ItemType::Course {
            close_to(&mut root, &mut open, 0);
            root.absorb(entry);
            continue;
        }

        let depth = entry.item_type.depth();
        close_to(&mut root, &mut open, depth - 1);

        let mut node = Node::new(entry);
        let count = counts.record(node.item_type);
        node.assign_identifier(count);
        open.push(node);
    }

    close_to(&mut root, &mut open, 0);
    Outline { root, counts }
}

/// Close open nodes until only `keep` non-root ancestors remain, attaching
/// each closed node to its parent in input order.
fn close_to(root: &mut Node, open: &mut Vec<Node>, keep: usize) {
    while open.len() > keep {
        if let Some(node) = open.pop() {
            match open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => root.children.push(node),
            }
        }
    }
}
