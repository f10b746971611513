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

//! Property-based tests over generated valid row sequences.

use coursegen_core::{outline, Node};
use proptest::prelude::*;

/// Generate structurally valid row sequences: each step picks a depth in
/// `1..=min(previous + 1, 4)`, so the nesting grammar holds by
/// construction.
fn valid_records() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        (any::<u8>(), any::<u8>(), prop::option::of("[a-z]{1,8}")),
        0..40,
    )
    .prop_map(|steps| {
        let mut records = Vec::new();
        let mut depth = 0usize;
        for (d, kind, name) in steps {
            let ceiling = (depth + 1).min(4);
            let new_depth = (d as usize % ceiling) + 1;
            let tag = match new_depth {
                1 => "chapter",
                2 => "sequential",
                3 => "vertical",
                _ => ["html", "video", "problem"][kind as usize % 3],
            };
            let mut record = vec![tag.to_string()];
            if let Some(name) = name {
                record.push(name);
            }
            records.push(record);
            depth = new_depth;
        }
        records
    })
}

fn check_depths(node: &Node) {
    for child in &node.children {
        assert_eq!(child.depth(), node.depth() + 1);
        check_depths(child);
    }
    if node.is_leaf() {
        assert!(node.children.is_empty());
    }
}

fn check_names(node: &Node) {
    if let Some(id) = node.id() {
        assert!(!id.is_empty());
        assert!(!node.url_name.is_empty());
    }
    for child in &node.children {
        check_names(child);
    }
}

fn count_nodes(node: &Node) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

proptest! {
    #[test]
    fn prop_valid_sequences_always_build(records in valid_records()) {
        let out = outline(records).unwrap();
        check_depths(&out.root);
        check_names(&out.root);
    }

    #[test]
    fn prop_rebuild_is_identical(records in valid_records()) {
        let first = outline(records.clone()).unwrap();
        let second = outline(records).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_every_row_becomes_exactly_one_node(records in valid_records()) {
        let rows = records.len();
        let out = outline(records).unwrap();
        // Every generated record is valid and non-empty, so the tree holds
        // the root plus one node per row.
        prop_assert_eq!(count_nodes(&out.root), rows + 1);
    }
}
