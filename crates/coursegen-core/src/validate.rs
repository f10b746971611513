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

//! Structural validation of normalized rows.
//!
//! A single left-to-right pass with one scalar of state is sufficient
//! because the hierarchy is a simple nested-scope grammar: depth may
//! increase by at most one level per row and decrease arbitrarily.

use crate::error::{OutlineError, Result};
use crate::row::Row;
use crate::taxonomy::ItemType;

/// Expected-context phrases, indexed by the depth preceding the offending
/// row. A jump can only originate from depths 0-2: from depth 3 every
/// recognized tag is reachable.
const CONTEXTS: [&str; 3] = ["to begin with", "after chapter", "after sequential"];

/// A validated row with its tag resolved against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Resolved item type.
    pub item_type: ItemType,
    /// Explicit name, possibly empty. Positional field 2.
    pub url_name: String,
    /// Display name, possibly empty. Positional field 3.
    pub display_name: String,
    /// Remaining fields, rendered verbatim as trailing attribute text.
    pub extras: Vec<String>,
    /// Source line number (1-based).
    pub line: usize,
}

impl Entry {
    fn from_row(item_type: ItemType, row: Row) -> Self {
        let Row { line, fields } = row;
        let mut fields = fields.into_iter();
        fields.next(); // the tag, already resolved
        let url_name = fields.next().unwrap_or_default();
        let display_name = fields.next().unwrap_or_default();
        let extras: Vec<String> = fields.collect();
        Self {
            item_type,
            url_name,
            display_name,
            extras,
            line,
        }
    }
}

/// Validate normalized rows, resolving each tag against the taxonomy.
///
/// Fails fast on the first unrecognized tag or structural-order violation;
/// no partial result is produced. Depth decreases of any size are
/// permitted, so a depth-4 content item may be followed directly by a new
/// chapter.
///
/// # Errors
///
/// [`OutlineError::UnknownTag`] if a tag is not in the recognized set,
/// [`OutlineError::StructuralOrder`] if a row nests more than one level
/// deeper than the preceding row.
pub fn validate(rows: Vec<Row>) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(rows.len());
    let mut current_depth = 0usize;

    for row in rows {
        let item_type = match ItemType::parse(row.tag()) {
            Some(t) => t,
            None => {
                return Err(OutlineError::UnknownTag {
                    line: row.line,
                    tag: row.tag().to_string(),
                    row: row.quoted(),
                })
            }
        };
        if item_type.depth() > current_depth + 1 {
            return Err(OutlineError::StructuralOrder {
                line: row.line,
                tag: row.tag().to_string(),
                context: CONTEXTS[current_depth],
                row: row.quoted(),
            });
        }
        current_depth = item_type.depth();
        entries.push(Entry::from_row(item_type, row));
    }

    Ok(entries)
}
