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

//! Tabular rows and the row normalizer.
//!
//! The normalizer is the first pipeline stage. It has no error conditions:
//! malformed rows are either filtered here or passed through for the
//! validator to catch.

/// A cleaned tabular row.
///
/// After normalization the first field is the lower-cased type tag and is
/// guaranteed non-empty; the remaining fields are positional
/// (`explicit name`, `display name`, extras).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Source line number (1-based), for error reporting.
    pub line: usize,
    /// Trimmed fields with leading and trailing empties removed.
    pub fields: Vec<String>,
}

impl Row {
    /// The type tag field.
    pub fn tag(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// The row rendered as quoted comma-separated fields, for error
    /// messages.
    pub fn quoted(&self) -> String {
        let parts: Vec<String> = self.fields.iter().map(|f| format!("\"{}\"", f)).collect();
        parts.join(", ")
    }
}

/// Normalize raw records into rows.
///
/// For each record: trim every field, drop leading and trailing empty
/// fields (interior empty fields are kept, they are positional), discard
/// records that end up empty, discard comment records (first field starts
/// with `#`), and lower-case the type tag.
///
/// Line numbers are assigned from the record position, 1-based.
///
/// # Examples
///
/// ```
/// use coursegen_core::normalize;
///
/// let rows = normalize(vec![
///     vec!["  Chapter ".to_string(), "".to_string(), "Week 1".to_string()],
///     vec!["# a comment".to_string()],
///     vec!["".to_string(), "".to_string()],
/// ]);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].tag(), "chapter");
/// assert_eq!(rows[0].fields, vec!["chapter", "", "Week 1"]);
/// ```
pub fn normalize(records: Vec<Vec<String>>) -> Vec<Row> {
    let mut rows = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let mut fields: Vec<String> = record
            .into_iter()
            .map(|f| f.trim().to_string())
            .collect();

        match fields.iter().position(|f| !f.is_empty()) {
            Some(start) => {
                fields.drain(..start);
            }
            // Every field empty: discard the record.
            None => continue,
        }
        while fields.last().map(String::as_str) == Some("") {
            fields.pop();
        }

        if fields[0].starts_with('#') {
            continue;
        }
        fields[0] = fields[0].to_lowercase();
        rows.push(Row {
            line: index + 1,
            fields,
        });
    }
    rows
}
