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

//! Multi-file tree renderer: one file per branch node, children referenced
//! by link stubs.
//!
//! Every non-leaf node becomes a file in a subdirectory named after its
//! type tag. A parent file lists each child as a single self-closing
//! reference line: for content items that line is the child's complete
//! rendering, for branch children it links to the child's own file. The
//! renderer assumes the per-type subdirectories already exist; creating
//! them (only for types that occur) is the caller's concern.
//!
//! Files are written one at a time with no rollback: if a later node fails
//! to serialize, files already on disk remain.

use crate::error::Result;
use coursegen_core::{Node, Outline};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write the outline as a file tree under `location`.
///
/// The root file is named by the caller (it still lives under the
/// `course/` subdirectory); descendant files are named
/// `<url_name>.xml` under their own type-tag subdirectory. Returns the
/// paths written, in creation order.
pub fn write_tree(outline: &Outline, location: &Path, root_filename: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    write_branch(&outline.root, location, Some(root_filename), &mut written)?;
    Ok(written)
}

fn write_branch(
    node: &Node,
    location: &Path,
    filename: Option<&str>,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let filename = match filename {
        Some(name) => name.to_string(),
        None => format!("{}.xml", node.url_name),
    };
    let path = location.join(node.item_type.tag()).join(filename);

    let mut out = BufWriter::new(File::create(&path)?);
    if node.depth() == 0 {
        writeln!(out, "<{}>", node.item_type.tag())?;
    } else {
        writeln!(
            out,
            "<{} display_name=\"{}\"{}>",
            node.item_type.tag(),
            node.display_name,
            node.extra_text()
        )?;
    }
    for child in &node.children {
        writeln!(
            out,
            "    <{} url_name=\"{}\" />",
            child.item_type.tag(),
            child.url_name
        )?;
    }
    writeln!(out, "</{}>", node.item_type.tag())?;
    out.flush()?;
    written.push(path);

    for child in &node.children {
        if !child.is_leaf() {
            write_branch(child, location, None, written)?;
        }
    }
    Ok(())
}
