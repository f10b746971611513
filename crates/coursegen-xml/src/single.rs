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

//! Single-document renderer: the whole outline as one nested XML file.
//!
//! Tags are hand-formatted rather than built through an XML writer: extra
//! attribute strings are emitted verbatim, and callers are responsible for
//! supplying already-escaped content.

use crate::error::Result;
use coursegen_core::{walk, Node, Outline, OutlineVisitor};
use std::io::{self, Write};

/// Indentation unit, repeated per depth level. Purely cosmetic.
pub const INDENT: &str = "    ";

struct SingleDoc<'a, W: Write> {
    out: &'a mut W,
}

impl<W: Write> OutlineVisitor for SingleDoc<'_, W> {
    type Error = io::Error;

    fn enter(&mut self, node: &Node) -> io::Result<()> {
        let pad = INDENT.repeat(node.depth());
        if node.depth() == 0 {
            writeln!(self.out, "<{}>", node.item_type.tag())
        } else if node.is_leaf() {
            writeln!(
                self.out,
                "{}<{} url_name=\"{}\" />",
                pad,
                node.item_type.tag(),
                node.url_name
            )
        } else {
            writeln!(
                self.out,
                "{}<{} url_name=\"{}\" display_name=\"{}\"{}>",
                pad,
                node.item_type.tag(),
                node.url_name,
                node.display_name,
                node.extra_text()
            )
        }
    }

    fn leave(&mut self, node: &Node) -> io::Result<()> {
        if node.is_leaf() {
            return Ok(());
        }
        writeln!(
            self.out,
            "{}</{}>",
            INDENT.repeat(node.depth()),
            node.item_type.tag()
        )
    }
}

/// Write the outline as one nested document.
///
/// The root emits a bare opening tag; depth 1-3 nodes carry `url_name`,
/// `display_name`, and the verbatim extras; content items are a single
/// self-closing tag with only `url_name`.
pub fn write_single<W: Write>(outline: &Outline, out: &mut W) -> Result<()> {
    let mut visitor = SingleDoc { out };
    walk(&outline.root, &mut visitor)?;
    Ok(())
}

/// Render the outline as one nested document into a string.
pub fn render_single(outline: &Outline) -> Result<String> {
    let mut buf = Vec::new();
    write_single(outline, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
