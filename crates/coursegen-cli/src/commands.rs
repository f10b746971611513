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

//! The generate command: the full CSV-to-XML pipeline.
//!
//! Ordering matters: validation completes before any side effect, so a bad
//! row can never produce partial output. Reporting (counts, map, naming
//! warnings) happens before writing, matching the advisory nature of the
//! audit — anomalous names are written regardless.

use crate::cli::Args;
use crate::dirs::{ensure_dir, remove_dir, BRANCH_TYPES};
use crate::error::Result;
use crate::input::read_records;
use colored::Colorize;
use coursegen_core::{build, normalize, validate, walk, Counts, ItemType, Node, Outline, OutlineVisitor};
use coursegen_lint::audit_names;
use coursegen_xml::{render_single, write_tree};
use std::convert::Infallible;
use std::fs;

/// Run the whole pipeline according to the parsed arguments.
pub fn generate(args: &Args) -> Result<()> {
    let records = read_records(&args.csv_file)?;
    let rows = normalize(records);
    let entries = validate(rows)?;
    let outline = build(entries);
    println!("Structure read.");

    if args.counts {
        print_counts(&outline.counts);
    }
    if args.map {
        print_map(&outline);
    }

    for diag in audit_names(&outline) {
        println!("{} {}", "Warning:".yellow().bold(), diag.message());
    }

    if !args.write_enabled() {
        return Ok(());
    }

    println!("Writing course structure.");
    if args.tree_enabled() {
        if args.clean {
            for item_type in BRANCH_TYPES {
                remove_dir(&args.location, item_type)?;
            }
        }
        for item_type in BRANCH_TYPES {
            if outline.counts.get(item_type) > 0 {
                ensure_dir(&args.location, item_type)?;
            }
        }
        write_tree(&outline, &args.location, &args.filename)?;
    } else {
        let doc = render_single(&outline)?;
        fs::write(args.location.join(&args.filename), doc)?;
    }
    println!("Structure written.");
    Ok(())
}

fn print_counts(counts: &Counts) {
    println!("Chapters: {}", counts.get(ItemType::Chapter));
    println!("Sequentials: {}", counts.get(ItemType::Sequential));
    println!("Verticals: {}", counts.get(ItemType::Vertical));
    println!("HTMLs: {}", counts.get(ItemType::Html));
    println!("Videos: {}", counts.get(ItemType::Video));
    println!("Problems: {}", counts.get(ItemType::Problem));
}

struct MapPrinter;

impl OutlineVisitor for MapPrinter {
    type Error = Infallible;

    fn enter(&mut self, node: &Node) -> std::result::Result<(), Self::Error> {
        println!(
            "{}{}: {}",
            "    ".repeat(node.depth()),
            node.item_type.tag(),
            node.display_name
        );
        Ok(())
    }
}

fn print_map(outline: &Outline) {
    println!("Content Map:");
    let _ = walk(&outline.root, &mut MapPrinter);
}
