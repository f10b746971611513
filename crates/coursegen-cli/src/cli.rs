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

//! CLI argument definitions.
//!
//! All options are a flat configuration consumed by the pipeline; none of
//! them are part of the core's logic. Write vs. test and single vs. tree
//! are paired flags where the second member of each pair is the default,
//! so the flags only exist to be explicit on the command line.

use clap::Parser;
use std::path::PathBuf;

/// Create an XML course structure from a CSV outline.
#[derive(Parser, Debug)]
#[command(
    name = "coursegen",
    author,
    version,
    about = "Create an XML course structure from a CSV outline",
    long_about = None
)]
pub struct Args {
    /// CSV file to read the structure from
    pub csv_file: PathBuf,

    /// Test only (do not write files)
    #[arg(short = 't', long = "test", conflicts_with = "write")]
    pub test: bool,

    /// Write the XML structure (default)
    #[arg(short = 'w', long = "write")]
    pub write: bool,

    /// Write a single XML file
    #[arg(short = 's', long = "single", conflicts_with = "tree")]
    pub single: bool,

    /// Write out an XML tree of files (default)
    #[arg(short = 'T', long = "tree")]
    pub tree: bool,

    /// Set the output directory
    #[arg(short = 'l', long = "location", default_value = ".")]
    pub location: PathBuf,

    /// Set the root file name
    #[arg(short = 'o', long = "filename", default_value = "course.xml")]
    pub filename: String,

    /// Print counts of each item
    #[arg(short = 'c', long = "counts")]
    pub counts: bool,

    /// Clear all output directories before writing (only for tree writes)
    #[arg(long = "clean")]
    pub clean: bool,

    /// Print the structure map to screen
    #[arg(short = 'm', long = "map")]
    pub map: bool,
}

impl Args {
    /// Whether files should be written at all.
    pub fn write_enabled(&self) -> bool {
        !self.test
    }

    /// Whether to write the multi-file tree rather than one document.
    pub fn tree_enabled(&self) -> bool {
        !self.single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_write_and_tree() {
        let args = Args::parse_from(["coursegen", "outline.csv"]);
        assert!(args.write_enabled());
        assert!(args.tree_enabled());
        assert_eq!(args.location, PathBuf::from("."));
        assert_eq!(args.filename, "course.xml");
        assert!(!args.counts);
        assert!(!args.clean);
        assert!(!args.map);
    }

    #[test]
    fn test_test_mode_disables_writing() {
        let args = Args::parse_from(["coursegen", "outline.csv", "--test"]);
        assert!(!args.write_enabled());
    }

    #[test]
    fn test_single_mode() {
        let args = Args::parse_from(["coursegen", "outline.csv", "-s"]);
        assert!(!args.tree_enabled());
    }

    #[test]
    fn test_conflicting_write_flags_rejected() {
        assert!(Args::try_parse_from(["coursegen", "outline.csv", "-t", "-w"]).is_err());
        assert!(Args::try_parse_from(["coursegen", "outline.csv", "-s", "-T"]).is_err());
    }

    #[test]
    fn test_location_and_filename() {
        let args = Args::parse_from([
            "coursegen",
            "outline.csv",
            "-l",
            "/tmp/out",
            "-o",
            "root.xml",
        ]);
        assert_eq!(args.location, PathBuf::from("/tmp/out"));
        assert_eq!(args.filename, "root.xml");
    }
}
