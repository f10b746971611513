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

//! Output directory management for tree writes.
//!
//! Keyed by type tag: each branch type gets one subdirectory under the
//! output location, created lazily only when the outline actually contains
//! nodes of that type.

use coursegen_core::ItemType;
use std::fs;
use std::io;
use std::path::Path;

/// The types that own a subdirectory in tree mode. Content items are
/// inlined into their parent's file and never get one.
pub const BRANCH_TYPES: [ItemType; 4] = [
    ItemType::Course,
    ItemType::Chapter,
    ItemType::Sequential,
    ItemType::Vertical,
];

/// Create the subdirectory for `item_type` if it does not exist yet.
pub fn ensure_dir(location: &Path, item_type: ItemType) -> io::Result<()> {
    let path = location.join(item_type.tag());
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

/// Remove the subdirectory for `item_type` if it exists.
pub fn remove_dir(location: &Path, item_type: ItemType) -> io::Result<()> {
    let path = location.join(item_type.tag());
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        ensure_dir(dir.path(), ItemType::Chapter).unwrap();
        ensure_dir(dir.path(), ItemType::Chapter).unwrap();
        assert!(dir.path().join("chapter").is_dir());
    }

    #[test]
    fn test_remove_clears_contents() {
        let dir = tempfile::tempdir().unwrap();
        let chapter = dir.path().join("chapter");
        fs::create_dir(&chapter).unwrap();
        fs::write(chapter.join("stale.xml"), "<chapter>\n</chapter>\n").unwrap();

        remove_dir(dir.path(), ItemType::Chapter).unwrap();
        assert!(!chapter.exists());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_dir(dir.path(), ItemType::Vertical).is_ok());
    }
}
