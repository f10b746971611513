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

//! The fixed course taxonomy: type tags, structural depths, and content kinds.
//!
//! The hierarchy has five structural levels. Depth 0 is the course root,
//! depths 1-3 are chapter, sequential, and vertical, and depth 4 holds the
//! three content item types (html, video, problem), distinguished by a
//! secondary kind index.

use std::fmt;

/// Number of counter slots: course, chapter, sequential, vertical, html,
/// video, problem.
pub const SLOT_COUNT: usize = 7;

/// Depth of content items, the deepest level of the hierarchy.
pub const LEAF_DEPTH: usize = 4;

/// A recognized outline item type.
///
/// The mapping from type tag to depth and kind is fixed; there is no
/// runtime-extensible schema.
///
/// # Examples
///
/// ```
/// use coursegen_core::ItemType;
///
/// let t = ItemType::parse("video").unwrap();
/// assert_eq!(t.depth(), 4);
/// assert_eq!(t.kind(), 1);
/// assert_eq!(t.slot(), 5);
/// assert!(t.is_leaf());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Course,
    Chapter,
    Sequential,
    Vertical,
    Html,
    Video,
    Problem,
}

impl ItemType {
    /// Look up a lower-cased type tag. Returns `None` for unrecognized tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "course" => Some(Self::Course),
            "chapter" => Some(Self::Chapter),
            "sequential" => Some(Self::Sequential),
            "vertical" => Some(Self::Vertical),
            "html" => Some(Self::Html),
            "video" => Some(Self::Video),
            "problem" => Some(Self::Problem),
            _ => None,
        }
    }

    /// The textual type tag. Also names the per-type output subdirectory
    /// in tree mode.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Chapter => "chapter",
            Self::Sequential => "sequential",
            Self::Vertical => "vertical",
            Self::Html => "html",
            Self::Video => "video",
            Self::Problem => "problem",
        }
    }

    /// Shorthand used when generating identifiers.
    pub fn short(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Chapter => "chap",
            Self::Sequential => "seq",
            Self::Vertical => "vert",
            Self::Html => "html",
            Self::Video => "video",
            Self::Problem => "problem",
        }
    }

    /// Structural nesting depth, 0 (course) through 4 (content items).
    pub fn depth(self) -> usize {
        match self {
            Self::Course => 0,
            Self::Chapter => 1,
            Self::Sequential => 2,
            Self::Vertical => 3,
            Self::Html | Self::Video | Self::Problem => LEAF_DEPTH,
        }
    }

    /// Secondary index distinguishing the depth-4 content types. Zero for
    /// everything else.
    pub fn kind(self) -> usize {
        match self {
            Self::Video => 1,
            Self::Problem => 2,
            _ => 0,
        }
    }

    /// Counter slot index: `depth + kind`, unique per type.
    pub fn slot(self) -> usize {
        self.depth() + self.kind()
    }

    /// Whether this type is a content item. Content items never have
    /// children.
    pub fn is_leaf(self) -> bool {
        self.depth() == LEAF_DEPTH
    }

    /// Generated identifier for the `count`-th item of this type.
    pub fn identifier(self, count: usize) -> String {
        format!("{}-{}", self.short(), count)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
