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

//! Pre-order traversal contract over the outline tree.
//!
//! The visitor pattern separates traversal from rendering: the
//! single-document renderer, the name auditor, and the structure-map
//! printer all implement [`OutlineVisitor`] while [`walk`] owns the
//! recursion. Depth is bounded by the five-level taxonomy, so recursion
//! depth is never a concern.

use crate::node::Node;

/// Visitor over outline nodes in pre-order.
pub trait OutlineVisitor {
    type Error;

    /// Called before a node's children are visited.
    fn enter(&mut self, node: &Node) -> Result<(), Self::Error>;

    /// Called after a node's children are visited. Defaults to a no-op.
    fn leave(&mut self, node: &Node) -> Result<(), Self::Error> {
        let _ = node;
        Ok(())
    }
}

/// Walk `node` and its descendants, calling `enter` before and `leave`
/// after each node's children.
pub fn walk<V: OutlineVisitor>(node: &Node, visitor: &mut V) -> Result<(), V::Error> {
    visitor.enter(node)?;
    for child in &node.children {
        walk(child, visitor)?;
    }
    visitor.leave(node)
}
