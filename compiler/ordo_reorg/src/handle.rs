//! Member handles and the per-run node arena.
//!
//! Handles are the small records the stages sort and relabel. The
//! syntax nodes themselves live in a [`NodeArena`]; a handle refers to its
//! node by [`NodeId`], so an edit swaps one arena slot for a freshly built
//! node and the sorted handle lists never need updating.

use crate::classify::Classification;
use crate::kind::{MemberKind, Section};
use crate::ReorganizeError;
use ordo_ir::{MemberNode, Name};
use std::fmt;

/// Index into the node arena. Equal to the member's original position.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Owns the member nodes for one reorganization pass.
pub struct NodeArena {
    nodes: Vec<MemberNode>,
}

impl NodeArena {
    /// Take ownership of the members in original order.
    pub fn new(nodes: Vec<MemberNode>) -> Self {
        NodeArena { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids and nodes in original order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MemberNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MemberNode {
        &self.nodes[id.0]
    }

    /// Swap in an edited node.
    #[inline]
    pub fn replace(&mut self, id: NodeId, node: MemberNode) {
        self.nodes[id.0] = node;
    }

    /// Emit the nodes in the given order.
    ///
    /// Every node must be named exactly once; otherwise the pass fails
    /// instead of returning a body with missing or repeated members.
    pub fn into_ordered(
        self,
        order: impl IntoIterator<Item = NodeId>,
    ) -> Result<Vec<MemberNode>, ReorganizeError> {
        let expected = self.nodes.len();
        let mut slots: Vec<Option<MemberNode>> = self.nodes.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(expected);
        let mut named = 0;

        for id in order {
            named += 1;
            if let Some(node) = slots.get_mut(id.0).and_then(Option::take) {
                ordered.push(node);
            }
        }

        if ordered.len() != expected || named != expected {
            return Err(ReorganizeError::CardinalityMismatch {
                expected,
                actual: ordered.len(),
            });
        }
        Ok(ordered)
    }
}

/// Classifier output plus grouping for one member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberHandle {
    pub node: NodeId,
    pub kind: MemberKind,
    pub access_rank: u8,
    pub name: Name,
    /// Section-annotation text carried directly by this member.
    pub label: Option<Name>,
    pub group_id: u32,
}

impl MemberHandle {
    pub fn new(node: NodeId, classification: Classification, group_id: u32) -> Self {
        MemberHandle {
            node,
            kind: classification.kind,
            access_rank: classification.access_rank,
            name: classification.name,
            label: classification.label,
            group_id,
        }
    }

    #[inline]
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    #[inline]
    pub fn section(&self) -> Section {
        self.kind.section()
    }

    /// Position of the member in the input sequence.
    #[inline]
    pub fn original_index(&self) -> usize {
        self.node.index()
    }
}
