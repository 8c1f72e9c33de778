//! The reorganization pass.
//!
//! classify → track groups → distribute into sections → sort → relocate
//! labels → space groups → assemble.

use crate::assemble::SectionTable;
use crate::classify::{classify_member, Classification};
use crate::group::assign_groups;
use crate::handle::{MemberHandle, NodeArena};
use crate::relocate::relocate_labels;
use crate::sort::sort_section;
use crate::spacing::separate_exposed_fields;
use crate::{ReorganizeConfig, ReorganizeError};
use ordo_ir::{MemberNode, StringInterner};

/// What a pass changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReorganizeReport {
    /// Some member ended up at a different position.
    pub order_changed: bool,
    /// Section labels moved onto a new group leader.
    pub labels_relocated: usize,
    /// Blank lines inserted after a group's exposed fields.
    pub separators_inserted: usize,
}

impl ReorganizeReport {
    /// Returns true if the pass left the body exactly as it was.
    pub fn is_unchanged(&self) -> bool {
        !self.order_changed && self.labels_relocated == 0 && self.separators_inserted == 0
    }
}

/// Reorganized members with a summary of the edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reorganized {
    pub members: Vec<MemberNode>,
    pub report: ReorganizeReport,
}

/// Reorder the direct members of one type body into canonical order.
///
/// The result holds exactly the input members, in canonical order, with
/// section labels and group spacing adjusted. Fails without a partial result
/// if a node is not a type member at all.
pub fn reorganize(
    members: Vec<MemberNode>,
    interner: &StringInterner,
    config: &ReorganizeConfig,
) -> Result<Vec<MemberNode>, ReorganizeError> {
    reorganize_with_report(members, interner, config).map(|reorganized| reorganized.members)
}

/// Like [`reorganize`], also reporting what changed.
#[tracing::instrument(level = "debug", skip_all, fields(members = members.len()))]
pub fn reorganize_with_report(
    members: Vec<MemberNode>,
    interner: &StringInterner,
    config: &ReorganizeConfig,
) -> Result<Reorganized, ReorganizeError> {
    if let Some((index, node)) = members
        .iter()
        .enumerate()
        .find(|(_, node)| !node.shape.is_member())
    {
        return Err(ReorganizeError::NotAMember {
            index,
            shape: node.shape,
        });
    }

    let mut arena = NodeArena::new(members);
    let classifications: Vec<Classification> = arena
        .iter()
        .map(|(_, node)| classify_member(node, interner, config))
        .collect();
    let group_ids = assign_groups(&classifications, config.group_scope);

    let handles: Vec<MemberHandle> = arena
        .iter()
        .zip(classifications)
        .zip(group_ids)
        .map(|(((id, _), classification), group_id)| {
            MemberHandle::new(id, classification, group_id)
        })
        .collect();
    let mut table = SectionTable::distribute(handles);

    let mut report = ReorganizeReport::default();
    for (section, handles) in table.iter_mut() {
        sort_section(section, handles, interner);
        if !section.is_field_section() {
            continue;
        }
        report.labels_relocated +=
            relocate_labels(section, handles, &mut arena, interner, config);
        if config.separate_exposed_groups {
            report.separators_inserted += separate_exposed_fields(handles, &mut arena, interner);
        }
    }

    let order = table.assemble();
    report.order_changed = order
        .iter()
        .enumerate()
        .any(|(position, handle)| handle.original_index() != position);

    tracing::debug!(
        order_changed = report.order_changed,
        labels_relocated = report.labels_relocated,
        separators_inserted = report.separators_inserted,
        "reorganized type body"
    );

    let members = arena.into_ordered(order.iter().map(|handle| handle.node))?;
    Ok(Reorganized { members, report })
}
