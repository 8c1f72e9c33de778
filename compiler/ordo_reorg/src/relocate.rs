//! Section label relocation.
//!
//! After sorting, the member that opens a group visually may no longer be the
//! one that carried the group's section-annotation in source. The label is
//! moved onto the group's new first member so the header still sits above the
//! whole group.

use crate::group::UNGROUPED;
use crate::handle::{MemberHandle, NodeArena};
use crate::kind::Section;
use crate::ReorganizeConfig;
use ordo_ir::{MemberNode, StringInterner, Trivia, TriviaList};
use rustc_hash::FxHashSet;

/// Move each group's label onto the group's first member.
///
/// `members` is one sorted field section. Returns the number of labels moved.
pub fn relocate_labels(
    section: Section,
    members: &mut [MemberHandle],
    arena: &mut NodeArena,
    interner: &StringInterner,
    config: &ReorganizeConfig,
) -> usize {
    debug_assert!(section.is_field_section());

    let mut relocated = 0;
    for (group_id, leader) in group_leaders(members) {
        if group_id == UNGROUPED {
            continue;
        }
        let Some(carrier) = members
            .iter()
            .position(|m| m.group_id == group_id && m.has_label())
        else {
            continue;
        };
        if carrier != leader && move_label(members, carrier, leader, arena, interner, config) {
            relocated += 1;
        }
    }
    relocated
}

/// Each group id in `members` with the index of its first member, in order of
/// first appearance.
pub(crate) fn group_leaders(members: &[MemberHandle]) -> Vec<(u32, usize)> {
    let mut seen = FxHashSet::default();
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| seen.insert(m.group_id))
        .map(|(index, m)| (m.group_id, index))
        .collect()
}

fn move_label(
    members: &mut [MemberHandle],
    carrier: usize,
    leader: usize,
    arena: &mut NodeArena,
    interner: &StringInterner,
    config: &ReorganizeConfig,
) -> bool {
    let carrier_id = members[carrier].node;
    let leader_id = members[leader].node;

    let Some((stripped, attribute)) = arena
        .get(carrier_id)
        .without_attribute(interner, &config.section_attribute)
    else {
        tracing::warn!(?carrier_id, "label carrier has no section attribute");
        return false;
    };

    // A leader's own section attribute without a literal is not a label;
    // the moved label replaces it.
    let leader_node = arena.get(leader_id);
    let leader_base = leader_node
        .without_attribute(interner, &config.section_attribute)
        .map_or_else(|| leader_node.clone(), |(base, _)| base);
    let labeled =
        leader_base.with_attribute_prepended(attribute, own_line_trivia(&leader_base, interner));

    arena.replace(carrier_id, stripped);
    arena.replace(leader_id, labeled);
    members[leader].label = members[carrier].label.take();

    tracing::trace!(
        from = interner.lookup(members[carrier].name),
        to = interner.lookup(members[leader].name),
        "relocated section label"
    );
    true
}

/// A line break followed by the node's indentation, so an inserted attribute
/// list sits on its own line above the member.
fn own_line_trivia(node: &MemberNode, interner: &StringInterner) -> TriviaList {
    let mut trivia = TriviaList::new();
    trivia.push(line_break(node, interner));
    if let Some(indent) = node.indentation() {
        trivia.push(indent);
    }
    trivia
}

/// The line break style already used by `node`, or `\n`.
pub(crate) fn line_break(node: &MemberNode, interner: &StringInterner) -> Trivia {
    node.line_break()
        .unwrap_or_else(|| Trivia::end_of_line(interner.intern("\n")))
}
