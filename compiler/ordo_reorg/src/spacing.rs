//! Blank line after a group's exposed fields.
//!
//! Within a group, exposed fields sort ahead of plain ones. When plain fields
//! follow, the last exposed field gets a blank line after it so the two runs
//! stay visually apart.

use crate::handle::{MemberHandle, NodeArena};
use crate::kind::MemberKind;
use crate::relocate::{group_leaders, line_break};
use ordo_ir::StringInterner;

/// Line breaks that make up one blank line.
const BLANK_LINE_BREAKS: usize = 2;

/// Ensure a blank line follows each group's last exposed field when that
/// field is not the group's last member.
///
/// `members` is one sorted field section. Returns the number of separators
/// inserted.
pub fn separate_exposed_fields(
    members: &[MemberHandle],
    arena: &mut NodeArena,
    interner: &StringInterner,
) -> usize {
    let mut inserted = 0;
    for (group_id, _) in group_leaders(members) {
        let in_group = |m: &MemberHandle| m.group_id == group_id;

        let Some(last) = members.iter().rposition(|m| in_group(m)) else {
            continue;
        };
        let Some(last_exposed) = members
            .iter()
            .rposition(|m| in_group(m) && m.kind == MemberKind::ExposedField)
        else {
            continue;
        };
        if last_exposed == last {
            continue;
        }

        let id = members[last_exposed].node;
        let node = arena.get(id);
        if node.trailing_line_breaks() >= BLANK_LINE_BREAKS {
            continue;
        }

        let spaced = node.with_trailing_trivia(
            node.trailing
                .with_line_breaks_at_least(BLANK_LINE_BREAKS, line_break(node, interner)),
        );
        arena.replace(id, spaced);
        inserted += 1;

        tracing::trace!(
            after = interner.lookup(members[last_exposed].name),
            group_id,
            "inserted group separator"
        );
    }
    inserted
}
