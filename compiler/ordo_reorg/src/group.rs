//! Section-annotation group tracking.
//!
//! A label opens a group; unlabeled field members that follow join it until
//! the next label. Group ids come from one forward pass over the original
//! declaration order, so sorting afterwards never changes who shares a group.

use crate::classify::Classification;
use crate::GroupScope;

/// Group id of members before the first label.
pub const UNGROUPED: u32 = 0;

/// Scan state: the last id handed out and the group still accepting members.
#[derive(Copy, Clone, Debug, Default)]
struct TrackerState {
    current: u32,
    open: Option<u32>,
}

impl TrackerState {
    fn advance(&mut self, member: &Classification, scope: GroupScope) -> u32 {
        if !member.joins_groups() {
            if scope == GroupScope::FieldRuns {
                self.open = None;
            }
            return UNGROUPED;
        }

        if member.has_label() {
            self.current += 1;
            self.open = Some(self.current);
        }
        self.open.unwrap_or(UNGROUPED)
    }
}

/// Assign a group id to every member, in original order.
///
/// Members that are not declared fields always get [`UNGROUPED`], even when
/// they are filed in a field section. Ids of opened groups start at
/// 1 and increase in source order.
pub fn assign_groups(members: &[Classification], scope: GroupScope) -> Vec<u32> {
    members
        .iter()
        .scan(TrackerState::default(), |state, member| {
            Some(state.advance(member, scope))
        })
        .collect()
}
