//! Ordering within a section.
//!
//! Keys, most significant first:
//! 1. access rank, most visible first
//! 2. group id, in source order of the groups (group-sorted sections only)
//! 3. exposed fields before plain fields (instance field section only)
//! 4. name, ordinal
//! 5. label carriers before unlabeled members (field sections only)
//!
//! The sort is stable, so members equal on every key keep source order.

use crate::handle::MemberHandle;
use crate::kind::{MemberKind, Section};
use ordo_ir::StringLookup;
use std::cmp::Ordering;

/// Sort one section's members in place.
pub fn sort_section<I: StringLookup>(section: Section, members: &mut [MemberHandle], interner: &I) {
    members.sort_by(|a, b| compare_members(section, a, b, interner));
}

fn compare_members<I: StringLookup>(
    section: Section,
    a: &MemberHandle,
    b: &MemberHandle,
    interner: &I,
) -> Ordering {
    let by_access = a.access_rank.cmp(&b.access_rank);
    if !section.sorts_by_group() {
        return by_access.then_with(|| compare_names(a, b, interner));
    }

    by_access
        .then_with(|| a.group_id.cmp(&b.group_id))
        .then_with(|| exposure_order(a).cmp(&exposure_order(b)))
        .then_with(|| compare_names(a, b, interner))
        .then_with(|| {
            if section.is_field_section() {
                // Carriers first
                b.has_label().cmp(&a.has_label())
            } else {
                Ordering::Equal
            }
        })
}

/// Byte-wise comparison of the names, which is ordinal for UTF-8.
fn compare_names<I: StringLookup>(a: &MemberHandle, b: &MemberHandle, interner: &I) -> Ordering {
    interner.lookup(a.name).cmp(interner.lookup(b.name))
}

#[inline]
fn exposure_order(member: &MemberHandle) -> u8 {
    u8::from(member.kind != MemberKind::ExposedField)
}
