//! Section table: members split by section, emitted in canonical order.

use crate::handle::MemberHandle;
use crate::kind::Section;

/// Members bucketed by output section.
pub struct SectionTable {
    sections: [Vec<MemberHandle>; Section::COUNT],
}

impl SectionTable {
    /// Bucket handles by section, keeping their relative order.
    pub fn distribute(handles: impl IntoIterator<Item = MemberHandle>) -> Self {
        let mut sections: [Vec<MemberHandle>; Section::COUNT] = std::array::from_fn(|_| Vec::new());
        for handle in handles {
            sections[handle.section().index()].push(handle);
        }
        SectionTable { sections }
    }

    /// Sections in emission order with their members.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Section, &mut Vec<MemberHandle>)> {
        Section::ORDER.into_iter().zip(self.sections.iter_mut())
    }

    pub fn section(&self, section: Section) -> &[MemberHandle] {
        &self.sections[section.index()]
    }

    /// Concatenate all sections in canonical order.
    pub fn assemble(self) -> Vec<MemberHandle> {
        self.sections.into_iter().flatten().collect()
    }
}
