//! Member classification.
//!
//! Decides which slot each member goes to, its accessibility rank, the name it
//! sorts by, and the section label it carries. Classification reads the node
//! only; it never edits it.

use crate::kind::MemberKind;
use crate::ReorganizeConfig;
use ordo_ir::{Accessibility, DeclShape, MemberNode, Modifiers, Name, StringLookup};

/// What the classifier learned about one member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: MemberKind,
    /// See [`Accessibility::rank`].
    pub access_rank: u8,
    /// First declared identifier, or empty for members without one.
    pub name: Name,
    /// Literal text of the member's own section-annotation.
    pub label: Option<Name>,
    /// Declared as a field. Members filed as plain fields only by fallback
    /// (indexers, operators, destructors) are not.
    pub field_shaped: bool,
}

impl Classification {
    #[inline]
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// Only declared fields open, join or lead label groups.
    #[inline]
    pub fn joins_groups(&self) -> bool {
        self.field_shaped && self.kind.is_field()
    }
}

/// Classify a single member.
///
/// Total over every shape: anything not recognized is filed as a plain field.
pub fn classify_member<I: StringLookup>(
    node: &MemberNode,
    interner: &I,
    config: &ReorganizeConfig,
) -> Classification {
    let access = node.modifiers.accessibility();
    let name = node.first_identifier().unwrap_or(Name::EMPTY);

    Classification {
        kind: member_kind(node, access, name, interner, config),
        access_rank: access.rank(),
        name,
        label: section_label(node, interner, config),
        field_shaped: node.shape == DeclShape::Field,
    }
}

fn member_kind<I: StringLookup>(
    node: &MemberNode,
    access: Accessibility,
    name: Name,
    interner: &I,
    config: &ReorganizeConfig,
) -> MemberKind {
    match node.shape {
        DeclShape::Field => field_kind(node, interner, config),
        DeclShape::Property => MemberKind::Property,
        DeclShape::Constructor => MemberKind::Constructor,
        DeclShape::Method => {
            if config.is_lifecycle_method(interner.lookup(name)) {
                MemberKind::LifecycleMethod
            } else if access.is_externally_callable() {
                MemberKind::PublicMethod
            } else {
                MemberKind::PrivateMethod
            }
        }
        DeclShape::Event | DeclShape::EventField | DeclShape::Delegate => {
            MemberKind::EventOrDelegate
        }
        DeclShape::Type(_) => MemberKind::NestedType,
        DeclShape::Indexer
        | DeclShape::Destructor
        | DeclShape::Operator
        | DeclShape::ConversionOperator
        | DeclShape::Incomplete
        | DeclShape::Namespace
        | DeclShape::UsingDirective
        | DeclShape::GlobalStatement => {
            tracing::trace!(shape = %node.shape, "unrecognized member shape filed as plain field");
            MemberKind::PlainField
        }
    }
}

fn field_kind<I: StringLookup>(
    node: &MemberNode,
    interner: &I,
    config: &ReorganizeConfig,
) -> MemberKind {
    if node.modifiers.contains(Modifiers::CONST) {
        MemberKind::ConstantField
    } else if node.modifiers.contains(Modifiers::STATIC) {
        MemberKind::StaticField
    } else if node.has_attribute(interner, &config.exposure_attribute) {
        MemberKind::ExposedField
    } else {
        MemberKind::PlainField
    }
}

/// The first section-annotation's first argument, if it is a literal.
///
/// A section-annotation without arguments, or whose first argument is not a
/// literal, does not label the member.
fn section_label<I: StringLookup>(
    node: &MemberNode,
    interner: &I,
    config: &ReorganizeConfig,
) -> Option<Name> {
    node.find_attribute(interner, &config.section_attribute)?
        .first_literal()
}

#[cfg(test)]
mod tests;
