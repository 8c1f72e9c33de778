//! Ordo IR - Concrete Syntax Tree for Type Members
//!
//! This crate contains the data structures a parser hands to the member
//! reorganizer:
//! - Spans for source locations
//! - Names for interned identifiers and token text
//! - Trivia (whitespace, line breaks, comments) attached to nodes
//! - Modifiers, attributes and member declarations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and opaque text are `Name(u32)`
//! - **Full Fidelity**: every byte of a member is reachable from its node, so
//!   a serializer can reproduce the source exactly
//! - **Pure Edits**: nodes are values; edit operations return new nodes and
//!   never touch the node they were called on

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod attribute;
mod builder;
mod interner;
mod member;
mod modifiers;
mod name;
mod span;
mod trivia;

pub use attribute::{attribute_name_matches, Attribute, AttributeArg, AttributeList, LiteralKind};
pub use builder::MemberBuilder;
pub use interner::{InternError, StringInterner, StringLookup};
pub use member::{DeclShape, MemberNode, TypeShape};
pub use modifiers::{Accessibility, Modifiers};
pub use name::Name;
pub use span::Span;
pub use trivia::{Trivia, TriviaKind, TriviaList};
