//! Member declarations of a type body.
//!
//! A [`MemberNode`] is one direct member of a class, struct or interface body,
//! exactly as written: leading trivia, attribute lists, modifiers, the
//! declared identifiers, the opaque remainder of the declaration, and its
//! trailing trivia.
//!
//! Nodes are values. The edit methods below build a new node and leave the
//! receiver untouched.

use super::{Attribute, AttributeList, Modifiers, Name, Span, StringLookup, Trivia, TriviaList};
use smallvec::SmallVec;
use std::fmt;

/// Kind of a nested type declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeShape {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
    RecordStruct,
}

/// Syntactic shape of a node handed over as a type member.
///
/// The last three variants are not member declarations; a parser that hands
/// them over has lost track of the type body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclShape {
    /// `int a, b = 2;`
    Field,
    /// `event Action Fired;`
    EventField,
    /// `int Count { get; }`
    Property,
    /// `int this[int i] { get; }`
    Indexer,
    /// `Player() { }`
    Constructor,
    /// `~Player() { }`
    Destructor,
    /// `void Jump() { }`
    Method,
    /// `public static Vec operator +(Vec a, Vec b)`
    Operator,
    /// `public static implicit operator int(Id id)`
    ConversionOperator,
    /// `event Action Fired { add { } remove { } }`
    Event,
    /// `delegate void Handler();`
    Delegate,
    /// Nested `class`, `struct`, `interface`, `enum` or `record`.
    Type(TypeShape),
    /// A member the parser could only partially recognize.
    Incomplete,
    /// `namespace X { }`
    Namespace,
    /// `using X;`
    UsingDirective,
    /// A top-level statement.
    GlobalStatement,
}

impl DeclShape {
    /// Returns true if this shape can appear directly inside a type body.
    #[inline]
    pub fn is_member(self) -> bool {
        !matches!(
            self,
            DeclShape::Namespace | DeclShape::UsingDirective | DeclShape::GlobalStatement
        )
    }

    /// Human-readable shape name for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            DeclShape::Field => "field",
            DeclShape::EventField => "event field",
            DeclShape::Property => "property",
            DeclShape::Indexer => "indexer",
            DeclShape::Constructor => "constructor",
            DeclShape::Destructor => "destructor",
            DeclShape::Method => "method",
            DeclShape::Operator => "operator",
            DeclShape::ConversionOperator => "conversion operator",
            DeclShape::Event => "event",
            DeclShape::Delegate => "delegate",
            DeclShape::Type(TypeShape::Class) => "class",
            DeclShape::Type(TypeShape::Struct) => "struct",
            DeclShape::Type(TypeShape::Interface) => "interface",
            DeclShape::Type(TypeShape::Enum) => "enum",
            DeclShape::Type(TypeShape::Record) => "record",
            DeclShape::Type(TypeShape::RecordStruct) => "record struct",
            DeclShape::Incomplete => "incomplete member",
            DeclShape::Namespace => "namespace",
            DeclShape::UsingDirective => "using directive",
            DeclShape::GlobalStatement => "global statement",
        }
    }
}

impl fmt::Display for DeclShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// One direct member of a type body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberNode {
    pub shape: DeclShape,
    /// Trivia before the first token (the first `[` or modifier).
    pub leading: TriviaList,
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    /// Declared identifiers in source order. Fields and event fields may
    /// declare several; indexers and operators declare none.
    pub identifiers: SmallVec<[Name; 1]>,
    /// Everything after the modifiers that the reorganizer never reads:
    /// type, parameters, initializers, accessors and bodies.
    pub body: Name,
    /// Trivia after the last token, up to and including the line break.
    pub trailing: TriviaList,
    pub span: Span,
}

impl MemberNode {
    /// The first declared identifier.
    #[inline]
    pub fn first_identifier(&self) -> Option<Name> {
        self.identifiers.first().copied()
    }

    /// All attributes across all attribute lists, in source order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().flat_map(|list| list.attributes.iter())
    }

    /// The first attribute named `wanted`.
    pub fn find_attribute<I: StringLookup>(&self, interner: &I, wanted: &str) -> Option<&Attribute> {
        self.attributes().find(|a| a.is_named(interner, wanted))
    }

    /// Check whether any attribute is named `wanted`.
    pub fn has_attribute<I: StringLookup>(&self, interner: &I, wanted: &str) -> bool {
        self.find_attribute(interner, wanted).is_some()
    }

    /// Indentation of the line the member starts on.
    #[inline]
    pub fn indentation(&self) -> Option<Trivia> {
        self.leading.indentation()
    }

    /// Line breaks in the trailing trivia.
    #[inline]
    pub fn trailing_line_breaks(&self) -> usize {
        self.trailing.line_breaks()
    }

    /// The first line break found anywhere in this node's trivia.
    pub fn line_break(&self) -> Option<Trivia> {
        self.trailing
            .first_line_break()
            .or_else(|| {
                self.attributes
                    .iter()
                    .find_map(|list| list.trailing.first_line_break())
            })
            .or_else(|| self.leading.first_line_break())
    }

    /// Return a copy with `attribute` in a new list in front of all others.
    ///
    /// `list_trailing` is the trivia placed after the new list's `]`.
    #[must_use]
    pub fn with_attribute_prepended(
        &self,
        attribute: Attribute,
        list_trailing: TriviaList,
    ) -> MemberNode {
        let mut node = self.clone();
        node.attributes
            .insert(0, AttributeList::single(attribute, list_trailing));
        node
    }

    /// Return a copy without the first attribute named `wanted`, together
    /// with the removed attribute.
    ///
    /// A list left empty by the removal is dropped along with its trailing
    /// trivia. Returns `None` if no attribute is named `wanted`.
    pub fn without_attribute<I: StringLookup>(
        &self,
        interner: &I,
        wanted: &str,
    ) -> Option<(MemberNode, Attribute)> {
        let (list_idx, attr_idx) =
            self.attributes
                .iter()
                .enumerate()
                .find_map(|(list_idx, list)| {
                    list.attributes
                        .iter()
                        .position(|a| a.is_named(interner, wanted))
                        .map(|attr_idx| (list_idx, attr_idx))
                })?;

        let mut node = self.clone();
        let removed = node.attributes[list_idx].attributes.remove(attr_idx);
        if node.attributes[list_idx].attributes.is_empty() {
            node.attributes.remove(list_idx);
        }
        Some((node, removed))
    }

    /// Return a copy with its trailing trivia replaced.
    #[must_use]
    pub fn with_trailing_trivia(&self, trailing: TriviaList) -> MemberNode {
        MemberNode {
            trailing,
            ..self.clone()
        }
    }
}
