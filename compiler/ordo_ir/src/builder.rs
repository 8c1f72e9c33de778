//! Convenience construction of member nodes.
//!
//! Parsers fill [`MemberNode`] directly; the builder exists for drivers and
//! tests that want a well-formed node without spelling out every trivia
//! piece. Built members sit on their own line, indented by four spaces.

use super::{
    Attribute, AttributeArg, AttributeList, DeclShape, MemberNode, Modifiers, Name, Span,
    StringInterner, Trivia, TriviaList,
};
use smallvec::smallvec;

const DEFAULT_INDENT: &str = "    ";

/// Builder for a single [`MemberNode`].
pub struct MemberBuilder<'a> {
    interner: &'a StringInterner,
    node: MemberNode,
}

impl<'a> MemberBuilder<'a> {
    /// Start a member of the given shape named `name`.
    ///
    /// An empty `name` declares no identifier (indexers, operators).
    pub fn new(interner: &'a StringInterner, shape: DeclShape, name: &str) -> Self {
        let indent = Trivia::whitespace(interner.intern(DEFAULT_INDENT));
        let eol = Trivia::end_of_line(interner.intern("\n"));
        let identifiers = if name.is_empty() {
            smallvec![]
        } else {
            smallvec![interner.intern(name)]
        };
        MemberBuilder {
            interner,
            node: MemberNode {
                shape,
                leading: TriviaList::from_vec(vec![indent]),
                attributes: Vec::new(),
                modifiers: Modifiers::empty(),
                identifiers,
                body: Name::EMPTY,
                trailing: TriviaList::from_vec(vec![eol]),
                span: Span::DUMMY,
            },
        }
    }

    pub fn field(interner: &'a StringInterner, name: &str) -> Self {
        Self::new(interner, DeclShape::Field, name)
    }

    pub fn property(interner: &'a StringInterner, name: &str) -> Self {
        Self::new(interner, DeclShape::Property, name)
    }

    pub fn method(interner: &'a StringInterner, name: &str) -> Self {
        Self::new(interner, DeclShape::Method, name)
    }

    pub fn constructor(interner: &'a StringInterner, name: &str) -> Self {
        Self::new(interner, DeclShape::Constructor, name)
    }

    /// Add modifiers.
    #[must_use]
    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.node.modifiers |= modifiers;
        self
    }

    /// Declare an additional identifier (`int a, b;`).
    #[must_use]
    pub fn also_declares(mut self, name: &str) -> Self {
        self.node.identifiers.push(self.interner.intern(name));
        self
    }

    /// Add `[name]` on its own line.
    #[must_use]
    pub fn marker(self, name: &str) -> Self {
        let attribute = Attribute::new(self.interner.intern(name), Vec::new());
        self.attribute(attribute)
    }

    /// Add `[name("value")]` on its own line.
    #[must_use]
    pub fn string_attribute(self, name: &str, value: &str) -> Self {
        let arg = AttributeArg::string(self.interner.intern(value));
        let attribute = Attribute::new(self.interner.intern(name), vec![arg]);
        self.attribute(attribute)
    }

    /// Add an attribute in its own list on its own line.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        let trailing = self.own_line_trivia();
        self.node
            .attributes
            .push(AttributeList::single(attribute, trailing));
        self
    }

    /// Add a whole attribute list as given.
    #[must_use]
    pub fn attribute_list(mut self, list: AttributeList) -> Self {
        self.node.attributes.push(list);
        self
    }

    /// Set the opaque declaration text.
    #[must_use]
    pub fn body(mut self, text: &str) -> Self {
        self.node.body = self.interner.intern(text);
        self
    }

    #[must_use]
    pub fn leading(mut self, leading: TriviaList) -> Self {
        self.node.leading = leading;
        self
    }

    #[must_use]
    pub fn trailing(mut self, trailing: TriviaList) -> Self {
        self.node.trailing = trailing;
        self
    }

    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.node.span = span;
        self
    }

    pub fn build(self) -> MemberNode {
        self.node
    }

    /// A line break followed by the member's indentation.
    fn own_line_trivia(&self) -> TriviaList {
        let mut trivia = TriviaList::new();
        trivia.push(Trivia::end_of_line(self.interner.intern("\n")));
        if let Some(indent) = self.node.indentation() {
            trivia.push(indent);
        }
        trivia
    }
}
