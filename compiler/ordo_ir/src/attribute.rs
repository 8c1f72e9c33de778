//! Attributes (metadata annotations) written in front of a member.
//!
//! ```text
//! [Header("Movement"), SerializeField]
//! [Tooltip("Units per second")]
//! public float speed;
//! ```
//!
//! Each bracketed group is an [`AttributeList`]; the reorganizer only looks
//! at attribute names and at literal arguments.

use super::{Name, Span, StringLookup, TriviaList};

/// Literal token kinds that may appear as attribute arguments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    String,
    Char,
    Numeric,
    Bool,
    Null,
}

/// One positional argument of an attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeArg {
    /// A literal. `value` is the decoded content for strings and chars, and
    /// the token text otherwise.
    Literal { kind: LiteralKind, value: Name },
    /// Any other expression (`nameof(x)`, `Consts.Title`, `a + b`), as
    /// opaque source text.
    Expr(Name),
}

impl AttributeArg {
    /// Create a string literal argument.
    #[inline]
    pub fn string(value: Name) -> Self {
        AttributeArg::Literal {
            kind: LiteralKind::String,
            value,
        }
    }

    /// The literal's value, if this argument is a literal.
    #[inline]
    pub fn literal_value(&self) -> Option<Name> {
        match self {
            AttributeArg::Literal { value, .. } => Some(*value),
            AttributeArg::Expr(_) => None,
        }
    }
}

/// A single attribute: `Name` or `Name(args...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    /// The name as written, possibly qualified or suffixed.
    pub name: Name,
    pub args: Vec<AttributeArg>,
    pub span: Span,
}

impl Attribute {
    /// Create an attribute without a source span.
    pub fn new(name: Name, args: Vec<AttributeArg>) -> Self {
        Attribute {
            name,
            args,
            span: Span::DUMMY,
        }
    }

    /// Check whether this attribute refers to `wanted`.
    ///
    /// See [`attribute_name_matches`] for the accepted spellings.
    pub fn is_named<I: StringLookup>(&self, interner: &I, wanted: &str) -> bool {
        attribute_name_matches(interner.lookup(self.name), wanted)
    }

    /// The value of the first argument when it is a literal.
    #[inline]
    pub fn first_literal(&self) -> Option<Name> {
        self.args.first().and_then(AttributeArg::literal_value)
    }
}

/// A bracketed attribute list with the trivia that follows its `]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AttributeList {
    /// Explicit target such as `field:` in `[field: SerializeField]`.
    pub target: Option<Name>,
    pub attributes: Vec<Attribute>,
    /// Trivia between `]` and the next token, usually a line break and the
    /// indentation of the following line.
    pub trailing: TriviaList,
}

impl AttributeList {
    /// Create a list holding a single attribute.
    pub fn single(attribute: Attribute, trailing: TriviaList) -> Self {
        AttributeList {
            target: None,
            attributes: vec![attribute],
            trailing,
        }
    }
}

/// Compare an attribute name as written against a simple attribute name.
///
/// The written name may be namespace-qualified (`UnityEngine.Header`,
/// `global::UnityEngine.Header`) and may carry the `Attribute` suffix
/// (`HeaderAttribute`). `wanted` is normalized the same way.
pub fn attribute_name_matches(written: &str, wanted: &str) -> bool {
    let written = simple_attribute_name(written);
    !written.is_empty() && written == simple_attribute_name(wanted)
}

fn simple_attribute_name(name: &str) -> &str {
    let name = name.trim();
    let unqualified = name
        .rsplit(['.', ':'])
        .next()
        .unwrap_or(name);
    match unqualified.strip_suffix("Attribute") {
        Some(stem) if !stem.is_empty() => stem,
        _ => unqualified,
    }
}

#[cfg(test)]
mod tests;
