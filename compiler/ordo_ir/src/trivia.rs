//! Trivia attached to syntax nodes.
//!
//! Whitespace, line breaks and comments are captured as trivia so that a
//! serializer can reproduce the original text byte for byte. Leading trivia
//! belongs to the node that follows it; trailing trivia runs up to and
//! including the line break that ends the node's last line.

use super::{Name, StringLookup};
use smallvec::SmallVec;
use std::fmt;

/// The kind of a single trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    /// Spaces and tabs.
    Whitespace,
    /// A single line break: `\n` or `\r\n`.
    EndOfLine,
    /// `// text`
    LineComment,
    /// `/* text */`
    BlockComment,
    /// `/// text`
    DocComment,
    /// Preprocessor directive such as `#region`.
    Directive,
}

/// One piece of trivia with its exact source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: Name,
}

impl Trivia {
    /// Create a new trivia piece.
    #[inline]
    pub const fn new(kind: TriviaKind, text: Name) -> Self {
        Trivia { kind, text }
    }

    /// Create a whitespace piece.
    #[inline]
    pub const fn whitespace(text: Name) -> Self {
        Trivia::new(TriviaKind::Whitespace, text)
    }

    /// Create a line break piece.
    #[inline]
    pub const fn end_of_line(text: Name) -> Self {
        Trivia::new(TriviaKind::EndOfLine, text)
    }

    #[inline]
    pub fn is_line_break(self) -> bool {
        self.kind == TriviaKind::EndOfLine
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self.kind,
            TriviaKind::LineComment | TriviaKind::BlockComment | TriviaKind::DocComment
        )
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

/// An ordered run of trivia pieces.
///
/// Most runs are one or two pieces (indentation, or a comment and a line
/// break), so they are stored inline.
#[derive(Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct TriviaList {
    pieces: SmallVec<[Trivia; 2]>,
}

impl TriviaList {
    /// Create a new empty trivia list.
    #[inline]
    pub fn new() -> Self {
        TriviaList {
            pieces: SmallVec::new(),
        }
    }

    /// Create from a Vec of pieces.
    pub fn from_vec(pieces: Vec<Trivia>) -> Self {
        TriviaList {
            pieces: SmallVec::from_vec(pieces),
        }
    }

    /// Push a piece at the end.
    #[inline]
    pub fn push(&mut self, piece: Trivia) {
        self.pieces.push(piece);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trivia> {
        self.pieces.iter()
    }

    /// Count the line break pieces in this run.
    pub fn line_breaks(&self) -> usize {
        self.pieces.iter().filter(|t| t.is_line_break()).count()
    }

    /// The first line break piece, used to copy the file's line ending style.
    pub fn first_line_break(&self) -> Option<Trivia> {
        self.pieces.iter().copied().find(|t| t.is_line_break())
    }

    /// The whitespace that indents the line this run ends on.
    ///
    /// That is the last whitespace piece after the last line break, or the
    /// leading whitespace piece if the run contains no line break.
    pub fn indentation(&self) -> Option<Trivia> {
        let after_break = self
            .pieces
            .iter()
            .rposition(|t| t.is_line_break())
            .map_or(0, |pos| pos + 1);
        self.pieces[after_break..]
            .iter()
            .rev()
            .copied()
            .find(|t| t.kind == TriviaKind::Whitespace)
    }

    /// Return a copy holding at least `count` line breaks.
    ///
    /// Missing breaks are appended as copies of `line_break`. Returns `self`
    /// unchanged when it already has enough.
    #[must_use]
    pub fn with_line_breaks_at_least(&self, count: usize, line_break: Trivia) -> TriviaList {
        let mut result = self.clone();
        for _ in self.line_breaks()..count {
            result.push(line_break);
        }
        result
    }

    /// Reassemble the exact source text of this run.
    pub fn render<I: StringLookup>(&self, interner: &I) -> String {
        self.pieces
            .iter()
            .map(|t| interner.lookup(t.text))
            .collect()
    }
}

impl FromIterator<Trivia> for TriviaList {
    fn from_iter<T: IntoIterator<Item = Trivia>>(iter: T) -> Self {
        TriviaList {
            pieces: iter.into_iter().collect(),
        }
    }
}
