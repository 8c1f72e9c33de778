//! Declaration modifiers and accessibility.

use bitflags::bitflags;

bitflags! {
    /// Modifier keywords written on a member declaration.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const CONST = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ABSTRACT = 1 << 7;
        const VIRTUAL = 1 << 8;
        const OVERRIDE = 1 << 9;
        const SEALED = 1 << 10;
        const EXTERN = 1 << 11;
        const UNSAFE = 1 << 12;
        const VOLATILE = 1 << 13;
        const NEW = 1 << 14;
        const PARTIAL = 1 << 15;
        const ASYNC = 1 << 16;
    }
}

impl Modifiers {
    /// Accessibility spelled out by the modifiers, if any.
    pub fn declared_accessibility(self) -> Option<Accessibility> {
        let public = self.contains(Modifiers::PUBLIC);
        let private = self.contains(Modifiers::PRIVATE);
        let protected = self.contains(Modifiers::PROTECTED);
        let internal = self.contains(Modifiers::INTERNAL);

        match (public, protected, internal, private) {
            (true, ..) => Some(Accessibility::Public),
            (false, true, true, _) => Some(Accessibility::ProtectedInternal),
            (false, true, false, true) => Some(Accessibility::PrivateProtected),
            (false, true, false, false) => Some(Accessibility::Protected),
            (false, false, true, _) => Some(Accessibility::Internal),
            (false, false, false, true) => Some(Accessibility::Private),
            (false, false, false, false) => None,
        }
    }

    /// Effective accessibility: members without an access modifier are private.
    pub fn accessibility(self) -> Accessibility {
        self.declared_accessibility()
            .unwrap_or(Accessibility::Private)
    }
}

/// Declared accessibility of a member, from most to least visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Accessibility {
    Public,
    Internal,
    ProtectedInternal,
    Protected,
    PrivateProtected,
    Private,
}

impl Accessibility {
    /// Sort rank: lower ranks are more visible and come first.
    ///
    /// `Internal` and `ProtectedInternal` share a rank, as do `Protected`
    /// and `PrivateProtected`.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Accessibility::Public => 0,
            Accessibility::Internal | Accessibility::ProtectedInternal => 1,
            Accessibility::Protected | Accessibility::PrivateProtected => 2,
            Accessibility::Private => 3,
        }
    }

    /// Returns true for `public` and plain `internal`.
    #[inline]
    pub fn is_externally_callable(self) -> bool {
        matches!(self, Accessibility::Public | Accessibility::Internal)
    }
}
