//! Member kinds and the output sections they are filed under.

/// The slot a member is classified into.
///
/// Produced once by the classifier; every later stage matches on it instead
/// of looking at the syntax again.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberKind {
    /// `const` field.
    ConstantField,
    /// `static` field (including `static readonly`).
    StaticField,
    /// Instance field carrying the exposure marker.
    ExposedField,
    /// Any other instance field, and members of unrecognized shape.
    PlainField,
    Constructor,
    Property,
    /// Events, event fields and delegate declarations.
    EventOrDelegate,
    /// Method named after one of the configured lifecycle hooks.
    LifecycleMethod,
    /// Non-lifecycle method that is `public` or `internal`.
    PublicMethod,
    /// Any other non-lifecycle method.
    PrivateMethod,
    NestedType,
}

impl MemberKind {
    /// All kinds, in section order.
    pub const ALL: [MemberKind; 11] = [
        MemberKind::ConstantField,
        MemberKind::StaticField,
        MemberKind::ExposedField,
        MemberKind::PlainField,
        MemberKind::Constructor,
        MemberKind::Property,
        MemberKind::EventOrDelegate,
        MemberKind::LifecycleMethod,
        MemberKind::PublicMethod,
        MemberKind::PrivateMethod,
        MemberKind::NestedType,
    ];

    /// The section this kind is emitted in.
    ///
    /// Exposed and plain fields share the instance field section.
    pub fn section(self) -> Section {
        match self {
            MemberKind::ConstantField => Section::Constants,
            MemberKind::StaticField => Section::Statics,
            MemberKind::ExposedField | MemberKind::PlainField => Section::Fields,
            MemberKind::Constructor => Section::Constructors,
            MemberKind::Property => Section::Properties,
            MemberKind::EventOrDelegate => Section::EventsAndDelegates,
            MemberKind::LifecycleMethod => Section::LifecycleMethods,
            MemberKind::PublicMethod => Section::PublicMethods,
            MemberKind::PrivateMethod => Section::PrivateMethods,
            MemberKind::NestedType => Section::NestedTypes,
        }
    }

    /// Field-like kinds take part in section-annotation grouping.
    #[inline]
    pub fn is_field(self) -> bool {
        self.section().is_field_section()
    }
}

/// Output sections in canonical order.
///
/// The discriminant order is the emission order, so `Ord` on `Section` is
/// the canonical section order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Section {
    Constants,
    Statics,
    Fields,
    Constructors,
    Properties,
    EventsAndDelegates,
    LifecycleMethods,
    PublicMethods,
    PrivateMethods,
    NestedTypes,
}

impl Section {
    pub const COUNT: usize = 10;

    /// All sections in emission order.
    pub const ORDER: [Section; Section::COUNT] = [
        Section::Constants,
        Section::Statics,
        Section::Fields,
        Section::Constructors,
        Section::Properties,
        Section::EventsAndDelegates,
        Section::LifecycleMethods,
        Section::PublicMethods,
        Section::PrivateMethods,
        Section::NestedTypes,
    ];

    /// Position in emission order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Sections whose members carry visual groups: label relocation and
    /// group spacing run on these only.
    #[inline]
    pub fn is_field_section(self) -> bool {
        matches!(self, Section::Constants | Section::Statics | Section::Fields)
    }

    /// Sections sorted by group id as well as by access and name.
    ///
    /// Constructors, methods and nested types sort by access and name only.
    #[inline]
    pub fn sorts_by_group(self) -> bool {
        self.is_field_section() || matches!(self, Section::Properties | Section::EventsAndDelegates)
    }
}
