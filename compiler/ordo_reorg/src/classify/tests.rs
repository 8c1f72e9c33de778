use super::*;
use ordo_ir::{
    Attribute, AttributeArg, DeclShape, MemberBuilder, Modifiers, StringInterner, TypeShape,
};

fn classify(node: &MemberNode, interner: &StringInterner) -> Classification {
    classify_member(node, interner, &ReorganizeConfig::default())
}

fn kind_of(node: &MemberNode, interner: &StringInterner) -> MemberKind {
    classify(node, interner).kind
}

#[test]
fn test_field_priority_const_over_static_over_exposed() {
    let interner = StringInterner::new();

    let constant = MemberBuilder::field(&interner, "Max")
        .modifiers(Modifiers::PUBLIC | Modifiers::CONST)
        .marker("SerializeField")
        .build();
    assert_eq!(kind_of(&constant, &interner), MemberKind::ConstantField);

    let shared = MemberBuilder::field(&interner, "instance")
        .modifiers(Modifiers::STATIC | Modifiers::READONLY)
        .marker("SerializeField")
        .build();
    assert_eq!(kind_of(&shared, &interner), MemberKind::StaticField);

    let exposed = MemberBuilder::field(&interner, "speed")
        .marker("SerializeField")
        .build();
    assert_eq!(kind_of(&exposed, &interner), MemberKind::ExposedField);

    let plain = MemberBuilder::field(&interner, "cache").build();
    assert_eq!(kind_of(&plain, &interner), MemberKind::PlainField);
}

#[test]
fn test_exposure_marker_qualified_spelling() {
    let interner = StringInterner::new();
    let exposed = MemberBuilder::field(&interner, "speed")
        .marker("UnityEngine.SerializeFieldAttribute")
        .build();
    assert_eq!(kind_of(&exposed, &interner), MemberKind::ExposedField);
}

#[test]
fn test_lifecycle_ignores_accessibility() {
    let interner = StringInterner::new();
    for modifiers in [Modifiers::empty(), Modifiers::PUBLIC, Modifiers::PROTECTED] {
        let awake = MemberBuilder::method(&interner, "Awake")
            .modifiers(modifiers)
            .build();
        assert_eq!(kind_of(&awake, &interner), MemberKind::LifecycleMethod);
    }
}

#[test]
fn test_lifecycle_is_case_sensitive() {
    let interner = StringInterner::new();
    let awake = MemberBuilder::method(&interner, "awake").build();
    assert_eq!(kind_of(&awake, &interner), MemberKind::PrivateMethod);
}

#[test]
fn test_method_visibility_split() {
    let interner = StringInterner::new();
    let cases = [
        (Modifiers::PUBLIC, MemberKind::PublicMethod),
        (Modifiers::INTERNAL, MemberKind::PublicMethod),
        (
            Modifiers::PROTECTED | Modifiers::INTERNAL,
            MemberKind::PrivateMethod,
        ),
        (Modifiers::PROTECTED, MemberKind::PrivateMethod),
        (Modifiers::PRIVATE, MemberKind::PrivateMethod),
        (Modifiers::empty(), MemberKind::PrivateMethod),
    ];
    for (modifiers, expected) in cases {
        let method = MemberBuilder::method(&interner, "Jump")
            .modifiers(modifiers)
            .build();
        assert_eq!(kind_of(&method, &interner), expected, "{modifiers:?}");
    }
}

#[test]
fn test_other_shapes() {
    let interner = StringInterner::new();
    let cases = [
        (DeclShape::Property, MemberKind::Property),
        (DeclShape::Constructor, MemberKind::Constructor),
        (DeclShape::Event, MemberKind::EventOrDelegate),
        (DeclShape::EventField, MemberKind::EventOrDelegate),
        (DeclShape::Delegate, MemberKind::EventOrDelegate),
        (DeclShape::Type(TypeShape::Struct), MemberKind::NestedType),
        (DeclShape::Type(TypeShape::Enum), MemberKind::NestedType),
        (DeclShape::Indexer, MemberKind::PlainField),
        (DeclShape::Operator, MemberKind::PlainField),
        (DeclShape::Destructor, MemberKind::PlainField),
        (DeclShape::Incomplete, MemberKind::PlainField),
    ];
    for (shape, expected) in cases {
        let node = MemberBuilder::new(&interner, shape, "Member").build();
        assert_eq!(kind_of(&node, &interner), expected, "{shape}");
    }
}

#[test]
fn test_access_rank_defaults_to_private() {
    let interner = StringInterner::new();
    let node = MemberBuilder::field(&interner, "x").build();
    assert_eq!(classify(&node, &interner).access_rank, 3);

    let public = MemberBuilder::field(&interner, "x")
        .modifiers(Modifiers::PUBLIC)
        .build();
    assert_eq!(classify(&public, &interner).access_rank, 0);
}

#[test]
fn test_name_is_first_declared_identifier() {
    let interner = StringInterner::new();
    let node = MemberBuilder::field(&interner, "x").also_declares("a").build();
    assert_eq!(classify(&node, &interner).name, interner.intern("x"));

    let indexer = MemberBuilder::new(&interner, DeclShape::Indexer, "").build();
    assert_eq!(classify(&indexer, &interner).name, Name::EMPTY);
}

#[test]
fn test_label_from_literal_argument() {
    let interner = StringInterner::new();
    let node = MemberBuilder::field(&interner, "speed")
        .string_attribute("Header", "Movement")
        .build();
    let classification = classify(&node, &interner);
    assert!(classification.has_label());
    assert_eq!(classification.label, Some(interner.intern("Movement")));
}

#[test]
fn test_malformed_label_is_no_label() {
    let interner = StringInterner::new();

    let bare = MemberBuilder::field(&interner, "speed").marker("Header").build();
    assert_eq!(classify(&bare, &interner).label, None);

    let computed = MemberBuilder::field(&interner, "speed")
        .attribute(Attribute::new(
            interner.intern("Header"),
            vec![AttributeArg::Expr(interner.intern("Titles.Movement"))],
        ))
        .build();
    assert_eq!(classify(&computed, &interner).label, None);
}

#[test]
fn test_label_uses_configured_attribute() {
    let interner = StringInterner::new();
    let config = ReorganizeConfig {
        section_attribute: "BoxGroup".to_owned(),
        ..ReorganizeConfig::default()
    };
    let node = MemberBuilder::field(&interner, "speed")
        .string_attribute("Header", "Ignored")
        .string_attribute("BoxGroup", "Movement")
        .build();
    assert_eq!(
        classify_member(&node, &interner, &config).label,
        Some(interner.intern("Movement"))
    );
}

#[test]
fn test_classification_does_not_edit_node() {
    let interner = StringInterner::new();
    let node = MemberBuilder::field(&interner, "speed")
        .string_attribute("Header", "Movement")
        .marker("SerializeField")
        .build();
    let before = node.clone();
    let _ = classify(&node, &interner);
    assert_eq!(node, before);
}

#[test]
fn test_only_declared_fields_join_groups() {
    let interner = StringInterner::new();
    let field = MemberBuilder::field(&interner, "speed")
        .modifiers(Modifiers::STATIC)
        .build();
    assert!(classify(&field, &interner).joins_groups());

    for shape in [
        DeclShape::Indexer,
        DeclShape::Operator,
        DeclShape::Destructor,
        DeclShape::Incomplete,
    ] {
        let node = MemberBuilder::new(&interner, shape, "").build();
        let class = classify(&node, &interner);
        assert_eq!(class.kind, MemberKind::PlainField);
        assert!(!class.field_shaped, "{shape}");
        assert!(!class.joins_groups(), "{shape}");
    }

    let property = MemberBuilder::property(&interner, "Speed").build();
    assert!(!classify(&property, &interner).joins_groups());
}
