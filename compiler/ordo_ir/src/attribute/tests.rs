use super::*;
use crate::StringInterner;

#[test]
fn test_attribute_name_matches_plain() {
    assert!(attribute_name_matches("Header", "Header"));
    assert!(!attribute_name_matches("header", "Header"));
    assert!(!attribute_name_matches("Headers", "Header"));
}

#[test]
fn test_attribute_name_matches_suffix_and_qualifier() {
    assert!(attribute_name_matches("HeaderAttribute", "Header"));
    assert!(attribute_name_matches("UnityEngine.Header", "Header"));
    assert!(attribute_name_matches("UnityEngine.HeaderAttribute", "Header"));
    assert!(attribute_name_matches("global::UnityEngine.Header", "Header"));
    assert!(attribute_name_matches("SerializeField", "SerializeFieldAttribute"));
}

#[test]
fn test_attribute_name_bare_suffix_is_its_own_name() {
    assert!(attribute_name_matches("Attribute", "Attribute"));
    assert!(!attribute_name_matches("Attribute", "Header"));
    assert!(!attribute_name_matches("", ""));
}

#[test]
fn test_first_literal() {
    let interner = StringInterner::new();
    let title = interner.intern("Movement");

    let labeled = Attribute::new(interner.intern("Header"), vec![AttributeArg::string(title)]);
    assert_eq!(labeled.first_literal(), Some(title));

    let bare = Attribute::new(interner.intern("Header"), vec![]);
    assert_eq!(bare.first_literal(), None);

    let computed = Attribute::new(
        interner.intern("Header"),
        vec![AttributeArg::Expr(interner.intern("Titles.Movement"))],
    );
    assert_eq!(computed.first_literal(), None);
}

#[test]
fn test_numeric_literal_is_a_literal() {
    let interner = StringInterner::new();
    let value = interner.intern("42");
    let attr = Attribute::new(
        interner.intern("Space"),
        vec![AttributeArg::Literal {
            kind: LiteralKind::Numeric,
            value,
        }],
    );
    assert_eq!(attr.first_literal(), Some(value));
}

#[test]
fn test_is_named_uses_interner() {
    let interner = StringInterner::new();
    let attr = Attribute::new(interner.intern("UnityEngine.SerializeField"), vec![]);
    assert!(attr.is_named(&interner, "SerializeField"));
    assert!(!attr.is_named(&interner, "Header"));
}
