use super::*;

#[test]
fn test_intern_same_string_twice() {
    let interner = StringInterner::new();
    let a = interner.intern("health");
    let b = interner.intern("health");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "health");
}

#[test]
fn test_intern_distinct_strings() {
    let interner = StringInterner::new();
    let a = interner.intern("speed");
    let b = interner.intern("Speed");
    assert_ne!(a, b);
    assert_eq!(interner.lookup(b), "Speed");
}

#[test]
fn test_empty_string_is_preinterned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_len_counts_new_strings_only() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn test_lookup_out_of_range_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}

#[test]
fn test_lookup_through_trait() {
    fn via_trait<L: StringLookup>(lookup: &L, name: Name) -> String {
        lookup.lookup(name).to_owned()
    }

    let interner = StringInterner::new();
    let name = interner.intern("OnEnable");
    assert_eq!(via_trait(&interner, name), "OnEnable");
}
