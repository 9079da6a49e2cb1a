use super::*;

#[test]
fn alt_type_identity_ignores_name() {
    assert_eq!(AltType::of::<i32>(), AltType::of::<i32>());
    assert_ne!(AltType::of::<i32>(), AltType::of::<u32>());
    assert!(AltType::of::<String>().name().contains("String"));
}

#[test]
fn insert_collapses_duplicates() {
    let mut set = AltSet::new();
    set.insert(AltType::of::<i32>());
    set.insert(AltType::of::<String>());
    set.insert(AltType::of::<i32>());
    assert_eq!(set.len(), 2);
    assert_eq!(set.index_of(TypeId::of::<i32>()), Some(0));
    assert_eq!(set.index_of(TypeId::of::<String>()), Some(1));
}

#[test]
fn union_keeps_left_order_and_appends_unseen() {
    let left = crate::alt_set![i32, String];
    let right = crate::alt_set![String, f64];
    let merged = left.union(&right);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.index_of(TypeId::of::<i32>()), Some(0));
    assert_eq!(merged.index_of(TypeId::of::<String>()), Some(1));
    assert_eq!(merged.index_of(TypeId::of::<f64>()), Some(2));
}

#[test]
fn set_equality_ignores_order() {
    assert_eq!(crate::alt_set![i32, String], crate::alt_set![String, i32]);
    assert_ne!(crate::alt_set![i32], crate::alt_set![i32, String]);
}

#[test]
fn subset_queries() {
    let small = crate::alt_set![i32];
    let big = crate::alt_set![i32, String];
    assert!(small.subset_of(&big));
    assert!(!big.subset_of(&small));
    assert!(AltSet::new().subset_of(&small));
}

#[test]
fn contains_by_type_and_id() {
    let set = crate::alt_set![i32, String];
    assert!(set.contains_type::<i32>());
    assert!(!set.contains_type::<f64>());
    assert!(set.contains(TypeId::of::<String>()));
}
