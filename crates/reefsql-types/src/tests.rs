use super::*;
use std::cmp::Ordering;
use std::str::FromStr;

#[test]
fn test_null_comparison_is_unknown() {
    assert_eq!(SqlValue::Null.partial_cmp(&SqlValue::Integer(1)), None);
    assert_eq!(SqlValue::Integer(1).partial_cmp(&SqlValue::Null), None);
    assert_eq!(SqlValue::Null.partial_cmp(&SqlValue::Null), None);
}

#[test]
fn test_type_mismatch_is_incomparable() {
    assert_eq!(SqlValue::Integer(1).partial_cmp(&SqlValue::Text("1".to_string())), None);
    assert_eq!(SqlValue::Boolean(true).partial_cmp(&SqlValue::Real(1.0)), None);
}

#[test]
fn test_value_ordering() {
    assert_eq!(SqlValue::Integer(3).partial_cmp(&SqlValue::Integer(7)), Some(Ordering::Less));
    assert_eq!(
        SqlValue::Text("abc".to_string()).partial_cmp(&SqlValue::Text("abd".to_string())),
        Some(Ordering::Less)
    );
    assert_eq!(SqlValue::Boolean(false).partial_cmp(&SqlValue::Boolean(true)), Some(Ordering::Less));
}

#[test]
fn test_strict_equality_null_never_equal() {
    assert!(!SqlValue::Null.strictly_equals(&SqlValue::Null));
    assert!(!SqlValue::Null.strictly_equals(&SqlValue::Integer(1)));
    assert!(SqlValue::Integer(4).strictly_equals(&SqlValue::Integer(4)));
    assert!(!SqlValue::Integer(4).strictly_equals(&SqlValue::Integer(5)));
}

#[test]
fn test_strict_equality_nan_never_equal() {
    assert!(!SqlValue::Real(f64::NAN).strictly_equals(&SqlValue::Real(f64::NAN)));
    assert!(SqlValue::Real(2.5).strictly_equals(&SqlValue::Real(2.5)));
}

#[test]
fn test_derived_equality_groups_nulls() {
    // grouping keys rely on Null == Null
    assert_eq!(SqlValue::Null, SqlValue::Null);
}

#[test]
fn test_total_cmp_null_first() {
    assert_eq!(SqlValue::Null.total_cmp(&SqlValue::Integer(i64::MIN)), Ordering::Less);
    assert_eq!(SqlValue::Integer(0).total_cmp(&SqlValue::Null), Ordering::Greater);
    assert_eq!(SqlValue::Null.total_cmp(&SqlValue::Null), Ordering::Equal);
}

#[test]
fn test_date_parse_and_order() {
    let a = Date::from_str("2024-01-31").unwrap();
    let b = Date::from_str("2024-02-01").unwrap();
    assert!(a < b);
    assert_eq!(format!("{}", a), "2024-01-31");
    assert!(Date::from_str("2024-13-01").is_err());
    assert!(Date::from_str("not-a-date").is_err());
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", SqlValue::Integer(42)), "42");
    assert_eq!(format!("{}", SqlValue::Boolean(true)), "TRUE");
    assert_eq!(format!("{}", SqlValue::Null), "NULL");
    assert_eq!(format!("{}", SqlValue::Text("sailor".to_string())), "sailor");
}

#[test]
fn test_data_type_accepts() {
    assert!(DataType::Integer.accepts(Some(DataType::Integer)));
    assert!(DataType::Integer.accepts(None)); // NULL fits any column
    assert!(!DataType::Integer.accepts(Some(DataType::Text)));
}
