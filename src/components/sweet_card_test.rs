use super::*;

// =============================================================
// validate_purchase
// =============================================================

#[test]
fn accepts_quantity_within_stock() {
    assert_eq!(validate_purchase("1", 5), Ok(1));
    assert_eq!(validate_purchase("5", 5), Ok(5));
}

#[test]
fn accepts_surrounding_whitespace() {
    assert_eq!(validate_purchase(" 2 ", 5), Ok(2));
}

#[test]
fn rejects_zero() {
    assert!(validate_purchase("0", 5).is_err());
}

#[test]
fn rejects_more_than_stock() {
    assert_eq!(validate_purchase("6", 5), Err("Only 5 in stock.".to_owned()));
}

#[test]
fn rejects_empty_draft() {
    assert!(validate_purchase("", 5).is_err());
}

#[test]
fn rejects_non_numeric_draft() {
    assert!(validate_purchase("abc", 5).is_err());
    assert!(validate_purchase("1.5", 5).is_err());
}

#[test]
fn rejects_negative_draft() {
    assert!(validate_purchase("-1", 5).is_err());
}

#[test]
fn rejects_everything_when_out_of_stock() {
    assert_eq!(validate_purchase("1", 0), Err("Only 0 in stock.".to_owned()));
}
