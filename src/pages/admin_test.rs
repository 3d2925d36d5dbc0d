use super::*;

// =============================================================
// Helpers
// =============================================================

fn draft(name: &str, category: &str, price: &str, quantity: &str) -> SweetForm {
    SweetForm {
        name: name.to_owned(),
        category: category.to_owned(),
        price: price.to_owned(),
        quantity: quantity.to_owned(),
    }
}

fn make_sweet() -> Sweet {
    Sweet {
        id: 4,
        name: "Rasgulla".to_owned(),
        category: "Syrup".to_owned(),
        price: 30.5,
        quantity: 8,
    }
}

// =============================================================
// SweetForm::parse
// =============================================================

#[test]
fn parses_a_complete_draft() {
    let payload = draft("Ladoo", "Classic", "25.50", "10").parse().unwrap();
    assert_eq!(payload.name, "Ladoo");
    assert_eq!(payload.category, "Classic");
    assert!((payload.price - 25.5).abs() < f64::EPSILON);
    assert_eq!(payload.quantity, 10);
}

#[test]
fn trims_text_fields() {
    let payload = draft("  Ladoo  ", "  Classic ", "25", "10").parse().unwrap();
    assert_eq!(payload.name, "Ladoo");
    assert_eq!(payload.category, "Classic");
}

#[test]
fn accepts_zero_price_and_zero_quantity() {
    let payload = draft("Free Sample", "Promo", "0", "0").parse().unwrap();
    assert!((payload.price - 0.0).abs() < f64::EPSILON);
    assert_eq!(payload.quantity, 0);
}

#[test]
fn rejects_blank_name() {
    assert!(draft("", "Classic", "25", "10").parse().is_err());
    assert!(draft("   ", "Classic", "25", "10").parse().is_err());
}

#[test]
fn rejects_blank_category() {
    assert!(draft("Ladoo", "", "25", "10").parse().is_err());
}

#[test]
fn rejects_non_numeric_price() {
    assert_eq!(draft("Ladoo", "Classic", "abc", "10").parse(), Err("Price must be a number."));
    assert!(draft("Ladoo", "Classic", "", "10").parse().is_err());
}

#[test]
fn rejects_negative_price() {
    assert_eq!(draft("Ladoo", "Classic", "-1", "10").parse(), Err("Price must not be negative."));
}

#[test]
fn rejects_non_finite_price() {
    assert!(draft("Ladoo", "Classic", "inf", "10").parse().is_err());
    assert!(draft("Ladoo", "Classic", "NaN", "10").parse().is_err());
}

#[test]
fn rejects_fractional_quantity() {
    assert!(draft("Ladoo", "Classic", "25", "2.5").parse().is_err());
}

#[test]
fn rejects_negative_quantity() {
    assert!(draft("Ladoo", "Classic", "25", "-3").parse().is_err());
}

// =============================================================
// SweetForm::from_sweet
// =============================================================

#[test]
fn edit_draft_mirrors_the_item() {
    let form = SweetForm::from_sweet(&make_sweet());
    assert_eq!(form.name, "Rasgulla");
    assert_eq!(form.category, "Syrup");
    assert_eq!(form.price, "30.5");
    assert_eq!(form.quantity, "8");
}

#[test]
fn edit_draft_round_trips_through_parse() {
    let sweet = make_sweet();
    let payload = SweetForm::from_sweet(&sweet).parse().unwrap();
    assert_eq!(payload.name, sweet.name);
    assert!((payload.price - sweet.price).abs() < f64::EPSILON);
    assert_eq!(payload.quantity, sweet.quantity);
}

#[test]
fn default_draft_is_empty() {
    let form = SweetForm::default();
    assert_eq!(form, draft("", "", "", ""));
}

// =============================================================
// submit_plan
// =============================================================

#[test]
fn no_editing_id_creates() {
    let plan = submit_plan(None, &draft("Ladoo", "Classic", "25", "10")).unwrap();
    assert!(matches!(plan, SubmitPlan::Create(_)));
}

#[test]
fn editing_id_updates_that_item() {
    let plan = submit_plan(Some(4), &draft("Ladoo", "Classic", "25", "10")).unwrap();
    match plan {
        SubmitPlan::Update(id, payload) => {
            assert_eq!(id, 4);
            assert_eq!(payload.name, "Ladoo");
        }
        SubmitPlan::Create(_) => panic!("expected update"),
    }
}

#[test]
fn invalid_draft_never_produces_a_plan() {
    assert!(submit_plan(None, &draft("", "", "", "")).is_err());
    assert!(submit_plan(Some(4), &draft("Ladoo", "Classic", "-1", "10")).is_err());
}

// =============================================================
// parse_restock_quantity
// =============================================================

#[test]
fn accepts_positive_quantity() {
    assert_eq!(parse_restock_quantity("5"), Ok(5));
    assert_eq!(parse_restock_quantity(" 12 "), Ok(12));
}

#[test]
fn rejects_zero_restock() {
    assert!(parse_restock_quantity("0").is_err());
}

#[test]
fn rejects_blank_restock() {
    assert!(parse_restock_quantity("").is_err());
    assert!(parse_restock_quantity("   ").is_err());
}

#[test]
fn rejects_non_numeric_restock() {
    assert!(parse_restock_quantity("abc").is_err());
    assert!(parse_restock_quantity("-2").is_err());
    assert!(parse_restock_quantity("1.5").is_err());
}
