use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_sweet() -> Sweet {
    Sweet {
        id: 7,
        name: "Kaju Katli".to_owned(),
        category: "Barfi".to_owned(),
        price: 550.0,
        quantity: 12,
    }
}

// =============================================================
// Sweet serde
// =============================================================

#[test]
fn sweet_round_trip() {
    let sweet = make_sweet();
    let json = serde_json::to_string(&sweet).unwrap();
    let back: Sweet = serde_json::from_str(&json).unwrap();
    assert_eq!(sweet, back);
}

#[test]
fn sweet_deserializes_from_server_shape() {
    let json = r#"{
        "id": 1,
        "name": "Gulab Jamun",
        "category": "Syrup",
        "price": 12.5,
        "quantity": 3
    }"#;
    let sweet: Sweet = serde_json::from_str(json).unwrap();
    assert_eq!(sweet.id, 1);
    assert_eq!(sweet.name, "Gulab Jamun");
    assert!((sweet.price - 12.5).abs() < f64::EPSILON);
    assert_eq!(sweet.quantity, 3);
}

#[test]
fn sweet_accepts_integral_price() {
    let json = r#"{"id": 2, "name": "Ladoo", "category": "Classic", "price": 10, "quantity": 0}"#;
    let sweet: Sweet = serde_json::from_str(json).unwrap();
    assert!((sweet.price - 10.0).abs() < f64::EPSILON);
}

#[test]
fn sweet_rejects_negative_quantity() {
    let json = r#"{"id": 2, "name": "Ladoo", "category": "Classic", "price": 10.0, "quantity": -1}"#;
    assert!(serde_json::from_str::<Sweet>(json).is_err());
}

#[test]
fn out_of_stock_only_at_zero() {
    let mut sweet = make_sweet();
    assert!(!sweet.out_of_stock());
    sweet.quantity = 0;
    assert!(sweet.out_of_stock());
}

// =============================================================
// SweetPayload serde
// =============================================================

#[test]
fn payload_serializes_all_fields() {
    let payload = SweetPayload {
        name: "Jalebi".to_owned(),
        category: "Syrup".to_owned(),
        price: 99.99,
        quantity: 25,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["name"], "Jalebi");
    assert_eq!(value["category"], "Syrup");
    assert_eq!(value["price"], 99.99);
    assert_eq!(value["quantity"], 25);
}

// =============================================================
// TokenResponse serde
// =============================================================

#[test]
fn token_response_deserializes() {
    let json = r#"{"access_token": "aaa.bbb.ccc", "token_type": "bearer"}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "aaa.bbb.ccc");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn token_type_defaults_when_missing() {
    let json = r#"{"access_token": "aaa.bbb.ccc"}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.token_type, "");
}

// =============================================================
// RegisteredUser serde
// =============================================================

#[test]
fn registered_user_deserializes() {
    let json = r#"{"id": 3, "email": "alice@example.com", "role": "USER"}"#;
    let user: RegisteredUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::Customer);
}
