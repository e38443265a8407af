use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::FieldError;
use crate::extract::BodyFields;

/// Every confirmation carries this id. There is no order counter and nothing is stored.
pub const PLACEHOLDER_ORDER_ID: i64 = 42;

pub const STATUS_PROCESSING: &str = "processing";

// ── Request payload ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRequest {
    pub item: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_lax_int")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl BodyFields for OrderRequest {
    fn field_errors(body: &Map<String, Value>) -> Vec<FieldError> {
        let mut errors = Vec::new();

        match body.get("item") {
            None => errors.push(FieldError::new(["body", "item"], "Field required", "missing")),
            Some(Value::String(_)) => {}
            Some(_) => errors.push(FieldError::new(
                ["body", "item"],
                "Input should be a valid string",
                "string_type",
            )),
        }

        if let Some(Err(bad)) = body.get("quantity").map(lax_int) {
            errors.push(FieldError::new(["body", "quantity"], bad.msg, bad.kind));
        }

        errors
    }
}

// ── Lax integers ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IntRejection {
    kind: &'static str,
    msg: &'static str,
}

/// Accepts a JSON integer or a string holding a base-10 integer (surrounding
/// whitespace allowed). Anything else is rejected.
fn lax_int(value: &Value) -> Result<i64, IntRejection> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(IntRejection {
            kind: "int_type",
            msg: "Input should be a valid integer",
        }),
        Value::String(s) => s.trim().parse().map_err(|_| IntRejection {
            kind: "int_parsing",
            msg: "Input should be a valid integer, unable to parse string as an integer",
        }),
        _ => Err(IntRejection {
            kind: "int_type",
            msg: "Input should be a valid integer",
        }),
    }
}

fn deserialize_lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    lax_int(&value).map_err(|bad| de::Error::custom(bad.msg))
}

// ── Response payload ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub success: bool,
    pub order_id: i64,
    pub item: String,
    pub quantity: i64,
    pub status: String,
}

impl OrderConfirmation {
    /// Echo the validated request back with the fixed id and status.
    pub fn processing(order: OrderRequest) -> Self {
        Self {
            success: true,
            order_id: PLACEHOLDER_ORDER_ID,
            item: order.item,
            quantity: order.quantity,
            status: STATUS_PROCESSING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn errors_for(body: Value) -> Vec<FieldError> {
        match body {
            Value::Object(map) => OrderRequest::field_errors(&map),
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn quantity_defaults_to_one() {
        let order: OrderRequest = serde_json::from_value(json!({ "item": "Widget" })).unwrap();
        assert_eq!(order.quantity, 1);
    }

    #[test]
    fn explicit_quantity_is_kept() {
        let order: OrderRequest =
            serde_json::from_value(json!({ "item": "Widget", "quantity": 3 })).unwrap();
        assert_eq!(order.quantity, 3);
    }

    #[test]
    fn numeric_string_quantity_is_coerced() {
        let order: OrderRequest =
            serde_json::from_value(json!({ "item": "Widget", "quantity": " 3 " })).unwrap();
        assert_eq!(order.quantity, 3);
    }

    #[test]
    fn item_is_required() {
        assert!(serde_json::from_value::<OrderRequest>(json!({ "quantity": 3 })).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let order: OrderRequest =
            serde_json::from_value(json!({ "item": "Widget", "coupon": "FREE" })).unwrap();
        assert_eq!(order.item, "Widget");
    }

    // ── lax_int ────────────────────────────────────────────────────────────────

    #[test]
    fn lax_int_accepts_integers_and_integer_strings() {
        assert_eq!(lax_int(&json!(7)), Ok(7));
        assert_eq!(lax_int(&json!("-2")), Ok(-2));
    }

    #[test]
    fn lax_int_rejects_other_shapes() {
        assert_eq!(lax_int(&json!("three")).unwrap_err().kind, "int_parsing");
        assert_eq!(lax_int(&json!(2.5)).unwrap_err().kind, "int_type");
        assert_eq!(lax_int(&json!(null)).unwrap_err().kind, "int_type");
        assert_eq!(lax_int(&json!(true)).unwrap_err().kind, "int_type");
    }

    // ── field_errors ───────────────────────────────────────────────────────────

    #[test]
    fn valid_body_has_no_field_errors() {
        assert!(errors_for(json!({ "item": "Widget", "quantity": "3" })).is_empty());
        assert!(errors_for(json!({ "item": "Widget" })).is_empty());
    }

    #[test]
    fn missing_item_and_bad_quantity_are_both_reported() {
        let errors = errors_for(json!({ "quantity": "x" }));
        let locs: Vec<Vec<String>> = errors.iter().map(|e| e.loc.clone()).collect();
        assert_eq!(locs, vec![vec!["body", "item"], vec!["body", "quantity"]]);
        assert_eq!(errors[0].kind, "missing");
        assert_eq!(errors[1].kind, "int_parsing");
    }

    #[test]
    fn non_string_item_is_a_string_type_error() {
        let errors = errors_for(json!({ "item": 5 }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body", "item"]);
        assert_eq!(errors[0].kind, "string_type");
    }

    #[test]
    fn confirmation_uses_fixed_id_and_status() {
        let confirmation = OrderConfirmation::processing(OrderRequest {
            item: "Gadget".to_string(),
            quantity: 7,
        });
        assert_eq!(
            serde_json::to_value(confirmation).unwrap(),
            json!({
                "success": true,
                "order_id": 42,
                "item": "Gadget",
                "quantity": 7,
                "status": "processing",
            })
        );
    }
}
