use serde::{Serialize, Serializer};
use serde_json::Value;

/// Largest integer an IEEE-754 double represents exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

/// Serializes a JSON value into its canonical CBOR form.
///
/// Object keys are written in sorted order regardless of how the map keeps them,
/// and floats without a fractional part are written as integers, so `1.0` and
/// `1` have the same canonical form.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, String> {
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(&Canonical(value), &mut cbor)
        .map_err(|e| format!("Failed to serialize value for comparison: {e}"))?;
    Ok(cbor)
}

/// Structural equality of two JSON values after canonical serialization.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (canonical_bytes(a), canonical_bytes(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

struct Canonical<'a>(&'a Value);

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_F64_INT => {
                    serializer.serialize_i64(f as i64)
                }
                _ => n.serialize(serializer),
            },
            Value::Array(items) => serializer.collect_seq(items.iter().map(Canonical)),
            Value::Object(fields) => {
                let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(entries.into_iter().map(|(k, v)| (k, Canonical(v))))
            }
            other => other.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_structures_compare_by_value() {
        let a = json!({ "interval": { "value": 6, "unit": "Months" }, "tags": ["a", "b"] });
        let b = json!({ "tags": ["a", "b"], "interval": { "unit": "Months", "value": 6 } });
        assert!(values_equal(&a, &b));
    }

    #[test]
    fn test_array_order_matters() {
        assert!(!values_equal(&json!(["a", "b"]), &json!(["b", "a"])));
    }

    #[test]
    fn test_integral_floats_equal_integers() {
        assert!(values_equal(&json!(1.0), &json!(1)));
        assert!(!values_equal(&json!(1.5), &json!(1)));
    }

    #[test]
    fn test_distinct_types_are_not_equal() {
        assert!(!values_equal(&json!("1"), &json!(1)));
        assert!(!values_equal(&json!(null), &json!(false)));
        assert!(!values_equal(&json!({}), &json!([])));
    }
}
