use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signature over the create-payment-link request: HMAC-SHA256 of the
/// canonical ordered query string
/// `amount=...&cancelUrl=...&description=...&orderCode=...&returnUrl=...`.
pub fn sign_payment_request(
    amount: i64,
    cancel_url: &str,
    description: &str,
    order_code: i64,
    return_url: &str,
    checksum_key: &str,
) -> String {
    let canonical = format!(
        "amount={amount}&cancelUrl={cancel_url}&description={description}&orderCode={order_code}&returnUrl={return_url}"
    );
    hmac_hex(&canonical, checksum_key)
}

/// Signature over a webhook payload object: keys sorted lexicographically,
/// values canonicalized (null and the strings "null"/"undefined" become
/// empty; arrays are JSON-stringified after recursively sorting their own
/// keys), joined as `key=value&key=value`.
pub fn sign_payload(data: &Value, checksum_key: &str) -> String {
    hmac_hex(&canonical_query(data), checksum_key)
}

/// Constant-time verification of a webhook signature.
pub fn verify_signature(data: &Value, checksum_key: &str, signature: &str) -> bool {
    let canonical = canonical_query(data);

    let Ok(mut mac) = HmacSha256::new_from_slice(checksum_key.as_bytes()) else {
        return false;
    };
    mac.update(canonical.as_bytes());

    let Ok(expected) = hex::decode(signature) else {
        return false;
    };

    mac.verify_slice(&expected).is_ok()
}

fn hmac_hex(payload: &str, checksum_key: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(checksum_key.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn canonical_query(data: &Value) -> String {
    let Value::Object(map) = data else {
        return String::new();
    };

    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| format!("{key}={}", canonical_value(&map[key])))
        .collect::<Vec<_>>()
        .join("&")
}

fn canonical_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) if s == "null" || s == "undefined" => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let sorted: Vec<Value> = items.iter().map(sort_keys_deep).collect();
            serde_json::to_string(&sorted).unwrap_or_default()
        }
        Value::Object(_) => serde_json::to_string(&sort_keys_deep(value)).unwrap_or_default(),
    }
}

fn sort_keys_deep(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys_deep(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys_deep).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &str = "test-checksum-key";

    #[test]
    fn payload_signature_round_trips() {
        let data = json!({
            "orderCode": 123,
            "amount": 150_000,
            "description": "Thanh toan don hang",
            "status": "PAID",
        });

        let signature = sign_payload(&data, KEY);
        assert!(verify_signature(&data, KEY, &signature));
    }

    #[test]
    fn tampered_field_fails_verification() {
        let data = json!({ "orderCode": 123, "amount": 150_000 });
        let signature = sign_payload(&data, KEY);

        let tampered = json!({ "orderCode": 123, "amount": 999_999 });
        assert!(!verify_signature(&tampered, KEY, &signature));
    }

    #[test]
    fn signature_is_independent_of_key_insertion_order() {
        let a = json!({ "b": 1, "a": 2, "c": "x" });
        let b = json!({ "c": "x", "a": 2, "b": 1 });
        assert_eq!(sign_payload(&a, KEY), sign_payload(&b, KEY));
    }

    #[test]
    fn null_like_values_normalize_to_empty() {
        let with_null = json!({ "a": null, "b": "1" });
        let with_string_null = json!({ "a": "null", "b": "1" });
        let with_undefined = json!({ "a": "undefined", "b": "1" });

        let expected = sign_payload(&json!({ "a": "", "b": "1" }), KEY);
        assert_eq!(sign_payload(&with_null, KEY), expected);
        assert_eq!(sign_payload(&with_string_null, KEY), expected);
        assert_eq!(sign_payload(&with_undefined, KEY), expected);
    }

    #[test]
    fn arrays_are_stringified_with_sorted_keys() {
        let a = json!({ "items": [{ "z": 1, "a": 2 }] });
        let b = json!({ "items": [{ "a": 2, "z": 1 }] });
        assert_eq!(sign_payload(&a, KEY), sign_payload(&b, KEY));
    }

    #[test]
    fn request_signature_is_deterministic() {
        let first = sign_payment_request(150_000, "https://x/cancel", "don 1", 1, "https://x/ok", KEY);
        let second = sign_payment_request(150_000, "https://x/cancel", "don 1", 1, "https://x/ok", KEY);
        assert_eq!(first, second);

        let other = sign_payment_request(150_001, "https://x/cancel", "don 1", 1, "https://x/ok", KEY);
        assert_ne!(first, other);
    }

    #[test]
    fn garbage_signature_is_rejected() {
        let data = json!({ "orderCode": 1 });
        assert!(!verify_signature(&data, KEY, "not-hex"));
        assert!(!verify_signature(&data, KEY, "deadbeef"));
    }
}
