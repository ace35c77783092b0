//! Provider notification payloads.

use serde_json::Value;

use super::WebhookError;

/// The fields of a Mercado Pago notification this server acts on.
///
/// Bodies are loosely typed: the provider sends several notification shapes
/// (`type`/`action` for webhooks, `topic` for legacy IPN), and ids arrive as
/// either strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: Option<String>,
    pub action: Option<String>,
    pub data_id: Option<String>,
}

impl Notification {
    /// Reads a notification from the raw body and the `data.id` query value.
    ///
    /// The query value wins because it is the one the signature covers.
    pub fn parse(body: &[u8], query_data_id: Option<&str>) -> Result<Self, WebhookError> {
        let value: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(body).map_err(|e| WebhookError::ParseError(e.to_string()))?
        };

        let kind = string_field(&value, "type").or_else(|| string_field(&value, "topic"));
        let action = string_field(&value, "action");
        let data_id = query_data_id
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| value.get("data").and_then(|d| id_value(d.get("id"))));

        Ok(Self {
            kind,
            action,
            data_id,
        })
    }

    /// True for notifications about a payment.
    pub fn is_payment(&self) -> bool {
        self.kind.as_deref() == Some("payment")
    }

    /// Payment id to fetch, required for payment notifications.
    pub fn payment_id(&self) -> Result<&str, WebhookError> {
        self.data_id
            .as_deref()
            .ok_or(WebhookError::MissingField("data.id"))
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn id_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payment_notification() {
        let body = br#"{"type":"payment","action":"payment.updated","data":{"id":"123"}}"#;

        let n = Notification::parse(body, None).unwrap();

        assert!(n.is_payment());
        assert_eq!(n.action.as_deref(), Some("payment.updated"));
        assert_eq!(n.payment_id().unwrap(), "123");
    }

    #[test]
    fn numeric_id_is_stringified() {
        let body = br#"{"type":"payment","data":{"id":456}}"#;
        let n = Notification::parse(body, None).unwrap();
        assert_eq!(n.data_id.as_deref(), Some("456"));
    }

    #[test]
    fn query_id_takes_precedence() {
        let body = br#"{"type":"payment","data":{"id":"1"}}"#;
        let n = Notification::parse(body, Some("2")).unwrap();
        assert_eq!(n.data_id.as_deref(), Some("2"));
    }

    #[test]
    fn legacy_topic_is_read() {
        let body = br#"{"topic":"merchant_order","resource":"https://x/1"}"#;
        let n = Notification::parse(body, None).unwrap();
        assert!(!n.is_payment());
        assert_eq!(n.payment_id(), Err(WebhookError::MissingField("data.id")));
    }

    #[test]
    fn empty_body_parses_as_empty_notification() {
        let n = Notification::parse(b"", None).unwrap();
        assert!(n.kind.is_none());
        assert!(n.data_id.is_none());
    }

    #[test]
    fn invalid_json_fails() {
        assert!(matches!(
            Notification::parse(b"not json", None),
            Err(WebhookError::ParseError(_))
        ));
    }
}
