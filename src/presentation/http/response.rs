// src/presentation/http/response.rs
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Uniform JSON wrapper for every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<D = (), M = ()> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<M>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<D> Envelope<D> {
    pub fn success(data: D) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            metadata: None,
            message: None,
        }
    }
}

impl<D, M> Envelope<D, M> {
    pub fn success_with_metadata(data: D, metadata: M) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            metadata: Some(metadata),
            message: None,
        }
    }
}

impl Envelope {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            metadata: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_has_no_data() {
        let value = serde_json::to_value(Envelope::error("nope")).unwrap();
        assert_eq!(value, json!({ "status": "error", "message": "nope" }));
    }

    #[test]
    fn success_envelope_omits_absent_members() {
        let value = serde_json::to_value(Envelope::success(json!({ "x": 1 }))).unwrap();
        assert_eq!(value, json!({ "status": "success", "data": { "x": 1 } }));

        let value =
            serde_json::to_value(Envelope::success_with_metadata(json!([]), json!({ "n": 0 })))
                .unwrap();
        assert_eq!(value["metadata"], json!({ "n": 0 }));
        assert!(value.get("message").is_none());
    }
}
