use serde::Serialize;
use serde_json::Value;

/// Validated body of an export request.
///
/// Elements of `files` are opaque; they are carried through untouched so the
/// client can build the archive from exactly what it sent.
#[derive(Debug)]
pub struct ExportRequest {
    pub files: Vec<Value>,
}

/// Response for a successful export
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub files: Vec<Value>,
}

impl From<ExportRequest> for ExportResponse {
    fn from(request: ExportRequest) -> Self {
        Self {
            files: request.files,
        }
    }
}

/// Error envelope returned on 4xx/5xx
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_keeps_file_order() {
        let request = ExportRequest {
            files: vec![json!({"name": "b.txt"}), json!({"name": "a.txt"}), json!(3)],
        };

        let body = serde_json::to_value(ExportResponse::from(request)).unwrap();
        assert_eq!(
            body,
            json!({"files": [{"name": "b.txt"}, {"name": "a.txt"}, 3]})
        );
    }

    #[test]
    fn test_response_preserves_element_key_order() {
        let element: Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":{"y":true,"x":null}}"#).unwrap();
        let response = ExportResponse {
            files: vec![element],
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"files":[{"zeta":1,"alpha":{"y":true,"x":null}}]}"#
        );
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Files array is required".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"error": "Files array is required"}));
    }
}
