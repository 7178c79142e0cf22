use serde_json::{Map, Value};

use crate::modules::content::application::ports::outgoing::{
    FilePart, GatewayError, MultipartBody, RequestBody,
};
use crate::modules::content::domain::{Resource, ValidationError};

/// Accepts a JSON array, a single document (the profile) or an empty body.
pub fn decode_records<R: Resource>(body: Value) -> Result<Vec<R>, GatewayError> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item)
                    .map_err(|e| GatewayError::InvalidPayload(format!("{}: {e}", R::KIND)))
            })
            .collect(),
        Value::Object(_) => decode_record(body).map(|r| vec![r]),
        other => Err(GatewayError::InvalidPayload(format!(
            "{}: expected a list, got {other}",
            R::KIND
        ))),
    }
}

pub fn decode_record<R: Resource>(body: Value) -> Result<R, GatewayError> {
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidPayload(format!("{}: {e}", R::KIND)))
}

/// Rejects upload fields the resource does not take files for, blank file
/// names and content types that are not a valid media type.
pub fn check_uploads<R: Resource>(uploads: &[FilePart]) -> Result<(), ValidationError> {
    let accepted = R::KIND.file_fields();
    for upload in uploads {
        if !accepted.contains(&upload.field.as_str()) {
            return Err(ValidationError::UnsupportedUpload {
                kind: R::KIND,
                field: upload.field.clone(),
            });
        }
        if upload.file_name.trim().is_empty() {
            return Err(ValidationError::InvalidUpload(
                upload.field.clone(),
                "file name is required".to_string(),
            ));
        }
        if upload.content_type.parse::<mime::Mime>().is_err() {
            return Err(ValidationError::InvalidUpload(
                upload.field.clone(),
                format!("invalid content type '{}'", upload.content_type),
            ));
        }
    }
    Ok(())
}

/// JSON when there is nothing to upload, multipart otherwise.
///
/// `_id` never travels in the body; it belongs in the path.
pub fn encode_record_body<R: Resource>(
    record: &R,
    uploads: Vec<FilePart>,
) -> Result<RequestBody, GatewayError> {
    let mut document = match serde_json::to_value(record)
        .map_err(|e| GatewayError::InvalidPayload(e.to_string()))?
    {
        Value::Object(map) => map,
        other => {
            return Err(GatewayError::InvalidPayload(format!(
                "{} did not serialize to an object: {other}",
                R::KIND
            )))
        }
    };
    document.remove("_id");

    if uploads.is_empty() {
        return Ok(RequestBody::Json(Value::Object(document)));
    }

    Ok(RequestBody::Multipart(MultipartBody {
        fields: text_fields(document),
        files: uploads,
    }))
}

fn text_fields(document: Map<String, Value>) -> Vec<(String, String)> {
    document
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            Value::Bool(b) => Some((key, b.to_string())),
            Value::Number(n) => Some((key, n.to_string())),
            // Lists and nested objects travel as JSON text parts.
            nested => Some((key, nested.to_string())),
        })
        .collect()
}
