//! Request/response framing of the analyze endpoint, without the transport.
//!
//! A request is a JSON object with a `text` field. The response is either the
//! bare array of ranked entries or `{"error": "No text provided"}`.

use crate::error::AnalyzeError;
use crate::normalize::Normalizer;
use crate::ranking::ResultEntry;
use serde::{Deserialize, Serialize};

pub const NO_TEXT_PROVIDED: &str = "No text provided";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Entries(Vec<ResultEntry>),
    Error { error: String },
}

impl AnalyzeResponse {
    pub fn no_text() -> Self {
        AnalyzeResponse::Error {
            error: NO_TEXT_PROVIDED.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalyzeResponse::Error { .. })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, AnalyzeError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

pub fn handle_request(request: &AnalyzeRequest, normalizer: &dyn Normalizer) -> AnalyzeResponse {
    match &request.text {
        Some(text) => AnalyzeResponse::Entries(crate::analyze_text(text, normalizer)),
        None => AnalyzeResponse::no_text(),
    }
}

/// Parse a request body and answer it.
///
/// Bodies that are not JSON objects (`null`, arrays, strings) and objects
/// without a `text` string get the missing-text response. Invalid JSON or a
/// `text` of the wrong type is an error.
pub fn handle_json(body: &str, normalizer: &dyn Normalizer) -> Result<AnalyzeResponse, AnalyzeError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Ok(AnalyzeResponse::no_text());
    }
    let request: AnalyzeRequest = serde_json::from_value(value)?;
    Ok(handle_request(&request, normalizer))
}
