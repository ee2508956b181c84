//! # Gemini Analyzer
//!
//! [`PackageAnalyzer`] backed by the Gemini `generateContent` endpoint with
//! a JSON response schema.
//!
//! ## Request Shape
//! ```text
//! POST {base_url}/{api_version}/models/{model}:generateContent?key=…
//! {
//!   "contents": [{ "parts": [{ "text": "<prompt with description>" }] }],
//!   "generationConfig": {
//!     "responseMimeType": "application/json",
//!     "responseSchema": { OBJECT: weightEstimate, dimensionEstimate,
//!                                 category, handlingAdvice }
//!   }
//! }
//! ```
//!
//! The text of the first candidate is itself JSON and is parsed into
//! [`PackageAnalysis`]. No retries.

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::{json, Value};
use tracing::debug;

use crate::analyzer::{PackageAnalysis, PackageAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};

/// Gemini-backed description analyzer.
#[derive(Debug, Clone)]
pub struct GeminiAnalyzer {
    config: AnalysisConfig,
    api_key: String,
    http_client: Client,
}

impl GeminiAnalyzer {
    /// Builds the analyzer and its HTTP client.
    ///
    /// ## Errors
    /// - [`AnalysisError::MissingApiKey`] if no key is configured
    /// - [`AnalysisError::InvalidConfig`] if the config fails validation
    pub fn new(config: AnalysisConfig) -> AnalysisResult<Self> {
        config.validate()?;

        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AnalysisError::MissingApiKey)?;

        let http_client = ClientBuilder::new()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| AnalysisError::InvalidConfig(format!("failed to create HTTP client: {}", e)))?;

        Ok(GeminiAnalyzer {
            config,
            api_key,
            http_client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Builds the JSON body for one description.
    pub fn build_request_body(description: &str) -> Value {
        let prompt = format!(
            "Analyze the following package description for shipping purposes. \
             Estimate weight and dimensions if implied, identify the category, \
             and provide handling advice.\n\nDescription: \"{}\"",
            description
        );

        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "weightEstimate": {
                            "type": "STRING",
                            "description": "Estimated weight (e.g., '2kg')"
                        },
                        "dimensionEstimate": {
                            "type": "STRING",
                            "description": "Estimated dimensions (e.g., '30x20x10cm')"
                        },
                        "category": {
                            "type": "STRING",
                            "description": "Category of the item (e.g., Electronics, Clothing)"
                        },
                        "handlingAdvice": {
                            "type": "STRING",
                            "description": "Specific handling advice (e.g., Fragile, Keep Dry)"
                        }
                    }
                }
            }
        })
    }

    /// Concatenated text of the first candidate's parts, if any.
    fn candidate_text(response: &Value) -> Option<String> {
        let parts = response
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl PackageAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, description: &str) -> AnalysisResult<Option<PackageAnalysis>> {
        let body = Self::build_request_body(description);

        debug!(model = %self.config.model, "Sending package analysis request");
        let response = self
            .http_client
            .post(self.config.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        debug!(%status, "Package analysis response received");

        if !status.is_success() {
            return Err(AnalysisError::Http {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let json_response: Value = serde_json::from_str(&response_text)?;
        if let Some(api_error) = json_response.get("error") {
            return Err(AnalysisError::Parse(format!("service reported an error: {}", api_error)));
        }

        match Self::candidate_text(&json_response) {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = GeminiAnalyzer::new(AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));

        let err = GeminiAnalyzer::new(AnalysisConfig::new("   ")).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
    }

    #[test]
    fn test_new_validates_config() {
        let config = AnalysisConfig::new("key").with_base_url("nope");
        assert!(matches!(
            GeminiAnalyzer::new(config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = GeminiAnalyzer::build_request_body("a box of books");

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Description: \"a box of books\""));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        let properties = config["responseSchema"]["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 4);
        assert!(properties.contains_key("handlingAdvice"));
    }

    #[test]
    fn test_candidate_text_joins_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"category\":" }, { "text": "\"Books\"}" }] }
            }]
        });
        assert_eq!(
            GeminiAnalyzer::candidate_text(&response).as_deref(),
            Some("{\"category\":\"Books\"}")
        );
    }

    #[test]
    fn test_candidate_text_missing() {
        assert_eq!(GeminiAnalyzer::candidate_text(&json!({})), None);
        assert_eq!(GeminiAnalyzer::candidate_text(&json!({ "candidates": [] })), None);
        let empty = json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] });
        assert_eq!(GeminiAnalyzer::candidate_text(&empty), None);
    }
}
