use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::SelectedFile;

/// Shown when the endpoint answered with valid JSON that carries no report
/// text in any recognized field.
pub const FALLBACK_REPORT: &str = "No se pudo obtener el análisis";

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisClient {
    pub fn new() -> Self {
        // No request timeout: the upload is done when the transport says so.
        let client = Client::builder()
            .user_agent("datainsight/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Uploads the file as the single `data` part of a multipart form and
    /// returns the report text. An unrecognized response shape degrades to
    /// [`FALLBACK_REPORT`] rather than an error.
    pub async fn analyze(
        &self,
        endpoint: &str,
        file: &SelectedFile,
    ) -> Result<String, AnalysisError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| AnalysisError::Read {
                path: file.path.clone(),
                source,
            })?;

        tracing::info!(name = %file.name, size = bytes.len(), "uploading file for analysis");

        let form = Form::new().part("data", Part::bytes(bytes).file_name(file.name.clone()));

        let response = self.client.post(endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status));
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        Ok(extract_report_text(&data).unwrap_or_else(|| {
            tracing::warn!("analysis response had no recognized text field");
            FALLBACK_REPORT.to_string()
        }))
    }
}

/// First matching shape wins: `content.parts[0].text`, then top-level
/// `text`, then top-level `analysis`. Empty strings count as absent.
fn extract_report_text(data: &Value) -> Option<String> {
    if let Some(text) = data
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(non_empty_str)
    {
        return Some(text.to_string());
    }

    if let Some(text) = data.get("text").and_then(non_empty_str) {
        return Some(text.to_string());
    }

    data.get("analysis")
        .and_then(non_empty_str)
        .map(String::from)
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_nested_content_parts() {
        let data = json!({
            "content": { "parts": [{ "text": "desde parts" }] },
            "text": "desde text",
            "analysis": "desde analysis",
        });
        assert_eq!(extract_report_text(&data).as_deref(), Some("desde parts"));
    }

    #[test]
    fn falls_back_to_top_level_text() {
        let data = json!({ "text": "desde text", "analysis": "desde analysis" });
        assert_eq!(extract_report_text(&data).as_deref(), Some("desde text"));
    }

    #[test]
    fn analysis_field_alone_is_used() {
        let data = json!({ "analysis": "1. **Resumen**\nTodo bien." });
        assert_eq!(
            extract_report_text(&data).as_deref(),
            Some("1. **Resumen**\nTodo bien.")
        );
    }

    #[test]
    fn unrecognized_shape_yields_none() {
        let data = json!({ "status": "ok", "rows": 100 });
        assert_eq!(extract_report_text(&data), None);
    }

    #[test]
    fn empty_strings_fall_through() {
        let data = json!({
            "content": { "parts": [{ "text": "" }] },
            "text": "",
            "analysis": "el bueno",
        });
        assert_eq!(extract_report_text(&data).as_deref(), Some("el bueno"));
    }

    #[test]
    fn malformed_parts_are_skipped() {
        let data = json!({ "content": { "parts": "not an array" }, "text": "ok" });
        assert_eq!(extract_report_text(&data).as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn missing_file_reports_read_error() {
        let client = AnalysisClient::new();
        let file = SelectedFile {
            path: "/definitely/not/here.xlsx".into(),
            name: "here.xlsx".to_string(),
        };
        let err = client
            .analyze("http://127.0.0.1:9/webhook/Data", &file)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Read { .. }));
        assert_eq!(err.user_message(), "No se pudo leer el archivo seleccionado");
    }
}
