use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("analysis endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("response body was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Message shown in the status bar. The product speaks Spanish to the
    /// user; errors and logs stay English.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::UnsupportedFile(_) => {
                "Por favor sube un archivo Excel válido (.xlsx o .xls)"
            }
            AnalysisError::Read { .. } => "No se pudo leer el archivo seleccionado",
            AnalysisError::Status(_) => "Error al analizar el archivo",
            AnalysisError::Network(_) | AnalysisError::Json(_) => "Error al procesar el archivo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisError;
    use reqwest::StatusCode;

    #[test]
    fn a_server_failure_maps_to_the_analysis_error_message() {
        let err = AnalysisError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Error al analizar el archivo");
        assert_eq!(err.to_string(), "analysis endpoint returned HTTP 500 Internal Server Error");
    }

    #[test]
    fn a_bad_json_body_maps_to_the_processing_error_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("no es json").unwrap_err();
        let err = AnalysisError::from(json_err);
        assert_eq!(err.user_message(), "Error al procesar el archivo");
    }
}
