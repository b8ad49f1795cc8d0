use std::path::PathBuf;

use crate::error::AnalysisError;

/// Suffix match is case-sensitive, as the upstream service documents it.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".xlsx", ".xls"];

/// The one file currently held for submission. Replaced, never merged, when
/// the user picks again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    /// Single admission point for every way a file can enter the app
    /// (picker selection, typed path).
    pub fn admit(path: PathBuf) -> Result<Self, AnalysisError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if !is_accepted_name(&name) {
            return Err(AnalysisError::UnsupportedFile(name));
        }

        Ok(Self { path, name })
    }
}

pub fn is_accepted_name(name: &str) -> bool {
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
