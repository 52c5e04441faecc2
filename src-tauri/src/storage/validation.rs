use thiserror::Error;

use crate::config::GITHUB_PREFIX;
use crate::storage::entry::Entry;

/// Input problems the user can fix. The `Display` text is what the warning dialog shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in both fields")]
    MissingField,
    #[error("Please enter a valid GitHub repository URL")]
    NotGithubUrl,
    #[error("Please select a repository to delete")]
    NothingToDelete,
    #[error("Please select a repository")]
    NothingSelected,
}

/// Trims both inputs and builds the entry they describe.
pub fn validate_entry(url: &str, guide: &str) -> Result<Entry, ValidationError> {
    let url = url.trim();
    let guide = guide.trim();

    if url.is_empty() || guide.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !url.starts_with(GITHUB_PREFIX) {
        return Err(ValidationError::NotGithubUrl);
    }

    Ok(Entry::new(url, guide))
}
