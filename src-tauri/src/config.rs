use std::path::PathBuf;

/// File the repository list is persisted to, relative to the working directory.
pub const DATA_FILE: &str = "repos.json";

/// Every repository URL must start with this.
pub const GITHUB_PREFIX: &str = "https://github.com";

/// Guides starting with this are opened as URLs, anything else as a local file.
pub const HTTP_PREFIX: &str = "http";

pub fn data_file_path() -> PathBuf {
    PathBuf::from(DATA_FILE)
}
