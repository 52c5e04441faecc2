use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub url: String,   // ex: "https://github.com/tauri-apps/tauri"
    pub guide: String, // ex: "https://v2.tauri.app" or "/home/me/notes/tauri.md"
}

impl Entry {
    pub fn new(url: impl Into<String>, guide: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            guide: guide.into(),
        }
    }
}
