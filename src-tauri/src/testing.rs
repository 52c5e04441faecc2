//! Recording doubles for the notifier and opener capabilities.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};

use crate::notifier::Notifier;
use crate::opener::Opener;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warn(String),
    Error(String),
}

#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                Notice::Warn(_) => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Warn(m) => Some(m),
                Notice::Error(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Warn(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices.lock().unwrap().push(Notice::Error(message.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenCall {
    Url(String),
    Path(PathBuf),
}

#[derive(Default, Clone)]
pub struct RecordingOpener {
    calls: Arc<Mutex<Vec<OpenCall>>>,
    failure: Option<String>,
}

impl RecordingOpener {
    /// Records calls but fails every one of them with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(reason.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<OpenCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: OpenCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(reason) = &self.failure {
            bail!("{reason}");
        }
        Ok(())
    }
}

impl Opener for RecordingOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        self.record(OpenCall::Url(url.to_string()))
    }

    fn open_path(&self, path: &Path) -> Result<()> {
        self.record(OpenCall::Path(path.to_path_buf()))
    }
}
