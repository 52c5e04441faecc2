use std::path::Path;

use anyhow::Result;

use crate::config::HTTP_PREFIX;

pub mod system;

pub use system::SystemOpener;

/// Hands targets to the operating system.
pub trait Opener: Send + Sync {
    /// Opens `url` in the default browser.
    fn open_url(&self, url: &str) -> Result<()>;
    /// Opens a local file with its default application.
    fn open_path(&self, path: &Path) -> Result<()>;
}

/// Where a guide points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideTarget<'a> {
    Url(&'a str),
    File(&'a Path),
}

impl<'a> GuideTarget<'a> {
    pub fn classify(guide: &'a str) -> Self {
        if guide.starts_with(HTTP_PREFIX) {
            GuideTarget::Url(guide)
        } else {
            GuideTarget::File(Path::new(guide))
        }
    }
}

pub fn open_guide(opener: &dyn Opener, guide: &str) -> Result<()> {
    match GuideTarget::classify(guide) {
        GuideTarget::Url(url) => opener.open_url(url),
        GuideTarget::File(path) => opener.open_path(path),
    }
}
