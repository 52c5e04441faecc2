use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use tauri::{AppHandle, Runtime};
use tauri_plugin_shell::ShellExt;

use super::Opener;

/// Opens URLs through the shell plugin and files through the platform's
/// file-association command.
pub struct SystemOpener<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> SystemOpener<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

fn file_open_command(path: &Path) -> Command {
    let platform = tauri_plugin_os::platform();
    if platform == "windows" {
        let mut c = Command::new("cmd");
        // Empty title, otherwise `start` treats a quoted path as the window title.
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if platform == "macos" {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    }
}

impl<R: Runtime> Opener for SystemOpener<R> {
    #[allow(deprecated)]
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("opening url {url}");
        self.app
            .shell()
            .open(url, None)
            .map_err(|e| anyhow!("{e}"))
    }

    fn open_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        log::info!("opening file {}", path.display());

        let mut cmd = file_open_command(path);
        let status = cmd
            .status()
            .with_context(|| format!("no application to open {}", path.display()))?;

        if !status.success() {
            bail!(
                "opening {} finished with a non-zero exit code: {:?}",
                path.display(),
                status.code()
            );
        }
        Ok(())
    }
}
