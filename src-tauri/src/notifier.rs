use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Surfaces outcomes to the user. Warnings are for input the user can fix,
/// errors for failures of the file system or the OS.
pub trait Notifier: Send + Sync {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Shows every notice as a native message dialog.
pub struct DialogNotifier<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> DialogNotifier<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }

    fn show(&self, title: &str, kind: MessageDialogKind, message: &str) {
        // Non-blocking: commands run on the main thread, a blocking dialog would hang the loop.
        self.app
            .dialog()
            .message(message)
            .title(title)
            .kind(kind)
            .show(|_| {});
    }
}

impl<R: Runtime> Notifier for DialogNotifier<R> {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
        self.show("Warning", MessageDialogKind::Warning, message);
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
        self.show("Error", MessageDialogKind::Error, message);
    }
}
