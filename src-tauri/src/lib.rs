use tauri::Manager;

pub mod commands;
pub mod config;
pub mod controller;
pub mod notifier;
pub mod opener;
pub mod storage;

#[cfg(test)]
mod testing;

use commands::AppState;
use controller::Controller;
use notifier::DialogNotifier;
use opener::SystemOpener;
use storage::store::RepoStore;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .clear_targets()
                .target(tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::Stdout,
                ))
                .target(tauri_plugin_log::Target::new(
                    tauri_plugin_log::TargetKind::Webview,
                ))
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_os::init())
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let handle = app.handle().clone();
            let notifier = DialogNotifier::new(handle.clone());
            let store = RepoStore::open(config::data_file_path(), &notifier);
            log::info!(
                "using {} with {} repositories",
                store.path().display(),
                store.len()
            );
            let controller = Controller::new(
                store,
                Box::new(notifier),
                Box::new(SystemOpener::new(handle)),
            );
            app.manage(AppState::new(controller));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_view,
            commands::select_row,
            commands::add_repo,
            commands::delete_selected,
            commands::open_repo,
            commands::open_guide
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
