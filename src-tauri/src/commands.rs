use std::sync::Mutex;

use tauri::State;

use crate::controller::{Controller, ViewState};

pub struct AppState {
    pub controller: Mutex<Controller>,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    fn with<F>(&self, f: F) -> Result<ViewState, String>
    where
        F: FnOnce(&mut Controller) -> ViewState,
    {
        let mut controller = self.controller.lock().map_err(|e| e.to_string())?;
        Ok(f(&mut controller))
    }
}

#[tauri::command]
pub fn get_view(state: State<'_, AppState>) -> Result<ViewState, String> {
    state.with(|c| c.view())
}

#[tauri::command]
pub fn select_row(state: State<'_, AppState>, index: Option<usize>) -> Result<ViewState, String> {
    state.with(|c| c.select(index))
}

#[tauri::command]
pub fn add_repo(state: State<'_, AppState>, url: String, guide: String) -> Result<ViewState, String> {
    state.with(|c| c.add_repo(&url, &guide))
}

#[tauri::command]
pub fn delete_selected(state: State<'_, AppState>) -> Result<ViewState, String> {
    state.with(|c| c.delete_selected())
}

#[tauri::command]
pub fn open_repo(state: State<'_, AppState>) -> Result<ViewState, String> {
    state.with(|c| c.open_repo())
}

#[tauri::command]
pub fn open_guide(state: State<'_, AppState>) -> Result<ViewState, String> {
    state.with(|c| c.open_guide())
}
