use serde::Serialize;

use crate::notifier::Notifier;
use crate::opener::{self, Opener};
use crate::storage::{store::RepoStore, validation::ValidationError};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub index: usize,
    pub url: String,
    pub guide: String,
}

/// Everything the window needs to redraw after an action.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub rows: Vec<Row>,
    pub selected: Option<usize>,
    pub status: String,
    /// Set when the input fields should be emptied.
    pub clear_inputs: bool,
}

pub struct Controller {
    store: RepoStore,
    notifier: Box<dyn Notifier>,
    opener: Box<dyn Opener>,
    selected: Option<usize>,
    status: String,
}

impl Controller {
    pub fn new(store: RepoStore, notifier: Box<dyn Notifier>, opener: Box<dyn Opener>) -> Self {
        Self {
            store,
            notifier,
            opener,
            selected: None,
            status: String::new(),
        }
    }

    pub fn store(&self) -> &RepoStore {
        &self.store
    }

    /// The selected row, if it still names one.
    pub fn selection(&self) -> Option<usize> {
        self.selected.filter(|&i| i < self.store.len())
    }

    pub fn view(&self) -> ViewState {
        let rows = self
            .store
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| Row {
                index,
                url: entry.url.clone(),
                guide: entry.guide.clone(),
            })
            .collect();

        ViewState {
            rows,
            selected: self.selection(),
            status: self.status.clone(),
            clear_inputs: false,
        }
    }

    pub fn select(&mut self, index: Option<usize>) -> ViewState {
        self.selected = index;
        self.view()
    }

    pub fn add_repo(&mut self, url: &str, guide: &str) -> ViewState {
        let added = self.store.add(url, guide, self.notifier.as_ref());
        if added {
            self.status = "Repository added successfully".to_string();
        }
        ViewState {
            clear_inputs: added,
            ..self.view()
        }
    }

    pub fn delete_selected(&mut self) -> ViewState {
        let index = self.selection();
        if self.store.delete_at(index, self.notifier.as_ref()).is_some() {
            self.selected = None;
            self.status = "Repository deleted successfully".to_string();
        }
        self.view()
    }

    pub fn open_repo(&mut self) -> ViewState {
        let Some(entry) = self.selection().and_then(|i| self.store.get(i)) else {
            self.notifier.warn(&ValidationError::NothingSelected.to_string());
            return self.view();
        };

        match self.opener.open_url(&entry.url) {
            Ok(()) => self.status = "Opened repository in browser".to_string(),
            Err(e) => self
                .notifier
                .error(&format!("Failed to open repository: {e:#}")),
        }
        self.view()
    }

    pub fn open_guide(&mut self) -> ViewState {
        let Some(entry) = self.selection().and_then(|i| self.store.get(i)) else {
            self.notifier.warn(&ValidationError::NothingSelected.to_string());
            return self.view();
        };

        match opener::open_guide(self.opener.as_ref(), &entry.guide) {
            Ok(()) => self.status = "Opened guide".to_string(),
            Err(e) => self.notifier.error(&format!("Failed to open guide: {e:#}")),
        }
        self.view()
    }
}
