//! Saved seal templates, persisted as JSON in browser local storage.
//!
//! Storage is behind [`KeyValueStore`] so the template list logic runs in
//! native tests against an in-memory map. Unreadable stored data is treated
//! as an empty list rather than an error: a corrupted entry must never block
//! the seal editor from opening.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::TEMPLATE_STORAGE_KEY;
use crate::error::{StorageError, js_error_message};
use crate::seal::SealConfig;
use crate::seal::presets::SealTemplate;

/// String key/value persistence.
pub trait KeyValueStore {
    /// Read `key`. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's local storage.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when there is no window or storage is
    /// disabled (some privacy modes).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write(js_error_message(&e)))
    }
}

/// A named template saved by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTemplate {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub template: SealTemplate,
}

impl SavedTemplate {
    /// Restore this template's settings onto `config`, keeping its text.
    pub fn apply_to(&self, config: &mut SealConfig) {
        self.template.apply_to(config);
    }
}

/// The user's saved template list.
pub struct TemplateStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TemplateStore<S> {
    /// Template list under the default storage key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, TEMPLATE_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// All saved templates, oldest first. Missing or unreadable data yields
    /// an empty list.
    #[must_use]
    pub fn list(&self) -> Vec<SavedTemplate> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!("template storage unreadable: {err}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(templates) => templates,
            Err(err) => {
                log::warn!("discarding corrupt template list: {err}");
                Vec::new()
            }
        }
    }

    /// Look up one template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<SavedTemplate> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// Capture `config`'s settings under `name` and append to the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be encoded or written.
    pub fn save(&self, name: &str, config: &SealConfig) -> Result<SavedTemplate, StorageError> {
        let saved = SavedTemplate {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_owned(),
            template: SealTemplate::capture(config),
        };
        let mut templates = self.list();
        templates.push(saved.clone());
        self.write(&templates)?;
        log::debug!("saved template {:?} ({} total)", saved.name, templates.len());
        Ok(saved)
    }

    /// Remove the template with `id`. Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be encoded or written.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut templates = self.list();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Ok(false);
        }
        self.write(&templates)?;
        Ok(true)
    }

    fn write(&self, templates: &[SavedTemplate]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(templates)?;
        self.store.set(&self.key, &raw)
    }
}
