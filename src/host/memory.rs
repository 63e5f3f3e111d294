//! In-process host implementations.
//!
//! Used by the test suite and by anything that wants to drive the theme
//! manager or the deletion guard outside a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{ConfirmDialog, PreferenceStore, ThemeDocument};
use crate::error::HostError;

/// Key-value store that can be told to fail like disabled localStorage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one key already set.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Stored value, bypassing the failure switches.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.fail_reads.get() {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.fail_writes.get() {
            return Err(HostError::Storage(format!("quota exceeded writing {key}")));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Root element attributes plus a set of elements with text.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    root: RefCell<HashMap<String, String>>,
    elements: RefCell<HashMap<String, String>>,
    root_writes: Cell<usize>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing an element with `id` and empty text.
    pub fn with_element(id: &str) -> Self {
        let doc = Self::default();
        doc.insert_element(id);
        doc
    }

    /// Add an element, as if markup appeared after the early script ran.
    pub fn insert_element(&self, id: &str) {
        self.elements
            .borrow_mut()
            .entry(id.to_string())
            .or_default();
    }

    /// Text of an element, `None` if it does not exist.
    pub fn element_text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }

    /// Number of set/remove calls made on root attributes.
    pub fn root_writes(&self) -> usize {
        self.root_writes.get()
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        self.root_writes.set(self.root_writes.get() + 1);
        self.root
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_root_attribute(&self, name: &str) -> Result<(), HostError> {
        self.root_writes.set(self.root_writes.get() + 1);
        self.root.borrow_mut().remove(name);
        Ok(())
    }

    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, HostError> {
        match self.elements.borrow_mut().get_mut(id) {
            Some(current) => {
                *current = text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// What a scripted dialog does when asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Accept,
    Dismiss,
    /// The dialog could not be shown at all.
    Fail,
}

/// Dialog that answers from a script and records every prompt.
#[derive(Debug)]
pub struct ScriptedDialog {
    answer: Cell<DialogAnswer>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedDialog {
    pub fn new(answer: DialogAnswer) -> Self {
        Self {
            answer: Cell::new(answer),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn answer_with(&self, answer: DialogAnswer) {
        self.answer.set(answer);
    }

    /// Messages shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmDialog for ScriptedDialog {
    fn confirm(&self, message: &str) -> Result<bool, HostError> {
        self.prompts.borrow_mut().push(message.to_string());
        match self.answer.get() {
            DialogAnswer::Accept => Ok(true),
            DialogAnswer::Dismiss => Ok(false),
            DialogAnswer::Fail => Err(HostError::Dialog("no window".to_string())),
        }
    }
}
