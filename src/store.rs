//! File-backed settings store.
//!
//! Persists the settings keys as `key=value` lines, one per key, rewriting the
//! whole file on every write. Unknown keys and malformed lines are skipped on
//! load so a hand-edited file never prevents startup.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use qibla_common::settings::{PlaceName, SettingKey, SettingsStore, StoreError, bounded_text};

pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<u8, String>,
}

impl FileStore {
    /// Open `path`, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err),
        };
        Ok(Self {
            path,
            values: parse(&text),
        })
    }

    /// Store at `path` that ignores whatever the file holds.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        let mut text = String::new();
        for key in SettingKey::ALL {
            if let Some(value) = self.values.get(&(key as u8)) {
                text.push_str(key.name());
                text.push('=');
                text.push_str(value);
                text.push('\n');
            }
        }
        fs::write(&self.path, text).map_err(|_| StoreError::WriteFailed)
    }
}

fn parse(text: &str) -> BTreeMap<u8, String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .filter_map(|(name, value)| SettingKey::from_name(name.trim()).map(|key| (key as u8, value.to_owned())))
        .collect()
}

impl SettingsStore for FileStore {
    fn read_int(
        &self,
        key: SettingKey,
    ) -> Option<i32> {
        if key.is_text() {
            return None;
        }
        self.values.get(&(key as u8))?.trim().parse().ok()
    }

    fn write_int(
        &mut self,
        key: SettingKey,
        value: i32,
    ) -> Result<(), StoreError> {
        if key.is_text() {
            return Err(StoreError::TypeMismatch(key));
        }
        self.values.insert(key as u8, value.to_string());
        self.flush()
    }

    fn read_text(
        &self,
        key: SettingKey,
    ) -> Option<PlaceName> {
        if !key.is_text() {
            return None;
        }
        self.values.get(&(key as u8)).map(|value| bounded_text(value))
    }

    fn write_text(
        &mut self,
        key: SettingKey,
        value: &str,
    ) -> Result<(), StoreError> {
        if !key.is_text() {
            return Err(StoreError::TypeMismatch(key));
        }
        // One line per key
        let value: String = value.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.values.insert(key as u8, value);
        self.flush()
    }
}
