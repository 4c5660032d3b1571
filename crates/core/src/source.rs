//! Source reader: enumerates asset files and parses them into raw records.
//!
//! Both operations fail soft. Errors are reported to the observer and the
//! caller sees fewer files or fewer records, never an `Err`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::SourceError;
use crate::observer::SharedObserver;
use crate::types::RawAsset;

/// File name suffix recognised as an asset file (case-sensitive).
pub const ASSET_FILE_SUFFIX: &str = ".json";

/// Key under which an object-shaped file stores its asset array.
pub const ASSETS_KEY: &str = "assets";

/// Records parsed from one file, handed out one at a time.
pub type AssetRecords = std::vec::IntoIter<RawAsset>;

/// Reads asset files directly inside one directory.
#[derive(Clone)]
pub struct AssetSource {
    directory: PathBuf,
    observer: SharedObserver,
}

impl AssetSource {
    pub fn new(directory: impl Into<PathBuf>, observer: SharedObserver) -> Self {
        Self {
            directory: directory.into(),
            observer,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// List `*.json` entries in the directory, in directory-listing order.
    ///
    /// Returns an empty list when the directory cannot be enumerated.
    pub fn list_asset_files(&self) -> Vec<PathBuf> {
        match self.try_list_asset_files() {
            Ok(files) => {
                self.observer.directory_listed(&self.directory, files.len());
                files
            }
            Err(err) => {
                self.observer.directory_failed(&self.directory, &err);
                Vec::new()
            }
        }
    }

    /// Fallible form of [`list_asset_files`](Self::list_asset_files).
    pub fn try_list_asset_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        let entries = fs::read_dir(&self.directory)
            .map_err(|e| SourceError::from_dir_io(&self.directory, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::from_dir_io(&self.directory, e))?;
            let file_name = entry.file_name();
            // Names that are not valid UTF-8 cannot carry the suffix check.
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.ends_with(ASSET_FILE_SUFFIX) {
                files.push(self.directory.join(name));
            }
        }
        Ok(files)
    }

    /// Parse one file and hand out its records.
    ///
    /// The whole file is parsed up front. Any failure yields no records.
    pub fn read_asset_file(&self, path: &Path) -> AssetRecords {
        match try_read_asset_file(path) {
            Ok(records) => {
                self.observer.file_read(path, records.len());
                records.into_iter()
            }
            Err(err) => {
                self.observer.file_skipped(path, &err);
                Vec::new().into_iter()
            }
        }
    }

    /// Every record of every file, opening each file only once the previous
    /// one has been consumed.
    pub fn records(&self) -> impl Iterator<Item = RawAsset> + '_ {
        self.list_asset_files()
            .into_iter()
            .flat_map(move |path| self.read_asset_file(&path))
    }
}

/// Read and parse one asset file, returning its records or the reason it
/// was rejected.
pub fn try_read_asset_file(path: &Path) -> Result<Vec<RawAsset>, SourceError> {
    let bytes = fs::read(path).map_err(|e| SourceError::from_file_io(path, e))?;

    let document: Value = serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(ASSETS_KEY) {
            Some(Value::Array(items)) => items,
            _ => return Err(SourceError::UnexpectedFormat(path.to_path_buf())),
        },
        _ => return Err(SourceError::UnexpectedFormat(path.to_path_buf())),
    };

    Ok(items.into_iter().map(RawAsset::new).collect())
}
