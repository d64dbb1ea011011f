use crate::icons::error::IconError;
use crate::types::icon_asset::IconAsset;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// The fixed, read-only set of icon assets.
///
/// Loaded once at startup and shared (usually behind an `Arc`) by every
/// resolver; nothing mutates it afterwards. Iteration order is the order
/// resolution ties are broken in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconCatalog {
    assets: Vec<IconAsset>,
}

impl IconCatalog {
    /// Enumerates the regular files of `dir` into a catalog, ordered by file name.
    ///
    /// Subdirectories are skipped. An empty directory gives an empty catalog, in
    /// which every resolution falls back.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::CatalogRead`] if the directory or one of its entries
    /// cannot be read.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, IconError> {
        let dir = dir.as_ref();
        let read_error = |e| IconError::CatalogRead(dir.to_path_buf(), e);

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            if entry.file_type().map_err(read_error)?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let catalog = Self::from_paths(paths);
        if catalog.is_empty() {
            warn!("Icon directory {} contains no icons", dir.display());
        } else {
            info!("Loaded {} icons from {}", catalog.len(), dir.display());
        }
        Ok(catalog)
    }

    /// Builds a catalog from explicit paths, keeping their order.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            assets: paths.into_iter().filter_map(IconAsset::from_path).collect(),
        }
    }

    pub fn assets(&self) -> &[IconAsset] {
        &self.assets
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconAsset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
