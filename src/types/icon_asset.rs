use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DAY_MARKER: &str = "_day";
const NIGHT_MARKER: &str = "_night";

/// Path used for the fallback asset when nothing in the catalog fits.
pub const FALLBACK_ICON_PATH: &str = "unknown.png";

/// A labeled icon image.
///
/// The label and the day/night flags are derived from the file name:
/// `partly_cloudy_night.png` becomes label `partly_cloudy`, night-only.
/// A file with neither marker is usable at any time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconAsset {
    pub path: PathBuf,
    pub cleaned_label: String,
    pub is_day: bool,
    pub is_night: bool,
}

impl IconAsset {
    /// Builds an asset from its file path. Returns `None` for paths without a file name.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let stem = path.file_stem()?.to_str()?;

        let (cleaned_label, is_day, is_night) = if let Some(label) = stem.strip_suffix(DAY_MARKER)
        {
            (label, true, false)
        } else if let Some(label) = stem.strip_suffix(NIGHT_MARKER) {
            (label, false, true)
        } else {
            (stem, false, false)
        };

        Some(Self {
            path: path.to_path_buf(),
            cleaned_label: cleaned_label.to_string(),
            is_day,
            is_night,
        })
    }

    /// The asset substituted when no catalog entry satisfies a request.
    pub fn fallback() -> Self {
        Self {
            path: PathBuf::from(FALLBACK_ICON_PATH),
            cleaned_label: "unknown".to_string(),
            is_day: false,
            is_night: false,
        }
    }

    /// Whether the file name does not contradict the requested time of day.
    pub fn suits(&self, is_night: bool) -> bool {
        if is_night {
            !self.is_day
        } else {
            !self.is_night
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}
