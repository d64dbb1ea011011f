use crate::icons::catalog::IconCatalog;
use crate::icons::error::IconError;
use crate::types::icon_asset::IconAsset;
use log::debug;
use std::sync::Arc;

/// Finds the catalog icon whose label best matches a forecast condition.
///
/// Resolution is a pure function of the label, the day/night flag and the
/// catalog, so identical requests always return the same asset.
#[derive(Debug, Clone)]
pub struct IconResolver {
    catalog: Arc<IconCatalog>,
    fallback: IconAsset,
}

impl IconResolver {
    /// Creates a resolver over `catalog` that falls back to [`IconAsset::fallback`].
    pub fn new(catalog: Arc<IconCatalog>) -> Self {
        Self {
            catalog,
            fallback: IconAsset::fallback(),
        }
    }

    /// Replaces the asset returned by [`resolve_or_fallback`](Self::resolve_or_fallback) on a miss.
    pub fn with_fallback(mut self, fallback: IconAsset) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    pub fn fallback(&self) -> &IconAsset {
        &self.fallback
    }

    /// Returns the best match for `label` among assets suitable for the time of day.
    ///
    /// Assets marked `_day` are skipped for night requests and `_night` ones for
    /// day requests. Each remaining asset is scored by normalized Levenshtein
    /// similarity between its cleaned label and `label`, compared
    /// case-insensitively with `_` and `-` read as spaces. The strictly highest
    /// score wins; equal scores keep the earlier catalog entry.
    ///
    /// # Errors
    ///
    /// [`IconError::NotFound`] if no asset passes the day/night filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use nws_forecast::{IconCatalog, IconResolver};
    /// use std::sync::Arc;
    ///
    /// let catalog = IconCatalog::from_paths(["sunny_day.png", "sunny_night.png", "rain.png"]);
    /// let resolver = IconResolver::new(Arc::new(catalog));
    ///
    /// let icon = resolver.resolve("Sunny", false).unwrap();
    /// assert_eq!(icon.file_name(), Some("sunny_day.png"));
    /// ```
    pub fn resolve(&self, label: &str, is_night: bool) -> Result<&IconAsset, IconError> {
        let wanted = normalize(label);
        let mut best: Option<(&IconAsset, f64)> = None;

        for asset in self.catalog.iter().filter(|asset| asset.suits(is_night)) {
            let score = strsim::normalized_levenshtein(&wanted, &normalize(&asset.cleaned_label));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((asset, score));
            }
        }

        match best {
            Some((asset, score)) => {
                debug!(
                    "Resolved '{}' ({}) to {} with similarity {:.3}",
                    label,
                    if is_night { "night" } else { "day" },
                    asset.path.display(),
                    score
                );
                Ok(asset)
            }
            None => Err(IconError::NotFound {
                label: label.to_string(),
                is_night,
            }),
        }
    }

    /// Like [`resolve`](Self::resolve), substituting the fallback asset on a miss.
    pub fn resolve_or_fallback(&self, label: &str, is_night: bool) -> &IconAsset {
        self.resolve(label, is_night).unwrap_or_else(|e| {
            debug!("{}; using {}", e, self.fallback.path.display());
            &self.fallback
        })
    }
}

fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
}
