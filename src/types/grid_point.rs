use serde::{Deserialize, Serialize};
use std::fmt;

/// The forecast grid cell a latitude/longitude resolves to.
///
/// `region` is the forecast office code (e.g. "TOP"), `grid_x`/`grid_y` address
/// the cell within that office's grid. `display_name` is the "City, ST" label of
/// the nearest named place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub region: String,
    pub grid_x: u32,
    pub grid_y: u32,
    pub display_name: String,
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{},{} ({})",
            self.region, self.grid_x, self.grid_y, self.display_name
        )
    }
}
