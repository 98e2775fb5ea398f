//! API DTOs

use serde::Deserialize;

/// Form for POST /CrossSiteScripting/attack4
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attack4Form {
    #[serde(default)]
    pub editor2: String,
}
