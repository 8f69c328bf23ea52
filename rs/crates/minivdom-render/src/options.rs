use serde::{Deserialize, Serialize};

/// Default position-id attribute name.
pub const DATA_ATTR_ID: &str = "data-reactid";

/// How position ids are handed out during a mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Every tagged node takes the next id in pre-order; ids are unique.
    #[default]
    Sequential,
    /// Historical numbering: array children get `id, id+1, ...` counted from
    /// their parent's id and a single child reuses its parent's id, so ids
    /// repeat across levels.
    Legacy,
}

/// Options controlling markup output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Attribute carrying the position id on every tagged node.
    pub id_attribute: String,
    pub ids: IdStrategy,
    /// HTML-escape text and attribute values.
    pub escape: bool,
    /// Omit closing tags (and children) for HTML void elements.
    pub void_elements: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            id_attribute: DATA_ATTR_ID.to_string(),
            ids: IdStrategy::Sequential,
            escape: false,
            void_elements: false,
        }
    }
}

impl RenderOptions {
    /// Parse options from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
