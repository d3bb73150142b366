use serde::{Deserialize, Serialize};

/// A timeline entry as it appears in the data source.
///
/// Every field is optional so that sparse, hand-authored JSON still loads.
/// Display defaults are filled in once by [`Item::normalize`]; rendering
/// code never sees a `RawItem`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawItem {
    /// Identifier, display-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display-order label; the 1-based position when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num: Option<u32>,
    /// Category label, e.g. a time period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Accent color as a `#rrggbb` hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Softer companion color for the same accent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Body text; blank lines separate paragraphs, single newlines are
    /// line breaks within a paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Image URL; blank means none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Default accent pair applied to items that carry no colors of their own.
pub const DEFAULT_COLOR: &str = "#6f86ff";
pub const DEFAULT_SOFT: &str = "#dfe6ff";

/// Title shown for items that have none.
pub const UNTITLED: &str = "Untitled";

/// A normalized timeline entry.
///
/// `id` and `tag` stay optional: their fallback text differs by display
/// context (the detail overlay's id label vs the media placeholder name;
/// the node flag vs the period label vs the descriptive chip), so the
/// renderer decides per context. Everything else is fully populated here.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Option<String>,
    pub num: u32,
    pub tag: Option<String>,
    pub color: String,
    pub soft: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: Option<String>,
}

impl Item {
    /// Fill display defaults for one raw record. `position` is the item's
    /// 0-based index in the loaded list.
    pub fn normalize(raw: RawItem, position: usize) -> Self {
        Self {
            id: raw.id,
            num: raw.num.unwrap_or(position as u32 + 1),
            tag: raw.tag,
            color: raw.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            soft: raw.soft.unwrap_or_else(|| DEFAULT_SOFT.to_string()),
            title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
            summary: raw.summary.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            image: raw.image.filter(|url| !url.trim().is_empty()),
        }
    }
}
