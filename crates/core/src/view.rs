//! Pure view-model for the timeline strip and the detail overlay.
//!
//! [`build`] maps the current [`Timeline`] state to plain data a renderer
//! can draw directly, which keeps every display rule testable without a
//! terminal.

use crate::content::{self, Paragraph};
use crate::item::Item;
use crate::state::Timeline;

/// Render instructions for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView {
    pub nodes: Vec<NodeView>,
    pub progress_pct: f64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Present iff the detail overlay is open.
    pub detail: Option<DetailView>,
}

/// One selectable node in the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub index: usize,
    pub selected: bool,
    /// Tag label above the node; empty when the item has no tag.
    pub flag: String,
    pub badge: String,
    pub color: String,
    pub soft: String,
    pub title: String,
    pub summary: String,
}

/// Full detail for the active item.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub index: usize,
    pub badge: String,
    pub badge_color: String,
    pub title: String,
    pub summary: String,
    pub body: Vec<Paragraph>,
    /// Tag, or a literal placeholder when absent.
    pub period: String,
    /// Id, or a literal placeholder when absent.
    pub id_label: String,
    /// Tag-based description, or a generic resource label.
    pub chip: String,
    pub media: MediaView,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Media area content for the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaView {
    Image { url: String, alt: String },
    /// No usable image; `hint` names the file the author could add.
    Placeholder { hint: String },
}

const NO_VALUE: &str = "—";

pub fn build(timeline: &Timeline) -> TimelineView {
    let active = timeline.active();
    let nodes = timeline
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| NodeView {
            index,
            selected: index == active,
            flag: item.tag.clone().unwrap_or_default(),
            badge: item.num.to_string(),
            color: item.color.clone(),
            soft: item.soft.clone(),
            title: item.title.clone(),
            summary: item.summary.clone(),
        })
        .collect();

    let prev_enabled = !timeline.at_start();
    let next_enabled = !timeline.at_end();

    let detail = if timeline.detail_open() {
        timeline
            .active_item()
            .map(|item| build_detail(item, active, prev_enabled, next_enabled))
    } else {
        None
    };

    TimelineView {
        nodes,
        progress_pct: timeline.progress_pct(),
        prev_enabled,
        next_enabled,
        detail,
    }
}

fn build_detail(
    item: &Item,
    index: usize,
    prev_enabled: bool,
    next_enabled: bool,
) -> DetailView {
    let media = match &item.image {
        Some(url) => MediaView::Image {
            url: url.clone(),
            alt: item.title.clone(),
        },
        None => MediaView::Placeholder {
            hint: format!("{}.jpg/png", item.id.as_deref().unwrap_or("no-id")),
        },
    };

    DetailView {
        index,
        badge: item.num.to_string(),
        badge_color: item.color.clone(),
        title: item.title.clone(),
        summary: item.summary.clone(),
        body: content::format_content(&item.content),
        period: item.tag.clone().unwrap_or_else(|| NO_VALUE.to_string()),
        id_label: item.id.clone().unwrap_or_else(|| NO_VALUE.to_string()),
        chip: match &item.tag {
            Some(tag) => format!("Period: {tag}"),
            None => "Resource".to_string(),
        },
        media,
        prev_enabled,
        next_enabled,
    }
}
