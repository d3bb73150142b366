use crate::app::App;
use crate::theme::{self, Theme};
use chronicle_core::view::{NodeView, TimelineView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of one node card, borders included.
const CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 8;
const ARROW_WIDTH: u16 = 3;

pub fn render(frame: &mut Frame, app: &mut App, view: &TimelineView, area: Rect) {
    app.hit.nodes.clear();

    let [prev_area, cards_area, next_area] = Layout::horizontal([
        Constraint::Length(ARROW_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(ARROW_WIDTH),
    ])
    .areas(area);

    render_arrow(frame, prev_area, "◀", view.prev_enabled);
    render_arrow(frame, next_area, "▶", view.next_enabled);
    app.hit.strip_prev = Some(prev_area);
    app.hit.strip_next = Some(next_area);

    let capacity = ((cards_area.width / CARD_WIDTH) as usize).max(1);
    app.ensure_active_visible(capacity);

    let end = (app.strip_offset + capacity).min(view.nodes.len());
    let card_height = CARD_HEIGHT.min(cards_area.height);
    let y = cards_area.y + cards_area.height.saturating_sub(card_height) / 2;

    let mut x = cards_area.x;
    for node in &view.nodes[app.strip_offset..end] {
        let card = Rect::new(x, y, CARD_WIDTH, card_height).intersection(cards_area);
        if card.width == 0 || card.height == 0 {
            break;
        }
        render_card(frame, node, card);
        app.hit.nodes.push((card, node.index));
        x += CARD_WIDTH;
    }
}

fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str, enabled: bool) {
    let style = if enabled {
        Style::new().fg(Theme::ACCENT_BLUE).bold()
    } else {
        Style::new().fg(Theme::TEXT_DISABLED)
    };
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1).intersection(area);
    if row.height == 0 {
        return;
    }
    let p = Paragraph::new(Line::from(Span::styled(glyph, style))).alignment(Alignment::Center);
    frame.render_widget(p, row);
}

fn render_card(frame: &mut Frame, node: &NodeView, area: Rect) {
    let accent = theme::item_color(&node.color);

    let block = if node.selected {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(accent))
            .style(Style::new().bg(Theme::BG_SURFACE))
    } else {
        Theme::block_dim()
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 {
        return;
    }
    let width = inner.width as usize;

    let flag_style = if node.selected {
        Style::new().fg(accent)
    } else {
        Style::new().fg(Theme::TEXT_MUTED)
    };
    let title_style = if node.selected {
        Style::new().fg(Theme::TEXT_PRIMARY).bold()
    } else {
        Style::new().fg(Theme::TEXT_SECONDARY)
    };

    let lines = vec![
        Line::from(Span::styled(fit(&node.flag, width), flag_style)),
        Line::from(Span::styled(
            format!(" {} ", node.badge),
            Style::new().fg(Color::Black).bg(accent).bold(),
        )),
        Line::raw(""),
        Line::from(Span::styled(fit(&node.title, width), title_style)),
        Line::from(Span::styled(
            fit(&node.summary, width),
            Style::new().fg(Theme::TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Truncate to a display-cell width, appending an ellipsis when cut.
pub fn fit(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
