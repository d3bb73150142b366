use crate::app::App;
use crate::theme::{self, Theme};
use chronicle_core::view::{DetailView, MediaView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

/// Render the detail overlay for the active item on top of the strip.
pub fn render(frame: &mut Frame, app: &mut App, detail: &DetailView) {
    let area = frame.area();
    let popup_width = 72u16.min(area.width.saturating_sub(4));
    let popup_height = 24u16.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let accent = theme::item_color(&detail.badge_color);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(accent))
        .title_top(
            Line::from(Span::styled(" ✕ ", Style::new().fg(Theme::TEXT_SECONDARY)))
                .right_aligned(),
        )
        .padding(Theme::PADDING_CARD);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    app.hit.detail_panel = Some(popup_area);
    app.hit.detail_close = Some(
        Rect::new(popup_area.right().saturating_sub(5), popup_area.y, 4, 1)
            .intersection(popup_area),
    );

    if inner.height < 2 {
        return;
    }
    let [content_area, footer_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);

    render_content(frame, detail, accent, content_area);
    render_footer(frame, app, detail, footer_area);
}

fn render_content(frame: &mut Frame, detail: &DetailView, accent: Color, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", detail.badge),
                Style::new().fg(Color::Black).bg(accent).bold(),
            ),
            Span::raw(" "),
            Span::styled(
                detail.title.clone(),
                Style::new().fg(Theme::TEXT_PRIMARY).bold(),
            ),
        ]),
        Line::from(Span::styled(
            detail.summary.clone(),
            Style::new().fg(Theme::TEXT_SECONDARY),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", detail.period),
                Style::new().fg(Color::Black).bg(Theme::ACCENT_BLUE),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", detail.id_label),
                Style::new().fg(Theme::TEXT_SECONDARY).bg(Theme::BORDER_NORMAL),
            ),
            Span::raw(" "),
            Span::styled(detail.chip.clone(), Style::new().fg(Theme::TEXT_MUTED)),
        ]),
        Line::raw(""),
    ];

    for (i, paragraph) in detail.body.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        for line in &paragraph.lines {
            lines.push(Line::from(Span::styled(
                line.clone(),
                Style::new().fg(Theme::TEXT_CONTENT),
            )));
        }
    }

    lines.push(Line::raw(""));
    match &detail.media {
        MediaView::Image { url, alt } => lines.push(Line::from(vec![
            Span::styled("Image: ", Style::new().fg(Theme::TEXT_MUTED)),
            Span::styled(url.clone(), Style::new().fg(Theme::ACCENT_BLUE).underlined()),
            Span::styled(format!("  ({alt})"), Style::new().fg(Theme::TEXT_MUTED)),
        ])),
        MediaView::Placeholder { hint } => lines.push(Line::from(Span::styled(
            format!("[ image placeholder: {hint} ]"),
            Style::new().fg(Theme::TEXT_MUTED),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_footer(frame: &mut Frame, app: &mut App, detail: &DetailView, area: Rect) {
    let enabled = Style::new().fg(Theme::ACCENT_BLUE).bold();
    let disabled = Style::new().fg(Theme::TEXT_DISABLED);

    let prev_rect = Rect::new(area.x, area.y, 8, 1).intersection(area);
    let next_rect = Rect::new(area.right().saturating_sub(8), area.y, 8, 1).intersection(area);

    let prev_style = if detail.prev_enabled { enabled } else { disabled };
    let next_style = if detail.next_enabled { enabled } else { disabled };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("◀ prev", prev_style))),
        prev_rect,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("next ▶", next_style)))
            .alignment(Alignment::Right),
        next_rect,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Esc ", Style::new().fg(Theme::TEXT_KEY)),
            Span::styled("close", Style::new().fg(Theme::TEXT_KEY_DESC)),
        ]))
        .alignment(Alignment::Center),
        area,
    );

    app.hit.detail_prev = Some(prev_rect);
    app.hit.detail_next = Some(next_rect);
}
