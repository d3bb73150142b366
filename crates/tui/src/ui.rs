use crate::app::App;
use crate::theme::Theme;
use crate::views::{detail, help, strip};
use chronicle_core::view::TimelineView;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, app: &mut App) {
    let view = app.view();

    let [header_area, body_area, progress_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, &view, header_area);
    strip::render(frame, app, &view, body_area);
    render_progress(frame, &view, progress_area);
    render_footer(frame, app, footer_area);

    // Overlays on top of everything
    if let Some(ref d) = view.detail {
        detail::render(frame, app, d);
    } else {
        app.hit.detail_panel = None;
        app.hit.detail_close = None;
        app.hit.detail_prev = None;
        app.hit.detail_next = None;
    }
    if app.help_open {
        help::render(frame, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, view: &TimelineView, area: Rect) {
    let block = Theme::block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = view.nodes.len();
    let position = app.timeline.active() + 1;

    let mut left_spans = vec![
        Span::styled(" chronicle ", Style::new().fg(Theme::BORDER_ACCENT).bold()),
        Span::styled("  ", Style::new()),
        Span::styled(
            app.source_label.clone(),
            Style::new().fg(Theme::TEXT_SECONDARY),
        ),
        Span::styled("  ", Style::new()),
        Span::styled(
            format!("{count} items"),
            Style::new().fg(Theme::TEXT_SECONDARY),
        ),
    ];
    if app.used_fallback {
        left_spans.push(Span::styled("  ", Style::new()));
        left_spans.push(Span::styled(
            " PLACEHOLDER ",
            Style::new().fg(Color::Black).bg(Theme::ACCENT_YELLOW).bold(),
        ));
    }
    let p = Paragraph::new(Line::from(left_spans)).alignment(Alignment::Left);
    frame.render_widget(p, inner);

    let right = Line::from(Span::styled(
        format!("{position}/{count} "),
        Style::new().fg(Theme::TEXT_SECONDARY),
    ));
    let p_right = Paragraph::new(right).alignment(Alignment::Right);
    frame.render_widget(p_right, inner);
}

fn render_progress(frame: &mut Frame, view: &TimelineView, area: Rect) {
    if area.width < 4 {
        return;
    }
    let usable = area.width.saturating_sub(2) as usize;
    let filled = ((view.progress_pct / 100.0) * usable as f64).round() as usize;
    let filled = filled.min(usable);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("━".repeat(filled), Style::new().fg(Theme::BAR_FILL)),
        Span::styled("━".repeat(usable - filled), Style::new().fg(Theme::BAR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::new().fg(Theme::TEXT_KEY);
    let desc_style = Style::new().fg(Theme::TEXT_KEY_DESC);

    let help = if app.timeline.detail_open() {
        Line::from(vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled("prev/next  ", desc_style),
            Span::styled("Esc ", key_style),
            Span::styled("close", desc_style),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled("select  ", desc_style),
            Span::styled("Enter ", key_style),
            Span::styled("open  ", desc_style),
            Span::styled("? ", key_style),
            Span::styled("help  ", desc_style),
            Span::styled("q ", key_style),
            Span::styled("quit", desc_style),
        ])
    };

    frame.render_widget(Paragraph::new(help), area);
}
