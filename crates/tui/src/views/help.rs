use crate::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

pub fn render(frame: &mut Frame, area: Rect) {
    // Center the help overlay
    let popup_width = 52u16.min(area.width.saturating_sub(4));
    let popup_height = 18u16.min(area.height.saturating_sub(4));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Theme::block_accent()
        .title(" Keyboard Shortcuts ")
        .padding(Theme::PADDING_CARD);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::new().fg(Theme::ACCENT_YELLOW).bold();
    let desc_style = Style::new().fg(Theme::TEXT_CONTENT);
    let header_style = Style::new().fg(Theme::ACCENT_BLUE).bold();

    let lines = vec![
        Line::from(Span::styled("── Timeline ──", header_style)),
        Line::from(vec![
            Span::styled("  ←/→ h/l   ", key_style),
            Span::styled("Select the previous/next node", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Home/End  ", key_style),
            Span::styled("Jump to the first/last node", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", key_style),
            Span::styled("Open the detail overlay", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Space     ", key_style),
            Span::styled("Open the detail overlay", desc_style),
        ]),
        Line::raw(""),
        Line::from(Span::styled("── Detail overlay ──", header_style)),
        Line::from(vec![
            Span::styled("  ←/→ h/l   ", key_style),
            Span::styled("Show the previous/next item", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", key_style),
            Span::styled("Close the overlay", desc_style),
        ]),
        Line::raw(""),
        Line::from(Span::styled("── Global ──", header_style)),
        Line::from(vec![
            Span::styled("  ?         ", key_style),
            Span::styled("Toggle this help", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  q         ", key_style),
            Span::styled("Quit", desc_style),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::new().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
