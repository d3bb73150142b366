use chronicle_core::view::{self, TimelineView};
use chronicle_core::{Item, Timeline};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Hit-test targets recorded by the renderer each frame, consumed by
/// mouse handling on the next event.
#[derive(Debug, Default)]
pub struct HitAreas {
    /// Visible node cards and the item index each one shows.
    pub nodes: Vec<(Rect, usize)>,
    pub strip_prev: Option<Rect>,
    pub strip_next: Option<Rect>,
    /// The detail overlay panel; clicks outside it close the overlay.
    pub detail_panel: Option<Rect>,
    pub detail_close: Option<Rect>,
    pub detail_prev: Option<Rect>,
    pub detail_next: Option<Rect>,
}

pub struct App {
    pub timeline: Timeline,
    pub source_label: String,
    /// True when the built-in placeholder list replaced the data source.
    pub used_fallback: bool,
    pub help_open: bool,
    /// Index of the first node card currently visible in the strip.
    pub strip_offset: usize,
    pub hit: HitAreas,
}

impl App {
    pub fn new(items: Vec<Item>, source_label: String, used_fallback: bool) -> Self {
        Self {
            timeline: Timeline::new(items),
            source_label,
            used_fallback,
            help_open: false,
            strip_offset: 0,
            hit: HitAreas::default(),
        }
    }

    /// Build the view-model for the current frame.
    pub fn view(&self) -> TimelineView {
        view::build(&self.timeline)
    }

    /// Scroll the strip so the active node stays visible given how many
    /// cards fit on screen.
    pub fn ensure_active_visible(&mut self, capacity: usize) {
        if capacity == 0 {
            return;
        }
        let active = self.timeline.active();
        if active < self.strip_offset {
            self.strip_offset = active;
        } else if active >= self.strip_offset + capacity {
            self.strip_offset = active + 1 - capacity;
        }
        let max_offset = self.timeline.len().saturating_sub(capacity);
        if self.strip_offset > max_offset {
            self.strip_offset = max_offset;
        }
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        // Help overlay: any key closes it
        if self.help_open {
            self.help_open = false;
            return false;
        }

        // The open overlay intercepts all navigation; Escape wins first.
        if self.timeline.detail_open() {
            match key {
                KeyCode::Esc => self.timeline.close_detail(),
                KeyCode::Left | KeyCode::Char('h') => self.timeline.detail_step(-1),
                KeyCode::Right | KeyCode::Char('l') => self.timeline.detail_step(1),
                _ => {}
            }
            return false;
        }

        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Left | KeyCode::Char('h') => self.timeline.step(-1),
            KeyCode::Right | KeyCode::Char('l') => self.timeline.step(1),
            KeyCode::Home => self.timeline.set_active(0),
            KeyCode::End => {
                let last = self.timeline.len() as isize - 1;
                self.timeline.set_active(last);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.timeline.open_detail(),
            _ => {}
        }
        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if self.help_open {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.help_open = false;
            }
            return false;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                if self.timeline.detail_open() {
                    if contains(self.hit.detail_close, at) {
                        self.timeline.close_detail();
                    } else if contains(self.hit.detail_prev, at) {
                        self.timeline.detail_step(-1);
                    } else if contains(self.hit.detail_next, at) {
                        self.timeline.detail_step(1);
                    } else if !contains(self.hit.detail_panel, at) {
                        self.timeline.close_detail();
                    }
                } else if contains(self.hit.strip_prev, at) {
                    self.timeline.step(-1);
                } else if contains(self.hit.strip_next, at) {
                    self.timeline.step(1);
                } else if let Some(index) = self.node_at(at) {
                    self.timeline.set_active(index as isize);
                    self.timeline.open_detail();
                }
            }
            MouseEventKind::ScrollUp if !self.timeline.detail_open() => self.timeline.step(-1),
            MouseEventKind::ScrollDown if !self.timeline.detail_open() => self.timeline.step(1),
            _ => {}
        }
        false
    }

    fn node_at(&self, at: Position) -> Option<usize> {
        self.hit
            .nodes
            .iter()
            .find(|(area, _)| area.contains(at))
            .map(|&(_, index)| index)
    }
}

fn contains(area: Option<Rect>, at: Position) -> bool {
    area.is_some_and(|a| a.contains(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::item::RawItem;

    fn app(n: usize) -> App {
        let items = (0..n)
            .map(|i| Item::normalize(RawItem::default(), i))
            .collect();
        App::new(items, "test.json".to_string(), false)
    }

    #[test]
    fn arrows_move_selection_while_overlay_closed() {
        let mut a = app(3);
        a.handle_key(KeyCode::Right);
        assert_eq!(a.timeline.active(), 1);
        a.handle_key(KeyCode::Left);
        assert_eq!(a.timeline.active(), 0);
        a.handle_key(KeyCode::Left);
        assert_eq!(a.timeline.active(), 0);
        assert!(!a.timeline.detail_open());
    }

    #[test]
    fn enter_and_space_open_the_overlay() {
        let mut a = app(3);
        a.handle_key(KeyCode::Enter);
        assert!(a.timeline.detail_open());
        a.handle_key(KeyCode::Esc);
        assert!(!a.timeline.detail_open());
        a.handle_key(KeyCode::Char(' '));
        assert!(a.timeline.detail_open());
    }

    #[test]
    fn arrows_route_to_the_overlay_while_open() {
        let mut a = app(3);
        a.handle_key(KeyCode::Enter);
        a.handle_key(KeyCode::Right);
        a.handle_key(KeyCode::Right);
        assert_eq!(a.timeline.active(), 2);
        assert!(a.timeline.detail_open());
        // clamped at the end
        a.handle_key(KeyCode::Right);
        assert_eq!(a.timeline.active(), 2);
    }

    #[test]
    fn escape_closes_the_overlay_before_anything_else() {
        let mut a = app(3);
        a.handle_key(KeyCode::Enter);
        assert!(!a.handle_key(KeyCode::Esc));
        assert!(!a.timeline.detail_open());
        assert_eq!(a.timeline.active(), 0);
    }

    #[test]
    fn q_quits_only_while_overlay_closed() {
        let mut a = app(3);
        a.handle_key(KeyCode::Enter);
        assert!(!a.handle_key(KeyCode::Char('q')));
        a.handle_key(KeyCode::Esc);
        assert!(a.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn home_and_end_jump_to_the_edges() {
        let mut a = app(5);
        a.handle_key(KeyCode::End);
        assert_eq!(a.timeline.active(), 4);
        a.handle_key(KeyCode::Home);
        assert_eq!(a.timeline.active(), 0);
    }

    #[test]
    fn help_overlay_swallows_the_next_key() {
        let mut a = app(3);
        a.handle_key(KeyCode::Char('?'));
        assert!(a.help_open);
        a.handle_key(KeyCode::Right);
        assert!(!a.help_open);
        assert_eq!(a.timeline.active(), 0);
    }

    #[test]
    fn overlay_walkthrough_matches_the_expected_states() {
        // 3 items: open on 0, step right twice, escape restores the strip.
        let mut a = app(3);
        a.handle_key(KeyCode::Enter);
        a.handle_key(KeyCode::Right);
        a.handle_key(KeyCode::Right);

        let view = a.view();
        let detail = view.detail.expect("overlay open");
        assert_eq!(detail.index, 2);
        assert!(detail.prev_enabled);
        assert!(!detail.next_enabled);

        a.handle_key(KeyCode::Esc);
        let view = a.view();
        assert!(view.detail.is_none());
        // strip keys work again
        a.handle_key(KeyCode::Left);
        assert_eq!(a.timeline.active(), 1);
    }

    #[test]
    fn click_on_a_node_selects_and_opens_it() {
        let mut a = app(3);
        a.hit.nodes = vec![
            (Rect::new(0, 5, 10, 5), 0),
            (Rect::new(10, 5, 10, 5), 1),
            (Rect::new(20, 5, 10, 5), 2),
        ];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 15,
            row: 7,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        a.handle_mouse(click);
        assert_eq!(a.timeline.active(), 1);
        assert!(a.timeline.detail_open());
    }

    #[test]
    fn click_outside_the_panel_closes_the_overlay() {
        let mut a = app(3);
        a.timeline.open_detail();
        a.hit.detail_panel = Some(Rect::new(10, 5, 40, 15));
        let outside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        a.handle_mouse(outside);
        assert!(!a.timeline.detail_open());
    }

    #[test]
    fn click_on_the_close_control_closes_the_overlay() {
        let mut a = app(3);
        a.timeline.open_detail();
        a.hit.detail_panel = Some(Rect::new(10, 5, 40, 15));
        a.hit.detail_close = Some(Rect::new(45, 5, 4, 1));
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 46,
            row: 5,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        a.handle_mouse(click);
        assert!(!a.timeline.detail_open());
    }

    #[test]
    fn click_inside_the_panel_keeps_the_overlay_open() {
        let mut a = app(3);
        a.timeline.open_detail();
        a.hit.detail_panel = Some(Rect::new(10, 5, 40, 15));
        let inside = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: 10,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        a.handle_mouse(inside);
        assert!(a.timeline.detail_open());
    }

    #[test]
    fn strip_scroll_keeps_active_node_visible() {
        let mut a = app(10);
        a.timeline.set_active(7);
        a.ensure_active_visible(3);
        assert_eq!(a.strip_offset, 5);
        a.timeline.set_active(1);
        a.ensure_active_visible(3);
        assert_eq!(a.strip_offset, 1);
    }
}
