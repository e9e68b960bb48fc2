use std::io;
use std::time::Instant;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use crate::classify::resolve_input_location;
use crate::suggestions::{Activation, ActivationEvent};
use crate::widgets::popup::row_at;

impl App {
    /// Wait briefly for input, handle it, then advance the remote lookup
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                _ => {}
            }
        }
        self.tick(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.window.selection().list().is_some() {
                    self.with_controller(|urlbar, _, sink| urlbar.blur(sink));
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Up => {
                self.with_controller(|urlbar, window, sink| urlbar.previous(window.selection(), sink))
            }
            KeyCode::Down => {
                self.with_controller(|urlbar, window, sink| urlbar.next(window.selection(), sink))
            }
            KeyCode::Enter => self.handle_enter(key.modifiers),
            _ => {
                let before = self.query().to_string();
                self.textarea.input(key);
                if self.query() != before {
                    self.on_input_changed();
                }
            }
        }
    }

    /// Enter activates the highlighted row, or else the typed text
    fn handle_enter(&mut self, modifiers: KeyModifiers) {
        let event = ActivationEvent {
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            meta: modifiers.contains(KeyModifiers::ALT),
            middle_button: false,
        };

        let raw = self.query().trim().to_string();
        let frames_before = self.window.frames.len();
        self.with_controller(|urlbar, window, sink| {
            if urlbar.activate_selected(window.selection(), event, sink) || raw.is_empty() {
                return;
            }
            let location = resolve_input_location(&raw, urlbar.aggregator().search_url());
            urlbar.activate(Activation::navigate(location), event, sink);
        });

        if self.window.frames.len() > frames_before {
            self.notice = Some("Opened in background tab".to_string());
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let Some(popup) = self.popup_area else {
            return;
        };
        let rows = self.window.selection().list().map_or(0, <[_]>::len);
        let Some(position) = row_at(popup, mouse.column, mouse.row, rows) else {
            return;
        };

        let event = match mouse.kind {
            MouseEventKind::Moved => {
                self.with_controller(|urlbar, window, sink| {
                    urlbar.select_by_position(position, window.selection(), sink)
                });
                return;
            }
            MouseEventKind::Down(MouseButton::Left) => ActivationEvent {
                ctrl: mouse.modifiers.contains(KeyModifiers::CONTROL),
                meta: mouse.modifiers.contains(KeyModifiers::ALT),
                middle_button: false,
            },
            MouseEventKind::Down(MouseButton::Middle) => ActivationEvent {
                middle_button: true,
                ..ActivationEvent::default()
            },
            _ => return,
        };

        self.with_controller(|urlbar, window, sink| {
            urlbar.activate_position(position, window.selection(), event, sink);
        });
    }
}
