use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app_state::App;
use crate::records::IconClass;
use crate::widgets::popup;

const MAX_VISIBLE_SUGGESTIONS: usize = 12;
const POPUP_BORDER_HEIGHT: u16 = 2;
/// Border, selection marker and icon column
const ROW_CHROME_WIDTH: usize = 6;

/// Terminal glyph for each suggestion icon class
pub fn icon_glyph(icon: IconClass) -> &'static str {
    match icon {
        IconClass::OpenTab => "▣",
        IconClass::Bookmark => "★",
        IconClass::Folder => "▤",
        IconClass::History => "◷",
        IconClass::Search => "⌕",
        IconClass::TopSite => "↗",
    }
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, body_area, status_area) = (layout[0], layout[1], layout[2]);

        self.render_input(frame, input_area);
        self.render_tabs(frame, body_area);
        self.render_status(frame, status_area);
        self.popup_area = self.render_popup(frame, input_area, body_area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.window.url_bar.active {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Url ")
            .border_style(Style::default().fg(border));

        // While a row is highlighted the bar shows its title instead of the typed text
        if let Some(preview) = &self.window.url_bar.preview {
            let preview = Paragraph::new(Line::from(Span::styled(
                preview.as_str(),
                Style::default().fg(Color::Yellow),
            )))
            .block(block);
            frame.render_widget(preview, area);
        } else {
            self.textarea.set_block(block);
            frame.render_widget(&self.textarea, area);
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .window
            .frames
            .iter()
            .map(|tab| {
                let active = Some(tab.key) == self.window.active_frame;
                let marker = if active { "● " } else { "  " };
                let label = tab.title.as_deref().unwrap_or(&tab.location);
                let style = if active {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(label.to_string(), style),
                    Span::styled(
                        format!("  {}", tab.location),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tabs ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(list, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let active = self
            .window
            .active_frame()
            .map(|tab| tab.title.as_deref().unwrap_or(&tab.location))
            .unwrap_or("no tab");
        let mut spans = vec![
            Span::styled(format!(" {} ", active), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("| {} tabs ", self.window.frames.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let Some(notice) = &self.notice {
            spans.push(Span::styled(
                format!("| {}", notice),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Draw the suggestion popup under the input; returns where it landed
    fn render_popup(&self, frame: &mut Frame, input_area: Rect, bounds: Rect) -> Option<Rect> {
        let suggestions = self.window.selection().list()?;
        if suggestions.is_empty() {
            return None;
        }

        let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
        let popup_height = visible_count as u16 + POPUP_BORDER_HEIGHT;
        let popup_area =
            popup::popup_below_anchor(input_area, bounds, input_area.width, popup_height);
        if popup_area.height <= POPUP_BORDER_HEIGHT {
            return None;
        }

        let title_width = usize::from(popup_area.width).saturating_sub(ROW_CHROME_WIDTH);
        let selected = self.window.selection().active_index();

        let items: Vec<ListItem> = suggestions
            .iter()
            .take(MAX_VISIBLE_SUGGESTIONS)
            .enumerate()
            .map(|(i, suggestion)| {
                let title = popup::truncate_to_width(&suggestion.title, title_width);
                let glyph = icon_glyph(suggestion.icon_class);
                let line = if i + 1 == selected {
                    // Highlight selected item with high contrast colors
                    Line::from(Span::styled(
                        format!("► {} {}", glyph, title),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(
                            format!("  {} ", glyph),
                            Style::default().fg(icon_color(suggestion.icon_class)),
                        ),
                        Span::styled(title, Style::default().fg(Color::White)),
                    ])
                };
                ListItem::new(line)
            })
            .collect();

        // Clear the background area to prevent transparency
        popup::clear_area(frame, popup_area);

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestions ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );
        frame.render_widget(list, popup_area);
        Some(popup_area)
    }
}

fn icon_color(icon: IconClass) -> Color {
    match icon {
        IconClass::OpenTab => Color::Green,
        IconClass::Bookmark | IconClass::Folder => Color::Yellow,
        IconClass::History => Color::Gray,
        IconClass::Search => Color::Magenta,
        IconClass::TopSite => Color::Cyan,
    }
}
