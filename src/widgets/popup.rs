use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rect hanging below `anchor`, clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let max_width = bounds
        .x
        .saturating_add(bounds.width)
        .saturating_sub(anchor.x);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(max_width),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

/// 1-based row under `row` inside a bordered popup, if any
pub fn row_at(popup: Rect, column: u16, row: u16, rows: usize) -> Option<usize> {
    let inner_x = popup.x.saturating_add(1);
    let inner_y = popup.y.saturating_add(1);
    let inner_width = popup.width.saturating_sub(2);
    let inner_height = popup.height.saturating_sub(2);

    if column < inner_x
        || column >= inner_x.saturating_add(inner_width)
        || row < inner_y
        || row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    let position = usize::from(row - inner_y) + 1;
    (position <= rows).then_some(position)
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
