//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! return effects. The only write is `hit_areas`, a `Cell` the reducer
//! reads back for mouse routing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::banner::{BANNER_HEIGHT, banner_height, render_banner};
use crate::form::{FORM_HEIGHT, FORM_WIDTH, Focus, render_form};
use crate::state::{AppState, HitAreas};

/// Height of the key hint line at the bottom of the screen.
const HINTS_HEIGHT: u16 = 1;

/// Rows between the form card and the banner.
const BANNER_GAP: u16 = 1;

/// Narrowest banner that still fits an icon and the close control.
const BANNER_MIN_WIDTH: u16 = 6;

const HINT_COLOR: Color = Color::LightBlue;

/// A key and what it does, shown in the hint line.
struct KeyHint {
    key: &'static str,
    action: &'static str,
}

const FORM_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        action: "sign in",
    },
    KeyHint {
        key: "Tab",
        action: "next",
    },
    KeyHint {
        key: "Esc",
        action: "dismiss",
    },
    KeyHint {
        key: "Ctrl+C",
        action: "quit",
    },
];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let notification = app.controller.notification();
    let message = notification.map(|n| n.text.as_str());

    let hints_height = if app.config.show_key_hints {
        HINTS_HEIGHT
    } else {
        0
    };
    let banner_rows = match banner_height(message) {
        0 => 0,
        h => h + BANNER_GAP,
    };

    let available = area.height.saturating_sub(hints_height);
    let content_height = (FORM_HEIGHT + banner_rows).min(available);
    let width = FORM_WIDTH.min(area.width.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + available.saturating_sub(content_height) / 2;

    let form_area = Rect::new(x, y, width, FORM_HEIGHT.min(available));
    let layout = render_form(frame, form_area, &app.controller, &app.form, &app.config);

    // Below the card when it fits, otherwise over the card's bottom rows.
    let banner_bottom = area.y + available;
    let banner_y = (form_area.y + form_area.height + BANNER_GAP)
        .min(banner_bottom.saturating_sub(BANNER_HEIGHT))
        .max(area.y);
    let (banner_x, banner_width) = if width >= BANNER_MIN_WIDTH {
        (x, width)
    } else {
        (area.x, area.width)
    };
    let banner_area = Rect::new(
        banner_x,
        banner_y,
        banner_width,
        banner_bottom.saturating_sub(banner_y),
    );
    let dismiss = render_banner(
        frame,
        banner_area,
        message,
        notification.map(|n| n.kind),
        app.form.focus == Focus::Dismiss,
    );

    if hints_height > 0 {
        let hints_area = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(HINTS_HEIGHT),
            area.width,
            HINTS_HEIGHT,
        );
        render_hints(frame, hints_area, FORM_HINTS);
    }

    app.hit_areas.set(HitAreas {
        identifier: layout.identifier,
        secret: layout.secret,
        submit: layout.submit,
        dismiss,
    });
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[KeyHint]) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(HINT_COLOR)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
