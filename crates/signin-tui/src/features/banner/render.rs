//! Banner view.
//!
//! A pure function of `(message, kind)`: nothing is drawn for an absent or
//! empty message, otherwise an icon picked by kind, the message text as
//! given, and a close control.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use signin_core::notification::NotificationKind;
use unicode_width::UnicodeWidthStr;

use super::style::{BannerTone, style_for};
use crate::common::text::truncate_with_ellipsis;

/// Rows taken by a visible banner (border + one text row).
pub const BANNER_HEIGHT: u16 = 3;

/// Label of the close control.
pub const CLOSE_LABEL: &str = "[×]";

/// Returns true if `message` would draw anything.
pub fn is_visible(message: Option<&str>) -> bool {
    message.is_some_and(|m| !m.is_empty())
}

/// Rows to reserve for the banner in the layout.
pub fn banner_height(message: Option<&str>) -> u16 {
    if is_visible(message) {
        BANNER_HEIGHT
    } else {
        0
    }
}

/// Draws the banner into `area`.
///
/// Returns the close control's rect (for click routing) when a banner was
/// drawn, `None` when there was nothing to show or no room for it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    message: Option<&str>,
    kind: Option<NotificationKind>,
    close_focused: bool,
) -> Option<Rect> {
    let message = message.filter(|m| !m.is_empty())?;
    if area.height < BANNER_HEIGHT || area.width < 6 {
        return None;
    }

    let style = style_for(BannerTone::from(kind));
    let area = Rect::new(area.x, area.y, area.width, BANNER_HEIGHT);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(style.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let close_width = (CLOSE_LABEL.width() as u16).min(inner.width);
    let close_area = Rect::new(
        inner.x + inner.width.saturating_sub(close_width),
        inner.y,
        close_width,
        1,
    );

    let icon_width = style.icon.width() + 1;
    let text_width = (inner.width.saturating_sub(close_width + 1) as usize).saturating_sub(icon_width);
    let line = Line::from(vec![
        Span::styled(
            style.icon,
            Style::default()
                .fg(style.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            truncate_with_ellipsis(message, text_width),
            Style::default().fg(style.text),
        ),
    ]);
    let text_area = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(close_width + 1),
        1,
    );
    frame.render_widget(Paragraph::new(line), text_area);

    let close_style = if close_focused {
        Style::default()
            .fg(Color::Black)
            .bg(style.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, close_style)),
        close_area,
    );

    Some(close_area)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::buffer_text;

    fn draw(
        message: Option<&str>,
        kind: Option<NotificationKind>,
        width: u16,
    ) -> (String, Option<Rect>) {
        let mut terminal = Terminal::new(TestBackend::new(width, BANNER_HEIGHT)).unwrap();
        let mut close = None;
        terminal
            .draw(|frame| {
                close = render_banner(frame, frame.area(), message, kind, false);
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), close)
    }

    #[test]
    fn test_absent_message_draws_nothing() {
        let (text, close) = draw(None, Some(NotificationKind::Error), 40);
        assert!(close.is_none());
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
        assert_eq!(banner_height(None), 0);
    }

    #[test]
    fn test_empty_message_draws_nothing() {
        let (text, close) = draw(Some(""), Some(NotificationKind::Success), 40);
        assert!(close.is_none());
        assert!(text.trim().is_empty());
        assert_eq!(banner_height(Some("")), 0);
    }

    #[test]
    fn test_success_banner_shows_icon_text_and_close() {
        let (text, close) = draw(Some("Hello! alice"), Some(NotificationKind::Success), 40);
        assert!(text.contains("✓ Hello! alice"));
        assert!(text.contains(CLOSE_LABEL));
        let close = close.unwrap();
        assert_eq!(close.y, 1);
        assert_eq!(close.x + close.width, 39);
    }

    #[test]
    fn test_error_banner_uses_error_icon() {
        let (text, _) = draw(
            Some("Please enter both User ID and Password."),
            Some(NotificationKind::Error),
            60,
        );
        assert!(text.contains("✗ Please enter both User ID and Password."));
    }

    #[test]
    fn test_unset_kind_falls_back_to_default_icon() {
        let (text, close) = draw(Some("heads up"), None, 40);
        assert!(text.contains("➜ heads up"));
        assert!(close.is_some());
    }

    #[test]
    fn test_long_message_is_truncated_not_wrapped() {
        let (text, _) = draw(
            Some("Hello! a-really-long-identifier-that-will-not-fit"),
            Some(NotificationKind::Success),
            30,
        );
        assert!(text.contains('…'));
        assert!(text.contains(CLOSE_LABEL));
    }
}
