//! Form feature view.
//!
//! Pure rendering of the form card. Reads the controller and view state,
//! draws, and returns the rects the reducer needs for click routing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use signin_core::config::Config;
use signin_core::form::FormController;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::field::{FieldCursor, grapheme_len};
use super::state::{Focus, FormState};
use crate::common::text::truncate_with_ellipsis;

/// Total rows of the form card, borders included.
pub const FORM_HEIGHT: u16 = 17;

/// Preferred card width; shrinks on narrow terminals.
pub const FORM_WIDTH: u16 = 52;

const USER_ICON: &str = "👤";
const LOCK_ICON: &str = "🔒";
const FOCUS_COLOR: Color = Color::LightBlue;

/// Rects of the interactive controls from the last render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormLayout {
    pub card: Rect,
    pub identifier: Rect,
    pub secret: Rect,
    pub submit: Rect,
}

struct FieldView<'a> {
    icon: &'static str,
    value: &'a str,
    placeholder: &'static str,
    mask: Option<char>,
    cursor: FieldCursor,
    focused: bool,
}

/// Renders the form card into `area` (expected to be `FORM_HEIGHT` tall).
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    controller: &FormController,
    state: &FormState,
    config: &Config,
) -> FormLayout {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(2));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1), // Gap
            Constraint::Length(1), // "User ID" label
            Constraint::Length(3), // Identifier input
            Constraint::Length(1), // "Password" label
            Constraint::Length(3), // Secret input
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Sign In button
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        truncate_with_ellipsis(&config.title, rows[0].width as usize),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new(Span::styled(
        truncate_with_ellipsis(&config.subtitle, rows[1].width as usize),
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[1]);

    render_label(frame, rows[3], "User ID", state.focus == Focus::Identifier);
    render_field(
        frame,
        rows[4],
        &FieldView {
            icon: USER_ICON,
            value: controller.identifier(),
            placeholder: "Enter your username",
            mask: None,
            cursor: state.identifier_cursor,
            focused: state.focus == Focus::Identifier,
        },
    );

    render_label(frame, rows[5], "Password", state.focus == Focus::Secret);
    render_field(
        frame,
        rows[6],
        &FieldView {
            icon: LOCK_ICON,
            value: controller.secret(),
            placeholder: "Enter your password",
            mask: Some(config.mask_char),
            cursor: state.secret_cursor,
            focused: state.focus == Focus::Secret,
        },
    );

    render_submit_button(frame, rows[8], state.focus == Focus::Submit);

    FormLayout {
        card: area,
        identifier: rows[4],
        secret: rows[6],
        submit: rows[8],
    }
}

fn render_label(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let color = if focused { FOCUS_COLOR } else { Color::Gray };
    frame.render_widget(
        Paragraph::new(Span::styled(label.to_string(), Style::default().fg(color))),
        area,
    );
}

fn render_field(frame: &mut Frame, area: Rect, field: &FieldView<'_>) {
    let border_color = if field.focused {
        FOCUS_COLOR
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let icon_span = Span::styled(field.icon, Style::default().fg(Color::DarkGray));
    let text_x = field.icon.width() as u16 + 1;
    let available = inner.width.saturating_sub(text_x) as usize;

    if field.value.is_empty() {
        let line = Line::from(vec![
            icon_span,
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(field.placeholder, available),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
        if field.focused {
            frame.set_cursor_position((inner.x + text_x.min(inner.width - 1), inner.y));
        }
        return;
    }

    // One mask glyph per grapheme keeps cursor positions aligned.
    let display = match field.mask {
        Some(mask) => mask.to_string().repeat(grapheme_len(field.value)),
        None => field.value.to_string(),
    };
    let graphemes: Vec<&str> = display.graphemes(true).collect();
    let cursor = field.cursor.position(field.value).min(graphemes.len());
    let (start, end) = visible_window(&graphemes, cursor, available);

    let line = Line::from(vec![
        icon_span,
        Span::raw(" "),
        Span::styled(graphemes[start..end].concat(), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if field.focused {
        let before: usize = graphemes[start..cursor].iter().map(|g| g.width()).sum();
        let x = (text_x as usize + before).min(inner.width.saturating_sub(1) as usize);
        frame.set_cursor_position((inner.x + x as u16, inner.y));
    }
}

/// Picks the grapheme range to show so that the cursor cell stays visible.
fn visible_window(graphemes: &[&str], cursor: usize, available: usize) -> (usize, usize) {
    if available == 0 {
        return (cursor, cursor);
    }

    let mut start = 0;
    let mut width_to_cursor: usize = graphemes[..cursor].iter().map(|g| g.width()).sum();
    // Reserve one cell for the cursor itself.
    while start < cursor && width_to_cursor + 1 > available {
        width_to_cursor -= graphemes[start].width();
        start += 1;
    }

    let mut end = start;
    let mut used = 0;
    while end < graphemes.len() {
        let w = graphemes[end].width();
        if used + w > available {
            break;
        }
        used += w;
        end += 1;
    }
    (start, end.max(cursor.min(graphemes.len())))
}

fn render_submit_button(frame: &mut Frame, area: Rect, focused: bool) {
    let (border, label_style) = if focused {
        (
            Style::default().fg(FOCUS_COLOR),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(FOCUS_COLOR),
        )
    };
    let button = Paragraph::new(Span::styled(" Sign In ", label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::buffer_text;

    fn draw(controller: &FormController, state: &FormState) -> (String, FormLayout) {
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(FORM_WIDTH, FORM_HEIGHT)).unwrap();
        let mut layout = FormLayout::default();
        terminal
            .draw(|frame| {
                layout = render_form(frame, frame.area(), controller, state, &config);
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), layout)
    }

    #[test]
    fn test_empty_form_shows_copy_and_placeholders() {
        let (text, _) = draw(&FormController::new(), &FormState::new());
        assert!(text.contains("Simple Login"));
        assert!(text.contains("Enter credentials to see the greeting message."));
        assert!(text.contains("User ID"));
        assert!(text.contains("Password"));
        assert!(text.contains("Enter your username"));
        assert!(text.contains("Enter your password"));
        assert!(text.contains("Sign In"));
    }

    #[test]
    fn test_secret_is_masked_identifier_is_not() {
        let mut controller = FormController::new();
        controller.set_identifier("alice");
        controller.set_secret("hunter2");

        let (text, _) = draw(&controller, &FormState::new());
        assert!(text.contains("alice"));
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
    }

    #[test]
    fn test_layout_orders_controls_top_to_bottom() {
        let (_, layout) = draw(&FormController::new(), &FormState::new());
        assert!(layout.identifier.y < layout.secret.y);
        assert!(layout.secret.y < layout.submit.y);
        assert_eq!(layout.identifier.height, 3);
        assert_eq!(layout.submit.y + layout.submit.height, FORM_HEIGHT - 1);
    }

    #[test]
    fn test_visible_window_scrolls_to_keep_cursor() {
        let graphemes: Vec<&str> = "abcdefghij".graphemes(true).collect();
        assert_eq!(visible_window(&graphemes, 0, 5), (0, 5));
        // Cursor at the end needs one spare cell.
        assert_eq!(visible_window(&graphemes, 10, 5), (6, 10));
        assert_eq!(visible_window(&graphemes, 3, 20), (0, 10));
    }
}
