//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            form::handle_paste(&mut app.form, &mut app.controller, &text);
            vec![]
        }
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => vec![UiEffect::Quit],
        KeyCode::Esc => {
            if app.controller.notification().is_some() {
                form::dismiss(&mut app.form, &mut app.controller);
            }
            vec![]
        }
        _ => {
            form::handle_key(&mut app.form, &mut app.controller, key);
            vec![]
        }
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(target) = app.hit_areas.get().hit(mouse.column, mouse.row) {
        form::handle_click(&mut app.form, &mut app.controller, target);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use signin_core::config::Config;
    use signin_core::form::MISSING_FIELDS_MESSAGE;
    use signin_core::notification::NotificationKind;

    use super::*;
    use crate::form::Focus;
    use crate::state::HitAreas;

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn click(app: &mut AppState, column: u16, row: u16) {
        update(
            app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
    }

    #[test]
    fn test_scenario_success_greets_and_clears() {
        let mut app = AppState::new(Config::default());
        type_text(&mut app, "alice");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Enter);

        let note = app.controller.notification().unwrap();
        assert_eq!(note.text, "Hello! alice");
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(app.controller.identifier(), "");
        assert_eq!(app.controller.secret(), "");
    }

    #[test]
    fn test_scenario_missing_identifier_keeps_fields() {
        let mut app = AppState::new(Config::default());
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Enter);

        let note = app.controller.notification().unwrap();
        assert_eq!(note.text, MISSING_FIELDS_MESSAGE);
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(app.controller.identifier(), "");
        assert_eq!(app.controller.secret(), "pw");
    }

    #[test]
    fn test_scenario_whitespace_only_is_missing() {
        let mut app = AppState::new(Config::default());
        type_text(&mut app, "  ");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "  ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.controller.notification().unwrap().text,
            MISSING_FIELDS_MESSAGE
        );
        assert_eq!(app.controller.identifier(), "  ");
        assert_eq!(app.controller.secret(), "  ");
    }

    #[test]
    fn test_scenario_escape_dismisses_error() {
        let mut app = AppState::new(Config::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.notification().is_some());

        let effects = press(&mut app, KeyCode::Esc);
        assert!(effects.is_empty());
        assert!(app.controller.notification().is_none());
    }

    #[test]
    fn test_resubmit_overwrites_visible_banner() {
        let mut app = AppState::new(Config::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.notification().unwrap().is_error());

        type_text(&mut app, "bob");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");
        press(&mut app, KeyCode::Enter);

        let note = app.controller.notification().unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.text, "Hello! bob");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = AppState::new(Config::default());
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
        assert_eq!(app.controller.identifier(), "");
    }

    #[test]
    fn test_paste_event_fills_focused_field() {
        let mut app = AppState::new(Config::default());
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("carol".to_string())),
        );
        assert_eq!(app.controller.identifier(), "carol");
    }

    #[test]
    fn test_clicks_route_through_hit_areas() {
        let mut app = AppState::new(Config::default());
        app.hit_areas.set(HitAreas {
            identifier: Rect::new(0, 0, 20, 3),
            secret: Rect::new(0, 4, 20, 3),
            submit: Rect::new(0, 8, 20, 3),
            dismiss: Some(Rect::new(17, 13, 3, 1)),
        });

        click(&mut app, 5, 5);
        assert_eq!(app.form.focus, Focus::Secret);

        click(&mut app, 5, 9);
        assert!(app.controller.notification().unwrap().is_error());

        click(&mut app, 18, 13);
        assert!(app.controller.notification().is_none());

        // Clicking empty space changes nothing.
        click(&mut app, 40, 40);
        assert_eq!(app.form.focus, Focus::Submit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = AppState::new(Config::default());
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        update(&mut app, UiEvent::Terminal(Event::Key(key)));
        assert_eq!(app.controller.identifier(), "");
    }
}
