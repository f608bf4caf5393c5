//! Integration tests for mouse dispatch through the hit-zone geometry.
//!
//! Reproduces the pointer-driven flows: checkbox/edit/delete clicks, the
//! armed-save press/release sequence, and the blur caused by pressing
//! outside the editing field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use taskdeck::app::{App, PanelFocus, UiCommand};
use taskdeck::ui::{self, HitTarget};

const AREA: Rect = Rect::new(0, 0, 80, 24);

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn submit(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter));
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Scans the frame for the first position resolving to a wanted target.
fn find(app: &App, want: impl Fn(HitTarget) -> bool) -> (u16, u16) {
    let zones = ui::hit_zones(AREA, app);
    for row in AREA.y..AREA.y + AREA.height {
        for col in AREA.x..AREA.x + AREA.width {
            if zones.target_at(col, row).is_some_and(&want) {
                return (col, row);
            }
        }
    }
    panic!("target not found in frame");
}

fn click(app: &mut App, col: u16, row: u16) -> Option<UiCommand> {
    let down = {
        let zones = ui::hit_zones(AREA, app);
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), &zones)
    };
    assert_eq!(down, None, "plain clicks act on release");
    let zones = ui::hit_zones(AREA, app);
    app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row), &zones)
}

#[test]
fn checkbox_click_toggles_task() {
    let mut app = App::new();
    submit(&mut app, "task");
    let (col, row) = find(&app, |t| matches!(t, HitTarget::Checkbox(..)));

    assert_eq!(click(&mut app, col, row), None);
    assert!(app.todo.tasks()[0].completed);
    assert_eq!(app.todo.counters().completed, 1);
    assert_eq!(app.focus, PanelFocus::List);

    assert_eq!(click(&mut app, col, row), None);
    assert!(!app.todo.tasks()[0].completed);
}

#[test]
fn edit_button_click_enters_edit_mode() {
    let mut app = App::new();
    submit(&mut app, "task");
    let id = app.todo.tasks()[0].id;
    let (col, row) = find(&app, |t| matches!(t, HitTarget::EditButton(..)));

    assert_eq!(click(&mut app, col, row), None);
    assert!(app.todo.is_editing(id));
    assert_eq!(app.todo.session(id).unwrap().buffer(), "task");
}

#[test]
fn delete_button_click_goes_through_the_gate() {
    let mut app = App::new();
    submit(&mut app, "task");
    let id = app.todo.tasks()[0].id;
    let (col, row) = find(&app, |t| matches!(t, HitTarget::DeleteButton(..)));

    let cmd = click(&mut app, col, row);
    assert_eq!(cmd, Some(UiCommand::ConfirmDelete(id)));
    // Nothing happens until the gate answers.
    assert_eq!(app.todo.tasks().len(), 1);

    app.dispatch_command(UiCommand::ConfirmDelete(id), &mut |_: &str| true);
    assert!(app.todo.tasks().is_empty());
    assert_eq!(app.todo.counters().total, 0);
}

#[test]
fn save_press_arms_then_release_saves() {
    let mut app = App::new();
    submit(&mut app, "task");
    let id = app.todo.tasks()[0].id;
    let (col, row) = find(&app, |t| matches!(t, HitTarget::EditButton(..)));
    click(&mut app, col, row);
    for c in " x".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    // Press on [save]: arms, and the press's blur is swallowed without
    // consulting the gate.
    let (col, row) = find(&app, |t| matches!(t, HitTarget::SaveButton(_)));
    let zones = ui::hit_zones(AREA, &app);
    let cmd = app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), &zones);
    assert_eq!(cmd, Some(UiCommand::Blur(id)));
    let mut gate = |_: &str| -> bool { panic!("armed blur must not prompt") };
    app.dispatch_command(UiCommand::Blur(id), &mut gate);
    assert!(app.todo.is_editing(id));

    // Release on [save]: the save runs.
    let zones = ui::hit_zones(AREA, &app);
    let cmd = app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), col, row), &zones);
    assert_eq!(cmd, None);
    assert!(!app.todo.is_editing(id));
    assert_eq!(app.todo.tasks()[0].text, "task x");
}

#[test]
fn press_outside_field_blurs_the_edit() {
    let mut app = App::new();
    submit(&mut app, "first");
    submit(&mut app, "second");
    let first = app.todo.tasks()[0].id;
    let (col, row) = find(&app, |t| matches!(t, HitTarget::EditButton(_, 0)));
    click(&mut app, col, row);
    for c in "!".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }

    // Press on the other row while editing: a blur, not a selection.
    let (col, row) = find(&app, |t| matches!(t, HitTarget::Row(_, 1)));
    let zones = ui::hit_zones(AREA, &app);
    let cmd = app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), &zones);
    assert_eq!(cmd, Some(UiCommand::Blur(first)));

    app.dispatch_command(UiCommand::Blur(first), &mut |_: &str| false);
    assert!(app.todo.is_editing(first));
    assert_eq!(app.todo.session(first).unwrap().buffer(), "first!");

    // A later press prompts again; confirming commits.
    let zones = ui::hit_zones(AREA, &app);
    let cmd = app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), &zones);
    assert_eq!(cmd, Some(UiCommand::Blur(first)));
    app.dispatch_command(UiCommand::Blur(first), &mut |_: &str| true);
    assert!(!app.todo.is_editing(first));
    assert_eq!(app.todo.tasks()[0].text, "first!");
}

#[test]
fn press_inside_field_keeps_focus() {
    let mut app = App::new();
    submit(&mut app, "task");
    let id = app.todo.tasks()[0].id;
    let (col, row) = find(&app, |t| matches!(t, HitTarget::EditButton(..)));
    click(&mut app, col, row);

    let (col, row) = find(&app, |t| matches!(t, HitTarget::Field(_)));
    let zones = ui::hit_zones(AREA, &app);
    let cmd = app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), col, row), &zones);
    assert_eq!(cmd, None);
    assert!(app.todo.is_editing(id));
}

#[test]
fn input_box_click_focuses_input() {
    let mut app = App::new();
    submit(&mut app, "task");
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, PanelFocus::List);

    let (col, row) = find(&app, |t| matches!(t, HitTarget::Input));
    click(&mut app, col, row);
    assert_eq!(app.focus, PanelFocus::Input);
}
