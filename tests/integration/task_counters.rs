//! Integration tests for task creation, completion, deletion, and the
//! counter display, driven through the `App` event surface.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::app::{App, UiCommand};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn submit(app: &mut App, text: &str) {
    type_str(app, text);
    app.handle_key_event(key(KeyCode::Enter));
}

#[test]
fn creates_count_up_with_nothing_done() {
    let mut app = App::new();
    submit(&mut app, "one");
    submit(&mut app, "two");
    submit(&mut app, "three");

    let counters = app.todo.counters();
    assert_eq!(counters.total, 3);
    assert_eq!(counters.incomplete, 3);
    assert_eq!(counters.completed, 0);
    assert_eq!(app.todo.display().total_label(), "All tasks: 3");
    assert_eq!(app.todo.display().incomplete_label(), "Remaining: 3");
    assert_eq!(app.todo.display().completed_label(), "Done: 0");
}

#[test]
fn empty_and_whitespace_creates_are_rejected() {
    let mut app = App::new();
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.input_error);
    assert!(app.todo.tasks().is_empty());

    submit(&mut app, "   ");
    assert!(app.input_error);
    assert!(app.todo.tasks().is_empty());
    assert_eq!(app.todo.display().total_label(), "All tasks: 0");
    // The rejected text stays in the box for correction.
    assert_eq!(app.input, "   ");
}

#[test]
fn created_text_is_trimmed() {
    let mut app = App::new();
    submit(&mut app, "  Buy milk  ");
    assert_eq!(app.todo.tasks()[0].text, "Buy milk");
    assert!(app.input.is_empty());
}

#[test]
fn toggle_twice_restores_counters() {
    let mut app = App::new();
    submit(&mut app, "task");
    app.handle_key_event(key(KeyCode::Tab));

    app.handle_key_event(key(KeyCode::Char(' ')));
    let counters = app.todo.counters();
    assert_eq!(counters.completed, 1);
    assert_eq!(counters.incomplete, 0);
    assert_eq!(counters.total, counters.completed + counters.incomplete);

    app.handle_key_event(key(KeyCode::Char(' ')));
    let counters = app.todo.counters();
    assert_eq!(counters.completed, 0);
    assert_eq!(counters.incomplete, 1);
    assert!(!app.todo.tasks()[0].completed);
}

#[test]
fn declined_delete_changes_nothing() {
    let mut app = App::new();
    submit(&mut app, "keep me");
    app.handle_key_event(key(KeyCode::Tab));

    let cmd = app.handle_key_event(key(KeyCode::Char('d')));
    let id = app.todo.tasks()[0].id;
    assert_eq!(cmd, Some(UiCommand::ConfirmDelete(id)));

    app.dispatch_command(UiCommand::ConfirmDelete(id), &mut |_: &str| false);
    assert_eq!(app.todo.tasks().len(), 1);
    assert_eq!(app.todo.counters().total, 1);
    assert_eq!(app.todo.display().total_label(), "All tasks: 1");
}

#[test]
fn confirmed_delete_decrements_matching_bucket() {
    let mut app = App::new();
    submit(&mut app, "open");
    submit(&mut app, "done");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char(' ')));

    let done_id = app.todo.tasks()[1].id;
    app.dispatch_command(UiCommand::ConfirmDelete(done_id), &mut |_: &str| true);

    let counters = app.todo.counters();
    assert_eq!(counters.total, 1);
    assert_eq!(counters.completed, 0);
    assert_eq!(counters.incomplete, 1);
    assert_eq!(app.todo.tasks()[0].text, "open");
}

#[test]
fn buy_milk_walkthrough() {
    let mut app = App::new();
    submit(&mut app, "Buy milk");
    assert_eq!(app.todo.counters().total, 1);
    assert_eq!(app.todo.counters().incomplete, 1);
    assert_eq!(app.todo.counters().completed, 0);

    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char(' ')));
    assert_eq!(app.todo.counters().completed, 1);
    assert_eq!(app.todo.counters().incomplete, 0);

    let id = app.todo.tasks()[0].id;
    app.dispatch_command(UiCommand::ConfirmDelete(id), &mut |_: &str| true);
    let counters = app.todo.counters();
    assert_eq!(counters.total, 0);
    assert_eq!(counters.completed, 0);
    assert_eq!(counters.incomplete, 0);
    assert_eq!(app.todo.display().total_label(), "All tasks: 0");
}

#[test]
fn selection_clamps_after_deleting_last_row() {
    let mut app = App::new();
    submit(&mut app, "a");
    submit(&mut app, "b");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.selected, 1);

    let id = app.todo.tasks()[1].id;
    app.dispatch_command(UiCommand::ConfirmDelete(id), &mut |_: &str| true);
    assert_eq!(app.selected, 0);
    assert_eq!(app.selected_id(), Some(app.todo.tasks()[0].id));
}
