//! Property-based counter-invariant tests.
//!
//! Uses proptest to verify, over arbitrary operation sequences:
//! 1. `total == completed + incomplete` holds after every operation.
//! 2. Ids are unique and assigned monotonically.
//! 3. A failed operation leaves the store observably unchanged.

use proptest::prelude::*;
use taskdeck_core::{TaskId, TaskStore};

/// One store operation with abstract targets; indices are resolved
/// against whatever tasks exist when the operation runs.
#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Toggle(usize),
    Update(usize, String),
    Delete(usize),
}

/// Task text that is sometimes empty or whitespace-only, so the
/// rejection path is exercised alongside the happy path.
fn arb_text() -> impl Strategy<Value = String> {
    "[ a-z]{0,12}"
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_text().prop_map(Op::Create),
        any::<prop::sample::Index>().prop_map(|i| Op::Toggle(i.index(64))),
        (any::<prop::sample::Index>(), arb_text()).prop_map(|(i, t)| Op::Update(i.index(64), t)),
        any::<prop::sample::Index>().prop_map(|i| Op::Delete(i.index(64))),
    ]
}

/// Resolves an abstract index to a live task id, if any tasks exist.
fn resolve(store: &TaskStore, index: usize) -> Option<TaskId> {
    let tasks = store.tasks();
    if tasks.is_empty() {
        None
    } else {
        Some(tasks[index % tasks.len()].id)
    }
}

fn snapshot(store: &TaskStore) -> (Vec<(u64, String, bool)>, usize, usize, usize) {
    let tasks = store
        .tasks()
        .iter()
        .map(|t| (t.id.get(), t.text.clone(), t.completed))
        .collect();
    let c = store.counters();
    (tasks, c.total, c.completed, c.incomplete)
}

proptest! {
    /// The counter invariant holds after every step of any sequence, and
    /// failed operations never change the store.
    #[test]
    fn counter_invariant_holds(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut store = TaskStore::new();
        let mut issued: Vec<u64> = Vec::new();

        for op in ops {
            let before = snapshot(&store);
            let failed = match op {
                Op::Create(text) => match store.create(&text) {
                    Ok(id) => {
                        // Unique and monotonic.
                        prop_assert!(!issued.contains(&id.get()));
                        prop_assert!(issued.iter().all(|&prev| prev < id.get()));
                        issued.push(id.get());
                        false
                    }
                    Err(_) => true,
                },
                Op::Toggle(index) => match resolve(&store, index) {
                    Some(id) => store.toggle_completed(id).is_err(),
                    None => false,
                },
                Op::Update(index, text) => match resolve(&store, index) {
                    Some(id) => store.update_text(id, &text).is_err(),
                    None => false,
                },
                Op::Delete(index) => match resolve(&store, index) {
                    Some(id) => store.delete(id).is_err(),
                    None => false,
                },
            };

            let counters = store.counters();
            prop_assert_eq!(counters.total, counters.completed + counters.incomplete);
            prop_assert_eq!(counters.total, store.tasks().len());

            if failed {
                prop_assert_eq!(snapshot(&store), before);
            }
        }
    }

    /// A run of non-empty creates counts straight up with nothing done.
    #[test]
    fn creates_only_all_incomplete(texts in prop::collection::vec("[a-z]{1,8}", 1..20)) {
        let mut store = TaskStore::new();
        for text in &texts {
            store.create(text).unwrap();
        }
        let counters = store.counters();
        prop_assert_eq!(counters.total, texts.len());
        prop_assert_eq!(counters.incomplete, texts.len());
        prop_assert_eq!(counters.completed, 0);
    }

    /// Toggling any task twice restores the starting counters.
    #[test]
    fn double_toggle_is_identity(texts in prop::collection::vec("[a-z]{1,8}", 1..10), pick in any::<prop::sample::Index>()) {
        let mut store = TaskStore::new();
        for text in &texts {
            store.create(text).unwrap();
        }
        let id = store.tasks()[pick.index(texts.len())].id;
        let before = store.counters();
        store.toggle_completed(id).unwrap();
        let mid = store.counters();
        prop_assert_eq!(mid.total, mid.completed + mid.incomplete);
        store.toggle_completed(id).unwrap();
        prop_assert_eq!(store.counters(), before);
    }
}
