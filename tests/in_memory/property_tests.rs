//! Property-based checks over generated operation sequences.
//!
//! Operations pick their targets by position in the current board, so
//! every generated sequence stays meaningful as columns and tasks come
//! and go. Operations the board rejects are part of the property: they
//! must leave both the snapshot and the stored document unchanged.

use crate::in_memory::helpers::{TestStore, open_store};
use kanban_board::board::{
    adapters::memory::InMemoryStorage,
    domain::{Board, ColumnId, NewTask, TaskId, TaskPatch},
    ports::{KeyValueStorage, StorageKey},
};
use proptest::prelude::*;

const MAX_OPERATIONS: usize = 40;

#[derive(Debug, Clone)]
enum Operation {
    AddColumn(String),
    RenameColumn(usize, String),
    DeleteColumn(usize),
    AddTask(usize, String),
    UpdateTask(usize, String),
    DeleteTask(usize),
    MoveTask {
        task: usize,
        destination: usize,
        index: usize,
    },
    ReorderColumn(usize, usize),
}

fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,11}"
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        title().prop_map(Operation::AddColumn),
        (any::<usize>(), title()).prop_map(|(at, name)| Operation::RenameColumn(at, name)),
        any::<usize>().prop_map(Operation::DeleteColumn),
        (any::<usize>(), title()).prop_map(|(at, name)| Operation::AddTask(at, name)),
        (any::<usize>(), title()).prop_map(|(at, name)| Operation::UpdateTask(at, name)),
        any::<usize>().prop_map(Operation::DeleteTask),
        (any::<usize>(), any::<usize>(), 0..8_usize).prop_map(|(task, destination, index)| {
            Operation::MoveTask {
                task,
                destination,
                index,
            }
        }),
        (0..6_usize, 0..6_usize).prop_map(|(start, end)| Operation::ReorderColumn(start, end)),
    ]
}

fn nth_column(board: &Board, position: usize) -> Option<ColumnId> {
    let at = position.checked_rem(board.column_order().len())?;
    board.column_order().get(at).cloned()
}

fn nth_task(board: &Board, position: usize) -> Option<TaskId> {
    let mut ids: Vec<&TaskId> = board.tasks().keys().collect();
    ids.sort_by(|left, right| left.as_str().cmp(right.as_str()));
    let at = position.checked_rem(ids.len())?;
    ids.get(at).map(|id| (*id).clone())
}

/// Applies `operation` and reports whether the store accepted it.
fn apply(store: &TestStore, board: &Board, operation: &Operation) -> bool {
    match operation {
        Operation::AddColumn(name) => store.add_column(name.as_str()).is_ok(),
        Operation::RenameColumn(at, name) => nth_column(board, *at)
            .is_some_and(|column| store.update_column(&column, name.as_str()).is_ok()),
        Operation::DeleteColumn(at) => {
            nth_column(board, *at).is_some_and(|column| store.delete_column(&column).is_ok())
        }
        Operation::AddTask(at, name) => nth_column(board, *at).is_some_and(|column| {
            NewTask::new(name.as_str())
                .is_ok_and(|draft| store.add_task(&column, draft).is_ok())
        }),
        Operation::UpdateTask(at, name) => nth_task(board, *at).is_some_and(|task| {
            store
                .update_task(&task, TaskPatch::new().with_title(name.as_str()))
                .is_ok()
        }),
        Operation::DeleteTask(at) => {
            nth_task(board, *at).is_some_and(|task| store.delete_task(&task).is_ok())
        }
        Operation::MoveTask {
            task,
            destination,
            index,
        } => {
            let Some(task_id) = nth_task(board, *task) else {
                return false;
            };
            let Some(source) = board.task(&task_id).map(|found| found.column_id().clone()) else {
                return false;
            };
            nth_column(board, *destination).is_some_and(|target| {
                store.move_task(&task_id, &source, &target, *index).is_ok()
            })
        }
        Operation::ReorderColumn(start, end) => store.reorder_column(*start, *end).is_ok(),
    }
}

fn stored_raw(storage: &InMemoryStorage) -> Option<String> {
    storage
        .get_item(&StorageKey::default())
        .expect("storage readable")
}

proptest! {
    #[test]
    fn operation_sequences_preserve_integrity_and_persistence(
        operations in prop::collection::vec(operation(), 1..MAX_OPERATIONS)
    ) {
        let storage = InMemoryStorage::new();
        let store = open_store(&storage, "prop").expect("store opens");

        for operation in &operations {
            let before = store.state().expect("state readable");
            let before_raw = stored_raw(&storage);
            let accepted = apply(&store, &before, operation);
            let after = store.state().expect("state readable");

            prop_assert_eq!(after.verify_integrity(), Ok(()));
            if !accepted {
                prop_assert_eq!(&after, &before);
                prop_assert_eq!(stored_raw(&storage), before_raw);
            }
        }

        let reopened = open_store(&storage, "reopened").expect("store reopens");
        prop_assert_eq!(
            reopened.state().expect("state readable"),
            store.state().expect("state readable")
        );
    }

    #[test]
    fn deleting_a_column_removes_every_owned_task(
        tasks_per_column in prop::collection::vec(0..4_usize, 1..5),
        victim in any::<usize>(),
    ) {
        let store = open_store(&InMemoryStorage::new(), "del").expect("store opens");
        for (position, count) in tasks_per_column.iter().enumerate() {
            let column = store.add_column(format!("Column {position}")).expect("column added");
            for task in 0..*count {
                let draft = NewTask::new(format!("Task {task}")).expect("valid title");
                store.add_task(&column, draft).expect("task added");
            }
        }
        let board = store.state().expect("state readable");
        let column = nth_column(&board, victim).expect("board has columns");

        store.delete_column(&column).expect("column deleted");

        let after = store.state().expect("state readable");
        prop_assert!(after.tasks().values().all(|task| task.column_id() != &column));
        prop_assert!(!after.column_order().contains(&column));
        prop_assert!(after.column(&column).is_none());
    }

    #[test]
    fn added_task_is_listed_by_its_column(
        columns in 1..5_usize,
        target in any::<usize>(),
        name in title(),
    ) {
        let store = open_store(&InMemoryStorage::new(), "add").expect("store opens");
        for position in 0..columns {
            store.add_column(format!("Column {position}")).expect("column added");
        }
        let board = store.state().expect("state readable");
        let column = nth_column(&board, target).expect("board has columns");

        let task_id = store
            .add_task(&column, NewTask::new(name).expect("valid title"))
            .expect("task added");

        let after = store.state().expect("state readable");
        let listed = after.column(&column).expect("column exists").task_ids();
        prop_assert!(listed.contains(&task_id));
        prop_assert_eq!(
            after.task(&task_id).map(|task| task.column_id()),
            Some(&column)
        );
    }

    #[test]
    fn repeating_a_move_is_idempotent(
        source_tasks in 1..5_usize,
        destination_tasks in 0..5_usize,
        pick in any::<usize>(),
        index in 0..8_usize,
    ) {
        let store = open_store(&InMemoryStorage::new(), "move").expect("store opens");
        let source = store.add_column("Source").expect("column added");
        let destination = store.add_column("Destination").expect("column added");
        let mut candidates = Vec::new();
        for task in 0..source_tasks {
            let draft = NewTask::new(format!("Source {task}")).expect("valid title");
            candidates.push(store.add_task(&source, draft).expect("task added"));
        }
        for task in 0..destination_tasks {
            let draft = NewTask::new(format!("Destination {task}")).expect("valid title");
            store.add_task(&destination, draft).expect("task added");
        }
        let at = pick.checked_rem(candidates.len()).expect("candidates exist");
        let task_id = candidates.get(at).expect("candidate in range").clone();

        store.move_task(&task_id, &source, &destination, index).expect("first move");
        let once = store.state().expect("state readable");
        store.move_task(&task_id, &source, &destination, index).expect("second move");
        let twice = store.state().expect("state readable");

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reorder_round_trip_restores_column_order(
        columns in 1..7_usize,
        start in 0..7_usize,
        end in 0..7_usize,
    ) {
        prop_assume!(start < columns && end < columns);
        let store = open_store(&InMemoryStorage::new(), "order").expect("store opens");
        for position in 0..columns {
            store.add_column(format!("Column {position}")).expect("column added");
        }
        let original = store.state().expect("state readable");

        store.reorder_column(start, end).expect("forward reorder");
        store.reorder_column(end, start).expect("reverse reorder");

        let restored = store.state().expect("state readable");
        prop_assert_eq!(restored.column_order(), original.column_order());
    }
}
