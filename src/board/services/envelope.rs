//! JSON document the board is persisted as.
//!
//! Layout: `{"state":{"board":<Board>},"version":<u32>}`.

use crate::board::domain::Board;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PersistedRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    board: &'a Board,
}

#[derive(Deserialize)]
struct Persisted {
    state: State,
    version: u32,
}

#[derive(Deserialize)]
struct State {
    board: Board,
}

pub(super) fn encode(board: &Board, version: u32) -> serde_json::Result<String> {
    serde_json::to_string(&PersistedRef {
        state: StateRef { board },
        version,
    })
}

/// Returns the decoded board and the version it was written with.
pub(super) fn decode(raw: &str) -> serde_json::Result<(Board, u32)> {
    let persisted: Persisted = serde_json::from_str(raw)?;
    Ok((persisted.state.board, persisted.version))
}
