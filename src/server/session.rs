//! In-memory session store
//!
//! Maps opaque board ids to live game boards. The outer lock only guards the
//! id lookup; each board carries its own mutex, so two guesses against the
//! same session serialize while different sessions proceed independently.

use crate::game::GameState;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::SystemTime;
use uuid::Uuid;

/// One registered game board
#[derive(Debug)]
pub struct GameBoard {
    pub id: Uuid,
    pub created_at: SystemTime,
    pub modified_at: SystemTime,
    pub state: GameState,
}

/// Concurrent store of all active game boards, keyed by board id
#[derive(Debug, Default)]
pub struct SessionStore {
    boards: RwLock<FxHashMap<Uuid, Arc<Mutex<GameBoard>>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new game state under a fresh board id
    ///
    /// # Panics
    /// Panics if the store lock is poisoned.
    pub fn insert(&self, state: GameState) -> (Uuid, Arc<Mutex<GameBoard>>) {
        let id = Uuid::new_v4();
        let now = SystemTime::now();
        let board = Arc::new(Mutex::new(GameBoard {
            id,
            created_at: now,
            modified_at: now,
            state,
        }));

        self.boards
            .write()
            .expect("session store lock poisoned")
            .insert(id, Arc::clone(&board));
        (id, board)
    }

    /// Look up a board by id
    ///
    /// # Panics
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<Arc<Mutex<GameBoard>>> {
        self.boards
            .read()
            .expect("session store lock poisoned")
            .get(id)
            .cloned()
    }

    /// Number of registered boards
    ///
    /// # Panics
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards
            .read()
            .expect("session store lock poisoned")
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader;
    use crate::engine::WordEngine;
    use crate::game;

    fn some_state() -> GameState {
        let index = loader::from_lines(["yellow", "low", "owl"]).unwrap();
        let engine = WordEngine::new(&index);
        game::new_game(&engine, 6, 3).unwrap()
    }

    #[test]
    fn insert_then_get() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let (id, _) = store.insert(some_state());
        assert_eq!(store.len(), 1);

        let board = store.get(&id).unwrap();
        let board = board.lock().unwrap();
        assert_eq!(board.id, id);
        assert_eq!(board.state.original(), "yellow");
        assert_eq!(board.created_at, board.modified_at);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = SessionStore::new();
        store.insert(some_state());

        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn boards_are_independent() {
        let store = SessionStore::new();
        let (first, _) = store.insert(some_state());
        let (second, _) = store.insert(some_state());

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }
}
