//! In-memory record store.
//!
//! # Design
//! A single `RwLock` guards both the map and the id counter, so id
//! allocation and insertion happen in one critical section. Reads share the
//! lock; every mutation holds it exclusively for its full duration. Records
//! are kept in a `BTreeMap`, which makes `get_all` return them in id order.
//!
//! A poisoned lock is recovered rather than propagated: each mutation is a
//! single map operation, so a panicking holder cannot leave a half-written
//! record behind.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::types::{Todo, TodoId, TodoInput};

#[derive(Debug)]
struct Records {
    todos: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
}

/// Thread-safe owner of all todo records.
#[derive(Debug)]
pub struct TodoStore {
    records: RwLock<Records>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of every record, ordered by id.
    pub fn get_all(&self) -> Vec<Todo> {
        self.read().todos.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: TodoId) -> Option<Todo> {
        self.read().todos.get(&id).cloned()
    }

    /// Store a new record under the next id. Title validation is the
    /// caller's job.
    pub fn create(&self, input: TodoInput) -> Todo {
        let mut records = self.write();
        let todo = Todo {
            id: records.next_id,
            title: input.title,
            description: input.description,
            completed: false,
            created_at: Utc::now(),
        };
        records.todos.insert(todo.id, todo.clone());
        records.next_id += 1;
        todo
    }

    /// Replace title and description. Id, completion and creation time are
    /// left untouched.
    pub fn update(&self, id: TodoId, input: TodoInput) -> Option<Todo> {
        let mut records = self.write();
        let todo = records.todos.get_mut(&id)?;
        todo.title = input.title;
        todo.description = input.description;
        Some(todo.clone())
    }

    /// Mark a record completed. Completing twice is a no-op success.
    pub fn complete(&self, id: TodoId) -> Option<Todo> {
        let mut records = self.write();
        let todo = records.todos.get_mut(&id)?;
        todo.completed = true;
        Some(todo.clone())
    }

    pub fn delete(&self, id: TodoId) -> bool {
        self.write().todos.remove(&id).is_some()
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.read().todos.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, Records> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Records> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}
