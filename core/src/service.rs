//! Service facade between request handlers and storage.
//!
//! Handlers depend on [`TodoService`] only, so a different backing store can
//! be swapped in without touching `TodoApi`.

use std::sync::Arc;

use crate::store::TodoStore;
use crate::types::{Todo, TodoId, TodoInput};

pub trait TodoService: Send + Sync {
    fn list_todos(&self) -> Vec<Todo>;
    fn get_todo(&self, id: TodoId) -> Option<Todo>;
    fn create_todo(&self, input: TodoInput) -> Todo;
    fn update_todo(&self, id: TodoId, input: TodoInput) -> Option<Todo>;
    fn complete_todo(&self, id: TodoId) -> Option<Todo>;
    fn delete_todo(&self, id: TodoId) -> bool;
}

/// `TodoService` backed by a shared [`TodoStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreService {
    store: Arc<TodoStore>,
}

impl StoreService {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}

impl TodoService for StoreService {
    fn list_todos(&self) -> Vec<Todo> {
        self.store.get_all()
    }

    fn get_todo(&self, id: TodoId) -> Option<Todo> {
        self.store.get_by_id(id)
    }

    fn create_todo(&self, input: TodoInput) -> Todo {
        self.store.create(input)
    }

    fn update_todo(&self, id: TodoId, input: TodoInput) -> Option<Todo> {
        self.store.update(id, input)
    }

    fn complete_todo(&self, id: TodoId) -> Option<Todo> {
        self.store.complete(id)
    }

    fn delete_todo(&self, id: TodoId) -> bool {
        self.store.delete(id)
    }
}
