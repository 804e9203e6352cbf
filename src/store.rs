use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::error::{AppError, StoreError};
use crate::models::{Criteria, NewTodo, Todo, TodoPatch};

pub const DEFAULT_DATA_SOURCE: &str = "main";

pub type StorePool = Arc<Mutex<MemoryStore>>;

/// CRUD access to todo entities.
///
/// Writes are validated before anything is touched, so a failed call leaves
/// the store exactly as it was.
pub trait TodoStore {
    fn insert(&mut self, attrs: NewTodo) -> Result<Todo, StoreError>;

    /// Lazily yields the todos matching every constraint, in insertion order.
    fn find(&self, criteria: Criteria) -> impl Iterator<Item = &Todo> + '_;

    fn get(&self, id: i64) -> Option<&Todo>;

    fn update(&mut self, id: i64, patch: TodoPatch) -> Result<Todo, StoreError>;

    fn delete(&mut self, id: i64) -> Result<Todo, StoreError>;

    fn delete_where(&mut self, criteria: &Criteria) -> usize;

    /// Drops every todo and restarts id assignment.
    fn reset(&mut self);

    fn count(&self, criteria: Criteria) -> usize {
        self.find(criteria).count()
    }
}

/// Named in-memory data source. Ids are handed out in increasing order, so
/// iterating the map by key is iterating in insertion order.
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    todos: BTreeMap<i64, Todo>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::named(DEFAULT_DATA_SOURCE)
    }

    pub fn named(name: impl Into<String>) -> Self {
        MemoryStore {
            name: name.into(),
            todos: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn into_pool(self) -> StorePool {
        Arc::new(Mutex::new(self))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_label(label: &str) -> Result<(), StoreError> {
    if label.trim().is_empty() {
        return Err(StoreError::EmptyLabel);
    }
    Ok(())
}

impl TodoStore for MemoryStore {
    fn insert(&mut self, attrs: NewTodo) -> Result<Todo, StoreError> {
        let label = attrs.label.ok_or(StoreError::MissingLabel)?;
        validate_label(&label)?;

        let todo = Todo {
            id: self.next_id,
            label,
            finished: attrs.finished.unwrap_or(false),
        };
        self.next_id += 1;
        self.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    fn find(&self, criteria: Criteria) -> impl Iterator<Item = &Todo> + '_ {
        self.todos.values().filter(move |todo| criteria.matches(todo))
    }

    fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.get(&id)
    }

    fn update(&mut self, id: i64, patch: TodoPatch) -> Result<Todo, StoreError> {
        if let Some(ref label) = patch.label {
            validate_label(label)?;
        }
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(label) = patch.label {
            todo.label = label;
        }
        if let Some(finished) = patch.finished {
            todo.finished = finished;
        }
        Ok(todo.clone())
    }

    fn delete(&mut self, id: i64) -> Result<Todo, StoreError> {
        self.todos.remove(&id).ok_or(StoreError::NotFound(id))
    }

    fn delete_where(&mut self, criteria: &Criteria) -> usize {
        let before = self.todos.len();
        self.todos.retain(|_, todo| !criteria.matches(todo));
        before - self.todos.len()
    }

    fn reset(&mut self) {
        debug!(source = %self.name, dropped = self.todos.len(), "Resetting data source");
        self.todos.clear();
        self.next_id = 1;
    }
}

pub fn lock(pool: &StorePool) -> Result<MutexGuard<'_, MemoryStore>, AppError> {
    pool.lock()
        .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
}
