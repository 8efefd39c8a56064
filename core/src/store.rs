//! In-memory owner of the todo collection.
//!
//! # Design
//! `TodoStore` is a plain synchronous value holding a `Vec<Todo>` in insertion
//! order. It has no interior locking; a service that shares it across tasks
//! wraps it in a lock and holds the write guard for every mutating call, which
//! keeps `create`'s scan-for-max then append atomic.
//!
//! New ids are `1 + max(existing ids)`, or `1` for an empty store.

use std::collections::HashSet;

use crate::error::StoreError;
use crate::seed;
use crate::types::{Todo, TodoCreate, TodoPatch};

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// An empty store. The first created todo gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing set of records, keeping their order.
    ///
    /// Fails if two records share an id or a record violates a length bound.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if !seen.insert(todo.id) {
                return Err(StoreError::InvalidArgument(format!("duplicate todo id {}", todo.id)));
            }
            TodoCreate::new(todo.name.as_str(), todo.description.as_str()).validate()?;
        }
        Ok(Self { todos })
    }

    /// A store holding the five example todos.
    pub fn seeded() -> Self {
        Self {
            todos: seed::example_todos(),
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get_by_id(&self, id: u64) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// The first `n` records in storage order.
    ///
    /// `None` or `Some(0)` returns every record, as does any `n` larger than
    /// the collection. Negative counts are rejected.
    pub fn list_first_n(&self, n: Option<i64>) -> Result<Vec<Todo>, StoreError> {
        let n = match n {
            None | Some(0) => return Ok(self.todos.clone()),
            Some(n) if n < 0 => {
                return Err(StoreError::InvalidArgument(format!(
                    "first_n must not be negative, got {n}"
                )))
            }
            Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
        };
        Ok(self.todos.iter().take(n).cloned().collect())
    }

    pub fn create(&mut self, input: TodoCreate) -> Result<Todo, StoreError> {
        input.validate()?;
        let todo = input.into_todo(self.next_id()?);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply the fields present in `patch` to the record with `id`.
    pub fn update(&mut self, id: u64, patch: TodoPatch) -> Result<Todo, StoreError> {
        patch.validate()?;
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply_to(todo);
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Todo, StoreError> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }

    fn next_id(&self) -> Result<u64, StoreError> {
        match self.todos.iter().map(|todo| todo.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| StoreError::InvalidArgument(format!("no id left after {max}"))),
        }
    }
}
