//! In-memory todo collection manager.
//!
//! # Overview
//! `TodoStore` owns an ordered collection of `Todo` records, assigns their
//! ids, and implements get, list-first-n, create, partial update and delete.
//! It performs no I/O and never logs; callers translate `StoreError` into
//! whatever their transport needs.
//!
//! # Design
//! - Input arrives as `TodoCreate` / `TodoPatch` value objects whose length
//!   bounds are checked before any record is built or changed.
//! - The store is a plain value with `&mut self` mutations; sharing it across
//!   threads is the caller's job (one lock around the whole store).
//! - `seed::example_todos` provides the five example records used by the
//!   service and by tests.

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{PriorityLevel, Todo, TodoCreate, TodoPatch};
