//! Example fixture used to seed a fresh store.

use crate::types::{PriorityLevel, Todo};

fn todo(id: u64, name: &str, description: &str, priority: PriorityLevel, completed: bool) -> Todo {
    Todo {
        id,
        name: name.to_string(),
        description: description.to_string(),
        priority,
        completed,
    }
}

/// The five example todos, ids 1 through 5.
pub fn example_todos() -> Vec<Todo> {
    vec![
        todo(1, "Buy groceries", "Milk, Bread, Eggs", PriorityLevel::Medium, false),
        todo(2, "Read a book", "Finish reading 'The Great Gatsby'", PriorityLevel::Low, false),
        todo(3, "Sports", "Play football", PriorityLevel::High, true),
        todo(4, "Workout", "Go to the gym for a workout session", PriorityLevel::High, false),
        todo(5, "Call Mom", "Catch up with Mom over the phone", PriorityLevel::Medium, false),
    ]
}
