//! Frontend Models
//!
//! Data structures owned by the todo list.

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed entry
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Flip the completed flag, returning the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new("Buy milk");
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_todo_toggle() {
        let mut todo = Todo::new("Buy milk");
        assert!(todo.toggle());
        assert!(todo.completed);
        assert!(!todo.toggle());
        assert!(!todo.completed);
    }
}
