//! Session data records
//!
//! Lists and todos are plain fixed-shape records. The mutation rules live in
//! [`crate::store`]; this module only defines shape and serialization.

use serde::{Deserialize, Serialize};

/// Identifier of a list, unique within one session
pub type ListId = u64;

/// Identifier of a todo, unique within its parent list
pub type TodoId = u64;

/// A single item inside a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub completed: bool,
}

/// A named, ordered collection of todos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub todos: Vec<Todo>,

    /// Highest todo id ever issued in this list, so deleted ids stay retired
    #[serde(default)]
    pub(crate) last_todo_id: TodoId,
}

impl List {
    /// An empty list with the given id and name.
    ///
    /// No validation happens here; go through [`crate::ListStore::create_list`]
    /// for the checked path.
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
            last_todo_id: 0,
        }
    }
}

impl Todo {
    pub fn new(id: TodoId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_serializes_with_high_water_mark() {
        let mut list = List::new(3, "Groceries");
        list.todos.push(Todo::new(1, "Milk"));
        list.last_todo_id = 2;

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Groceries");
        assert_eq!(json["todos"][0]["completed"], false);
        assert_eq!(json["last_todo_id"], 2);
    }

    #[test]
    fn deleted_todo_ids_stay_retired_across_serde() {
        let mut list = List::new(1, "Groceries");
        list.add_todo("Milk").unwrap();
        let eggs = list.add_todo("Eggs").unwrap();
        assert!(list.delete_todo(eggs));

        let json = serde_json::to_string(&list).unwrap();
        let mut restored: List = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, list);
        assert_eq!(restored.add_todo("Bread").unwrap(), 3);
    }

    #[test]
    fn missing_high_water_mark_falls_back_to_max_id() {
        let json = r#"{"id":1,"name":"Groceries","todos":[{"id":4,"name":"Milk","completed":false}]}"#;
        let mut list: List = serde_json::from_str(json).unwrap();
        assert_eq!(list.add_todo("Eggs").unwrap(), 5);
    }
}
