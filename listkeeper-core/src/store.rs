//! ListStore: the per-session collection of lists and the operations on it
//!
//! Every operation either fully applies or returns an error without touching
//! the store. Lists and todos are always addressed by id, never by position.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Entity, ListError, Result};
use crate::ids::{allocate, next_list_id, next_todo_id};
use crate::model::{List, ListId, Todo, TodoId};
use crate::validation::{validate_list_name, validate_todo_name};

/// Find a list by id with a linear scan
pub fn find_list(lists: &[List], id: ListId) -> Result<&List> {
    lists
        .iter()
        .find(|list| list.id == id)
        .ok_or_else(|| ListError::not_found(Entity::List, id))
}

/// Mutable variant of [`find_list`]
pub fn find_list_mut(lists: &mut [List], id: ListId) -> Result<&mut List> {
    lists
        .iter_mut()
        .find(|list| list.id == id)
        .ok_or_else(|| ListError::not_found(Entity::List, id))
}

/// Find a todo by id within one list
pub fn find_todo(list: &List, todo_id: TodoId) -> Result<&Todo> {
    list.todos
        .iter()
        .find(|todo| todo.id == todo_id)
        .ok_or_else(|| ListError::not_found(Entity::Todo, todo_id))
}

/// Mutable variant of [`find_todo`]
pub fn find_todo_mut(list: &mut List, todo_id: TodoId) -> Result<&mut Todo> {
    list.todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or_else(|| ListError::not_found(Entity::Todo, todo_id))
}

/// All lists owned by one session, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStore {
    lists: Vec<List>,

    /// Highest list id ever issued, so deleted ids stay retired
    #[serde(default)]
    last_list_id: ListId,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists in insertion order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn find(&self, id: ListId) -> Result<&List> {
        find_list(&self.lists, id)
    }

    pub fn find_mut(&mut self, id: ListId) -> Result<&mut List> {
        find_list_mut(&mut self.lists, id)
    }

    /// Validate `name` and append a new empty list. Returns the new id.
    pub fn create_list(&mut self, name: &str) -> Result<ListId> {
        validate_list_name(name, &self.lists)?;

        let id = allocate(next_list_id(&self.lists), &mut self.last_list_id);
        self.lists.push(List::new(id, name.trim()));
        debug!(list_id = id, "list created");
        Ok(id)
    }

    /// Rename list `id`. The new name is checked against every list, the
    /// renamed one included.
    pub fn rename_list(&mut self, id: ListId, new_name: &str) -> Result<()> {
        self.find(id)?;
        validate_list_name(new_name, &self.lists)?;

        let list = self.find_mut(id)?;
        list.name = new_name.trim().to_owned();
        debug!(list_id = id, "list renamed");
        Ok(())
    }

    /// Remove list `id`. Returns false (and changes nothing) if it is absent.
    pub fn delete_list(&mut self, id: ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        let removed = self.lists.len() != before;
        if removed {
            debug!(list_id = id, "list deleted");
        }
        removed
    }
}

impl List {
    pub fn find_todo(&self, todo_id: TodoId) -> Result<&Todo> {
        find_todo(self, todo_id)
    }

    /// Validate `name` against sibling todos and append it, incomplete.
    pub fn add_todo(&mut self, name: &str) -> Result<TodoId> {
        validate_todo_name(name, self)?;

        let id = allocate(next_todo_id(&self.todos), &mut self.last_todo_id);
        self.todos.push(Todo::new(id, name.trim()));
        debug!(list_id = self.id, todo_id = id, "todo added");
        Ok(id)
    }

    /// Remove todo `todo_id`. Returns false if it is absent.
    pub fn delete_todo(&mut self, todo_id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != todo_id);
        self.todos.len() != before
    }

    pub fn set_todo_completed(&mut self, todo_id: TodoId, completed: bool) -> Result<()> {
        find_todo_mut(self, todo_id)?.completed = completed;
        Ok(())
    }

    pub fn complete_all_todos(&mut self) {
        for todo in &mut self.todos {
            todo.completed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> ListStore {
        let mut store = ListStore::new();
        for name in names {
            store.create_list(name).unwrap();
        }
        store
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let store = store_with(&["a", "b", "c"]);
        let ids: Vec<_> = store.lists().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(store.lists().iter().all(|l| l.todos.is_empty()));
    }

    #[test]
    fn create_stores_trimmed_name() {
        let mut store = ListStore::new();
        let id = store.create_list("  Groceries\n").unwrap();
        assert_eq!(store.find(id).unwrap().name, "Groceries");
    }

    #[test]
    fn failed_create_leaves_store_untouched() {
        let mut store = store_with(&["Groceries"]);
        let snapshot = store.clone();

        assert!(store.create_list("Groceries").is_err());
        assert!(store.create_list("").is_err());
        assert_eq!(store, snapshot);
    }

    #[test]
    fn ids_not_reused_after_delete() {
        let mut store = ListStore::new();
        let a = store.create_list("A").unwrap();
        assert_eq!(a, 1);
        assert!(store.delete_list(a));

        let b = store.create_list("B").unwrap();
        assert_eq!(b, 2);
    }

    #[test]
    fn ids_not_reused_after_deleting_max() {
        let mut store = store_with(&["a", "b", "c"]);
        store.delete_list(3);
        assert_eq!(store.create_list("d").unwrap(), 4);
    }

    #[test]
    fn deleted_ids_stay_retired_across_serde() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.delete_list(2));

        let json = serde_json::to_string(&store).unwrap();
        let mut restored: ListStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
        assert_eq!(restored.create_list("c").unwrap(), 3);
    }

    #[test]
    fn lookup_by_id_survives_deletes() {
        let mut store = store_with(&["a", "b", "c"]);
        store.delete_list(1);

        assert_eq!(store.find(3).unwrap().name, "c");
        assert_eq!(
            store.find(1).unwrap_err(),
            ListError::not_found(Entity::List, 1)
        );
    }

    #[test]
    fn rename_in_place() {
        let mut store = store_with(&["a", "b"]);
        store.rename_list(1, "z").unwrap();
        assert_eq!(store.lists()[0].name, "z");
        assert_eq!(store.lists()[0].id, 1);
    }

    #[test]
    fn rename_to_same_name_is_duplicate() {
        let mut store = store_with(&["a"]);
        let err = store.rename_list(1, "a").unwrap_err();
        assert_eq!(err, ListError::duplicate_name(Entity::List));
    }

    #[test]
    fn rename_missing_list() {
        let mut store = store_with(&["a"]);
        let err = store.rename_list(9, "b").unwrap_err();
        assert!(matches!(err, ListError::NotFound { id: 9, .. }));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut once = store_with(&["a", "b"]);
        let mut twice = once.clone();

        assert!(once.delete_list(1));
        assert!(twice.delete_list(1));
        assert!(!twice.delete_list(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn todo_lifecycle() {
        let mut store = store_with(&["Groceries"]);
        let list = store.find_mut(1).unwrap();

        let milk = list.add_todo("Milk").unwrap();
        let eggs = list.add_todo("Eggs").unwrap();
        assert_eq!((milk, eggs), (1, 2));
        assert!(!list.find_todo(milk).unwrap().completed);

        list.set_todo_completed(milk, true).unwrap();
        assert!(list.find_todo(milk).unwrap().completed);

        list.set_todo_completed(milk, false).unwrap();
        assert!(!list.find_todo(milk).unwrap().completed);

        assert!(list.delete_todo(eggs));
        assert!(!list.delete_todo(eggs));
        assert_eq!(list.add_todo("Bread").unwrap(), 3);
    }

    #[test]
    fn set_completed_on_missing_todo() {
        let mut list = List::new(1, "Groceries");
        let err = list.set_todo_completed(5, true).unwrap_err();
        assert_eq!(err, ListError::not_found(Entity::Todo, 5));
    }

    #[test]
    fn complete_all() {
        let mut list = List::new(1, "Groceries");
        list.complete_all_todos();
        assert!(list.todos.is_empty());

        list.add_todo("Milk").unwrap();
        list.add_todo("Eggs").unwrap();
        list.complete_all_todos();
        assert!(list.todos.iter().all(|t| t.completed));
    }

    #[test]
    fn duplicate_todo_rejected() {
        let mut list = List::new(1, "Groceries");
        list.add_todo("Milk").unwrap();
        let err = list.add_todo("Milk").unwrap_err();
        assert_eq!(err, ListError::duplicate_name(Entity::Todo));
        assert_eq!(list.todos.len(), 1);
    }
}
