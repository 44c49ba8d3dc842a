//! End-to-end walks through a session's list store

use listkeeper_core::{is_list_complete, sorted_lists, Entity, ListError, ListStore};

#[test]
fn groceries_walkthrough() {
    let mut store = ListStore::new();

    let list_id = store.create_list("Groceries").unwrap();
    assert_eq!(list_id, 1);
    assert!(store.find(list_id).unwrap().todos.is_empty());

    let list = store.find_mut(list_id).unwrap();
    let milk = list.add_todo("Milk").unwrap();
    assert_eq!(milk, 1);
    assert!(!list.find_todo(milk).unwrap().completed);
    assert!(!is_list_complete(list));

    list.set_todo_completed(milk, true).unwrap();
    assert!(is_list_complete(store.find(list_id).unwrap()));
}

#[test]
fn invalid_and_duplicate_names() {
    let mut store = ListStore::new();

    assert_eq!(
        store.create_list("").unwrap_err(),
        ListError::invalid_length(Entity::List)
    );

    store.create_list("Groceries").unwrap();
    assert_eq!(
        store.create_list("Groceries").unwrap_err(),
        ListError::duplicate_name(Entity::List)
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn deleted_list_id_is_retired() {
    let mut store = ListStore::new();
    let a = store.create_list("A").unwrap();
    store.delete_list(a);
    let b = store.create_list("B").unwrap();

    assert_eq!((a, b), (1, 2));
    assert!(store.find(a).is_err());
}

#[test]
fn completed_lists_sort_last() {
    let mut store = ListStore::new();
    let done = store.create_list("Done").unwrap();
    store.create_list("Open").unwrap();
    store.create_list("Empty").unwrap();

    let list = store.find_mut(done).unwrap();
    list.add_todo("only").unwrap();
    list.complete_all_todos();

    let names: Vec<_> = sorted_lists(store.lists()).map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Open", "Empty", "Done"]);
}
