//! Display ordering and summary helpers
//!
//! Nothing here mutates. Sorting is a stable two-bucket partition: incomplete
//! entries first, then complete ones, each bucket in original order.

use crate::model::{List, Todo};

/// A list is complete when it has at least one todo and all are completed.
pub fn is_list_complete(list: &List) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|todo| todo.completed)
}

pub fn todos_count(list: &List) -> usize {
    list.todos.len()
}

pub fn todos_remaining_count(list: &List) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// CSS class for a list row
pub fn list_class(list: &List) -> Option<&'static str> {
    is_list_complete(list).then_some("complete")
}

/// Lists in display order: incomplete, then complete.
pub fn sorted_lists(lists: &[List]) -> impl Iterator<Item = &List> + '_ {
    partition_by(lists, is_list_complete)
}

/// Todos in display order: incomplete, then completed.
pub fn sorted_todos(todos: &[Todo]) -> impl Iterator<Item = &Todo> + '_ {
    partition_by(todos, |todo| todo.completed)
}

fn partition_by<T, F>(items: &[T], is_done: F) -> impl Iterator<Item = &T> + '_
where
    F: Fn(&T) -> bool + Copy + 'static,
{
    let pending = items.iter().filter(move |item| !is_done(*item));
    let done = items.iter().filter(move |item| is_done(*item));
    pending.chain(done)
}
