//! Id allocation
//!
//! Ids are one past the largest id present. Callers that delete records also
//! track a high-water mark (see [`allocate`]) so a deleted maximum is never
//! handed out again.

use crate::model::{List, ListId, Todo, TodoId};

/// 1 + the largest list id, or 1 when there are no lists
pub fn next_list_id(lists: &[List]) -> ListId {
    lists.iter().map(|list| list.id).max().unwrap_or(0) + 1
}

/// 1 + the largest todo id, or 1 when there are no todos
pub fn next_todo_id(todos: &[Todo]) -> TodoId {
    todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1
}

/// Pick the next id and advance the high-water mark.
pub(crate) fn allocate(candidate: u64, last_issued: &mut u64) -> u64 {
    let id = candidate.max(*last_issued + 1);
    *last_issued = id;
    id
}
