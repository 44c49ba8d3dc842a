//! listkeeper-core: session-scoped todo list operations
//!
//! Pure, synchronous data manipulation. The request layer owns one
//! [`ListStore`] per session, calls a single operation, then renders.

pub mod display;
pub mod error;
pub mod ids;
pub mod model;
pub mod store;
pub mod validation;

pub use display::{
    is_list_complete, list_class, sorted_lists, sorted_todos, todos_count, todos_remaining_count,
};
pub use error::{Entity, ListError, Result};
pub use ids::{next_list_id, next_todo_id};
pub use model::{List, ListId, Todo, TodoId};
pub use store::{find_list, find_list_mut, find_todo, find_todo_mut, ListStore};
pub use validation::{validate_list_name, validate_todo_name, MAX_NAME_LEN, MIN_NAME_LEN};
