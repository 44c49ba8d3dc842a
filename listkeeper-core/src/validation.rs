//! Name validation for lists and todos
//!
//! Names are trimmed of surrounding whitespace before checking. The duplicate
//! check runs before the length check, and compares exact, case-sensitive text.

use crate::error::{Entity, ListError, Result};
use crate::model::List;

/// Minimum name length in characters (after trimming)
pub const MIN_NAME_LEN: usize = 1;

/// Maximum name length in characters (after trimming)
pub const MAX_NAME_LEN: usize = 100;

/// Check a prospective list name against every list in the session.
///
/// The list being renamed is not excluded, so renaming a list to its current
/// name fails with [`ListError::DuplicateName`].
pub fn validate_list_name(name: &str, existing: &[List]) -> Result<()> {
    let name = name.trim();
    if existing.iter().any(|list| list.name == name) {
        return Err(ListError::duplicate_name(Entity::List));
    }
    check_length(name, Entity::List)
}

/// Check a prospective todo name against the todos already in `parent`.
pub fn validate_todo_name(name: &str, parent: &List) -> Result<()> {
    let name = name.trim();
    if parent.todos.iter().any(|todo| todo.name == name) {
        return Err(ListError::duplicate_name(Entity::Todo));
    }
    check_length(name, Entity::Todo)
}

fn check_length(name: &str, entity: Entity) -> Result<()> {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(ListError::invalid_length(entity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Todo;

    fn lists() -> Vec<List> {
        vec![List::new(1, "Groceries"), List::new(2, "Chores")]
    }

    #[test]
    fn accepts_fresh_name() {
        assert!(validate_list_name("Books", &lists()).is_ok());
    }

    #[test]
    fn rejects_duplicate() {
        let err = validate_list_name("Groceries", &lists()).unwrap_err();
        assert!(matches!(err, ListError::DuplicateName { entity: Entity::List }));
    }

    #[test]
    fn duplicate_is_case_sensitive() {
        assert!(validate_list_name("groceries", &lists()).is_ok());
    }

    #[test]
    fn duplicate_compares_trimmed_name() {
        let err = validate_list_name("  Chores ", &lists()).unwrap_err();
        assert!(matches!(err, ListError::DuplicateName { .. }));
    }

    #[test]
    fn rejects_empty_and_blank() {
        for name in ["", "   ", "\t\n"] {
            let err = validate_list_name(name, &[]).unwrap_err();
            assert!(matches!(err, ListError::InvalidLength { min: 1, max: 100, .. }));
        }
    }

    #[test]
    fn max_length_counts_characters() {
        assert!(validate_list_name(&"a".repeat(100), &[]).is_ok());
        assert!(validate_list_name(&"é".repeat(100), &[]).is_ok());

        let err = validate_list_name(&"a".repeat(101), &[]).unwrap_err();
        assert!(matches!(err, ListError::InvalidLength { .. }));
    }

    #[test]
    fn todo_names_scoped_to_parent() {
        let mut list = List::new(1, "Groceries");
        list.todos.push(Todo::new(1, "Milk"));

        let err = validate_todo_name("Milk", &list).unwrap_err();
        assert!(matches!(err, ListError::DuplicateName { entity: Entity::Todo }));

        let other = List::new(2, "Chores");
        assert!(validate_todo_name("Milk", &other).is_ok());
    }

    #[test]
    fn todo_length() {
        let list = List::new(1, "Groceries");
        let err = validate_todo_name("", &list).unwrap_err();
        assert!(matches!(err, ListError::InvalidLength { entity: Entity::Todo, .. }));
    }
}
