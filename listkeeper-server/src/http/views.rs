//! Server-rendered HTML views
//!
//! Every page shares one layout which shows the pending flash messages.
//! All user-supplied text goes through [`escape`].

use std::fmt::Write;

use listkeeper_core::{
    list_class, sorted_lists, sorted_todos, todos_count, todos_remaining_count, List, MAX_NAME_LEN,
};

use crate::session::Flash;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the shared layout.
pub fn layout(title: &str, flash: &Flash, body: &str) -> String {
    let mut notices = String::new();
    if let Some(message) = &flash.message {
        let _ = write!(notices, r#"<div class="flash success"><p>{}</p></div>"#, escape(message));
    }
    if let Some(error) = &flash.error {
        let _ = write!(notices, r#"<div class="flash error"><p>{}</p></div>"#, escape(error));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Todo Tracker</title>
</head>
<body>
<header><h1><a href="/lists">Todo Tracker</a></h1></header>
<main>
{notices}
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Index of all lists, incomplete first
pub fn lists_page(lists: &[List]) -> String {
    let mut rows = String::new();
    for list in sorted_lists(lists) {
        let _ = write!(
            rows,
            r#"<li class="{class}"><a href="/lists/{id}"><h2>{name}</h2><p>{remaining} / {total}</p></a></li>"#,
            class = list_class(list).unwrap_or(""),
            id = list.id,
            name = escape(&list.name),
            remaining = todos_remaining_count(list),
            total = todos_count(list),
        );
    }

    format!(
        r#"<section id="lists">
<ul class="lists">{rows}</ul>
<a class="add" href="/lists/new">New List</a>
</section>"#
    )
}

/// Form for creating a list
pub fn new_list_page(value: &str) -> String {
    name_form("/lists/new", "Enter the name for your new list:", value, "/lists")
}

/// Form for renaming a list
pub fn edit_list_page(list: &List, value: &str) -> String {
    let mut body = name_form(
        &format!("/lists/{}/edit", list.id),
        &format!("Enter the new name for {}:", list.name),
        value,
        &format!("/lists/{}", list.id),
    );
    let _ = write!(
        body,
        r#"<form action="/lists/{id}/delete" method="post" class="delete"><button type="submit">Delete List</button></form>"#,
        id = list.id,
    );
    body
}

/// One list with its todos, incomplete first
pub fn list_page(list: &List, todo_value: &str) -> String {
    let mut rows = String::new();
    for todo in sorted_todos(&list.todos) {
        let _ = write!(
            rows,
            r#"<li class="{class}">
<form action="/lists/{list_id}/todos/{todo_id}" method="post" class="check">
<input type="hidden" name="completed" value="{toggle}"><button type="submit">Complete</button>
</form>
<h3>{name}</h3>
<form action="/lists/{list_id}/todos/{todo_id}/delete" method="post" class="delete"><button type="submit">Delete</button></form>
</li>"#,
            class = if todo.completed { "complete" } else { "" },
            list_id = list.id,
            todo_id = todo.id,
            toggle = !todo.completed,
            name = escape(&todo.name),
        );
    }

    format!(
        r#"<section id="todos" class="{class}">
<header>
<h2>{name}</h2>
<ul>
<li><form action="/lists/{id}/complete_all" method="post"><button class="check" type="submit">Complete All</button></form></li>
<li><a class="edit" href="/lists/{id}/edit">Edit List</a></li>
</ul>
</header>
<ul>{rows}</ul>
</section>
<form action="/lists/{id}" method="post">
<dl><dt><label for="todo">Enter a new todo item:</label></dt>
<dd><input name="todo" id="todo" placeholder="Something to do" type="text" maxlength="{max}" value="{value}"></dd></dl>
<fieldset class="actions"><input type="submit" value="Add"></fieldset>
</form>
<a class="list" href="/lists">All Lists</a>"#,
        class = list_class(list).unwrap_or(""),
        name = escape(&list.name),
        id = list.id,
        max = MAX_NAME_LEN,
        value = escape(todo_value),
    )
}

fn name_form(action: &str, label: &str, value: &str, cancel: &str) -> String {
    format!(
        r#"<form action="{action}" method="post">
<dl><dt><label for="list_name">{label}</label></dt>
<dd><input name="list_name" id="list_name" placeholder="List Name" type="text" maxlength="{max}" value="{value}"></dd></dl>
<fieldset class="actions"><input type="submit" value="Save"><a href="{cancel}">Cancel</a></fieldset>
</form>"#,
        label = escape(label),
        max = MAX_NAME_LEN,
        value = escape(value),
    )
}
