//! UI Components
//!
//! Reusable Leptos components.

mod category_tab_bar;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use category_tab_bar::CategoryTabBar;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
