//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod invites;
mod list_card;
mod lists_view;
pub mod modal;
mod new_task_form;
mod tab_bar;
mod task_row;

pub use dashboard::DashboardView;
pub use invites::InvitesBanner;
pub use list_card::ListCard;
pub use lists_view::ListsView;
pub use modal::ModalHost;
pub use new_task_form::NewTaskForm;
pub use tab_bar::TabBar;
pub use task_row::TaskRow;
