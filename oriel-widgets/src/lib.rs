//! Widgets for the oriel popup-menu kit.
//!
//! The main entry point is [`menu_row::MenuRow`]: one selectable row of a
//! popup menu, laying out icon, label and checkmark under the shared
//! [`oriel_theme::style::MenuStyle`] and reacting to pointer hover, clicks
//! and persisted selection. [`checkmark::Checkmark`] is the small indicator
//! widget rows use to display the chosen item.

pub mod checkmark;
pub mod menu_row;

pub use checkmark::Checkmark;
pub use menu_row::MenuRow;
