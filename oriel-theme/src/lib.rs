//! Style configuration for the oriel menu widgets.
//!
//! The central type is [`style::MenuStyle`]: an immutable bag of fonts,
//! colors, insets and sizing shared read-only by every row of a menu.
//! Styles can be built in code or loaded from a TOML file via [`config`].

pub mod config;
pub mod id;
pub mod serde_color;
pub mod style;
