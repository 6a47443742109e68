//! Widget identifiers.
//!
//! A [WidgetId] names a widget type within a namespace (usually the crate
//! that defines it) and is used to associate widgets with styling data.

use std::fmt;

/// Unique identifier of a widget type.
///
/// ```rust
/// use oriel_theme::id::WidgetId;
///
/// let id = WidgetId::new("oriel-widgets", "MenuRow");
/// assert_eq!(id.namespace(), "oriel-widgets");
/// assert_eq!(id.id(), "MenuRow");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id from a namespace and a widget name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// The namespace of the widget, usually the defining crate.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The name of the widget type inside its namespace.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
