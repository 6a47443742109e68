//! Update flags returned by widgets to request work from the host.

use bitflags::bitflags;

bitflags! {
    /// What the host application should do after a widget update.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// Redraw the scene.
        const DRAW = 0b0001;
        /// Recompute layout before the next draw.
        const LAYOUT = 0b0010;
    }
}

impl Default for Update {
    fn default() -> Self {
        Update::empty()
    }
}
