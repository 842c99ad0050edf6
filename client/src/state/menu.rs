//! Mobile navigation disclosure state.
//!
//! The panel opens and closes only through [`MenuState::toggle`]. There is no
//! auto-close on outside clicks, anchor navigation, or resizing past the
//! breakpoint.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// SVG path for the three-bar "open menu" glyph.
pub const MENU_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
/// SVG path for the "close menu" cross.
pub const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = self.toggled();
        log::trace!("navigation menu {self:?}");
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Glyph shown on the toggle button: the action a tap will perform.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Closed => MENU_ICON_PATH,
            Self::Open => CLOSE_ICON_PATH,
        }
    }
}
