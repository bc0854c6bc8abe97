//! UI components for folio-tui.

use ratatui::Frame;
use ratatui::layout::Rect;

pub mod clipboard;
mod help_overlay;
mod status_bar;
pub mod styles;
pub mod views;

pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;

/// Active tab for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Home,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 5] = [
        ActiveTab::Home,
        ActiveTab::Skills,
        ActiveTab::Experience,
        ActiveTab::Projects,
        ActiveTab::Contact,
    ];

    /// Get the index of this tab.
    pub fn index(self) -> usize {
        match self {
            ActiveTab::Home => 0,
            ActiveTab::Skills => 1,
            ActiveTab::Experience => 2,
            ActiveTab::Projects => 3,
            ActiveTab::Contact => 4,
        }
    }

    /// Create from index, wrapping out-of-range values to Home.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Get the next tab (cycling).
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    /// Get the previous tab (cycling).
    pub fn previous(self) -> Self {
        Self::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
    }

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Home => "Home",
            ActiveTab::Skills => "Skills",
            ActiveTab::Experience => "Experience",
            ActiveTab::Projects => "Projects",
            ActiveTab::Contact => "Contact",
        }
    }
}

/// Common trait for stateful UI components.
pub trait Component {
    /// Draw the component within the given area.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);
}
