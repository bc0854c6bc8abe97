//! Per-tab views.
//!
//! Views are stateless: they render from the current [`ViewState`]
//! snapshot, the content document and the app's cursor.

use folio_core::content::Content;
use folio_core::layout::LayoutConstants;
use folio_core::state::ViewState;

pub mod contact;
pub mod experience;
pub mod home;
pub mod projects;
pub mod skills;

/// Everything a view reads while drawing.
pub struct ViewContext<'a> {
    pub content: &'a Content,
    pub state: &'a ViewState,
    /// Gallery measurements in terminal cells.
    pub constants: &'a LayoutConstants,
    /// Index of the highlighted item on list tabs.
    pub cursor: usize,
}

/// Scroll offset that keeps `line` inside a window `height` rows tall.
pub(crate) fn scroll_to(line: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    let offset = (line + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
