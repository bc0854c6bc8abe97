//! Layout constants for folio-tui.
//!
//! Centralizes screen-layout numbers. Column widths of the project gallery
//! come from `LayoutConstants::TERMINAL` in folio-core.

/// Main layout constants.
pub mod main {
    /// Header panel height in rows (includes tab bar).
    pub const HEADER_HEIGHT: u16 = 3;

    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

/// Project gallery.
pub mod gallery {
    /// Height of one tile in the fallback grid.
    pub const GRID_TILE_HEIGHT: u16 = 7;

    /// Share of the gallery height given to the column row, in percent.
    pub const COLUMN_ROW_PERCENT: u16 = 60;

    /// Minimum height of the column row.
    pub const COLUMN_ROW_MIN: u16 = 14;
}

/// Contact form.
pub mod contact_form {
    /// Height of a single-line input box.
    pub const INPUT_HEIGHT: u16 = 3;

    /// Minimum height of the message box.
    pub const MESSAGE_MIN_HEIGHT: u16 = 5;
}
