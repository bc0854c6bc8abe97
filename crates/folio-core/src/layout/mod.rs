//! Responsive layout partitioning.
//!
//! The project gallery is built around a fixed *center group*: one column
//! holding the two pinned project tiles, followed by the about panel and
//! the experience panel. The center group never resizes. Whatever
//! horizontal space is left over is filled with extra project columns,
//! placed symmetrically on both sides.
//!
//! The widths of the two center panels are not measured. They are fixed
//! estimates (`est_center_a`, `est_center_b`) and the column count is an
//! approximation that can be off by one near the threshold where another
//! column would just barely fit.
//!
//! ```text
//! | pad | L1 | L0 | pinned | about (est a) | experience (est b) | R0 | R1 | pad |
//! ```

mod placement;

pub use placement::{CENTER_ITEMS, ITEMS_PER_COLUMN, PlacedProjects, ProjectPlacement};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Viewports at or below this width use the stacked single-column layout.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Largest value accepted for any `[layout]` override.
pub const MAX_LAYOUT_VALUE: u32 = 1_000_000;

/// Fixed layout measurements, in logical pixels (or terminal cells for
/// [`LayoutConstants::TERMINAL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConstants {
    /// Width of one repeating project column.
    pub column_width: u32,
    /// Gap between adjacent columns.
    pub gap: u32,
    /// Horizontal padding of the container, per side.
    pub padding: u32,
    /// Estimated width of the about panel.
    pub est_center_a: u32,
    /// Estimated width of the experience panel.
    pub est_center_b: u32,
    /// Widths at or below this value render stacked.
    pub breakpoint: u32,
}

impl LayoutConstants {
    /// Browser measurements.
    pub const WEB: LayoutConstants = LayoutConstants {
        column_width: 465,
        gap: 24,
        padding: 32,
        est_center_a: 600,
        est_center_b: 400,
        breakpoint: MOBILE_BREAKPOINT,
    };

    /// The same heuristic expressed in terminal cells.
    pub const TERMINAL: LayoutConstants = LayoutConstants {
        column_width: 34,
        gap: 1,
        padding: 1,
        est_center_a: 44,
        est_center_b: 36,
        breakpoint: 80,
    };

    /// Width of the fixed center group.
    pub fn center_group_width(&self) -> u32 {
        self.column_width
            .saturating_add(self.gap)
            .saturating_add(self.est_center_a)
            .saturating_add(self.gap)
            .saturating_add(self.est_center_b)
    }

    /// Width one additional side column consumes, gap included.
    pub fn column_stride(&self) -> u32 {
        self.column_width.saturating_add(self.gap)
    }

    /// Apply the fields present in `overrides` on top of `self`.
    pub fn with_overrides(mut self, overrides: &LayoutOverrides) -> Self {
        if let Some(v) = overrides.column_width {
            self.column_width = v;
        }
        if let Some(v) = overrides.gap {
            self.gap = v;
        }
        if let Some(v) = overrides.padding {
            self.padding = v;
        }
        if let Some(v) = overrides.est_center_a {
            self.est_center_a = v;
        }
        if let Some(v) = overrides.est_center_b {
            self.est_center_b = v;
        }
        if let Some(v) = overrides.breakpoint {
            self.breakpoint = v;
        }
        self
    }
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self::WEB
    }
}

/// Partial [`LayoutConstants`], as read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_center_a: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_center_b: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<u32>,
}

impl LayoutOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject a zero column width and any value above [`MAX_LAYOUT_VALUE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_width == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "layout.column_width".to_string(),
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let fields = [
            ("layout.column_width", self.column_width),
            ("layout.gap", self.gap),
            ("layout.padding", self.padding),
            ("layout.est_center_a", self.est_center_a),
            ("layout.est_center_b", self.est_center_b),
            ("layout.breakpoint", self.breakpoint),
        ];
        for (field, value) in fields {
            if let Some(v) = value.filter(|v| *v > MAX_LAYOUT_VALUE) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: v.to_string(),
                    reason: format!("must be at most {}", MAX_LAYOUT_VALUE),
                });
            }
        }
        Ok(())
    }
}

/// Number of side columns on each side of the center group.
///
/// `left == right` always holds under the current policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAllocation {
    pub left: u32,
    pub right: u32,
}

impl ColumnAllocation {
    pub const NONE: ColumnAllocation = ColumnAllocation { left: 0, right: 0 };

    /// Total number of side columns.
    pub fn total(&self) -> u32 {
        self.left.saturating_add(self.right)
    }
}

/// Compute how many side columns fit around the center group.
pub fn compute_columns(viewport_width: u32, constants: &LayoutConstants) -> ColumnAllocation {
    if viewport_width <= constants.breakpoint {
        return ColumnAllocation::NONE;
    }

    let available = viewport_width
        .saturating_sub(constants.center_group_width())
        .saturating_sub(constants.padding.saturating_mul(2));

    let space_per_side = available / 2;
    let stride = constants.column_stride();
    let per_side = if stride == 0 {
        0
    } else {
        space_per_side / stride
    };

    ColumnAllocation {
        left: per_side,
        right: per_side,
    }
}

/// Which layout the gallery uses at a given width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Narrow viewport: one full-width list, no center group.
    #[default]
    Stacked,
    /// Center group flanked by the given side columns.
    Columns(ColumnAllocation),
}

impl LayoutMode {
    pub fn resolve(viewport_width: u32, constants: &LayoutConstants) -> Self {
        if viewport_width <= constants.breakpoint {
            LayoutMode::Stacked
        } else {
            LayoutMode::Columns(compute_columns(viewport_width, constants))
        }
    }

    /// Side columns in use; zero when stacked.
    pub fn allocation(&self) -> ColumnAllocation {
        match self {
            LayoutMode::Stacked => ColumnAllocation::NONE,
            LayoutMode::Columns(allocation) => *allocation,
        }
    }

    pub fn is_stacked(&self) -> bool {
        matches!(self, LayoutMode::Stacked)
    }

    /// Assign `total` projects to the slots of this layout.
    pub fn place(&self, total: usize) -> ProjectPlacement {
        match self {
            LayoutMode::Stacked => ProjectPlacement::stacked(total),
            LayoutMode::Columns(allocation) => ProjectPlacement::assign(*allocation, total),
        }
    }
}
