//! Cell style directives consumed by report renderers.

use serde::{Deserialize, Serialize};

/// Fixed report palette. Renderers interpret these hex values identically
/// across PDF/DOCX/XLSX backends.
pub mod palette {
    /// Ledger table header background.
    pub const HEADER_BLUE: &str = "#2F5496";
    /// Total row background.
    pub const TOTAL_YELLOW: &str = "#FFD966";
    /// Stock summary banner and closing row background.
    pub const STOCK_GREEN: &str = "#70AD47";
    /// Heavy-equipment recap banner background.
    pub const HEAVY_ORANGE: &str = "#F4B084";
    /// Vehicle recap banner background.
    pub const VEHICLE_BLUE: &str = "#9BC2E6";
    /// "Other" recap banner background.
    pub const OTHER_PINK: &str = "#ED77C4";
    /// Cell border color.
    pub const BORDER_GREY: &str = "#BFBFBF";
    /// Alternating data row background.
    pub const ZEBRA_GREY: &str = "#F2F2F2";
    /// Header and banner text.
    pub const TEXT_WHITE: &str = "#FFFFFF";
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
}

/// Style directives for a single grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellStyle {
    /// Background fill, hex color.
    pub background: Option<String>,
    /// Text color override, hex color.
    pub text_color: Option<String>,
    /// Bold text.
    pub bold: bool,
    /// Horizontal alignment.
    pub align: Align,
    /// Whether the cell carries the table border.
    pub bordered: bool,
}

impl CellStyle {
    /// Bordered cell with the given alignment, no fill.
    #[must_use]
    pub fn bordered(align: Align) -> Self {
        Self {
            align,
            bordered: true,
            ..Self::default()
        }
    }

    /// Bold white-on-color header cell.
    #[must_use]
    pub fn header(background: &str) -> Self {
        Self {
            background: Some(background.to_string()),
            text_color: Some(palette::TEXT_WHITE.to_string()),
            bold: true,
            align: Align::Center,
            bordered: true,
        }
    }

    /// Bold filled total cell.
    #[must_use]
    pub fn total(background: &str, align: Align) -> Self {
        Self {
            background: Some(background.to_string()),
            text_color: None,
            bold: true,
            align,
            bordered: true,
        }
    }
}
