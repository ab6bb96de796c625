//! UI building blocks shared across rendering and state modules.

/// Removable selection chips.
pub mod chips;
/// Threshold selector.
pub mod filter_select;
/// Modal frame and button row.
pub mod modal;
/// Search prompt with loading indicator.
pub mod prompt;
/// Windowed row rendering for the filtered list.
pub mod rows;
/// Scrollbar and hit-testing helpers.
pub mod scrollbar;

pub use chips::{ChipSlot, chip_rows_needed, layout_chips, render_chips};
pub use filter_select::render_filter_select;
pub use modal::{ButtonAreas, centered_rect, render_buttons, render_modal_frame};
pub use prompt::{InputContext, render_input, render_loading};
pub use rows::{ListViewport, RowModel, RowsContext, render_rows};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
