//! Widget components shared by the launcher screens.
//!
//! - [`header`]: App screen frame (background, title, back hint)
//! - [`primitives`]: Text wrapping and multi-row drawing

mod header;
mod primitives;

pub use header::{BACK_HINT, CONTENT_TOP, MARGIN_X, draw_app_frame};
pub use primitives::{columns_from, draw_rows, wrap_rows};
