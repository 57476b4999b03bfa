//! TUI pane rendering
//!
//! - [`bitmap`]: the decoded bitmap with vertical scrolling
//! - [`status`]: status bar with row position and keybindings
//!
//! Panes are stateless render functions; scroll state lives in the app.

pub mod bitmap;
pub mod status;

pub use bitmap::render_bitmap_pane;
pub use status::render_status_bar;
