//! TUI pane rendering modules
//!
//! Each pane is a stateless render function fed from the current
//! [`ExecutionStep`](crate::snapshot::ExecutionStep) and app state.
//!
//! - [`source`]: Source code with current-line arrow and breakpoint markers
//! - [`variables`]: Bindings of the current step, changes highlighted
//! - [`chart`]: Bar chart of the traced array
//! - [`output`]: Captured output up to the current step
//! - [`status`]: Status bar with step counter and keybindings

pub mod chart;
pub mod output;
pub mod source;
pub mod status;
pub mod variables;

pub use chart::render_chart_pane;
pub use output::render_output_pane;
pub use source::{render_source_pane, SourceRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use variables::render_variables_pane;
