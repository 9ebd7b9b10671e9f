//! Terminal replay viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI only consumes a finished trace; it never influences generation.
//!
//! - **[`app`]**: application state, keyboard event loop, auto-play, breakpoints
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   variables, chart, output, status bar)
//! - **[`theme`]**: dark and light colour palettes
//!
//! Construct an [`App`] from a [`Playback`](crate::snapshot::Playback) and call
//! [`App::run`](app::App::run) to start the event loop.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
