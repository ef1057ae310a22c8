pub mod log;
pub mod plot;

use crossterm::event::Event;
pub use log::Logs;
pub use plot::Plots;
use ratatui::widgets::WidgetRef;

/// A focusable UI region that can consume input events
pub trait Component: WidgetRef {
    /// Handle a terminal input event, returning whether it was consumed
    fn handle_ui_event(&mut self, event: &Event) -> bool;
}
