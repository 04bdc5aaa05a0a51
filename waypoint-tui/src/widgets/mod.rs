//! Reusable widget components.

pub mod detail;
pub mod search_bar;
pub mod status;

pub use detail::DetailPanel;
pub use search_bar::SearchBar;
pub use status::StatusIndicator;
