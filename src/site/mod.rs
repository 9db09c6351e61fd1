//! Page-level glue around the orbits: section routing, home panel
//! hit-testing, theme.

pub mod panels;
pub mod sections;
pub mod theme;

pub use panels::{HomeHighlight, PanelLayout};
pub use sections::{Route, Section, Step};
pub use theme::Theme;
