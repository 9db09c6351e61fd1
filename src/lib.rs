pub mod content;
pub mod orbit;

// Page glue: routing, home panels, theme
pub mod site;
