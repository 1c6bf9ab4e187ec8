//! Page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page and forward user input to the state
//! machines in `state`, reading shared services from Leptos context.

pub mod external_link;
pub mod header;
pub mod loading_screen;
pub mod projects;
pub mod scroll_chrome;
pub mod sections;
pub mod theme_toggle;
