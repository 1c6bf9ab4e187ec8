//! Presentation state machines.
//!
//! DESIGN
//! ======
//! Each module owns one small piece of page state (`theme`, `scroll`,
//! `menu`, `loading`, `filter`, `typing`) and talks to the browser only
//! through `platform` traits, so every transition is testable natively.

pub mod filter;
pub mod loading;
pub mod menu;
pub mod scroll;
pub mod theme;
pub mod typing;
