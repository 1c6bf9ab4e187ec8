//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless helpers for scrolling and outbound links, kept out of the
//! components so they can be unit tested.

pub mod links;
pub mod smooth_scroll;
