//! Section scrolling with fixed-header compensation.
//!
//! Callers pass the header offset because nav items and in-page anchors
//! use different values. A section id with no element is a no-op.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use std::rc::Rc;

use crate::error::PresentationError;
use crate::platform::Viewport;

#[derive(Clone)]
pub struct SmoothScrollEngine {
    viewport: Rc<dyn Viewport>,
}

impl SmoothScrollEngine {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self { viewport }
    }

    /// Scroll destination for `target_id`, without scrolling.
    pub fn destination(&self, target_id: &str, header_offset_px: f64) -> Result<f64, PresentationError> {
        let top = self
            .viewport
            .section_top(target_id)
            .ok_or_else(|| PresentationError::MissingScrollTarget { target: target_id.to_owned() })?;
        Ok(top - header_offset_px)
    }

    /// Animate the viewport to `target_id`. Returns the destination, or
    /// `None` when the section does not exist.
    pub fn scroll_to_section(&self, target_id: &str, header_offset_px: f64) -> Option<f64> {
        match self.destination(target_id, header_offset_px) {
            Ok(destination) => {
                self.viewport.smooth_scroll_to(destination);
                Some(destination)
            }
            Err(err) => {
                log::debug!("scroll: {err}");
                None
            }
        }
    }

    pub fn scroll_to_top(&self) {
        self.viewport.smooth_scroll_to(0.0);
    }
}

/// Section id named by an in-page anchor `href` such as `#projects`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
