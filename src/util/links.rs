//! Outbound link validation.
//!
//! Only links with an accepted scheme are followed. Anything else is
//! logged, reported to the user with a blocking alert, and dropped.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use url::Url;

use crate::error::PresentationError;
use crate::platform::LinkOpener;

pub const ACCEPTED_LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

pub fn validate_external_link(raw: &str) -> Result<Url, PresentationError> {
    let invalid = || PresentationError::InvalidExternalLink { url: raw.to_owned() };
    let url = Url::parse(raw.trim()).map_err(|_| invalid())?;
    if ACCEPTED_LINK_SCHEMES.contains(&url.scheme()) {
        Ok(url)
    } else {
        Err(invalid())
    }
}

/// Open `raw` in a new tab, or alert the user that `label` has a bad link.
pub fn open_external_link(opener: &dyn LinkOpener, raw: &str, label: &str) -> Result<(), PresentationError> {
    match validate_external_link(raw) {
        Ok(url) => {
            opener.open_in_new_tab(url.as_str());
            Ok(())
        }
        Err(err) => {
            log::error!("links: {err} for {label}");
            opener.alert(&format!("Invalid link for {label}"));
            Err(err)
        }
    }
}
