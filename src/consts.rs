//! Shared timing and geometry constants for the presentation core.

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset past which the header switches to its "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Header compensation used by primary navigation items.
pub const NAV_HEADER_OFFSET_PX: f64 = 100.0;

/// Header compensation used by generic `#section` anchor links.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

/// Offset past which the back-to-top affordance is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

// ── Navigation menu ─────────────────────────────────────────────

/// Wait between collapsing the mobile menu and starting the scroll.
pub const MENU_SETTLE_DELAY_MS: u32 = 100;

/// Key name that dismisses the open mobile menu.
pub const ESCAPE_KEY: &str = "Escape";

// ── Loading ─────────────────────────────────────────────────────

pub const LOADING_TICK_MS: u32 = 100;

/// Exclusive upper bound of a single synthetic progress step.
pub const LOADING_MAX_INCREMENT: f64 = 15.0;

/// Pause between progress pinning at 100 and the completion callback.
pub const LOADING_COMPLETE_DELAY_MS: u32 = 500;

/// Upper bound on how long the loading view may stay up.
pub const LOADING_MAX_DURATION_MS: u32 = 2000;

pub const LOADING_COMPLETE_PERCENT: f64 = 100.0;

// ── Headline typing ─────────────────────────────────────────────

/// Delay before each typed character of a headline role.
pub const TYPING_TYPE_MS: u32 = 100;

/// Delay before each deleted character.
pub const TYPING_DELETE_MS: u32 = 50;

/// How long a fully typed role stays on screen.
pub const TYPING_PAUSE_MS: u32 = 2000;

// ── Filtering ───────────────────────────────────────────────────

/// Sentinel filter value meaning "no filtering".
pub const ALL_TAG: &str = "All";

/// Number of distinct tags offered as filter buttons.
pub const MAX_FILTER_TAGS: usize = 6;

/// Placeholder service used when a project image fails to load.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/400x200/3b82f6/ffffff";

// ── Persistence ─────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "portfolio_theme";
