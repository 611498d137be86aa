//! Default markup contract and observer tuning.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "portfolio_theme";

/// Id of the optional embedded JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";

// ── Attributes ──────────────────────────────────────────────────

/// Root attribute carrying the theme marker.
pub const THEME_ATTR: &str = "data-theme";

pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_CURRENT: &str = "aria-current";

/// Value written to `aria-current` on the active nav link.
pub const ARIA_CURRENT_VALUE: &str = "page";

// ── Classes ─────────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const FOCUS_MODE_CLASS: &str = "focus-cv";
pub const TABBING_CLASS: &str = "user-is-tabbing";

// ── Hamburger glyph ─────────────────────────────────────────────

pub const ICON_OPEN_TRANSFORM: &str = "rotate(45deg)";
pub const ICON_OPEN_BACKGROUND: &str = "transparent";

// ── Observers ───────────────────────────────────────────────────

/// Shrinks the trigger box to the top 40% of the viewport.
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -60% 0px";

pub const SECTION_THRESHOLD: f64 = 0.0;

/// Fraction of a reveal-marked element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.08;

// ── Platform queries ────────────────────────────────────────────

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
