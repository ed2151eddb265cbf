//! Site-wide constants shared by the browser front-end and the host tools.

/// Local storage key holding the serialized accessibility preference record.
pub const PREFS_KEY: &str = "a11y";

/// Local storage key holding the color theme (`light` or `dark`).
pub const THEME_KEY: &str = "theme";

/// Root class applied when the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Canonical origin used for sitemap and robots output.
pub const SITE_URL: &str = "https://www.shadesblue.com";

/// Routes that exist independently of the project catalog.
pub const STATIC_ROUTES: &[&str] = &["", "/portfolio", "/what-i-do", "/contact"];

/// Autoplay interval for the home page hero carousel.
pub const HERO_INTERVAL_MS: u32 = 6500;

/// Autoplay interval for the scroll-snap project carousel.
pub const SNAP_INTERVAL_MS: u32 = 6000;

/// Letter of the Alt+Shift chord that opens the accessibility menu.
pub const MENU_SHORTCUT_KEY: char = 'a';

/// Element id of the polite live region used for announcements.
pub const LIVE_REGION_ID: &str = "a11y-live";

/// Element id of the accessibility dialog.
pub const MENU_DIALOG_ID: &str = "a11y-menu";

/// Candidate selector for focusable descendants. Candidates are filtered
/// further by [`crate::focus::is_focusable`].
pub const FOCUSABLE_SELECTOR: &str = "a[href], button, input, select, textarea, [tabindex]";

/// Contact address used by the footer, contact page and the menu's report link.
pub const CONTACT_EMAIL: &str = "jleecloak2011@gmail.com";
