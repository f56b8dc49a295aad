/// Minimum intersection ratio for a timeline step to count as on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

/// Scroll offset after which the navigation bar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD: f64 = 20.0;

/// Scroll offset after which the "back to top" button appears.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

pub const TOAST_LIFETIME_MS: u32 = 5_000;

/// Manual channel offered whenever a form cannot be delivered.
pub const MANUAL_CONTACT_EMAIL: &str = "collectif@lemaclinictruth.org";

/// Submission endpoints, baked in at build time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormEndpoints {
    pub contact: Option<String>,
    pub whistleblow: Option<String>,
    pub newsletter: Option<String>,
}

impl FormEndpoints {
    pub fn from_build_env() -> Self {
        Self {
            contact: endpoint_from(option_env!("CONTACT_ENDPOINT")),
            whistleblow: endpoint_from(option_env!("WHISTLEBLOW_ENDPOINT")),
            newsletter: endpoint_from(option_env!("NEWSLETTER_ENDPOINT")),
        }
    }
}

fn endpoint_from(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
