//! Brand configuration shared by the nav bar, hero, contact links, FAQ, and footer.
//!
//! Values default to the RB Athletics profile and can be overridden at build
//! time with `RB_BRAND_*` environment variables. Build-time (rather than
//! runtime) lookup keeps the server render and the hydrating bundle in sync.

#[cfg(test)]
#[path = "brand_test.rs"]
mod brand_test;

/// Read-only business profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub city: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub instagram: &'static str,
}

impl BrandConfig {
    pub const DEFAULT: Self = Self {
        name: "RB Athletics",
        tagline: "Mentor-style coaching. Real results. Strong community.",
        city: "Vaughan / York Region, ON",
        phone: "(555) 123-4567",
        email: "hello@rbathletics.ca",
        instagram: "rbathletics",
    };

    /// Build the brand from `RB_BRAND_*` compile-time overrides, falling back
    /// to [`BrandConfig::DEFAULT`] per field. Blank overrides are ignored.
    #[must_use]
    pub fn from_build_env() -> Self {
        let d = Self::DEFAULT;
        Self {
            name: non_blank(option_env!("RB_BRAND_NAME")).unwrap_or(d.name),
            tagline: non_blank(option_env!("RB_BRAND_TAGLINE")).unwrap_or(d.tagline),
            city: non_blank(option_env!("RB_BRAND_CITY")).unwrap_or(d.city),
            phone: non_blank(option_env!("RB_BRAND_PHONE")).unwrap_or(d.phone),
            email: non_blank(option_env!("RB_BRAND_EMAIL")).unwrap_or(d.email),
            instagram: non_blank(option_env!("RB_BRAND_INSTAGRAM")).unwrap_or(d.instagram),
        }
    }

    /// `tel:` link with every character except digits and `+` removed.
    #[must_use]
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }

    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    #[must_use]
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram.trim_start_matches('@'))
    }

    #[must_use]
    pub fn instagram_handle(&self) -> String {
        format!("@{}", self.instagram.trim_start_matches('@'))
    }

    #[must_use]
    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.name)
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn non_blank(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Logo served from the public assets directory. A missing file degrades to
/// the browser's broken-image glyph plus alt text.
pub const LOGO_PATH: &str = "/RBAthletics_logo_transparent.png";
