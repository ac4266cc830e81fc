//! In-page anchor targets and the navigation link table.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Section identifiers used as smooth-scroll destinations.
///
/// Each one is rendered exactly once on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Top,
    Services,
    Results,
    Pricing,
    Faq,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] =
        [Anchor::Top, Anchor::Services, Anchor::Results, Anchor::Pricing, Anchor::Faq, Anchor::Contact];

    /// Element id for this anchor.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Services => "services",
            Self::Results => "results",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Contact => "contact",
        }
    }

    /// Fragment href (`#services`) for use on `<a>` elements.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// A top-bar navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", anchor: Anchor::Services },
    NavLink { label: "Results", anchor: Anchor::Results },
    NavLink { label: "Pricing", anchor: Anchor::Pricing },
    NavLink { label: "FAQ", anchor: Anchor::Faq },
    NavLink { label: "Contact", anchor: Anchor::Contact },
];
