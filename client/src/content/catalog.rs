//! Section content tables: programs, pricing, testimonials, FAQ, highlights.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::brand::BrandConfig;

/// Decorative glyphs referenced by content rows. Rendering lives in
/// `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Calendar,
    Check,
    ChevronDown,
    Dumbbell,
    Flame,
    Instagram,
    Mail,
    MapPin,
    Phone,
    Play,
    ShieldCheck,
    Star,
    Users,
}

impl Icon {
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Calendar => "calendar",
            Self::Check => "check",
            Self::ChevronDown => "chevron-down",
            Self::Dumbbell => "dumbbell",
            Self::Flame => "flame",
            Self::Instagram => "instagram",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Phone => "phone",
            Self::Play => "play",
            Self::ShieldCheck => "shield-check",
            Self::Star => "star",
            Self::Users => "users",
        }
    }
}

// =============================================================================
// PROGRAMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: Icon::Dumbbell,
        title: "1:1 Personal Training",
        description: "Customized strength + conditioning with coaching, cues, and accountability. Built around your goals and schedule.",
        bullets: &["Assessment + plan", "Technique coaching", "Progress tracking"],
    },
    ServiceOffering {
        icon: Icon::Users,
        title: "Small-Group Training",
        description: "Premium community sessions: athletic, fun, and structured. You get coaching + energy without the big-class chaos.",
        bullets: &["Capped group size", "Scalable workouts", "Team culture"],
    },
    ServiceOffering {
        icon: Icon::Flame,
        title: "Performance Conditioning",
        description: "Boxing-inspired conditioning + running support for athletes and busy professionals who want elite fitness.",
        bullets: &["Intervals + tempo", "VO₂-focused blocks", "Sport-ready conditioning"],
    },
    ServiceOffering {
        icon: Icon::ShieldCheck,
        title: "Habits + Mindset Coaching",
        description: "Mentor-style coaching to build consistency, confidence, and discipline, so your results last.",
        bullets: &["Weekly check-ins", "Systems + routines", "Sustainable lifestyle"],
    },
];

// =============================================================================
// PRICING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub note: &'static str,
    pub features: &'static [&'static str],
    /// Visual emphasis only. At most one plan should set this.
    pub popular: bool,
}

impl PricingPlan {
    /// Badge text shown on the emphasised plan.
    #[must_use]
    pub fn badge(&self) -> Option<&'static str> {
        self.popular.then_some("Most popular")
    }

    #[must_use]
    pub fn cta_label(&self) -> String {
        format!("Choose {}", self.name)
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$199",
        cadence: "/mo",
        note: "Best if you want structure + accountability.",
        features: &["Personalized plan", "1 weekly check-in", "Habit tracker", "Form feedback (video)"],
        popular: false,
    },
    PricingPlan {
        name: "Coached",
        price: "$399",
        cadence: "/mo",
        note: "Most popular: coaching + progress tracking.",
        features: &[
            "Everything in Starter",
            "2 weekly check-ins",
            "Training adjustments",
            "Nutrition guidelines",
            "Priority support",
        ],
        popular: true,
    },
    PricingPlan {
        name: "Elite",
        price: "$699",
        cadence: "/mo",
        note: "For transformation or performance goals.",
        features: &[
            "Everything in Coached",
            "Weekly call",
            "Detailed progress reviews",
            "Race/competition prep",
            "Lifestyle strategy",
        ],
        popular: false,
    },
];

// =============================================================================
// TESTIMONIALS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub stars: u8,
}

impl Testimonial {
    pub const MAX_STARS: u8 = 5;

    /// Number of filled star icons, clamped to `1..=5`.
    #[must_use]
    pub fn filled_stars(&self) -> u8 {
        self.stars.clamp(1, Self::MAX_STARS)
    }

    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{} star rating", self.filled_stars())
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Laura",
        role: "Client • 1+ year",
        quote: "I feel stronger, more confident, and I actually look forward to training. The coaching and community kept me consistent.",
        stars: 5,
    },
    Testimonial {
        name: "Mike",
        role: "Busy professional",
        quote: "Workouts were efficient and tailored. My energy is up, body composition improved, and my knee pain settled down.",
        stars: 5,
    },
    Testimonial {
        name: "Sana",
        role: "Runner",
        quote: "The plan was structured and smart. I got faster without feeling broken, and finally understand how to train.",
        stars: 5,
    },
];

// =============================================================================
// FAQ
// =============================================================================

/// Placeholder replaced with [`BrandConfig::city`] when an answer renders.
pub const CITY_PLACEHOLDER: &str = "{city}";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    #[must_use]
    pub fn answer_for(&self, brand: &BrandConfig) -> String {
        self.answer.replace(CITY_PLACEHOLDER, brand.city)
    }
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need to be fit before starting?",
        answer: "No. We start with an assessment and scale everything to your level. The plan meets you where you are and builds you up safely.",
    },
    FaqEntry {
        question: "Where do sessions happen?",
        answer: "In-person sessions are offered in {city}. Online coaching is available anywhere.",
    },
    FaqEntry {
        question: "How fast will I see results?",
        answer: "Most people feel better within 2–3 weeks. Visible changes typically start around weeks 4–8 depending on consistency, sleep, and nutrition.",
    },
    FaqEntry {
        question: "Do you include nutrition?",
        answer: "Yes: guidelines, habits, and simple targets. If you need medical nutrition therapy, we’ll coordinate with a registered dietitian.",
    },
];

// =============================================================================
// HIGHLIGHTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: &[StatTile] = &[
    StatTile { label: "Average sessions/week", value: "2–3" },
    StatTile { label: "Typical results window", value: "4–8 wks" },
    StatTile { label: "Focus", value: "Strength + conditioning" },
];

pub const KICKOFF_STEPS: &[&str] = &["Assessment + goals", "2 workouts/week", "Daily habit focus", "Progress check"];

pub const OUTCOMES: &[&str] =
    &["Strength + muscle", "Better conditioning", "Confidence + momentum", "Consistency habits"];

pub const PROMISES: &[&str] = &[
    "You’ll always know what to do next. No random workouts.",
    "Coaching that scales to your life (stress, schedule, injuries).",
    "Culture-first training: you’ll feel supported, not judged.",
];
