use super::*;

// =============================================================
// Programs
// =============================================================

#[test]
fn every_service_has_bullets() {
    assert!(!SERVICES.is_empty());
    for service in SERVICES {
        assert!(!service.bullets.is_empty(), "{} has no bullets", service.title);
    }
}

#[test]
fn service_titles_are_unique() {
    let mut titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), SERVICES.len());
}

// =============================================================
// Pricing
// =============================================================

#[test]
fn exactly_one_plan_carries_the_badge() {
    let badged: Vec<&PricingPlan> = PRICING_PLANS.iter().filter(|p| p.badge().is_some()).collect();
    assert_eq!(badged.len(), 1);
    assert_eq!(badged[0].name, "Coached");
    assert_eq!(badged[0].badge(), Some("Most popular"));
}

#[test]
fn badge_follows_popular_flag() {
    for plan in PRICING_PLANS {
        assert_eq!(plan.badge().is_some(), plan.popular, "{}", plan.name);
    }
}

#[test]
fn unflagged_plan_has_no_badge() {
    assert_eq!(PRICING_PLANS[0].badge(), None);
}

#[test]
fn cta_label_names_the_plan() {
    assert_eq!(PRICING_PLANS[2].cta_label(), "Choose Elite");
}

// =============================================================
// Testimonials
// =============================================================

#[test]
fn testimonial_ratings_are_in_range() {
    for t in TESTIMONIALS {
        assert!((1..=5).contains(&t.stars), "{} rated {}", t.name, t.stars);
    }
}

#[test]
fn filled_stars_clamps_out_of_range_values() {
    let zero = Testimonial { stars: 0, ..TESTIMONIALS[0] };
    let many = Testimonial { stars: 9, ..TESTIMONIALS[0] };
    assert_eq!(zero.filled_stars(), 1);
    assert_eq!(many.filled_stars(), 5);
}

#[test]
fn rating_label_reads_naturally() {
    let three = Testimonial { stars: 3, ..TESTIMONIALS[0] };
    assert_eq!(three.rating_label(), "3 star rating");
}

// =============================================================
// FAQ
// =============================================================

#[test]
fn faq_answer_interpolates_city() {
    let brand = BrandConfig { city: "Hamilton, ON", ..BrandConfig::DEFAULT };
    let answer = FAQS[1].answer_for(&brand);
    assert_eq!(answer, "In-person sessions are offered in Hamilton, ON. Online coaching is available anywhere.");
    assert!(!answer.contains(CITY_PLACEHOLDER));
}

#[test]
fn faq_answer_without_placeholder_is_unchanged() {
    assert_eq!(FAQS[0].answer_for(&BrandConfig::DEFAULT), FAQS[0].answer);
}

// =============================================================
// Highlights
// =============================================================

#[test]
fn hero_shows_three_stats() {
    assert_eq!(HERO_STATS.len(), 3);
}

#[test]
fn icon_slugs_are_kebab_case() {
    for icon in [Icon::ArrowRight, Icon::ChevronDown, Icon::MapPin, Icon::ShieldCheck] {
        let slug = icon.slug();
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{slug}");
    }
}
