//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational components are pure functions of their props. Section
//! components render one content table each and report booking or theme
//! requests through callbacks supplied by the landing page.

pub mod booking_dialog;
pub mod contact_form;
pub mod contact_section;
pub mod faq_accordion;
pub mod hero;
pub mod icon;
pub mod modal;
pub mod nav_bar;
pub mod overview_dialog;
pub mod pill;
pub mod pricing_section;
pub mod results_section;
pub mod section_heading;
pub mod services_section;
pub mod site_footer;
pub mod stat;
pub mod theme_toggle;
