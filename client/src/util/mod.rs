//! Browser helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web_sys` access from components. Each helper
//! compiles to a no-op outside the `hydrate` build so SSR stays deterministic.

pub mod copyright;
pub mod dark_mode;
pub mod notice;
pub mod scroll;
