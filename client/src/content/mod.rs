//! Static page content: brand configuration, anchors, and section tables.
//!
//! DESIGN
//! ======
//! Everything here is immutable data defined at compile time. Sections render
//! these slices in order, so adding or removing an entry is a data change only.

pub mod anchors;
pub mod brand;
pub mod catalog;
