//! Outbound hand-off of form submissions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `intake` defines the payload, the `FormIntake` capability, and the
//! placeholder and HTTP implementations the forms are wired to.

pub mod intake;
