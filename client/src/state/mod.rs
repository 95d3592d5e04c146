//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`input`, `analysis`, `ui`) so individual
//! components can depend on small focused models.

pub mod analysis;
pub mod input;
pub mod ui;
