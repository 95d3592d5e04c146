//! Networking modules for the analysis API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound analysis call, `deadline` bounds it in
//! time, and `types` defines the wire schema.

pub mod api;
pub mod deadline;
pub mod types;
