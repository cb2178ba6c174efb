//! # finid-registry — Builtin Layout and Bank Data for the finid Stack
//!
//! Ships the data the validators consult: per-country BBAN layouts
//! ([`countries`]) and the domestic-bank-code → BIC directory
//! ([`banks`]), aggregated into the immutable [`Registry`] snapshot.
//!
//! Registry *content* is data, not design: rows and layouts live in
//! plain constructors, one module per region, and the snapshot checks
//! their coherence at construction time. Nothing here performs I/O.
//!
//! ## Crate Policy
//!
//! - Depends only on `finid-core`.
//! - The builtin snapshot is initialized lazily, once, and never mutated.
//! - Tests that need custom data build their own [`Registry`] value
//!   instead of touching the builtin one.

pub mod banks;
pub mod countries;
pub mod snapshot;

pub use snapshot::Registry;
