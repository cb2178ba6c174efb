//! # finid-core — Foundational Types for the finid Stack
//!
//! This crate is the bedrock of the finid workspace. It defines the
//! type-system primitives everything else builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`CountryCode`] is a
//!    validated newtype — no bare strings for identifiers that have a
//!    shape.
//!
//! 2. **One closed [`ChecksumAlgorithm`] enum.** National checksum
//!    dispatch is a total `match`; adding an algorithm forces every
//!    consumer to handle it at compile time.
//!
//! 3. **Incremental mod-97.** [`mod97`] never materializes the rearranged
//!    number; reduction is digit-by-digit.
//!
//! 4. **One umbrella [`ValidationError`].** Every failure of untrusted
//!    input is a variant of a single enum; registry data bugs live in
//!    [`RegistryError`], separately.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `finid-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod bank;
pub mod charset;
pub mod country;
pub mod error;
pub mod mod97;
pub mod spec;

// Re-export primary types for ergonomic imports.
pub use bank::BankEntry;
pub use charset::{clean, CharClass};
pub use country::CountryCode;
pub use error::{IdentifierKind, RegistryError, ValidationError};
pub use spec::{BbanField, ChecksumAlgorithm, CountrySpec, FieldRole};
