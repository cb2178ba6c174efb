//! # finid — IBAN and BIC Validation, Parsing, and Generation
//!
//! Structural and checksum validation for the two standardized financial
//! identifiers: the International Bank Account Number (ISO 13616) and
//! the Business Identifier Code (ISO 9362).
//!
//! ## What lives where
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`iban`] | IBAN entity: parse, generate, validate, format |
//! | [`bic`] | BIC entity and the strict legacy-SWIFT mode |
//! | [`bban`] | per-country BBAN field parsing and validation |
//! | [`checksum`] | national checksum dispatcher and algorithms |
//! | [`resolver`] | domestic bank code ↔ BIC resolution |
//!
//! Country layouts and the bank directory come from `finid-registry`;
//! every operation has an `*_in(&Registry, …)` variant taking an
//! explicit snapshot, and the short forms use the process-wide builtin
//! one.
//!
//! ## Example
//!
//! ```
//! use finid::Iban;
//!
//! let iban = Iban::parse("DE89 3704 0044 0532 0130 00")?;
//! assert_eq!(iban.bank_code(), Some("37040044"));
//! assert_eq!(iban.formatted(), "DE89 3704 0044 0532 0130 00");
//!
//! // Generation pads fields and computes every required checksum.
//! let generated = Iban::generate("IT", "05428", Some("11101"), "123456")?;
//! assert_eq!(generated.as_str(), "IT60X0542811101000000123456");
//! # Ok::<(), finid::ValidationError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Pure computation: no I/O during validation or generation.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bban;
pub mod bic;
pub mod checksum;
pub mod iban;
pub mod resolver;

// Re-export primary types for ergonomic imports.
pub use bban::Bban;
pub use bic::{Bic, BicCandidate, BicParseOptions, PRIMARY_BRANCH};
pub use checksum::Verdict;
pub use iban::{Iban, IbanCandidate, ParseOptions, MAX_IBAN_LENGTH};

pub use finid_core::{
    BankEntry, BbanField, CharClass, ChecksumAlgorithm, CountryCode, CountrySpec, FieldRole,
    IdentifierKind, RegistryError, ValidationError,
};
pub use finid_registry::Registry;
