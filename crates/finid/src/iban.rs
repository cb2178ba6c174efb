//! # IBAN Entity
//!
//! Country code + check digits + BBAN as one immutable value. An [`Iban`]
//! exists only in validated form; the deferred-error construction mode
//! lives in [`IbanCandidate`], which holds the normalized input together
//! with the outcome of validating it.
//!
//! Validation is fail-fast in stage order: country code → length and
//! structure → mandatory mod-97 → optional national checksum. The
//! national stage skips silently when no algorithm covers the input;
//! [`Iban::validate_national_in`] exposes that skip as
//! [`ValidationError::UnsupportedChecksum`] for callers who need to
//! distinguish "not checked" from "checked and passed".

use std::ops::Range;

use finid_core::{
    clean, mod97, CharClass, CountrySpec, FieldRole, IdentifierKind, ValidationError,
};
use finid_registry::Registry;

use crate::bban;
use crate::bic::Bic;
use crate::checksum::{self, Verdict};
use crate::resolver;

/// ISO 13616 cap on total IBAN length.
pub const MAX_IBAN_LENGTH: usize = 34;

/// Options for the parse/validate pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Additionally run the country's national checksum. A country or
    /// bank with no registered algorithm is skipped, not failed.
    pub validate_national_checksum: bool,
}

impl ParseOptions {
    /// Options with national checksum validation enabled.
    pub fn with_national_checksum() -> Self {
        Self {
            validate_national_checksum: true,
        }
    }
}

/// A validated International Bank Account Number.
///
/// Equality, ordering, and hashing are by the normalized (unformatted,
/// uppercase) string value.
#[derive(Debug, Clone)]
pub struct Iban {
    code: String,
    bank: Option<Range<usize>>,
    branch: Option<Range<usize>>,
    account: Option<Range<usize>>,
    national_check: Option<Range<usize>>,
}

impl Iban {
    /// Parse and validate an IBAN against the builtin registry.
    ///
    /// Formatting whitespace is stripped and the input uppercased before
    /// validation.
    ///
    /// # Errors
    ///
    /// The first failing stage's [`ValidationError`].
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_in(Registry::builtin(), value, ParseOptions::default())
    }

    /// Parse with explicit [`ParseOptions`], against the builtin registry.
    pub fn parse_with(value: &str, options: ParseOptions) -> Result<Self, ValidationError> {
        Self::parse_in(Registry::builtin(), value, options)
    }

    /// Parse against an explicit registry snapshot.
    pub fn parse_in(
        registry: &Registry,
        value: &str,
        options: ParseOptions,
    ) -> Result<Self, ValidationError> {
        let code = clean(value);
        if code.len() > MAX_IBAN_LENGTH {
            return Err(ValidationError::InvalidLength {
                kind: IdentifierKind::Iban,
                expected: MAX_IBAN_LENGTH,
                actual: code.len(),
            });
        }

        let country = code.get(0..2).ok_or_else(|| ValidationError::InvalidCountryCode {
            code: code.clone(),
        })?;
        let spec = registry
            .spec(country)
            .ok_or_else(|| ValidationError::InvalidCountryCode {
                code: country.to_string(),
            })?;

        if code.len() != spec.iban_length() {
            return Err(ValidationError::InvalidLength {
                kind: IdentifierKind::Iban,
                expected: spec.iban_length(),
                actual: code.len(),
            });
        }

        // `get` rather than indexing: a stray multi-byte character can
        // land on the slice boundary.
        let check_digits = code.get(2..4).unwrap_or("");
        if check_digits.len() != 2 || !CharClass::Digits.matches(check_digits) {
            return Err(ValidationError::InvalidStructure {
                field: "check_digits",
                value: check_digits.to_string(),
            });
        }

        let bban = &code[4..];
        bban::validate_structure(spec, bban)?;

        if !mod97::verify(country, check_digits, bban) {
            return Err(ValidationError::InvalidChecksumDigits { code: code.clone() });
        }

        if options.validate_national_checksum {
            // Unsupported means "not checked"; only a failing rule stops
            // the pipeline here.
            checksum::verify_national(spec, bban)?;
        }

        Ok(Self::from_validated(code, spec))
    }

    /// Deferred-error construction: never fails, collects the outcome.
    pub fn parse_lenient(value: &str) -> IbanCandidate {
        IbanCandidate::parse_in(Registry::builtin(), value, ParseOptions::default())
    }

    fn from_validated(code: String, spec: &CountrySpec) -> Self {
        let range_of = |role| {
            spec.field(role)
                .map(|f| f.offset + 4..f.offset + f.length + 4)
        };
        Self {
            bank: range_of(FieldRole::BankCode),
            branch: range_of(FieldRole::BranchCode),
            account: range_of(FieldRole::AccountCode),
            national_check: range_of(FieldRole::NationalCheckDigits),
            code,
        }
    }

    /// Generate a valid IBAN from its domestic parts, against the
    /// builtin registry.
    ///
    /// Bank, branch, and account codes are left-zero-padded to their
    /// field widths; short account numbers are padded, not rejected.
    /// National check digits are derived where the country's algorithm
    /// supports computation, zero-filled otherwise.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidBankCode`] /
    /// [`ValidationError::InvalidBranchCode`] /
    /// [`ValidationError::InvalidAccountCode`] when a supplied value
    /// exceeds its field width (or a branch code is supplied for a
    /// country without a branch field), plus any structural error the
    /// assembled BBAN fails.
    pub fn generate(
        country_code: &str,
        bank_code: &str,
        branch_code: Option<&str>,
        account_code: &str,
    ) -> Result<Self, ValidationError> {
        Self::generate_in(
            Registry::builtin(),
            country_code,
            bank_code,
            branch_code,
            account_code,
        )
    }

    /// Generate against an explicit registry snapshot.
    pub fn generate_in(
        registry: &Registry,
        country_code: &str,
        bank_code: &str,
        branch_code: Option<&str>,
        account_code: &str,
    ) -> Result<Self, ValidationError> {
        let spec = registry
            .spec(country_code)
            .ok_or_else(|| ValidationError::InvalidCountryCode {
                code: country_code.to_string(),
            })?;
        let country = spec.country_code.as_str();

        let bank = clean(bank_code);
        let branch = branch_code.map(clean);
        let account = clean(account_code);

        if branch.is_some() && spec.field(FieldRole::BranchCode).is_none() {
            return Err(ValidationError::InvalidBranchCode {
                country: country.to_string(),
                value: branch.unwrap_or_default(),
            });
        }

        // Pad the supplied fields to their declared widths; the national
        // check field is derived afterwards.
        let mut parts: Vec<Option<String>> = Vec::with_capacity(spec.fields.len());
        for field in &spec.fields {
            let part = match field.role {
                FieldRole::BankCode => Some(pad_field(&bank, field.length).ok_or_else(|| {
                    ValidationError::InvalidBankCode {
                        country: country.to_string(),
                        value: bank.clone(),
                    }
                })?),
                FieldRole::BranchCode => {
                    let value = branch.as_deref().unwrap_or("");
                    Some(pad_field(value, field.length).ok_or_else(|| {
                        ValidationError::InvalidBranchCode {
                            country: country.to_string(),
                            value: value.to_string(),
                        }
                    })?)
                }
                FieldRole::AccountCode => {
                    Some(pad_field(&account, field.length).ok_or_else(|| {
                        ValidationError::InvalidAccountCode {
                            country: country.to_string(),
                            value: account.clone(),
                        }
                    })?)
                }
                FieldRole::NationalCheckDigits => None,
            };
            parts.push(part);
        }

        if let Some(index) = spec
            .fields
            .iter()
            .position(|f| f.role == FieldRole::NationalCheckDigits)
        {
            parts[index] = Some(derive_national_check(spec, &parts, index)?);
        }

        let bban: String = parts.into_iter().flatten().collect();
        bban::validate_structure(spec, &bban)?;

        let digits = mod97::compute_check_digits(country, &bban)?;
        let code = format!("{country}{digits}{bban}");
        Self::parse_in(registry, &code, ParseOptions::default())
    }

    /// Re-run validation on this instance.
    ///
    /// Useful to upgrade a structurally validated IBAN to national
    /// checksum coverage.
    pub fn validate(&self, options: ParseOptions) -> Result<(), ValidationError> {
        self.validate_in(Registry::builtin(), options)
    }

    /// Re-run validation against an explicit registry snapshot.
    pub fn validate_in(
        &self,
        registry: &Registry,
        options: ParseOptions,
    ) -> Result<(), ValidationError> {
        Self::parse_in(registry, &self.code, options).map(|_| ())
    }

    /// Run the national checksum, reporting a skip explicitly.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidBbanChecksum`] when the rule fails, and
    /// [`ValidationError::UnsupportedChecksum`] when no rule covers this
    /// IBAN — the latter is not an invalidity signal.
    pub fn validate_national_in(&self, registry: &Registry) -> Result<(), ValidationError> {
        let spec = registry
            .spec(self.country_code())
            .ok_or_else(|| ValidationError::InvalidCountryCode {
                code: self.country_code().to_string(),
            })?;
        match checksum::verify_national(spec, self.bban())? {
            Verdict::Passed => Ok(()),
            Verdict::Unsupported => Err(ValidationError::UnsupportedChecksum {
                country: self.country_code().to_string(),
                bank_code: self.bank_code().map(str::to_string),
            }),
        }
    }

    /// The ISO country code.
    pub fn country_code(&self) -> &str {
        &self.code[0..2]
    }

    /// The two mod-97 check digits.
    pub fn check_digits(&self) -> &str {
        &self.code[2..4]
    }

    /// The country-specific BBAN portion.
    pub fn bban(&self) -> &str {
        &self.code[4..]
    }

    fn slice(&self, range: &Option<Range<usize>>) -> Option<&str> {
        range.as_ref().and_then(|r| self.code.get(r.clone()))
    }

    /// The domestic bank code, when the layout declares one.
    pub fn bank_code(&self) -> Option<&str> {
        self.slice(&self.bank)
    }

    /// The domestic branch code, when the layout declares one.
    pub fn branch_code(&self) -> Option<&str> {
        self.slice(&self.branch)
    }

    /// The account number field.
    pub fn account_code(&self) -> Option<&str> {
        self.slice(&self.account)
    }

    /// The national check digit(s), when the layout embeds them.
    pub fn national_check_digits(&self) -> Option<&str> {
        self.slice(&self.national_check)
    }

    /// The normalized IBAN grouped in blocks of four, single-spaced.
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(self.code.len() + self.code.len() / 4);
        for (index, c) in self.code.chars().enumerate() {
            if index > 0 && index % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// Length of the normalized IBAN.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// A validated IBAN is never empty.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// The normalized IBAN string.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Resolve the most generic BIC for this IBAN's bank code via the
    /// builtin registry. `None` when nothing matches; never an error.
    pub fn bic(&self) -> Option<Bic> {
        self.bic_in(Registry::builtin())
    }

    /// Resolve the BIC against an explicit registry snapshot.
    pub fn bic_in(&self, registry: &Registry) -> Option<Bic> {
        resolver::resolve_in(registry, self.country_code(), self.bank_code()?).ok()
    }
}

/// Left-zero-pad `value` to `width`; `None` when it does not fit.
fn pad_field(value: &str, width: usize) -> Option<String> {
    if value.len() > width {
        return None;
    }
    Some(format!("{value:0>width$}"))
}

/// Derive the national check field during generation.
///
/// Germany's methods only verify (the method table is partial), so
/// layouts without a derivable rule are zero-filled.
fn derive_national_check(
    spec: &CountrySpec,
    parts: &[Option<String>],
    check_index: usize,
) -> Result<String, ValidationError> {
    use finid_core::ChecksumAlgorithm;

    let part_for = |role: FieldRole| -> &str {
        spec.fields
            .iter()
            .zip(parts)
            .find(|(f, _)| f.role == role)
            .and_then(|(_, p)| p.as_deref())
            .unwrap_or("")
    };
    let width = spec.fields[check_index].length;

    match spec.checksum_algorithm {
        Some(ChecksumAlgorithm::Italy) => {
            let rest: String = parts.iter().flatten().map(String::as_str).collect();
            let letter = checksum::italy::compute(&rest)?;
            Ok(letter.to_string())
        }
        Some(ChecksumAlgorithm::Belgium) => {
            let check = checksum::belgium::compute(
                part_for(FieldRole::BankCode),
                part_for(FieldRole::AccountCode),
            )?;
            Ok(format!("{check:02}"))
        }
        Some(ChecksumAlgorithm::France) => {
            let key = checksum::france::compute(
                part_for(FieldRole::BankCode),
                part_for(FieldRole::BranchCode),
                part_for(FieldRole::AccountCode),
            )?;
            Ok(format!("{key:02}"))
        }
        Some(ChecksumAlgorithm::Germany) | None => Ok("0".repeat(width)),
    }
}

impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Iban {}

impl PartialOrd for Iban {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iban {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code.cmp(&other.code)
    }
}

impl std::hash::Hash for Iban {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<str> for Iban {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Iban {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for Iban {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl serde::Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.code)
    }
}

impl<'de> serde::Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Outcome of the deferred-error construction mode.
///
/// Holds the normalized input whether or not it validated; the error, if
/// any, is queryable instead of raised.
#[derive(Debug, Clone)]
pub struct IbanCandidate {
    code: String,
    outcome: Result<Iban, ValidationError>,
}

impl IbanCandidate {
    /// Normalize and validate, never failing.
    pub fn parse(value: &str) -> Self {
        Self::parse_in(Registry::builtin(), value, ParseOptions::default())
    }

    /// Normalize and validate against an explicit registry and options.
    pub fn parse_in(registry: &Registry, value: &str, options: ParseOptions) -> Self {
        let code = clean(value);
        let outcome = Iban::parse_in(registry, &code, options);
        Self { code, outcome }
    }

    /// Whether the input validated.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The collected validation error, when invalid.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.outcome.as_ref().err()
    }

    /// The validated entity, when valid.
    pub fn iban(&self) -> Option<&Iban> {
        self.outcome.as_ref().ok()
    }

    /// The normalized input, valid or not.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Convert into the ordinary fail-fast result.
    pub fn into_result(self) -> Result<Iban, ValidationError> {
        self.outcome
    }

    /// Re-run validation with different options (e.g. to add national
    /// checksum coverage).
    pub fn validate_in(
        &self,
        registry: &Registry,
        options: ParseOptions,
    ) -> Result<(), ValidationError> {
        Iban::parse_in(registry, &self.code, options).map(|_| ())
    }
}

impl std::fmt::Display for IbanCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
