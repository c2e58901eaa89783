//! # Record Entities
//!
//! The two record shapes stored in the ledger and the rules for building them
//! from positional arguments.
//!
//! Serialized field names and field order are the on-ledger format and must
//! not change: existing state is decoded with them.

use crate::domain::validation::{DOCUMENT_CREATE_ARITY, IDENTITY_WRITE_ARITY};
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// RECORD KIND
// =============================================================================

/// Record kind discriminator, stored as the `docType` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Personal-identity record (`"info"`).
    Info,
    /// Supporting-document record (`"doc"`).
    Doc,
}

impl RecordKind {
    /// Discriminator string as stored on the ledger.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Doc => "doc",
        }
    }

    /// Human-readable name of this kind's key, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "user name",
            Self::Doc => "unique key",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over both record shapes.
pub trait Record: Serialize + for<'de> Deserialize<'de> {
    /// Kind every record of this type must carry.
    const KIND: RecordKind;

    /// Discriminator carried by this instance.
    fn kind(&self) -> RecordKind;

    /// Ledger key of this record.
    fn key(&self) -> &str;
}

// =============================================================================
// IDENTITY RECORD
// =============================================================================

/// Personal-identity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// Always [`RecordKind::Info`].
    #[serde(rename = "docType")]
    pub record_kind: RecordKind,
    /// Unique identity handle (user name). Immutable.
    #[serde(rename = "username")]
    pub key: String,
    /// Full legal name.
    #[serde(rename = "name")]
    pub legal_name: String,
    /// Father's or husband's name.
    #[serde(rename = "fhname")]
    pub guardian_name: String,
    /// Age, as supplied.
    pub age: String,
    /// Gender, as supplied.
    pub gender: String,
    /// Date of birth.
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    /// Tax identification number (PAN).
    #[serde(rename = "pan")]
    pub tax_id: String,
    /// National identity number (Aadhaar).
    #[serde(rename = "aadhar")]
    pub national_id: String,
    /// Current residential address.
    #[serde(rename = "currentaddress")]
    pub current_address: String,
    /// Permanent address.
    #[serde(rename = "permanentaddress")]
    pub permanent_address: String,
    /// Credit score.
    #[serde(rename = "cibilscore")]
    pub credit_score: String,
    /// Date the credit score was issued.
    #[serde(rename = "cibildate")]
    pub credit_score_date: String,
    /// Set at creation, never touched by updates.
    #[serde(rename = "uniquenumber")]
    pub external_reference_number: String,
}

impl IdentityRecord {
    /// Builds a record from the 13 positional create arguments:
    /// key followed by the twelve fields in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Arity`] unless exactly 13 arguments are given.
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let [key, legal_name, guardian_name, age, gender, date_of_birth, tax_id, national_id, current_address, permanent_address, credit_score, credit_score_date, external_reference_number] =
            args
        else {
            return Err(ValidationError::Arity {
                expected: IDENTITY_WRITE_ARITY,
                actual: args.len(),
            });
        };

        Ok(Self {
            record_kind: RecordKind::Info,
            key: key.clone(),
            legal_name: legal_name.clone(),
            guardian_name: guardian_name.clone(),
            age: age.clone(),
            gender: gender.clone(),
            date_of_birth: date_of_birth.clone(),
            tax_id: tax_id.clone(),
            national_id: national_id.clone(),
            current_address: current_address.clone(),
            permanent_address: permanent_address.clone(),
            credit_score: credit_score.clone(),
            credit_score_date: credit_score_date.clone(),
            external_reference_number: external_reference_number.clone(),
        })
    }

    /// Merges the 13 positional update arguments into this record.
    ///
    /// Arguments 1..=11 overwrite `legal_name` through `credit_score_date` in
    /// order. The key (argument 0), the discriminator, and
    /// `external_reference_number` are left as they are; the 13th argument is
    /// accepted but never applied.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Arity`] unless exactly 13 arguments are given.
    pub fn apply_update(&mut self, args: &[String]) -> Result<(), ValidationError> {
        let [_key, legal_name, guardian_name, age, gender, date_of_birth, tax_id, national_id, current_address, permanent_address, credit_score, credit_score_date, _ignored] =
            args
        else {
            return Err(ValidationError::Arity {
                expected: IDENTITY_WRITE_ARITY,
                actual: args.len(),
            });
        };

        self.legal_name.clone_from(legal_name);
        self.guardian_name.clone_from(guardian_name);
        self.age.clone_from(age);
        self.gender.clone_from(gender);
        self.date_of_birth.clone_from(date_of_birth);
        self.tax_id.clone_from(tax_id);
        self.national_id.clone_from(national_id);
        self.current_address.clone_from(current_address);
        self.permanent_address.clone_from(permanent_address);
        self.credit_score.clone_from(credit_score);
        self.credit_score_date.clone_from(credit_score_date);
        Ok(())
    }
}

impl Record for IdentityRecord {
    const KIND: RecordKind = RecordKind::Info;

    fn kind(&self) -> RecordKind {
        self.record_kind
    }

    fn key(&self) -> &str {
        &self.key
    }
}

// =============================================================================
// DOCUMENT RECORD
// =============================================================================

/// Supporting-document record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Always [`RecordKind::Doc`].
    #[serde(rename = "docType")]
    pub record_kind: RecordKind,
    /// Unique document handle. Immutable.
    #[serde(rename = "uniquekey")]
    pub key: String,
    /// Encoded certificate, stored opaquely.
    #[serde(rename = "certificate")]
    pub certificate_blob: String,
    /// Encoded image, stored opaquely.
    #[serde(rename = "image")]
    pub image_blob: String,
}

impl DocumentRecord {
    /// Builds a record from `[key, certificate, image]`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Arity`] unless exactly 3 arguments are given.
    pub fn from_args(args: &[String]) -> Result<Self, ValidationError> {
        let [key, certificate_blob, image_blob] = args else {
            return Err(ValidationError::Arity {
                expected: DOCUMENT_CREATE_ARITY,
                actual: args.len(),
            });
        };

        Ok(Self {
            record_kind: RecordKind::Doc,
            key: key.clone(),
            certificate_blob: certificate_blob.clone(),
            image_blob: image_blob.clone(),
        })
    }
}

impl Record for DocumentRecord {
    const KIND: RecordKind = RecordKind::Doc;

    fn kind(&self) -> RecordKind {
        self.record_kind
    }

    fn key(&self) -> &str {
        &self.key
    }
}

// =============================================================================
// TESTS
// =============================================================================
