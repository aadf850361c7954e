//! Booking domain types: confirmation codes, guest details, and the
//! booking record itself.
//!
//! A `Booking` is built through `BookingBuilder`, which validates every
//! field before a value can exist. Codes are short human-readable
//! confirmation strings; uniqueness against the ledger is the lifecycle
//! layer's job, not the type's.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interval::StayInterval;
use crate::room::RoomId;

/// Characters a booking code may contain, in generation order.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every booking code.
pub const CODE_LENGTH: usize = 6;

/// Error returned when a booking field fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A six-character booking confirmation code, uppercase letters and
/// digits only.
///
/// # Examples
///
/// ```
/// use staykeep::BookingCode;
///
/// let code: BookingCode = "AB12CD".parse().unwrap();
/// assert_eq!(code.as_str(), "AB12CD");
/// assert!("ab12cd".parse::<BookingCode>().is_ok()); // normalized
/// assert!("TOOLONG".parse::<BookingCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingCode(String);

impl BookingCode {
    /// Generate a random code from the given source of randomness.
    ///
    /// The returned code is well-formed but not checked for uniqueness;
    /// callers that need a fresh code must check it against the ledger
    /// and regenerate on collision.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code: String = (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect();
        Self(code)
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookingCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        if normalized.len() != CODE_LENGTH {
            return Err(ValidationError::new(
                "booking code",
                format!("must be exactly {CODE_LENGTH} characters, got {}", normalized.len()),
            ));
        }
        if !normalized.bytes().all(|b| CODE_ALPHABET.contains(&b)) {
            return Err(ValidationError::new(
                "booking code",
                "must contain only letters A-Z and digits 0-9",
            ));
        }
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for BookingCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookingCode> for String {
    fn from(code: BookingCode) -> Self {
        code.0
    }
}

/// Guest contact details attached to a booking.
///
/// All fields are validated on construction: names are non-empty and at
/// most 50 characters, the email is at most 100 characters and must look
/// like an address, the phone number is 10 to 20 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    name: String,
    surname: String,
    email: String,
    phone: String,
}

impl Guest {
    /// Create a guest record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first field that fails.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name("name", name.into())?;
        let surname = validate_name("surname", surname.into())?;
        let email = validate_email(email.into())?;
        let phone = validate_phone(phone.into())?;
        Ok(Self {
            name,
            surname,
            email,
            phone,
        })
    }

    /// Get the guest's first name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the guest's surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Get the guest's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get the guest's phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.name, self.surname, self.email)
    }
}

fn validate_name(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    if trimmed.chars().count() > 50 {
        return Err(ValidationError::new(field, "must be at most 50 characters"));
    }
    Ok(trimmed)
}

fn validate_email(value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(ValidationError::new("email", "must not be empty"));
    }
    if trimmed.chars().count() > 100 {
        return Err(ValidationError::new(
            "email",
            "must be at most 100 characters",
        ));
    }
    // Syntactic check only: non-empty local part, one '@', domain with a dot.
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::new("email", "must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::new(
            "email",
            "must look like 'user@example.com'",
        ));
    }
    Ok(trimmed)
}

fn validate_phone(value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    let len = trimmed.chars().count();
    if !(10..=20).contains(&len) {
        return Err(ValidationError::new(
            "phone",
            format!("must be 10 to 20 characters, got {len}"),
        ));
    }
    Ok(trimmed)
}

/// A confirmed booking: a guest holds a specific room for a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The confirmation code identifying this booking.
    pub code: BookingCode,
    /// The room the stay is assigned to.
    pub room_id: RoomId,
    /// The dates of the stay.
    pub interval: StayInterval,
    /// The guest holding the booking.
    pub guest: Guest,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Start building a booking.
    #[must_use]
    pub fn builder(code: BookingCode, room_id: RoomId, interval: StayInterval) -> BookingBuilder {
        BookingBuilder::new(code, room_id, interval)
    }
}

/// Builder for `Booking` values.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staykeep::{Booking, BookingCode, RoomId, StayInterval};
///
/// let date = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let interval = StayInterval::new(date("2026-07-01"), date("2026-07-04")).unwrap();
/// let booking = Booking::builder("AB12CD".parse().unwrap(), RoomId::try_from(1).unwrap(), interval)
///     .guest_name("Ada")
///     .guest_surname("Lovelace")
///     .guest_email("ada@example.com")
///     .guest_phone("07700900123")
///     .build()
///     .unwrap();
/// assert_eq!(booking.guest.name(), "Ada");
/// ```
#[derive(Debug, Clone)]
pub struct BookingBuilder {
    code: BookingCode,
    room_id: RoomId,
    interval: StayInterval,
    guest_name: Option<String>,
    guest_surname: Option<String>,
    guest_email: Option<String>,
    guest_phone: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl BookingBuilder {
    /// Create a builder with the required identity fields.
    #[must_use]
    pub fn new(code: BookingCode, room_id: RoomId, interval: StayInterval) -> Self {
        Self {
            code,
            room_id,
            interval,
            guest_name: None,
            guest_surname: None,
            guest_email: None,
            guest_phone: None,
            created_at: None,
        }
    }

    /// Set the guest's first name.
    #[must_use]
    pub fn guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = Some(name.into());
        self
    }

    /// Set the guest's surname.
    #[must_use]
    pub fn guest_surname(mut self, surname: impl Into<String>) -> Self {
        self.guest_surname = Some(surname.into());
        self
    }

    /// Set the guest's email address.
    #[must_use]
    pub fn guest_email(mut self, email: impl Into<String>) -> Self {
        self.guest_email = Some(email.into());
        self
    }

    /// Set the guest's phone number.
    #[must_use]
    pub fn guest_phone(mut self, phone: impl Into<String>) -> Self {
        self.guest_phone = Some(phone.into());
        self
    }

    /// Set an explicit creation timestamp (defaults to now).
    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Set the whole guest record at once.
    #[must_use]
    pub fn guest(mut self, guest: &Guest) -> Self {
        self.guest_name = Some(guest.name().to_string());
        self.guest_surname = Some(guest.surname().to_string());
        self.guest_email = Some(guest.email().to_string());
        self.guest_phone = Some(guest.phone().to_string());
        self
    }

    /// Validate all fields and produce the booking.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a guest field is missing or invalid.
    pub fn build(self) -> Result<Booking, ValidationError> {
        let guest = Guest::new(
            self.guest_name
                .ok_or_else(|| ValidationError::new("name", "is required"))?,
            self.guest_surname
                .ok_or_else(|| ValidationError::new("surname", "is required"))?,
            self.guest_email
                .ok_or_else(|| ValidationError::new("email", "is required"))?,
            self.guest_phone
                .ok_or_else(|| ValidationError::new("phone", "is required"))?,
        )?;
        Ok(Booking {
            code: self.code,
            room_id: self.room_id,
            interval: self.interval,
            guest,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_interval() -> StayInterval {
        StayInterval::new(date("2026-07-01"), date("2026-07-04")).unwrap()
    }

    fn test_builder() -> BookingBuilder {
        Booking::builder(
            "AB12CD".parse().unwrap(),
            RoomId::try_from(1).unwrap(),
            test_interval(),
        )
        .guest_name("Ada")
        .guest_surname("Lovelace")
        .guest_email("ada@example.com")
        .guest_phone("07700900123")
    }

    #[test]
    fn test_code_parse_valid() {
        let code: BookingCode = "AB12CD".parse().unwrap();
        assert_eq!(code.as_str(), "AB12CD");
    }

    #[test]
    fn test_code_parse_normalizes_case_and_whitespace() {
        let code: BookingCode = " ab12cd ".parse().unwrap();
        assert_eq!(code.as_str(), "AB12CD");
    }

    #[test]
    fn test_code_rejects_wrong_length() {
        assert!("ABC".parse::<BookingCode>().is_err());
        assert!("ABCDEFG".parse::<BookingCode>().is_err());
        assert!("".parse::<BookingCode>().is_err());
    }

    #[test]
    fn test_code_rejects_bad_characters() {
        assert!("AB-12C".parse::<BookingCode>().is_err());
        assert!("AB 12C".parse::<BookingCode>().is_err());
    }

    #[test]
    fn test_code_generation_is_well_formed() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let code = BookingCode::generate(&mut rng);
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(code.as_str().parse::<BookingCode>().is_ok());
        }
    }

    #[test]
    fn test_guest_valid() {
        let guest = Guest::new("Ada", "Lovelace", "ada@example.com", "07700900123").unwrap();
        assert_eq!(guest.name(), "Ada");
        assert_eq!(guest.surname(), "Lovelace");
        assert_eq!(guest.email(), "ada@example.com");
        assert_eq!(guest.phone(), "07700900123");
    }

    #[test]
    fn test_guest_trims_whitespace() {
        let guest = Guest::new(" Ada ", " Lovelace ", " ada@example.com ", " 07700900123 ").unwrap();
        assert_eq!(guest.name(), "Ada");
        assert_eq!(guest.email(), "ada@example.com");
    }

    #[test]
    fn test_guest_empty_name_rejected() {
        let err = Guest::new("", "Lovelace", "ada@example.com", "07700900123").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_guest_long_name_rejected() {
        let long = "x".repeat(51);
        let err = Guest::new(long, "Lovelace", "ada@example.com", "07700900123").unwrap_err();
        assert_eq!(err.field, "name");

        let ok = "x".repeat(50);
        assert!(Guest::new(ok, "Lovelace", "ada@example.com", "07700900123").is_ok());
    }

    #[test]
    fn test_guest_email_shape() {
        assert!(Guest::new("A", "B", "no-at-sign", "07700900123").is_err());
        assert!(Guest::new("A", "B", "@example.com", "07700900123").is_err());
        assert!(Guest::new("A", "B", "user@nodot", "07700900123").is_err());
        assert!(Guest::new("A", "B", "user@", "07700900123").is_err());
        assert!(Guest::new("A", "B", "user@example.com", "07700900123").is_ok());
    }

    #[test]
    fn test_guest_email_length() {
        // 101 chars total
        let local = "x".repeat(89);
        let email = format!("{local}@example.com");
        assert_eq!(email.len(), 101);
        assert!(Guest::new("A", "B", email, "07700900123").is_err());
    }

    #[test]
    fn test_guest_phone_length_bounds() {
        assert!(Guest::new("A", "B", "a@b.com", "123456789").is_err()); // 9
        assert!(Guest::new("A", "B", "a@b.com", "1234567890").is_ok()); // 10
        assert!(Guest::new("A", "B", "a@b.com", &"1".repeat(20)).is_ok());
        assert!(Guest::new("A", "B", "a@b.com", &"1".repeat(21)).is_err());
    }

    #[test]
    fn test_builder_complete() {
        let booking = test_builder().build().unwrap();
        assert_eq!(booking.code.as_str(), "AB12CD");
        assert_eq!(booking.room_id.value(), 1);
        assert_eq!(booking.interval.nights(), 3);
        assert_eq!(booking.guest.surname(), "Lovelace");
    }

    #[test]
    fn test_builder_missing_field() {
        let builder = Booking::builder(
            "AB12CD".parse().unwrap(),
            RoomId::try_from(1).unwrap(),
            test_interval(),
        )
        .guest_name("Ada");
        let err = builder.build().unwrap_err();
        assert_eq!(err.field, "surname");
    }

    #[test]
    fn test_builder_invalid_email_surfaces() {
        let err = test_builder().guest_email("nope").build().unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn test_builder_guest_setter() {
        let guest = Guest::new("Grace", "Hopper", "grace@example.com", "07700900456").unwrap();
        let booking = test_builder().guest(&guest).build().unwrap();
        assert_eq!(booking.guest, guest);
    }

    #[test]
    fn test_booking_serde_round_trip() {
        let booking = test_builder().build().unwrap();
        let json = serde_json::to_string(&booking).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(booking, back);
    }
}
