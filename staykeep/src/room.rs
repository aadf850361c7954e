//! Room inventory domain types.
//!
//! A room is the unit of assignment: bookings attach to a specific room
//! id, never to a type. The type classifies the room for availability
//! searches and carries a default nightly rate used when a room is added
//! without an explicit price; the price actually charged is always the
//! rate stored on the room row.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a room field fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct InvalidRoomFieldError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl InvalidRoomFieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A validated room identifier. Always positive.
///
/// # Examples
///
/// ```
/// use staykeep::RoomId;
///
/// let id = RoomId::try_from(17).unwrap();
/// assert_eq!(id.value(), 17);
/// assert!(RoomId::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RoomId(i64);

impl RoomId {
    /// Get the underlying integer value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for RoomId {
    type Error = InvalidRoomFieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(InvalidRoomFieldError::new(
                "room id",
                format!("must be a positive integer, got {value}"),
            ));
        }
        Ok(Self(value))
    }
}

impl From<RoomId> for i64 {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = InvalidRoomFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidRoomFieldError::new("room id", format!("'{s}' is not a number")))?;
        Self::try_from(value)
    }
}

/// Classification of a room for availability searches.
///
/// The four built-in types match the standard inventory; `Custom` admits
/// any other non-empty name. Parsing is case-insensitive and all types
/// render in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RoomType {
    /// Single-occupancy room.
    Single,
    /// Double-occupancy room.
    Double,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// Any other room class, stored by its lowercased name.
    Custom(String),
}

impl RoomType {
    /// The built-in types in descending search priority, used when a
    /// caller asks for "the default" type for a date range.
    pub const PRIORITY_ORDER: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Deluxe,
        RoomType::Suite,
    ];

    /// The nightly rate a room of this type receives when created without
    /// an explicit price. Custom types have no default.
    #[must_use]
    pub fn default_nightly_rate(&self) -> Option<NightlyRate> {
        let units = match self {
            Self::Single => 100,
            Self::Double => 150,
            Self::Deluxe => 200,
            Self::Suite => 300,
            Self::Custom(_) => return None,
        };
        Some(NightlyRate(units))
    }

    /// Get the canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = InvalidRoomFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "" => Err(InvalidRoomFieldError::new(
                "room type",
                "must not be empty",
            )),
            _ => Ok(Self::Custom(normalized)),
        }
    }
}

impl TryFrom<String> for RoomType {
    type Error = InvalidRoomFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.as_str().to_string()
    }
}

/// A validated nightly rate in whole currency units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct NightlyRate(i64);

impl NightlyRate {
    /// Get the rate in whole currency units per night.
    #[must_use]
    pub fn units(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for NightlyRate {
    type Error = InvalidRoomFieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(InvalidRoomFieldError::new(
                "nightly rate",
                format!("must be positive, got {value}"),
            ));
        }
        Ok(Self(value))
    }
}

impl From<NightlyRate> for i64 {
    fn from(rate: NightlyRate) -> Self {
        rate.0
    }
}

impl fmt::Display for NightlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A room in the hotel inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// The room's classification.
    pub room_type: RoomType,
    /// The rate charged per night for this room.
    pub nightly_rate: NightlyRate,
}

impl Room {
    /// Create a room, resolving a missing rate from the type's default.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoomFieldError` if no rate is given and the type
    /// is custom (custom types carry no default rate).
    pub fn new(
        id: RoomId,
        room_type: RoomType,
        nightly_rate: Option<NightlyRate>,
    ) -> Result<Self, InvalidRoomFieldError> {
        let nightly_rate = match nightly_rate.or_else(|| room_type.default_nightly_rate()) {
            Some(rate) => rate,
            None => {
                return Err(InvalidRoomFieldError::new(
                    "nightly rate",
                    format!("room type '{room_type}' has no default rate, a price is required"),
                ))
            }
        };
        Ok(Self {
            id,
            room_type,
            nightly_rate,
        })
    }
}
