//! Shared value types for the CentraXX FHIR URL registry.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating a [`ShortName`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShortNameError {
    /// The input was empty or contained only whitespace
    #[error("short name cannot be empty")]
    Empty,
    /// The input still contained a path separator
    #[error("short name must be a single path segment, got '{0}'")]
    ContainsSlash(String),
}

/// The last path segment of an extension URL, used as a lookup key.
///
/// The input is trimmed of leading and trailing whitespace during construction
/// and must not contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortName(String);

impl ShortName {
    /// Creates a new `ShortName` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`ShortNameError::Empty`] for blank input and
    /// [`ShortNameError::ContainsSlash`] if the trimmed input spans more than one segment.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ShortNameError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ShortNameError::Empty);
        }
        if trimmed.contains('/') {
            return Err(ShortNameError::ContainsSlash(trimmed.to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortName {
    type Err = ShortNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ShortName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShortName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ShortName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ShortName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ShortName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Error returned when a string does not name a [`GenderType`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender type '{0}'")]
pub struct UnknownGenderType(pub String);

/// Administrative gender as coded by CentraXX.
///
/// The wire code is the upper-case variant name, e.g. `MALE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenderType {
    Male,
    Female,
    /// Spelled the way CentraXX stores it.
    Hermaphrodit,
    Unknown,
    Undefined,
    Other,
    /// Non-binary entry used in German civil registers.
    X,
}

impl GenderType {
    /// Every gender type, in CentraXX order.
    pub const ALL: [GenderType; 7] = [
        GenderType::Male,
        GenderType::Female,
        GenderType::Hermaphrodit,
        GenderType::Unknown,
        GenderType::Undefined,
        GenderType::Other,
        GenderType::X,
    ];

    /// Returns the code used in FHIR codings.
    pub fn code(self) -> &'static str {
        match self {
            GenderType::Male => "MALE",
            GenderType::Female => "FEMALE",
            GenderType::Hermaphrodit => "HERMAPHRODIT",
            GenderType::Unknown => "UNKNOWN",
            GenderType::Undefined => "UNDEFINED",
            GenderType::Other => "OTHER",
            GenderType::X => "X",
        }
    }
}

impl std::fmt::Display for GenderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GenderType {
    type Err = UnknownGenderType;

    /// Parses a code case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|gender| gender.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownGenderType(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_trims_input() {
        let name = ShortName::new("  warmIschTime ").expect("valid short name");
        assert_eq!(name.as_str(), "warmIschTime");
        assert_eq!(name.to_string(), "warmIschTime");
    }

    #[test]
    fn test_short_name_rejects_blank() {
        assert_eq!(ShortName::new("   "), Err(ShortNameError::Empty));
        assert_eq!(ShortName::new(""), Err(ShortNameError::Empty));
    }

    #[test]
    fn test_short_name_rejects_paths() {
        let err = ShortName::new("sprec/warmIschTime").expect_err("should reject slash");
        assert_eq!(err, ShortNameError::ContainsSlash("sprec/warmIschTime".into()));
    }

    #[test]
    fn test_short_name_deserialize_validates() {
        let name: ShortName = serde_json::from_str("\"lang\"").expect("deserialize");
        assert_eq!(name.as_str(), "lang");
        assert!(serde_json::from_str::<ShortName>("\"a/b\"").is_err());
    }

    #[test]
    fn test_gender_parse_is_case_insensitive() {
        assert_eq!("female".parse::<GenderType>(), Ok(GenderType::Female));
        assert_eq!(" Hermaphrodit ".parse::<GenderType>(), Ok(GenderType::Hermaphrodit));
        assert_eq!("x".parse::<GenderType>(), Ok(GenderType::X));
    }

    #[test]
    fn test_gender_parse_rejects_unknown() {
        let err = "divers".parse::<GenderType>().expect_err("not a gender type");
        assert_eq!(err.to_string(), "unknown gender type 'divers'");
    }

    #[test]
    fn test_gender_serde_uses_codes() {
        let json = serde_json::to_string(&GenderType::Undefined).expect("serialize");
        assert_eq!(json, "\"UNDEFINED\"");
        for gender in GenderType::ALL {
            let json = serde_json::to_string(&gender).expect("serialize");
            assert_eq!(json, format!("\"{}\"", gender.code()));
        }
    }
}
