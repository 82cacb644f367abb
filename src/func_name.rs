//! Validated function names.
//!
//! A [`FuncName`] is the name a function definition is bound under in the
//! catalog. Names follow SQL identifier rules so that resolved functions can
//! be referenced from queries without quoting.

/// Maximum length for function identifiers, in bytes.
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// A validated function name.
///
/// A valid name:
/// - starts with a letter or underscore
/// - contains only letters, digits, underscores, and dollar signs
/// - is non-empty and at most 255 bytes
///
/// Names are case-sensitive and stored as-is, without normalization.
/// Construct via [`str::parse`]; deserialization validates as well, so a
/// `FuncName` obtained from persisted catalog data carries the same
/// guarantees as one built in process.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuncName(String);

impl FuncName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for FuncName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FuncName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FuncName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

impl std::fmt::Display for FuncName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for FuncName {
    type Err = FuncNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_func_name(s)?;
        Ok(FuncName(s.to_string()))
    }
}

impl serde::Serialize for FuncName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for FuncName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Validates a function name against identifier rules.
pub fn validate_func_name(name: &str) -> Result<(), FuncNameError> {
    if name.is_empty() {
        return Err(FuncNameError::Empty);
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(FuncNameError::TooLong { length: name.len() });
    }

    let mut chars = name.chars();
    if let Some(first) = chars.next()
        && !(first.is_ascii_alphabetic() || first == '_')
    {
        return Err(FuncNameError::InvalidFirstCharacter {
            character: first,
            value: name.to_string(),
        });
    }

    if let Some(invalid) = name
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
    {
        return Err(FuncNameError::InvalidCharacter {
            character: invalid,
            value: name.to_string(),
        });
    }

    Ok(())
}

/// Errors from parsing or validating function names.
#[derive(Debug, thiserror::Error)]
pub enum FuncNameError {
    /// The name is a zero-length string.
    #[error("function name cannot be empty")]
    Empty,

    /// The name exceeds the 255-byte identifier limit.
    ///
    /// The limit is in bytes, not characters; multi-byte UTF-8 characters
    /// count as multiple bytes.
    #[error("function name is too long ({length} bytes, maximum is {MAX_IDENTIFIER_LENGTH})")]
    TooLong {
        /// Length of the rejected name in bytes.
        length: usize,
    },

    /// The first character is not a letter or underscore.
    #[error("function name '{value}' must start with a letter or underscore, not '{character}'")]
    InvalidFirstCharacter {
        /// The rejected first character.
        character: char,
        /// The complete rejected name.
        value: String,
    },

    /// The name contains a character outside `[a-zA-Z0-9_$]`.
    #[error("invalid character '{character}' in function name '{value}'")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// The complete rejected name.
        value: String,
    },
}
