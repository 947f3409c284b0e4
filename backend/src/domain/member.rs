//! Member data model and sign-up validation rules.
//!
//! Every rule is evaluated independently so a request reports all of its
//! violations at once. Callers that need a single message use
//! [`MemberValidationFailure::message`], which picks the lexicographically
//! smallest violation message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum length of a member name in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum age accepted at sign-up.
pub const MINIMUM_AGE: i32 = 18;
/// Message used when a failure carries no violation to report.
pub const INVALID_REQUEST_MESSAGE: &str = "invalid request";

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberViolation {
    /// The name is absent or holds only control and space characters.
    BlankName,
    /// The name is shorter than `min` code units.
    NameTooShort { min: usize },
    /// The age is absent or below `min`.
    AgeTooLow { min: i32 },
}

impl fmt::Display for MemberViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::NameTooShort { min } => write!(f, "name must be at least {min} characters"),
            Self::AgeTooLow { min } => write!(f, "age must be at least {min}"),
        }
    }
}

/// Ordered list of violations raised while validating member input.
///
/// ## Invariants
/// - Violations appear in rule order: name rules first, then age.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberValidationFailure {
    violations: Vec<MemberViolation>,
}

impl MemberValidationFailure {
    fn new(violations: Vec<MemberViolation>) -> Self {
        Self { violations }
    }

    /// All violations in rule order.
    pub fn violations(&self) -> &[MemberViolation] {
        &self.violations
    }

    /// The message reported to clients.
    ///
    /// Plain string ordering decides between competing messages, so
    /// `"name must be at least 2 characters"` wins over
    /// `"name must not be blank"` for an empty name.
    ///
    /// # Examples
    /// ```
    /// use signup::domain::MemberName;
    ///
    /// let failure = MemberName::new("").expect_err("empty names are rejected");
    /// assert_eq!(failure.message(), "name must be at least 2 characters");
    /// ```
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .min()
            .unwrap_or_else(|| INVALID_REQUEST_MESSAGE.to_owned())
    }
}

impl fmt::Display for MemberValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for MemberValidationFailure {}

fn name_violations(name: Option<&str>) -> Vec<MemberViolation> {
    // An absent name is blank; the length rule only applies to present values.
    let Some(name) = name else {
        return vec![MemberViolation::BlankName];
    };

    let mut violations = Vec::new();
    // Blank means nothing above U+0020; length is measured in UTF-16 code units.
    if name.chars().all(|c| c <= ' ') {
        violations.push(MemberViolation::BlankName);
    }
    if name.encode_utf16().count() < NAME_MIN_CHARS {
        violations.push(MemberViolation::NameTooShort {
            min: NAME_MIN_CHARS,
        });
    }
    violations
}

fn age_violations(age: Option<i32>) -> Vec<MemberViolation> {
    match age {
        Some(age) if age >= MINIMUM_AGE => Vec::new(),
        _ => vec![MemberViolation::AgeTooLow { min: MINIMUM_AGE }],
    }
}

/// Validated member name.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberName(String);

impl MemberName {
    /// Validate and construct a [`MemberName`].
    pub fn new(name: impl Into<String>) -> Result<Self, MemberValidationFailure> {
        let name = name.into();
        let violations = name_violations(Some(&name));
        if violations.is_empty() {
            Ok(Self(name))
        } else {
            Err(MemberValidationFailure::new(violations))
        }
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MemberName> for String {
    fn from(value: MemberName) -> Self {
        value.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = MemberValidationFailure;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated member age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct MemberAge(i32);

impl MemberAge {
    /// Validate and construct a [`MemberAge`].
    pub fn new(age: i32) -> Result<Self, MemberValidationFailure> {
        let violations = age_violations(Some(age));
        if violations.is_empty() {
            Ok(Self(age))
        } else {
            Err(MemberValidationFailure::new(violations))
        }
    }

    /// Age in years.
    pub fn years(self) -> i32 {
        self.0
    }
}

impl From<MemberAge> for i32 {
    fn from(value: MemberAge) -> Self {
        value.0
    }
}

impl TryFrom<i32> for MemberAge {
    type Error = MemberValidationFailure;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered member.
///
/// ## Invariants
/// - `name` is non-blank and at least [`NAME_MIN_CHARS`] characters long.
/// - `age` is at least [`MINIMUM_AGE`].
///
/// # Examples
/// ```
/// use signup::domain::Member;
///
/// let member = Member::try_from_parts(Some("momo".to_owned()), Some(26))
///     .expect("valid member");
/// assert_eq!(member.name().as_ref(), "momo");
/// assert_eq!(member.age().years(), 26);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MemberDto", into = "MemberDto")]
pub struct Member {
    name: MemberName,
    age: MemberAge,
}

impl Member {
    /// Validate raw input, collecting every violation before failing.
    pub fn try_from_parts(
        name: Option<String>,
        age: Option<i32>,
    ) -> Result<Self, MemberValidationFailure> {
        let mut violations = name_violations(name.as_deref());
        violations.extend(age_violations(age));

        match (name, age) {
            (Some(name), Some(age)) if violations.is_empty() => Ok(Self {
                name: MemberName(name),
                age: MemberAge(age),
            }),
            _ => Err(MemberValidationFailure::new(violations)),
        }
    }

    /// Member name.
    pub fn name(&self) -> &MemberName {
        &self.name
    }

    /// Member age.
    pub fn age(&self) -> MemberAge {
        self.age
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberDto {
    name: String,
    age: i32,
}

impl From<Member> for MemberDto {
    fn from(value: Member) -> Self {
        Self {
            name: value.name.into(),
            age: value.age.into(),
        }
    }
}

impl TryFrom<MemberDto> for Member {
    type Error = MemberValidationFailure;

    fn try_from(value: MemberDto) -> Result<Self, Self::Error> {
        Self::try_from_parts(Some(value.name), Some(value.age))
    }
}
