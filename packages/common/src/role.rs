use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform roles. Each account has exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Enrolls in courses and submits solutions.
    Student,
    /// Authors tutorials, content pages and assignments.
    Lecturer,
    /// Owns courses and submits them for review.
    Provider,
    /// Moderates courses and manages accounts.
    Admin,
}

impl UserRole {
    /// All role values.
    pub const ALL: &'static [UserRole] =
        &[Self::Student, Self::Lecturer, Self::Provider, Self::Admin];

    /// May author tutorials, content pages and assignments.
    pub fn can_author(&self) -> bool {
        matches!(self, Self::Lecturer | Self::Admin)
    }

    /// May create courses and submit them for review.
    pub fn can_publish_courses(&self) -> bool {
        matches!(self, Self::Provider | Self::Admin)
    }

    /// May approve or reject courses and manage accounts.
    pub fn can_moderate(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns the string representation (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Lecturer => "lecturer",
            Self::Provider => "provider",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    invalid: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid role '{}'. Valid values: student, lecturer, provider, admin",
            self.invalid
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "lecturer" => Ok(Self::Lecturer),
            "provider" => Ok(Self::Provider),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError {
                invalid: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        assert!(!UserRole::Student.can_author());
        assert!(UserRole::Lecturer.can_author());
        assert!(UserRole::Provider.can_publish_courses());
        assert!(!UserRole::Provider.can_moderate());
        assert!(UserRole::Admin.can_author());
        assert!(UserRole::Admin.can_moderate());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(" student ".parse::<UserRole>().unwrap(), UserRole::Student);
        assert!("teacher".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&UserRole::Lecturer).unwrap();
        assert_eq!(json, r#""lecturer""#);
        let role: UserRole = serde_json::from_str(r#""provider""#).unwrap();
        assert_eq!(role, UserRole::Provider);
    }
}
