//! User descriptor and the user value produced from it.
//!
//! Neither type enforces format rules on `email` or `password`: empty strings
//! are carried through unchanged. The password is wrapped in [`Password`] so it
//! is wiped on drop, redacted from `Debug` output and never serialised.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use zeroize::Zeroizing;

use crate::domain::TechEntry;

/// Caller-supplied password, held in memory that is zeroed on drop.
///
/// # Examples
/// ```
/// use hello_backend::domain::Password;
///
/// let password = Password::new("123456");
/// assert_eq!(password.expose(), "123456");
/// assert_eq!(format!("{password:?}"), "Password(\"<redacted>\")");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a raw password.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Raw password text.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// True when the caller supplied an empty password.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Input literal describing the user to create.
///
/// Missing JSON fields decode as empty values instead of failing, so an absent
/// `email` or `password` simply propagates as an empty string.
///
/// # Examples
/// ```
/// use hello_backend::domain::{TechEntry, UserDescriptor};
///
/// let descriptor = UserDescriptor::new("a@b.com", "123456")
///     .with_tech(TechEntry::name("Node.js"))
///     .with_tech(TechEntry::rated("Javascript", 100));
/// assert_eq!(descriptor.techs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UserDescriptor {
    /// Contact address. Not validated.
    pub email: String,
    /// Raw password. Not validated.
    pub password: Password,
    /// Ordered technology list, possibly empty.
    pub techs: Vec<TechEntry>,
}

impl UserDescriptor {
    /// Descriptor with no technologies.
    pub fn new(email: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            techs: Vec::new(),
        }
    }

    /// Append a technology entry, preserving insertion order.
    #[must_use]
    pub fn with_tech(mut self, tech: impl Into<TechEntry>) -> Self {
        self.techs.push(tech.into());
        self
    }

    /// Replace the technology list.
    #[must_use]
    pub fn with_techs(mut self, techs: impl IntoIterator<Item = TechEntry>) -> Self {
        self.techs = techs.into_iter().collect();
        self
    }
}

/// User value produced by a [`crate::domain::ports::UserFactory`].
///
/// ## Invariants
/// - Every field equals the corresponding descriptor field.
/// - Serialisation omits the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    email: String,
    #[serde(skip_serializing)]
    password: Password,
    techs: Vec<TechEntry>,
}

impl User {
    /// Assemble a user from its parts.
    pub fn new(email: String, password: Password, techs: Vec<TechEntry>) -> Self {
        Self {
            email,
            password,
            techs,
        }
    }

    /// Contact address as provided.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as provided.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Technology list in descriptor order.
    pub fn techs(&self) -> &[TechEntry] {
        &self.techs
    }
}

impl From<UserDescriptor> for User {
    fn from(value: UserDescriptor) -> Self {
        let UserDescriptor {
            email,
            password,
            techs,
        } = value;
        Self::new(email, password, techs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn password_debug_is_redacted() {
        let user = User::new("a@b.com".into(), Password::new("123456"), Vec::new());
        let rendered = format!("{user:?}");
        assert!(!rendered.contains("123456"));
        assert!(rendered.contains("<redacted>"));
    }

    #[rstest]
    fn user_serialisation_omits_password() {
        let user = User::new(
            "a@b.com".into(),
            Password::new("123456"),
            vec![TechEntry::name("Node.js")],
        );
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value, json!({ "email": "a@b.com", "techs": ["Node.js"] }));
    }

    #[rstest]
    fn descriptor_decodes_mixed_tech_list() {
        let descriptor: UserDescriptor = serde_json::from_value(json!({
            "email": "a@b.com",
            "password": "123456",
            "techs": ["Node.js", { "title": "Javascript", "experience": 100 }]
        }))
        .expect("descriptor");
        assert_eq!(descriptor.password.expose(), "123456");
        assert_eq!(
            descriptor.techs,
            vec![TechEntry::name("Node.js"), TechEntry::rated("Javascript", 100)]
        );
    }

    #[rstest]
    fn descriptor_missing_fields_default_to_empty() {
        let descriptor: UserDescriptor =
            serde_json::from_value(json!({})).expect("empty descriptor");
        assert!(descriptor.email.is_empty());
        assert!(descriptor.password.is_empty());
        assert!(descriptor.techs.is_empty());
    }

    #[rstest]
    fn with_techs_replaces_existing_entries() {
        let descriptor = UserDescriptor::new("a@b.com", "pw")
            .with_tech("Go")
            .with_techs([TechEntry::name("Rust")]);
        assert_eq!(descriptor.techs, vec![TechEntry::name("Rust")]);
    }
}
