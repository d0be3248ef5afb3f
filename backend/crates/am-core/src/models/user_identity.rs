use crate::models::nullable::null_as_default;
use crate::{
    DEFAULT_PROVIDER, DEMO_USER_ID, PLACEHOLDER_EMAIL, PLACEHOLDER_NAME, ProfileUpdate, Role,
};

use serde::{Deserialize, Serialize};

/// The signed-in (simulated) member.
///
/// This is also the shape of the durable session record. Every field except
/// `id` tolerates being absent or `null` in a stored record, and `skills` is
/// always a list once deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,

    // Profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl UserIdentity {
    fn bare(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            role: Role::User,
            bio: None,
            avatar: None,
            phone: None,
            location: None,
            website: None,
            job_title: None,
            skills: Vec::new(),
        }
    }

    /// Identity produced by an email sign-in. The email is kept verbatim and
    /// its local part becomes the display name.
    pub fn demo(email: &str) -> Self {
        let local_part = email.split('@').next().unwrap_or_default().trim();
        let name = if local_part.is_empty() {
            PLACEHOLDER_NAME
        } else {
            local_part
        };

        Self::bare(DEMO_USER_ID.to_string(), name.to_string(), email.to_string())
    }

    /// Identity produced by a third-party provider sign-in.
    pub fn from_provider(provider: &str) -> Self {
        let provider = provider.trim();
        let provider = if provider.is_empty() {
            DEFAULT_PROVIDER
        } else {
            provider
        };

        let mut chars = provider.chars();
        let display: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        let domain: String = provider
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        Self::bare(
            DEMO_USER_ID.to_string(),
            format!("{display} User"),
            format!("user@{domain}.com"),
        )
    }

    /// Identity produced by sign-up. Blank fields get placeholders.
    pub fn registered(id: impl Into<String>, name: &str, email: &str) -> Self {
        let name = match name.trim() {
            "" => PLACEHOLDER_NAME,
            trimmed => trimmed,
        };
        let email = match email.trim() {
            "" => PLACEHOLDER_EMAIL,
            trimmed => trimmed,
        };

        Self::bare(id.into(), name.to_string(), email.to_string())
    }

    /// Name shown on authored content; falls back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Shallow-merge the present fields of `update` over this identity.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            role,
            bio,
            avatar,
            phone,
            location,
            website,
            job_title,
            skills,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if avatar.is_some() {
            self.avatar = avatar;
        }
        if phone.is_some() {
            self.phone = phone;
        }
        if location.is_some() {
            self.location = location;
        }
        if website.is_some() {
            self.website = website;
        }
        if job_title.is_some() {
            self.job_title = job_title;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
    }
}
