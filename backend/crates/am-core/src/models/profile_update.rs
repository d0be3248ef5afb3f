use crate::Role;
use crate::models::nullable::skills_patch;

use serde::{Deserialize, Serialize};

/// Partial profile fields; every present field overwrites the stored one.
///
/// The identity's `id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "skills_patch"
    )]
    pub skills: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// True when no field would change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
