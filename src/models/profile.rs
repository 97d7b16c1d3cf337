use serde::{Deserialize, Serialize};

/// A user profile as the service returns it. Records come back fully
/// populated; the id is assigned by the service and never by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub full_name: String,
    pub invite_code: String,
}

/// Partial update for an existing profile. Fields left `None` are omitted
/// from the payload and stay unchanged on the server; this shape cannot
/// clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Write-only: accepted here, never present in [`UserProfile`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

/// Payload for creating a profile. Only the email is required; the service
/// defaults everything else and assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileCreate {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
}

impl UserProfileUpdate {
    /// True when no field is set, i.e. the payload requests no changes.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.full_name.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
            && self.is_superuser.is_none()
            && self.invite_code.is_none()
    }
}

impl UserProfileCreate {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: None,
            password: None,
            is_active: None,
            is_superuser: None,
            invite_code: None,
        }
    }
}

impl From<UserProfile> for UserProfileUpdate {
    fn from(profile: UserProfile) -> Self {
        Self {
            email: Some(profile.email),
            full_name: Some(profile.full_name),
            password: None,
            is_active: Some(profile.is_active),
            is_superuser: Some(profile.is_superuser),
            invite_code: Some(profile.invite_code),
        }
    }
}

impl From<UserProfileCreate> for UserProfileUpdate {
    fn from(create: UserProfileCreate) -> Self {
        Self {
            email: Some(create.email),
            full_name: create.full_name,
            password: create.password,
            is_active: create.is_active,
            is_superuser: create.is_superuser,
            invite_code: create.invite_code,
        }
    }
}
