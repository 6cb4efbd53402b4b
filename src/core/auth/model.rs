//! Request and response types exchanged with the auth API.
//!
//! Field names on the wire follow the API contract: camelCase for the signup
//! payload, snake_case for the auth response.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Account category, decides the signup fields and the post-auth destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Hospital,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Hospital => "hospital",
        }
    }

    pub fn is_hospital(&self) -> bool {
        matches!(self, Role::Hospital)
    }

    /// Label of the signup name field
    pub fn name_label(&self) -> &'static str {
        match self {
            Role::Patient => "Full Name",
            Role::Hospital => "Hospital Name",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "hospital" => Ok(Role::Hospital),
            other => Err(AuthError::UnknownRole(other.to_string())),
        }
    }
}

/// Hospital department codes accepted by the signup endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Cardiology,
    Neurology,
    Orthopedics,
    Pediatrics,
    Emergency,
    Radiology,
    Administration,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Cardiology,
        Department::Neurology,
        Department::Orthopedics,
        Department::Pediatrics,
        Department::Emergency,
        Department::Radiology,
        Department::Administration,
    ];

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            Department::Cardiology => "cardiology",
            Department::Neurology => "neurology",
            Department::Orthopedics => "orthopedics",
            Department::Pediatrics => "pediatrics",
            Department::Emergency => "emergency",
            Department::Radiology => "radiology",
            Department::Administration => "administration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Neurology => "Neurology",
            Department::Orthopedics => "Orthopedics",
            Department::Pediatrics => "Pediatrics",
            Department::Emergency => "Emergency",
            Department::Radiology => "Radiology",
            Department::Administration => "Administration",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

/// Staff position codes accepted by the signup endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffPosition {
    Doctor,
    Nurse,
    Administrator,
    Staff,
}

impl StaffPosition {
    pub const ALL: [StaffPosition; 4] = [
        StaffPosition::Doctor,
        StaffPosition::Nurse,
        StaffPosition::Administrator,
        StaffPosition::Staff,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            StaffPosition::Doctor => "doctor",
            StaffPosition::Nurse => "nurse",
            StaffPosition::Administrator => "administrator",
            StaffPosition::Staff => "staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StaffPosition::Doctor => "Doctor",
            StaffPosition::Nurse => "Nurse",
            StaffPosition::Administrator => "Administrator",
            StaffPosition::Staff => "Staff",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Fields only a hospital account sends on signup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalProfile {
    pub registration_number: String,
    pub department: Department,
    pub license_number: String,
    pub address: String,
    pub staff_position: StaffPosition,
}

/// Signup request body
///
/// `hospital` is flattened into the top-level object, so a patient payload
/// carries no hospital keys at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    #[serde(flatten)]
    pub hospital: Option<HospitalProfile>,
}

/// User identifier as returned by the API (string or numeric)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Text(String),
    Number(i64),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Text(id) => f.write_str(id),
            UserId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Successful response from login or signup
///
/// `role` is kept as the raw string so an unexpected value reaches the
/// redirect step and fails there with [`AuthError::UnknownRole`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
    pub user_id: UserId,
    #[serde(default)]
    pub profile_complete: bool,
}

impl AuthResponse {
    pub fn parsed_role(&self) -> Result<Role, AuthError> {
        self.role.parse()
    }
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// `error` wins over `message`; blank strings count as missing.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|e| !e.trim().is_empty())
            .or(self.message.filter(|m| !m.trim().is_empty()))
    }
}
