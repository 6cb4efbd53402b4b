//! Local validation for the login and signup forms
//!
//! Drafts hold raw form input. `validate` turns a draft into the request body
//! or reports the first problem found; nothing here touches the network.

use super::error::ValidationError;
use super::model::{Department, HospitalProfile, LoginRequest, Role, SignupRequest, StaffPosition};

/// Minimum password length for new accounts, in UTF-16 code units like a
/// browser's `value.length`
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Check that a string looks like an email address
///
/// Requires a single `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn require(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn require_email(value: &str) -> Result<String, ValidationError> {
    let email = require(value, "Email")?;
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Raw login form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = require_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }

        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw signup form input
///
/// Hospital fields stay populated when the role flips back to patient; they
/// are only read when `role` is [`Role::Hospital`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub registration_number: String,
    pub department: String,
    pub license_number: String,
    pub address: String,
    pub staff_position: String,
}

impl SignupDraft {
    /// Password checks run first so a mismatch is always reported as such.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }

        let name_field = match self.role {
            Role::Patient => "Full name",
            Role::Hospital => "Hospital name",
        };
        let full_name = require(&self.full_name, name_field)?;
        let email = require_email(&self.email)?;

        let hospital = match self.role {
            Role::Patient => None,
            Role::Hospital => Some(self.hospital_profile()?),
        };

        Ok(SignupRequest {
            email,
            password: self.password.clone(),
            full_name,
            role: self.role,
            hospital,
        })
    }

    fn hospital_profile(&self) -> Result<HospitalProfile, ValidationError> {
        let registration_number = require(&self.registration_number, "Registration number")?;

        let department = require(&self.department, "Department")?;
        let department = Department::from_code(&department)
            .ok_or(ValidationError::InvalidChoice("department"))?;

        let license_number = require(&self.license_number, "License number")?;
        let address = require(&self.address, "Hospital address")?;

        let staff_position = require(&self.staff_position, "Staff position")?;
        let staff_position = StaffPosition::from_code(&staff_position)
            .ok_or(ValidationError::InvalidChoice("staff position"))?;

        Ok(HospitalProfile {
            registration_number,
            department,
            license_number,
            address,
            staff_position,
        })
    }
}
