use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Superuser,
}

/// Field-team member allowed into the app.
///
/// There is no password: access is gated on a 6-digit code, good enough for
/// a single-device field tool. All persisted collections are scoped by the
/// user id of whoever is logged in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(rename = "accessCode")]
    pub access_code: String,
    pub role: UserRole,
    /// Employee id, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,
    /// WhatsApp contact, informational.
    #[serde(rename = "waNumber", default, skip_serializing_if = "Option::is_none")]
    pub wa_number: Option<String>,
}

impl User {
    pub fn new(name: String, access_code: String, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            access_code,
            role,
            nik: None,
            wa_number: None,
        }
    }

    pub fn is_superuser(&self) -> bool {
        self.role == UserRole::Superuser
    }
}

/// Access codes are 6 digits, unique across the roster.
pub fn validate_access_code(code: &str, roster: &[User], own_id: Option<&str>) -> Result<(), String> {
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Access code must be exactly 6 digits".into());
    }
    let taken = roster
        .iter()
        .any(|u| u.access_code == code && Some(u.id.as_str()) != own_id);
    if taken {
        return Err("Access code is already in use".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_code_must_be_six_digits() {
        assert!(validate_access_code("123456", &[], None).is_ok());
        assert!(validate_access_code("12345", &[], None).is_err());
        assert!(validate_access_code("12345a", &[], None).is_err());
    }

    #[test]
    fn access_code_must_be_unique_except_for_self() {
        let existing = User::new("Budi".into(), "111111".into(), UserRole::User);
        let roster = vec![existing.clone()];
        assert!(validate_access_code("111111", &roster, None).is_err());
        assert!(validate_access_code("111111", &roster, Some(&existing.id)).is_ok());
        assert!(validate_access_code("222222", &roster, None).is_ok());
    }
}
