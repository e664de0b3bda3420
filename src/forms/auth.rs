use serde::Deserialize;
use validator::Validate;

use crate::domain::session::UserType;

/// Form payload emitted by the login page. The demo trusts the submitted
/// role; there is no credential verification.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Email entered by the visitor.
    #[validate(email)]
    pub email: String,
    /// Password entered by the visitor; only presence is checked.
    #[validate(length(min = 1))]
    pub password: String,
    /// Whether the seller toggle was switched on.
    #[serde(default)]
    pub as_agent: bool,
}

impl LoginForm {
    /// Role the visitor signs in with.
    pub fn user_type(&self) -> UserType {
        if self.as_agent {
            UserType::Agent
        } else {
            UserType::User
        }
    }
}

/// Form payload emitted by the registration page.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// Display name entered by the visitor.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Email entered by the visitor.
    #[validate(email)]
    pub email: String,
    /// Chosen password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Password confirmation, which must match `password`.
    #[validate(must_match(other = "password"))]
    pub confirm_password: String,
    /// Whether the seller toggle was switched on.
    #[serde(default)]
    pub as_agent: bool,
}

impl RegisterForm {
    /// Role the visitor registers with.
    pub fn user_type(&self) -> UserType {
        if self.as_agent {
            UserType::Agent
        } else {
            UserType::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_maps_toggle_to_role() {
        let form = LoginForm {
            email: "shopper@example.com".to_string(),
            password: "secret".to_string(),
            as_agent: false,
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.user_type(), UserType::User);

        let form = LoginForm {
            as_agent: true,
            ..form
        };
        assert_eq!(form.user_type(), UserType::Agent);
    }

    #[test]
    fn register_form_rejects_mismatched_passwords() {
        let form = RegisterForm {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "different".to_string(),
            as_agent: false,
        };
        assert!(form.validate().is_err());
    }
}
