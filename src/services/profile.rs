use serde::Serialize;
use validator::Validate;

use crate::domain::session::Session;
use crate::fixtures;
use crate::forms::profile::ProfileForm;
use crate::services::{ServiceError, ServiceResult};

/// Account fields pre-filling the profile form.
#[derive(Debug, Serialize)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Loads the profile page for a signed-in visitor.
pub fn load_profile_page(session: &Session) -> ServiceResult<ProfileData> {
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }

    let defaults = fixtures::profile_defaults();
    Ok(ProfileData {
        name: defaults.name.to_string(),
        email: defaults.email.to_string(),
        phone: defaults.phone.to_string(),
        address: defaults.address.to_string(),
    })
}

/// Validates the submitted profile. Account storage is out of scope for the
/// demo, so a valid save only produces a confirmation notice.
pub fn save_profile(session: &Session, form: &ProfileForm) -> ServiceResult<()> {
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }

    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::UserType;

    #[test]
    fn profile_requires_a_session() {
        let result = load_profile_page(&Session::anonymous());
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn valid_profile_save_succeeds_without_persisting() {
        let session = Session::signed_in(UserType::User);
        let form = ProfileForm {
            name: "Alex Laurent".to_string(),
            email: "alex@example.com".to_string(),
            phone: None,
            address: "12 Rue de la Paix".to_string(),
        };

        save_profile(&session, &form).expect("expected success");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let session = Session::signed_in(UserType::User);
        let form = ProfileForm {
            name: "Alex Laurent".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            address: "12 Rue de la Paix".to_string(),
        };

        let result = save_profile(&session, &form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
