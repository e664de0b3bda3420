use validator::Validate;

use crate::domain::session::{Session, UserType};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::repository::{SessionReader, SessionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads the visitor's session from the store. Called at the top of every
/// handler so services receive the role explicitly.
pub fn current_session<S>(store: &S) -> ServiceResult<Session>
where
    S: SessionReader + ?Sized,
{
    let user_type = store.get_user_type()?;
    Ok(Session { user_type })
}

/// Signs the visitor in with the submitted role. The demo trusts the form;
/// there is no credential verification.
pub fn login<S>(store: &S, form: LoginForm) -> ServiceResult<UserType>
where
    S: SessionWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user_type = form.user_type();
    store.set_user_type(user_type)?;
    Ok(user_type)
}

/// Registers a new account and signs the visitor in with the submitted role.
pub fn register<S>(store: &S, form: RegisterForm) -> ServiceResult<UserType>
where
    S: SessionWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user_type = form.user_type();
    store.set_user_type(user_type)?;
    Ok(user_type)
}

/// Clears the stored role, ending the session.
pub fn logout<S>(store: &S) -> ServiceResult<()>
where
    S: SessionWriter + ?Sized,
{
    store.clear_user_type()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::{MockSessionReader, MockSessionWriter};

    #[test]
    fn current_session_reflects_the_stored_role() {
        let mut store = MockSessionReader::new();
        store
            .expect_get_user_type()
            .times(1)
            .returning(|| Ok(Some(UserType::Agent)));

        let session = current_session(&store).expect("expected success");
        assert!(session.is_agent());
    }

    #[test]
    fn login_persists_the_selected_role() {
        let mut store = MockSessionWriter::new();
        store
            .expect_set_user_type()
            .times(1)
            .withf(|user_type| *user_type == UserType::Agent)
            .returning(|_| Ok(()));

        let form = LoginForm {
            email: "seller@example.com".to_string(),
            password: "secret".to_string(),
            as_agent: true,
        };

        let result = login(&store, form).expect("expected success");
        assert_eq!(result, UserType::Agent);
    }

    #[test]
    fn login_rejects_invalid_email() {
        let store = MockSessionWriter::new();
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            as_agent: false,
        };

        let result = login(&store, form);
        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn logout_deletes_the_stored_role() {
        let mut store = MockSessionWriter::new();
        store.expect_clear_user_type().times(1).returning(|| Ok(()));

        logout(&store).expect("expected success");
    }
}
