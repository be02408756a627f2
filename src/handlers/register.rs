use crate::error::RegistrationError;
use crate::models::submission::{Outcome, Submission};

/// Checks that all three fields were posted and are non-empty.
///
/// An absent key is an error, an empty value is [`Outcome::FieldsRequired`].
/// Values are taken as-is: no trimming and no format checks.
pub fn register(submission: Submission) -> Result<Outcome, RegistrationError> {
    let Submission {
        name,
        email,
        password,
    } = submission;

    let name = name.ok_or(RegistrationError::MissingField("name"))?;
    let email = email.ok_or(RegistrationError::MissingField("email"))?;
    let password = password.ok_or(RegistrationError::MissingField("password"))?;

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Ok(Outcome::FieldsRequired);
    }

    Ok(Outcome::Registered { name })
}
