use crate::core::error::ValidationError;
use crate::models::view::{UserCreateRequestModel, UserEditRequestModel};

/// Presence checks for submitted user forms
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn require_names(forename: &str, surname: &str, email: &str) -> Result<(), ValidationError> {
    require("forename", forename)?;
    require("surname", surname)?;
    require("email", email)
}

impl Validate for UserCreateRequestModel {
    fn validate(&self) -> Result<(), ValidationError> {
        require_names(&self.forename, &self.surname, &self.email)
    }
}

impl Validate for UserEditRequestModel {
    fn validate(&self) -> Result<(), ValidationError> {
        require_names(&self.forename, &self.surname, &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_request() -> UserCreateRequestModel {
        UserCreateRequestModel {
            forename: "Johnny".to_string(),
            surname: "Blaze".to_string(),
            email: "jblaze@example.com".to_string(),
            is_active: true,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 10, 1).unwrap(),
        }
    }

    #[test]
    fn test_complete_create_request_is_valid() {
        assert_eq!(create_request().validate(), Ok(()));
    }

    #[test]
    fn test_blank_forename_rejected() {
        let request = UserCreateRequestModel {
            forename: "   ".to_string(),
            ..create_request()
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingField("forename")));
    }

    #[test]
    fn test_first_missing_field_reported() {
        let request = UserCreateRequestModel {
            surname: String::new(),
            email: String::new(),
            ..create_request()
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingField("surname")));
    }

    #[test]
    fn test_edit_request_requires_email() {
        let request = UserEditRequestModel {
            id: 10,
            forename: "Johnny".to_string(),
            surname: "Blaze".to_string(),
            email: "".to_string(),
            is_active: false,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 10, 1).unwrap(),
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingField("email")));
    }

    #[test]
    fn test_inactive_flag_is_not_a_presence_failure() {
        let request = UserCreateRequestModel {
            is_active: false,
            ..create_request()
        };
        assert!(request.validate().is_ok());
    }
}
