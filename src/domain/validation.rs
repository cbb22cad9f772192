//! Structural checks on registration input.
//!
//! Rules run in a fixed order and stop at the first failure, so an invalid request
//! always reports exactly one [`FieldError`].
//!
//! Lengths count Unicode scalar values, so `"a😀"` is two characters long. Clients that
//! measure UTF-16 code units see astral-plane characters as two and may disagree at the
//! boundaries.

use crate::domain::models::registration::{FieldError, RegistrationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid {
        message: String,
        errors: Vec<FieldError>,
    },
}

impl ValidationOutcome {
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Violation {
    summary: &'static str,
    field: &'static str,
    message: &'static str,
}

impl From<Violation> for ValidationOutcome {
    fn from(violation: Violation) -> Self {
        Self::Invalid {
            message: violation.summary.to_string(),
            errors: vec![FieldError::new(violation.field, violation.message)],
        }
    }
}

type Rule = fn(&RegistrationRequest) -> Option<Violation>;

const RULES: &[Rule] = &[
    email_has_at_sign,
    username_is_long_enough,
    username_has_no_at_sign,
    password_is_long_enough,
];

fn email_has_at_sign(request: &RegistrationRequest) -> Option<Violation> {
    (!request.email.contains('@')).then_some(Violation {
        summary: "Invalid email",
        field: "email",
        message: "Email must include @ symbol",
    })
}

fn username_is_long_enough(request: &RegistrationRequest) -> Option<Violation> {
    (request.username.chars().count() <= 2).then_some(Violation {
        summary: "Invalid username",
        field: "username",
        message: "Length must me greater than 2",
    })
}

fn username_has_no_at_sign(request: &RegistrationRequest) -> Option<Violation> {
    request.username.contains('@').then_some(Violation {
        summary: "Invalid username",
        field: "username",
        message: "Username cannot include @ symbol",
    })
}

fn password_is_long_enough(request: &RegistrationRequest) -> Option<Violation> {
    (request.password.chars().count() <= 6).then_some(Violation {
        summary: "Invalid password",
        field: "password",
        message: "Password length must me greater than 6",
    })
}

fn first_failure<T>(value: &T, rules: &[fn(&T) -> Option<Violation>]) -> Option<Violation> {
    rules.iter().find_map(|rule| rule(value))
}

pub fn validate_register_input(request: &RegistrationRequest) -> ValidationOutcome {
    first_failure(request, RULES).map_or(ValidationOutcome::Valid, ValidationOutcome::from)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn single_error(outcome: ValidationOutcome) -> (String, FieldError) {
        match outcome {
            ValidationOutcome::Invalid { message, mut errors } => {
                assert_eq!(errors.len(), 1, "exactly one error is reported");
                (message, errors.remove(0))
            }
            ValidationOutcome::Valid => panic!("expected an invalid outcome"),
        }
    }

    #[test]
    fn valid_request_passes() {
        let request = RegistrationRequest::new("validuser", "v@b.com", "longpass");
        assert_eq!(validate_register_input(&request), ValidationOutcome::Valid);
    }

    #[rstest]
    #[case("validuser", "vb.com", "longpass")]
    #[case("ab", "vb.com", "short")]
    #[case("a@b", "", "")]
    fn missing_at_in_email_is_reported_first(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
    ) {
        let request = RegistrationRequest::new(username, email, password);
        let (message, error) = single_error(validate_register_input(&request));

        assert_eq!(message, "Invalid email");
        assert_eq!(error, FieldError::new("email", "Email must include @ symbol"));
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("ab")]
    fn short_username_is_rejected(#[case] username: &str) {
        let request = RegistrationRequest::new(username, "v@b.com", "x");
        let (message, error) = single_error(validate_register_input(&request));

        assert_eq!(message, "Invalid username");
        assert_eq!(error, FieldError::new("username", "Length must me greater than 2"));
    }

    #[test]
    fn three_character_username_is_long_enough() {
        let request = RegistrationRequest::new("abc", "v@b.com", "longpass");
        assert!(validate_register_input(&request).is_valid());
    }

    #[test]
    fn username_length_counts_characters_not_bytes() {
        let request = RegistrationRequest::new("テス", "v@b.com", "longpass");
        let (_, error) = single_error(validate_register_input(&request));
        assert_eq!(error.field, "username");
    }

    #[test]
    fn astral_characters_count_once() {
        let username = RegistrationRequest::new("a😀", "v@b.com", "longpass");
        let (_, error) = single_error(validate_register_input(&username));
        assert_eq!(error.field, "username");

        let password = RegistrationRequest::new("validuser", "v@b.com", "😀😀😀😀😀😀😀");
        assert!(validate_register_input(&password).is_valid());
    }

    #[test]
    fn username_with_at_sign_is_rejected() {
        let request = RegistrationRequest::new("me@home", "v@b.com", "short");
        let (message, error) = single_error(validate_register_input(&request));

        assert_eq!(message, "Invalid username");
        assert_eq!(error, FieldError::new("username", "Username cannot include @ symbol"));
    }

    #[rstest]
    #[case("", false)]
    #[case("123456", false)]
    #[case("1234567", true)]
    fn password_must_exceed_six_characters(#[case] password: &str, #[case] valid: bool) {
        let request = RegistrationRequest::new("validuser", "v@b.com", password);
        let outcome = validate_register_input(&request);

        assert_eq!(outcome.is_valid(), valid);
        if !valid {
            let (message, error) = single_error(outcome);
            assert_eq!(message, "Invalid password");
            assert_eq!(
                error,
                FieldError::new("password", "Password length must me greater than 6")
            );
        }
    }

    #[test]
    fn validating_twice_yields_identical_output() {
        let request = RegistrationRequest::new("ab", "v@b.com", "longpass");
        assert_eq!(
            validate_register_input(&request),
            validate_register_input(&request)
        );
    }
}
