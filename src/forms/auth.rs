use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::rules::required_text;

#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[validate(email(message = "Email is not valid"))]
    pub email: String,
    #[validate(custom = "required_text")]
    pub password: String,
}

// Keeps the password out of logs and `#[instrument]` spans.
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let form = LoginForm {
            email: "farmer@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", form);
        assert!(rendered.contains("farmer@example.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn empty_password_is_rejected() {
        let form = LoginForm {
            email: "farmer@example.com".to_string(),
            password: String::new(),
        };
        assert!(crate::forms::check(&form).is_err());
    }
}
