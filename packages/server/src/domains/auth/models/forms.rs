use serde::Deserialize;

use crate::common::validation::{validate_sign_in_form, validate_sign_up_form, FormErrors};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> FormErrors {
        validate_sign_up_form(
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub keep_signed_in: bool,
}

impl SignInForm {
    pub fn validate(&self) -> FormErrors {
        validate_sign_in_form(&self.email, &self.password)
    }
}
