use super::FieldErrors;
use crate::models::LoginCredentials;

const USERNAME_MIN_CHARS: usize = 3;
const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Username, LoginField::Password];
}

pub fn validate_login_field(
    credentials: &LoginCredentials,
    field: LoginField,
) -> Option<&'static str> {
    match field {
        LoginField::Username => {
            let chars = credentials.username.chars().count();
            if chars == 0 {
                Some("Username is required")
            } else if chars < USERNAME_MIN_CHARS {
                Some("Username must be at least 3 characters")
            } else {
                None
            }
        }
        LoginField::Password => {
            let chars = credentials.password.chars().count();
            if chars == 0 {
                Some("Password is required")
            } else if chars < PASSWORD_MIN_CHARS {
                Some("Password must be at least 6 characters")
            } else {
                None
            }
        }
    }
}

pub fn validate_credentials(credentials: &LoginCredentials) -> FieldErrors<LoginField> {
    LoginField::ALL
        .into_iter()
        .filter_map(|field| {
            validate_login_field(credentials, field).map(|message| (field, message))
        })
        .collect()
}
