use crate::{constants::ADMIN_USERNAME, errors::ParseError, shapes::LineCodec};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.username,
            if self.is_admin { "Admin" } else { "User" }
        )
    }
}

impl LineCodec for User {
    fn to_line(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }

    // Split on the first colon only: passwords may contain colons,
    // usernames may not.
    fn from_line(line: &str) -> Result<Self, ParseError> {
        let (username, password) = line.split_once(':').ok_or(ParseError::MissingSeparator)?;
        Ok(User {
            username: username.to_string(),
            password: password.to_string(),
            is_admin: username == ADMIN_USERNAME,
        })
    }
}
