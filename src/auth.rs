use crate::{providers::user_writer::UserWriter, store::user_store::UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Standard,
}

/// A failed login gives no hint whether the username or the password was
/// wrong.
pub fn login<W: UserWriter>(
    users: &UserStore<W>,
    username: &str,
    password: &str,
) -> Option<Role> {
    users.find_by_credentials(username, password).map(|u| {
        if u.is_admin {
            Role::Admin
        } else {
            Role::Standard
        }
    })
}
