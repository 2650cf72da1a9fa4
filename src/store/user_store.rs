use crate::{
    constants::ADMIN_USERNAME,
    errors::{AppError, StoreError},
    providers::user_writer::UserWriter,
    shapes::user::User,
};

/// In-memory collection of users, synchronized to its backing file on
/// every mutation.
pub struct UserStore<W: UserWriter> {
    users: Vec<User>,
    writer: W,
}

impl<W: UserWriter> UserStore<W> {
    pub fn new(users: Vec<User>, writer: W) -> Self {
        Self { users, writer }
    }

    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// New users are always created without admin rights; the admin flag
    /// is only derived from the username when the file is loaded.
    pub async fn add(&mut self, username: String, password: String) -> Result<(), AppError> {
        self.users.push(User {
            username,
            password,
            is_admin: false,
        });
        self.persist().await
    }

    pub async fn delete(&mut self, username: &str) -> Result<(), AppError> {
        if username == ADMIN_USERNAME {
            return Err(StoreError::ProtectedUser(username.to_string()).into());
        }
        let index = self
            .users
            .iter()
            .position(|u| u.username == username)
            .ok_or_else(|| StoreError::UserNotFound(username.to_string()))?;
        self.users.remove(index);
        self.persist().await
    }

    /// Exact, case-sensitive match on both fields.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }

    async fn persist(&self) -> Result<(), AppError> {
        self.writer.write_all(&self.users).await
    }
}
