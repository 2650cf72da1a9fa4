use crate::{errors::AppError, shapes::user::User};
use async_trait::async_trait;

#[async_trait]
pub trait UserWriter {
    async fn write_all(&self, users: &[User]) -> Result<(), AppError>;
}
