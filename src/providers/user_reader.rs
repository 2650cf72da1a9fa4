use crate::{errors::AppError, shapes::user::User};
use async_trait::async_trait;

#[async_trait]
pub trait UserReader {
    async fn read_all(&self) -> Result<Vec<User>, AppError>;
}
