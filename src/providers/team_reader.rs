use crate::{errors::AppError, shapes::team::Team};
use async_trait::async_trait;

#[async_trait]
pub trait TeamReader {
    async fn read_all(&self) -> Result<Vec<Team>, AppError>;
}
