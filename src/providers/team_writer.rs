use crate::{errors::AppError, shapes::team::Team};
use async_trait::async_trait;

#[async_trait]
pub trait TeamWriter {
    async fn write_all(&self, teams: &[Team]) -> Result<(), AppError>;
}
