use crate::{
    errors::AppError,
    providers::{
        fs::{path::get_users_file_path, record::write_records},
        user_writer::UserWriter,
    },
    shapes::user::User,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileSystemUserWriter(PathBuf);

impl FileSystemUserWriter {
    pub fn new(data_dir: &Path) -> Self {
        Self(data_dir.to_path_buf())
    }
}

#[async_trait]
impl UserWriter for FileSystemUserWriter {
    async fn write_all(&self, users: &[User]) -> Result<(), AppError> {
        write_records(&get_users_file_path(&self.0), users).await
    }
}
