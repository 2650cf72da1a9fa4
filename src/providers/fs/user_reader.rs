use crate::{
    constants::USERS_FILE_NAME,
    errors::AppError,
    providers::{
        fs::{path::get_users_file_path, record::read_records},
        user_reader::UserReader,
    },
    shapes::user::User,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileSystemUserReader(PathBuf);

impl FileSystemUserReader {
    pub fn new(data_dir: &Path) -> Self {
        Self(data_dir.to_path_buf())
    }
}

#[async_trait]
impl UserReader for FileSystemUserReader {
    async fn read_all(&self) -> Result<Vec<User>, AppError> {
        read_records(&get_users_file_path(&self.0), USERS_FILE_NAME).await
    }
}
