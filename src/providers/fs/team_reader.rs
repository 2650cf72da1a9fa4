use crate::{
    constants::TEAMS_FILE_NAME,
    errors::AppError,
    providers::{
        fs::{path::get_teams_file_path, record::read_records},
        team_reader::TeamReader,
    },
    shapes::team::Team,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileSystemTeamReader(PathBuf);

impl FileSystemTeamReader {
    pub fn new(data_dir: &Path) -> Self {
        Self(data_dir.to_path_buf())
    }
}

#[async_trait]
impl TeamReader for FileSystemTeamReader {
    async fn read_all(&self) -> Result<Vec<Team>, AppError> {
        read_records(&get_teams_file_path(&self.0), TEAMS_FILE_NAME).await
    }
}
