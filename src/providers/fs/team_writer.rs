use crate::{
    errors::AppError,
    providers::{
        fs::{path::get_teams_file_path, record::write_records},
        team_writer::TeamWriter,
    },
    shapes::team::Team,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub struct FileSystemTeamWriter(PathBuf);

impl FileSystemTeamWriter {
    pub fn new(data_dir: &Path) -> Self {
        Self(data_dir.to_path_buf())
    }
}

#[async_trait]
impl TeamWriter for FileSystemTeamWriter {
    async fn write_all(&self, teams: &[Team]) -> Result<(), AppError> {
        write_records(&get_teams_file_path(&self.0), teams).await
    }
}
