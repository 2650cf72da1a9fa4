use crate::{
    constants::{CONFIG_FILE_NAME, TEAMS_FILE_NAME, USERS_FILE_NAME},
    errors::{AppError, IOError},
};
use dirs::home_dir;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};

/// App directory holding config and log files (not the record files,
/// whose location comes from settings or the command line).
pub fn get_base_path() -> Result<PathBuf, AppError> {
    let mut path = home_dir().ok_or(AppError::IO(IOError::Msg(
        "could not recognize home directory".to_string(),
    )))?;
    path.push(".teambook");
    if !path.exists() {
        create_dir_all(&path).map_err(|_| {
            AppError::IO(IOError::Msg("could not create app directory".to_string()))
        })?;
    }
    Ok(path)
}

pub fn get_teams_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TEAMS_FILE_NAME)
}

pub fn get_users_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(USERS_FILE_NAME)
}

pub fn get_config_file_path(base_path: &Path) -> PathBuf {
    base_path.join(CONFIG_FILE_NAME)
}
