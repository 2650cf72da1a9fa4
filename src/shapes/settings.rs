use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    /// Directory holding teams.csv and users.txt; the current working
    /// directory is used when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
