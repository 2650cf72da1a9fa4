pub const TEAMS_FILE_NAME: &str = "teams.csv";
pub const USERS_FILE_NAME: &str = "users.txt";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "teambook.log";
pub const ADMIN_USERNAME: &str = "admin";
pub const SMALL_TEAM_THRESHOLD: u32 = 10;
