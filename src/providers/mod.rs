pub mod fs;
pub mod settings_reader;
pub mod settings_writer;
pub mod team_reader;
pub mod team_writer;
pub mod user_reader;
pub mod user_writer;
