mod auth;
mod constants;
mod errors;
mod logging;
mod menu;
mod providers;
mod shapes;
mod store;
mod util;
mod validation;

#[cfg(test)]
mod tests;

use crate::{
    auth::{login, Role},
    constants::LOG_FILE_NAME,
    logging::logger::{init_logger, log_error, log_info},
    menu::{run_admin_menu, run_standard_menu},
    providers::{
        fs::{
            path::get_base_path, settings_reader::FileSystemSettingsReader,
            settings_writer::FileSystemSettingsWriter, team_reader::FileSystemTeamReader,
            team_writer::FileSystemTeamWriter, user_reader::FileSystemUserReader,
            user_writer::FileSystemUserWriter,
        },
        settings_reader::SettingsReader,
        settings_writer::SettingsWriter,
        team_reader::TeamReader,
        user_reader::UserReader,
    },
    shapes::settings::Settings,
    store::{team_store::TeamStore, user_store::UserStore},
    util::{clear_screen, read_line},
};
use std::path::PathBuf;

async fn load_settings(base_dir: &std::path::Path) -> Settings {
    let reader = FileSystemSettingsReader::new(base_dir);
    match reader.read().await {
        Ok(settings) => settings,
        Err(_) => {
            // first run: persist the defaults so the file is there to edit
            let settings = Settings::default();
            let writer = FileSystemSettingsWriter::new(base_dir);
            if let Err(e) = writer.save(&settings).await {
                log_error(&format!("could not write default settings: {}", e));
            }
            settings
        }
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }
    let base_dir = match get_base_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    init_logger(base_dir.join(LOG_FILE_NAME));

    let settings = load_settings(&base_dir).await;
    let data_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.resolve_data_dir());

    // Both record files must be present and readable before any menu is
    // shown; anything else is a fatal startup error.
    let users = match FileSystemUserReader::new(&data_dir).read_all().await {
        Ok(users) => users,
        Err(e) => {
            log_error(&format!("startup failed: {}", e));
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let teams = match FileSystemTeamReader::new(&data_dir).read_all().await {
        Ok(teams) => teams,
        Err(e) => {
            log_error(&format!("startup failed: {}", e));
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let mut team_store = TeamStore::new(teams, FileSystemTeamWriter::new(&data_dir));
    let mut user_store = UserStore::new(users, FileSystemUserWriter::new(&data_dir));

    clear_screen();
    let username = read_line("Login: ");
    let password = read_line("Password: ");
    let role = match login(&user_store, &username, &password) {
        Some(role) => role,
        None => {
            log_error(&format!("failed login for '{}'", username));
            println!("Invalid login or password!");
            return;
        }
    };
    log_info(&format!("user '{}' logged in", username));
    println!(
        "Welcome, {}! You are {}.",
        username,
        match role {
            Role::Admin => "Administrator",
            Role::Standard => "User",
        }
    );
    match role {
        Role::Admin => run_admin_menu(&mut team_store, &mut user_store).await,
        Role::Standard => run_standard_menu(&mut team_store).await,
    }
}
