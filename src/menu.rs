use crate::{
    constants::SMALL_TEAM_THRESHOLD,
    logging::logger::{log_error, log_info},
    providers::{team_writer::TeamWriter, user_writer::UserWriter},
    shapes::team::{SortField, Team, TeamPatch},
    store::{team_store::TeamStore, user_store::UserStore},
    util::{prompt_count, prompt_name, prompt_optional_count, prompt_optional_name, read_line},
};

/// Admin menu loop: full CRUD over teams and users plus the read-only
/// queries. Returns when the operator picks exit.
pub async fn run_admin_menu<TW: TeamWriter, UW: UserWriter>(
    teams: &mut TeamStore<TW>,
    users: &mut UserStore<UW>,
) {
    loop {
        println!("\n--- Admin Menu ---");
        println!("1. View teams");
        println!("2. Add team");
        println!("3. Delete team");
        println!("4. Search team");
        println!("5. Edit team");
        println!("6. Count teams with <{} players", SMALL_TEAM_THRESHOLD);
        println!("7. Find team with most wins");
        println!("8. View users");
        println!("9. Add user");
        println!("10. Delete user");
        println!("11. Sort teams");
        println!("12. Help");
        println!("0. Exit");
        match read_line("Choice: ").as_str() {
            "1" => view_teams(teams),
            "2" => add_team(teams).await,
            "3" => delete_team(teams).await,
            "4" => search_team(teams),
            "5" => edit_team(teams).await,
            "6" => count_small_teams(teams),
            "7" => find_most_wins(teams),
            "8" => view_users(users),
            "9" => add_user(users).await,
            "10" => delete_user(users).await,
            "11" => sort_teams(teams),
            "12" => show_help(true),
            "0" => {
                println!("Exiting...");
                return;
            }
            _ => println!("Invalid choice."),
        }
    }
}

/// Standard menu loop: read-only team views and aggregates.
pub async fn run_standard_menu<TW: TeamWriter>(teams: &mut TeamStore<TW>) {
    loop {
        println!("\n--- User Menu ---");
        println!("1. View teams");
        println!("2. Search team");
        println!("3. Count teams with <{} players", SMALL_TEAM_THRESHOLD);
        println!("4. Find team with most wins");
        println!("5. Sort teams");
        println!("6. Help");
        println!("0. Exit");
        match read_line("Choice: ").as_str() {
            "1" => view_teams(teams),
            "2" => search_team(teams),
            "3" => count_small_teams(teams),
            "4" => find_most_wins(teams),
            "5" => sort_teams(teams),
            "6" => show_help(false),
            "0" => {
                println!("Exiting...");
                return;
            }
            _ => println!("Invalid choice."),
        }
    }
}

fn view_teams<TW: TeamWriter>(teams: &TeamStore<TW>) {
    if teams.list().is_empty() {
        println!("no teams found");
        return;
    }
    for team in teams.list() {
        println!("{}", team);
    }
}

async fn add_team<TW: TeamWriter>(teams: &mut TeamStore<TW>) {
    let name = prompt_name("Enter team name (letters, spaces, hyphens only): ");
    let city = prompt_name("Enter city (letters, spaces, hyphens only): ");
    let games_played = prompt_count("Games played: ");
    let wins = prompt_count("Wins: ");
    let losses = prompt_count("Losses: ");
    let draws = prompt_count("Draws: ");
    let players_count = prompt_count("Players count: ");
    let team = Team {
        name: name.clone(),
        city,
        games_played,
        wins,
        losses,
        draws,
        players_count,
    };
    match teams.add(team).await {
        Ok(()) => {
            log_info(&format!("team '{}' added", name));
            println!("Team added and saved!");
        }
        Err(e) => {
            log_error(&format!("could not add team '{}': {}", name, e));
            eprintln!("error: {}", e);
        }
    }
}

async fn delete_team<TW: TeamWriter>(teams: &mut TeamStore<TW>) {
    let name = read_line("Enter team name to delete: ");
    match teams.delete(&name).await {
        Ok(()) => {
            log_info(&format!("team '{}' deleted", name));
            println!("Team deleted and saved!");
        }
        Err(e) => eprintln!("error: {}", e),
    }
}

fn search_team<TW: TeamWriter>(teams: &TeamStore<TW>) {
    let name = read_line("Enter team name to search: ");
    match teams.find_by_name(&name) {
        Some(team) => println!("{}", team),
        None => println!("Team not found."),
    }
}

async fn edit_team<TW: TeamWriter>(teams: &mut TeamStore<TW>) {
    let name = read_line("Enter team name to edit: ");
    if teams.find_by_name(&name).is_none() {
        println!("Team not found.");
        return;
    }
    println!("Editing team: {} (leave a field empty to keep it)", name);
    let patch = TeamPatch {
        name: prompt_optional_name("New name: "),
        city: prompt_optional_name("New city: "),
        games_played: prompt_optional_count("Games played: "),
        wins: prompt_optional_count("Wins: "),
        losses: prompt_optional_count("Losses: "),
        draws: prompt_optional_count("Draws: "),
        players_count: prompt_optional_count("Players count: "),
    };
    match teams.edit(&name, patch).await {
        Ok(()) => {
            log_info(&format!("team '{}' updated", name));
            println!("Team updated and saved!");
        }
        Err(e) => {
            log_error(&format!("could not update team '{}': {}", name, e));
            eprintln!("error: {}", e);
        }
    }
}

fn count_small_teams<TW: TeamWriter>(teams: &TeamStore<TW>) {
    println!(
        "Number of teams with less than {} players: {}",
        SMALL_TEAM_THRESHOLD,
        teams.count_below(SMALL_TEAM_THRESHOLD)
    );
}

fn find_most_wins<TW: TeamWriter>(teams: &TeamStore<TW>) {
    match teams.most_wins() {
        Some(team) => {
            println!("Team with the most wins:");
            println!("{}", team);
        }
        None => println!("no teams found"),
    }
}

fn view_users<UW: UserWriter>(users: &UserStore<UW>) {
    for user in users.list() {
        println!("{}", user);
    }
}

async fn add_user<UW: UserWriter>(users: &mut UserStore<UW>) {
    let username = read_line("Enter username: ");
    let password = read_line("Enter password: ");
    match users.add(username.clone(), password).await {
        Ok(()) => {
            log_info(&format!("user '{}' added", username));
            println!("User added and saved!");
        }
        Err(e) => {
            log_error(&format!("could not add user '{}': {}", username, e));
            eprintln!("error: {}", e);
        }
    }
}

async fn delete_user<UW: UserWriter>(users: &mut UserStore<UW>) {
    let username = read_line("Enter username to delete: ");
    match users.delete(&username).await {
        Ok(()) => {
            log_info(&format!("user '{}' deleted", username));
            println!("User deleted and saved!");
        }
        Err(e) => eprintln!("error: {}", e),
    }
}

fn sort_teams<TW: TeamWriter>(teams: &mut TeamStore<TW>) {
    println!("Sort teams by:");
    println!("1. Name");
    println!("2. City");
    println!("3. Games played");
    println!("4. Wins");
    println!("5. Losses");
    println!("6. Draws");
    println!("7. Players count");
    let field = match read_line("Choice: ").as_str() {
        "1" => SortField::Name,
        "2" => SortField::City,
        "3" => SortField::GamesPlayed,
        "4" => SortField::Wins,
        "5" => SortField::Losses,
        "6" => SortField::Draws,
        "7" => SortField::PlayersCount,
        _ => {
            println!("Invalid choice.");
            return;
        }
    };
    teams.sort_by(field);
    println!("Teams sorted:");
    view_teams(teams);
}

fn show_help(admin: bool) {
    println!("\n=== Help ===");
    println!("This program keeps statistics about football teams.");
    println!("You can look at teams, search for a team, and see statistics.");
    println!("Team names and cities are normal words (for example: Tigers, London).");
    println!("Numbers like games played, wins, losses, draws and players are whole numbers.");
    println!("When editing a team, leave a field empty to keep its current value.");
    println!();
    println!("View teams: show the list of all teams.");
    println!("Search team: find a team by its name.");
    println!(
        "Count teams with less than {} players: how many small teams exist.",
        SMALL_TEAM_THRESHOLD
    );
    println!("Find team with most wins: which team is the best.");
    println!("Sort teams: arrange teams by name, city, or results.");
    if admin {
        println!("Add/Delete/Edit team: change the team register.");
        println!("View/Add/Delete user: manage who can use the program.");
    }
    println!("=====================================\n");
}
