use crate::{
    errors::{AppError, StoreError, ValidationError},
    providers::team_writer::TeamWriter,
    shapes::team::{SortField, Team, TeamPatch},
    validation::{check_games_invariant, is_valid_name},
};

/// In-memory ordered collection of teams, synchronized to its backing
/// file on every mutation except sorting.
pub struct TeamStore<W: TeamWriter> {
    teams: Vec<Team>,
    writer: W,
}

fn validate(team: &Team) -> Result<(), ValidationError> {
    if !is_valid_name(&team.name) {
        return Err(ValidationError::InvalidName(team.name.clone()));
    }
    if !is_valid_name(&team.city) {
        return Err(ValidationError::InvalidCity(team.city.clone()));
    }
    if !check_games_invariant(team.games_played, team.wins, team.losses, team.draws) {
        return Err(ValidationError::GamesInvariant {
            games: team.games_played,
            wins: team.wins,
            losses: team.losses,
            draws: team.draws,
        });
    }
    Ok(())
}

impl<W: TeamWriter> TeamStore<W> {
    pub fn new(teams: Vec<Team>, writer: W) -> Self {
        Self { teams, writer }
    }

    pub fn list(&self) -> &[Team] {
        &self.teams
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub async fn add(&mut self, team: Team) -> Result<(), AppError> {
        validate(&team)?;
        self.teams.push(team);
        self.persist().await
    }

    pub async fn delete(&mut self, name: &str) -> Result<(), AppError> {
        let index = self
            .teams
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| StoreError::TeamNotFound(name.to_string()))?;
        self.teams.remove(index);
        self.persist().await
    }

    /// Merges the patch over the current values, re-validates the merged
    /// record, and only then applies and persists it.
    pub async fn edit(&mut self, name: &str, patch: TeamPatch) -> Result<(), AppError> {
        let index = self
            .teams
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| StoreError::TeamNotFound(name.to_string()))?;
        let current = &self.teams[index];
        let merged = Team {
            name: patch.name.unwrap_or_else(|| current.name.clone()),
            city: patch.city.unwrap_or_else(|| current.city.clone()),
            games_played: patch.games_played.unwrap_or(current.games_played),
            wins: patch.wins.unwrap_or(current.wins),
            losses: patch.losses.unwrap_or(current.losses),
            draws: patch.draws.unwrap_or(current.draws),
            players_count: patch.players_count.unwrap_or(current.players_count),
        };
        validate(&merged)?;
        self.teams[index] = merged;
        self.persist().await
    }

    pub fn count_below(&self, threshold: u32) -> usize {
        self.teams
            .iter()
            .filter(|t| t.players_count < threshold)
            .count()
    }

    /// Team with the maximum wins; ties keep the leftmost record in the
    /// current order.
    pub fn most_wins(&self) -> Option<&Team> {
        let mut best: Option<&Team> = None;
        for team in &self.teams {
            match best {
                Some(b) if team.wins <= b.wins => {}
                _ => best = Some(team),
            }
        }
        best
    }

    /// Stable in-place sort. Directions are fixed per field: name and
    /// city ascending, all numeric fields descending. Sorting is not
    /// persisted.
    pub fn sort_by(&mut self, field: SortField) {
        match field {
            SortField::Name => self.teams.sort_by(|a, b| a.name.cmp(&b.name)),
            SortField::City => self.teams.sort_by(|a, b| a.city.cmp(&b.city)),
            SortField::GamesPlayed => self
                .teams
                .sort_by(|a, b| b.games_played.cmp(&a.games_played)),
            SortField::Wins => self.teams.sort_by(|a, b| b.wins.cmp(&a.wins)),
            SortField::Losses => self.teams.sort_by(|a, b| b.losses.cmp(&a.losses)),
            SortField::Draws => self.teams.sort_by(|a, b| b.draws.cmp(&a.draws)),
            SortField::PlayersCount => self
                .teams
                .sort_by(|a, b| b.players_count.cmp(&a.players_count)),
        }
    }

    async fn persist(&self) -> Result<(), AppError> {
        self.writer.write_all(&self.teams).await
    }
}
