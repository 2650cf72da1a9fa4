use crate::{errors::ParseError, shapes::LineCodec};
use std::fmt;

const TEAM_FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub city: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub players_count: u32,
}

/// Optional overrides applied by `TeamStore::edit`; unset fields keep the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub games_played: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub draws: Option<u32>,
    pub players_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    City,
    GamesPlayed,
    Wins,
    Losses,
    Draws,
    PlayersCount,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) | Games: {} | Wins: {} | Losses: {} | Draws: {} | Players: {}",
            self.name,
            self.city,
            self.games_played,
            self.wins,
            self.losses,
            self.draws,
            self.players_count
        )
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, ParseError> {
    value.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl LineCodec for Team {
    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.name,
            self.city,
            self.games_played,
            self.wins,
            self.losses,
            self.draws,
            self.players_count
        )
    }

    // Positional split; names cannot contain commas by validation, so a
    // plain split is enough.
    fn from_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != TEAM_FIELD_COUNT {
            return Err(ParseError::FieldCount {
                expected: TEAM_FIELD_COUNT,
                found: fields.len(),
            });
        }
        Ok(Team {
            name: fields[0].to_string(),
            city: fields[1].to_string(),
            games_played: parse_count("games_played", fields[2])?,
            wins: parse_count("wins", fields[3])?,
            losses: parse_count("losses", fields[4])?,
            draws: parse_count("draws", fields[5])?,
            players_count: parse_count("players_count", fields[6])?,
        })
    }
}
