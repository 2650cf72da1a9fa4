use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L} \-]+$").unwrap());

/// A name is valid when it is non-empty, made of letters, spaces and
/// hyphens only, and contains at least one letter.
pub fn is_valid_name(s: &str) -> bool {
    NAME_RE.is_match(s) && s.chars().any(|c| c.is_alphabetic())
}

/// Whole-number check used by numeric prompts.
pub fn is_non_negative_integer(s: &str) -> bool {
    s.parse::<u32>().is_ok()
}

pub fn check_games_invariant(games: u32, wins: u32, losses: u32, draws: u32) -> bool {
    wins as u64 + losses as u64 + draws as u64 == games as u64
}
