pub mod settings;
pub mod team;
pub mod user;

use crate::errors::ParseError;

/// A record that can be rendered to and parsed from a single line of its
/// backing file.
pub trait LineCodec: Sized {
    fn to_line(&self) -> String;
    fn from_line(line: &str) -> Result<Self, ParseError>;
}
