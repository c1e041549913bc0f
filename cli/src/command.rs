use std::str::FromStr;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Redraw,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("unknown command `{0}`, expected one of: r, f, n, q")]
    Unknown(String),
    #[error("`{0}` needs a row and a column")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("unexpected input after command: `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Self::Redraw);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words, "reveal")?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words, "flag")?),
            "n" | "new" => Self::NewGame,
            "q" | "quit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(word.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<Coord2, ParseCommandError> {
    let mut next_coord = || -> Result<Coord, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords(name))?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
    };
    let row = next_coord()?;
    let col = next_coord()?;
    Ok((row, col))
}
