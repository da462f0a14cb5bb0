//! # Edge lists
//!
//! Connections stored one per line, as `from to weight` followed by an optional name. Fields are
//! separated by whitespace, everything after a `#` is a comment and blank lines are skipped.
//!
//! ```text
//! # from to weight name
//! 1 2 3
//! 1 3 2 highway
//! ```
use std::str::FromStr;

use crate::data::network::NodeId;
use crate::data::network::connection::Connection;
use crate::io::error::ParseError;

const COMMENT: char = '#';

/// Parse all connections in a text.
///
/// Only the format is checked here; whether the connections form a valid network is decided when
/// a problem is solved.
///
/// # Errors
///
/// A `ParseError` for the first line that doesn't describe a connection.
pub fn parse<W: FromStr>(text: &str) -> Result<Vec<Connection<W>>, ParseError> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let content = line.split(COMMENT).next().unwrap_or_default().trim();
            (!content.is_empty()).then_some((i + 1, line, content))
        })
        .map(|(line_number, line, content)| parse_line(content)
            .map_err(|description| ParseError::new(description, line_number, line))
        )
        .collect()
}

fn parse_line<W: FromStr>(content: &str) -> Result<Connection<W>, String> {
    let mut fields = content.split_whitespace();

    let from = node(fields.next(), "from")?;
    let to = node(fields.next(), "to")?;
    let weight = fields.next()
        .ok_or_else(|| "Missing weight".to_string())?;
    let weight = weight.parse::<W>()
        .map_err(|_| format!("Could not parse weight \"{}\"", weight))?;

    let connection = match fields.next() {
        Some(name) => Connection::named(from, to, weight, name),
        None => Connection::new(from, to, weight),
    };

    match fields.next() {
        None => Ok(connection),
        Some(field) => Err(format!("Unexpected field \"{}\" after the name", field)),
    }
}

fn node(field: Option<&str>, which: &str) -> Result<NodeId, String> {
    let field = field.ok_or_else(|| format!("Missing {} node", which))?;
    field.parse()
        .map_err(|_| format!("Could not parse {} node \"{}\", node ids are positive integers", which, field))
}
