use std::io::{BufRead, Write};

use citygraph_graph::CityId;

use crate::console::Console;
use crate::scan::parse_unsigned;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    Source,
    Target,
}

impl EndpointRole {
    fn verb(self) -> &'static str {
        match self {
            Self::Source => "start",
            Self::Target => "end",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Source => "Starting",
            Self::Target => "Ending",
        }
    }

    fn expecting(self) -> &'static str {
        match self {
            Self::Source => "the source city",
            Self::Target => "the target city",
        }
    }
}

/// Prompts until a city id in `0..num_cities` is entered.
///
/// Source and target are selected independently; nothing stops them from being equal.
pub fn select_endpoint<R, W, E>(
    console: &mut Console<R, W, E>,
    num_cities: usize,
    role: EndpointRole,
) -> Result<CityId>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let limit = num_cities.checked_sub(1).ok_or(Error::NoCities)?;
    let verb = role.verb();

    let id = loop {
        console.prompt(format_args!("What city do you want to {verb} in?: "))?;
        let parsed = parse_unsigned(console.read_line(role.expecting())?);
        match parsed {
            Ok(raw) => {
                if let Some(id) = usize::try_from(raw).ok().filter(|&id| id <= limit) {
                    break id;
                }
                tracing::debug!(role = verb, raw, limit, "endpoint out of range");
            }
            Err(err) => tracing::debug!(role = verb, reason = %err, "endpoint unreadable"),
        }
        console.log_error(format_args!(
            "The {verb} city must be an integer between 0 and {limit}."
        ))?;
    };

    console.say(format_args!("  {} city: {id}", role.title()))?;
    console.blank_line()?;
    Ok(id)
}
