//! Road count and road detail prompts.
//!
//! Mandatory roads are linked into city adjacency the moment they are accepted, because the
//! shortest-path stage walks them straight from each [`City`](citygraph_graph::City). Optional
//! roads are only returned; the shortest-path stage decides per road whether to splice it in.

use std::io::{BufRead, Write};

use citygraph_graph::{CityId, NodeSet, Road, RoadClass};

use crate::console::Console;
use crate::options::ReaderOptions;
use crate::scan::{TokenError, parse_road_triple, parse_unsigned};
use crate::{Error, Result};

/// Reads how many roads of `class` follow.
///
/// There is no retry: anything that is not an unsigned number means "no roads of this class".
pub fn prompt_road_count<R, W, E>(console: &mut Console<R, W, E>, class: RoadClass) -> Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    console.prompt(format_args!("How many {class} roads are in your graph?: "))?;
    let parsed = parse_unsigned(console.read_line("a road count")?);
    match parsed.map(usize::try_from) {
        Ok(Ok(count)) => {
            tracing::debug!(class = class.as_str(), count, "road count read");
            Ok(count)
        }
        Ok(Err(_)) => no_roads(console, class, &TokenError::Overflow),
        Err(err) => no_roads(console, class, &err),
    }
}

fn no_roads<R, W, E>(
    console: &mut Console<R, W, E>,
    class: RoadClass,
    reason: &TokenError,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    tracing::debug!(class = class.as_str(), %reason, "road count unreadable, using 0");
    console.say(format_args!("  0 {class} roads are being added."))?;
    console.blank_line()?;
    Ok(0)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoadRejection {
    #[error("malformed road details: {0}")]
    Malformed(#[from] TokenError),

    #[error("road {from}->{to} leaves the city range 0..={limit}")]
    OutOfRange { from: u64, to: u64, limit: CityId },

    #[error("road starts and ends at city {city}")]
    SelfLoop { city: CityId },

    #[error("road length must be positive")]
    ZeroLength,
}

/// Validates one parsed `from:to:length` entry against the city range and `options`.
pub fn check_road(
    parsed: std::result::Result<(u64, u64, u64), TokenError>,
    limit: CityId,
    class: RoadClass,
    options: &ReaderOptions,
) -> std::result::Result<Road, RoadRejection> {
    let (from, to, length) = parsed?;
    let in_range = |v: u64| usize::try_from(v).ok().filter(|&v| v <= limit);
    let (Some(from_ix), Some(to_ix)) = (in_range(from), in_range(to)) else {
        return Err(RoadRejection::OutOfRange { from, to, limit });
    };

    let road = Road::new(from_ix, to_ix, length, class);
    if options.enforce_road_constraints {
        if road.is_self_loop() {
            return Err(RoadRejection::SelfLoop { city: from_ix });
        }
        if road.length == 0 {
            return Err(RoadRejection::ZeroLength);
        }
    }
    Ok(road)
}

/// Reads exactly `count` valid roads of `class`.
///
/// A rejected entry is reported and the same slot is prompted again; only accepted roads
/// advance the slot index. Mandatory roads are linked into `cities` as they are accepted.
pub fn collect_road_details<R, W, E>(
    console: &mut Console<R, W, E>,
    count: usize,
    cities: &mut NodeSet,
    class: RoadClass,
    options: &ReaderOptions,
) -> Result<Vec<Road>>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut roads = Vec::new();
    if count == 0 {
        return Ok(roads);
    }
    let limit = cities.city_limit().ok_or(Error::NoCities)?;

    console.say("  Enter the details for each road (fromCity:toCity:length):")?;

    let mut slot = 0;
    while slot < count {
        console.prompt(format_args!("    Road {slot}: "))?;
        let parsed = parse_road_triple(console.read_line("road details (fromCity:toCity:length)")?);

        let road = match check_road(parsed, limit, class, options) {
            Ok(road) => road,
            Err(reason) => {
                tracing::debug!(class = class.as_str(), slot, %reason, "road rejected");
                console.log_error(format_args!(
                    "Values for 'fromCity' and 'toCity' must be unique integers between 0 and {limit} inclusive and the value for 'length' must be a positive integer."
                ))?;
                continue;
            }
        };

        if !class.is_optional() {
            cities.link(road.clone())?;
        }

        console.say(format_args!(
            "      New {class} road from {} to {} with length {}.",
            road.from, road.to, road.length
        ))?;
        tracing::debug!(
            class = class.as_str(),
            slot,
            from = road.from,
            to = road.to,
            length = road.length,
            "road accepted"
        );
        roads.push(road);
        slot += 1;
    }

    Ok(roads)
}
