use std::io::{BufRead, Write};

use citygraph_graph::NodeSet;

use crate::Result;
use crate::console::Console;
use crate::options::ReaderOptions;
use crate::scan::{TokenError, parse_signed};

pub const MIN_CITIES: usize = 2;

/// Prompts until a city count between [`MIN_CITIES`] and `options.max_cities` is entered,
/// then creates the cities.
pub fn collect_cities<R, W, E>(
    console: &mut Console<R, W, E>,
    options: &ReaderOptions,
) -> Result<NodeSet>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let max = options.max_cities.max(MIN_CITIES);
    let count = loop {
        console.prompt("How many cities are in your graph?: ")?;
        let parsed = parse_signed(console.read_line("the number of cities")?);
        let too_many = match parsed.map(usize::try_from) {
            Ok(Ok(n)) if (MIN_CITIES..=max).contains(&n) => break n,
            Ok(Ok(n)) => n > max,
            Ok(Err(_)) => false,
            Err(TokenError::Overflow) => true,
            Err(err) => {
                tracing::debug!(reason = %err, "city count unreadable");
                false
            }
        };
        tracing::debug!(too_many, max, "city count rejected");
        if too_many {
            console.log_error(format_args!(
                "There can be at most {max} cities in your graph."
            ))?;
        } else {
            console.log_error("There must be at least 2 cities in your graph.")?;
        }
    };

    let cities = NodeSet::with_cities(count);
    console.say(format_args!(
        "  {count} cities (0 - {}) have been added.",
        count - 1
    ))?;
    console.blank_line()?;
    tracing::debug!(count, "cities created");
    Ok(cities)
}
