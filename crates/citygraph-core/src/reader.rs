use std::io::{BufRead, Write};

use citygraph_graph::RoadClass;

use crate::Result;
use crate::cities::collect_cities;
use crate::console::Console;
use crate::endpoints::{EndpointRole, select_endpoint};
use crate::options::ReaderOptions;
use crate::result::{GraphBuildResult, QueryEndpoints};
use crate::roads::{collect_road_details, prompt_road_count};

/// A source of fully built graphs for the shortest-path stage.
pub trait InputReader {
    fn read(&mut self) -> Result<GraphBuildResult>;
}

/// Builds a graph from an interactive prompt/answer session.
pub struct CommandLineReader<R, W, E> {
    console: Console<R, W, E>,
    options: ReaderOptions,
}

impl<R, W, E> CommandLineReader<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            console: Console::new(input, out, err),
            options: ReaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ReaderOptions {
        self.options
    }

    pub fn into_console(self) -> Console<R, W, E> {
        self.console
    }
}

impl<R, W, E> InputReader for CommandLineReader<R, W, E>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    fn read(&mut self) -> Result<GraphBuildResult> {
        let console = &mut self.console;
        let options = &self.options;

        let mut cities = collect_cities(console, options)?;

        let mandatory = prompt_road_count(console, RoadClass::Mandatory)?;
        // The accepted roads are already linked into `cities`; the returned copies are only
        // counted for the completion event.
        let mandatory_roads =
            collect_road_details(console, mandatory, &mut cities, RoadClass::Mandatory, options)?;
        console.blank_line()?;

        let optional = prompt_road_count(console, RoadClass::Optional)?;
        let optional_roads = if optional > 0 {
            collect_road_details(console, optional, &mut cities, RoadClass::Optional, options)?
        } else {
            Vec::new()
        };
        console.blank_line()?;

        let source = select_endpoint(console, cities.len(), EndpointRole::Source)?;
        let target = select_endpoint(console, cities.len(), EndpointRole::Target)?;
        console.flush()?;

        tracing::info!(
            cities = cities.len(),
            mandatory_roads = mandatory_roads.len(),
            optional_roads = optional_roads.len(),
            source,
            target,
            "graph build complete"
        );

        Ok(GraphBuildResult::new(
            cities,
            optional_roads,
            QueryEndpoints { source, target },
        ))
    }
}
