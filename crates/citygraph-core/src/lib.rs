#![forbid(unsafe_code)]

//! Interactive construction of a city/road graph for a shortest-path query.
//!
//! A session runs in a fixed order:
//! 1. the number of cities (at least two),
//! 2. the mandatory roads, linked into city adjacency as they are accepted,
//! 3. the optional roads, held aside in a flat list,
//! 4. the source and target cities.
//!
//! Invalid answers are reported on the error stream and the same prompt is asked again.
//! Running out of input is the only fatal condition ([`Error::InputClosed`]).

pub mod cities;
pub mod console;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod reader;
pub mod result;
pub mod roads;
pub mod scan;

pub use citygraph_graph as graph;
pub use citygraph_graph::{City, CityId, NodeSet, Road, RoadClass, RoadId};
pub use console::Console;
pub use endpoints::EndpointRole;
pub use error::{Error, Result};
pub use options::ReaderOptions;
pub use reader::{CommandLineReader, InputReader};
pub use result::{GraphBuildResult, QueryEndpoints};
