use citygraph_graph::GraphError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input ended while waiting for {expecting}")]
    InputClosed { expecting: &'static str },

    #[error("Cannot read roads or endpoints for a graph without cities")]
    NoCities,

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
