use citygraph_graph::{CityId, NodeSet, Road};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryEndpoints {
    pub source: CityId,
    pub target: CityId,
}

/// Everything the shortest-path stage needs: the linked graph, the optional roads it may
/// splice in, and the query endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphBuildResult {
    cities: NodeSet,
    optional_roads: Vec<Road>,
    endpoints: QueryEndpoints,
}

impl GraphBuildResult {
    pub fn new(cities: NodeSet, optional_roads: Vec<Road>, endpoints: QueryEndpoints) -> Self {
        Self {
            cities,
            optional_roads,
            endpoints,
        }
    }

    pub fn cities(&self) -> &NodeSet {
        &self.cities
    }

    pub fn optional_roads(&self) -> &[Road] {
        &self.optional_roads
    }

    pub fn endpoints(&self) -> QueryEndpoints {
        self.endpoints
    }

    pub fn source(&self) -> CityId {
        self.endpoints.source
    }

    pub fn target(&self) -> CityId {
        self.endpoints.target
    }

    pub fn into_parts(self) -> (NodeSet, Vec<Road>, QueryEndpoints) {
        (self.cities, self.optional_roads, self.endpoints)
    }
}
