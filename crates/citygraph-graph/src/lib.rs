#![forbid(unsafe_code)]

//! City/road graph model.
//!
//! Cities are dense integer ids over `0..len`. Roads linked into the graph live in a single
//! arena owned by [`NodeSet`]; each [`City`] only stores [`RoadId`] indices into that arena for
//! its outgoing and incoming roads, so there are no ownership cycles between cities and roads.

mod road;

pub use road::{Road, RoadClass, RoadId};

use serde::Serialize;

pub type CityId = usize;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("City {id} does not exist (valid ids are 0 to {limit} inclusive)")]
    UnknownCity { id: CityId, limit: CityId },

    #[error("City {id} does not exist (the graph has no cities)")]
    EmptyGraph { id: CityId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: CityId,
    /// Roads whose `from` endpoint is this city, in link order.
    pub outgoing: Vec<RoadId>,
    /// Roads whose `to` endpoint is this city, in link order.
    pub incoming: Vec<RoadId>,
}

impl City {
    pub fn new(id: CityId) -> Self {
        Self {
            id,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeSet {
    cities: Vec<City>,
    roads: Vec<Road>,
}

impl NodeSet {
    pub fn with_cities(count: usize) -> Self {
        Self {
            cities: (0..count).map(City::new).collect(),
            roads: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Highest valid city id, or `None` for an empty set.
    pub fn city_limit(&self) -> Option<CityId> {
        self.cities.len().checked_sub(1)
    }

    pub fn contains(&self, id: CityId) -> bool {
        id < self.cities.len()
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id)
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn road(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id.index())
    }

    pub fn roads(&self) -> impl Iterator<Item = (RoadId, &Road)> {
        self.roads.iter().enumerate().map(|(ix, r)| (RoadId(ix), r))
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    fn check_city(&self, id: CityId) -> Result<()> {
        match self.city_limit() {
            None => Err(GraphError::EmptyGraph { id }),
            Some(limit) if id > limit => Err(GraphError::UnknownCity { id, limit }),
            Some(_) => Ok(()),
        }
    }

    /// Stores `road` in the arena and registers it with both endpoint cities.
    ///
    /// The set is left untouched when either endpoint is out of range.
    pub fn link(&mut self, road: Road) -> Result<RoadId> {
        self.check_city(road.from)?;
        self.check_city(road.to)?;

        let id = RoadId(self.roads.len());
        self.cities[road.from].outgoing.push(id);
        self.cities[road.to].incoming.push(id);
        self.roads.push(road);
        Ok(id)
    }

    pub fn outgoing(&self, id: CityId) -> impl Iterator<Item = &Road> + '_ {
        self.adjacent(id, |c| &c.outgoing)
    }

    pub fn incoming(&self, id: CityId) -> impl Iterator<Item = &Road> + '_ {
        self.adjacent(id, |c| &c.incoming)
    }

    fn adjacent<'a>(
        &'a self,
        id: CityId,
        pick: impl Fn(&'a City) -> &'a Vec<RoadId>,
    ) -> impl Iterator<Item = &'a Road> + 'a {
        self.cities
            .get(id)
            .map(pick)
            .into_iter()
            .flatten()
            .map(move |rid| &self.roads[rid.index()])
    }

    /// Cities reachable from `id` over one linked road. Parallel roads repeat the target.
    pub fn successors(&self, id: CityId) -> Vec<CityId> {
        self.outgoing(id).map(|r| r.to).collect()
    }

    /// Cities with a linked road into `id`. Parallel roads repeat the source.
    pub fn predecessors(&self, id: CityId) -> Vec<CityId> {
        self.incoming(id).map(|r| r.from).collect()
    }
}
