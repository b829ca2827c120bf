//! Directed, weighted road entries.

use serde::Serialize;

use crate::CityId;

/// Index of a road inside a [`NodeSet`](crate::NodeSet) road arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoadId(pub usize);

impl RoadId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadClass {
    /// Linked into city adjacency as soon as it is accepted.
    #[default]
    Mandatory,
    /// Held aside for the shortest-path stage to splice in on demand.
    Optional,
}

impl RoadClass {
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
        }
    }
}

impl std::fmt::Display for RoadClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Road {
    pub from: CityId,
    pub to: CityId,
    pub length: u64,
    pub class: RoadClass,
}

impl Road {
    pub fn new(from: CityId, to: CityId, length: u64, class: RoadClass) -> Self {
        Self {
            from,
            to,
            length,
            class,
        }
    }

    pub fn mandatory(from: CityId, to: CityId, length: u64) -> Self {
        Self::new(from, to, length, RoadClass::Mandatory)
    }

    pub fn optional(from: CityId, to: CityId, length: u64) -> Self {
        Self::new(from, to, length, RoadClass::Optional)
    }

    pub fn is_optional(&self) -> bool {
        self.class.is_optional()
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
