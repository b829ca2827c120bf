/// Largest city count accepted unless overridden with [`ReaderOptions::with_max_cities`].
pub const DEFAULT_MAX_CITIES: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Reject self-loops and zero-length roads in addition to out-of-range endpoints.
    pub enforce_road_constraints: bool,
    /// Upper bound for the city count; larger answers are rejected and asked again.
    pub max_cities: usize,
}

impl ReaderOptions {
    /// Roads must join two distinct cities and have a positive length.
    pub fn strict() -> Self {
        Self {
            enforce_road_constraints: true,
            max_cities: DEFAULT_MAX_CITIES,
        }
    }

    /// Only endpoint ranges are checked; self-loops and zero lengths are accepted as typed.
    pub fn lenient() -> Self {
        Self {
            enforce_road_constraints: false,
            max_cities: DEFAULT_MAX_CITIES,
        }
    }

    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self::strict()
    }
}
