use serde::Deserialize;
use std::fmt;

// Text shown in the brewery log before any query and after every failure
pub const PLACEHOLDER_TEXT: &str = "Enter valid coordinates";

// Brewery ids come as numbers or as text ("home" for the start and end
// rows). Either is shown as sent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BreweryId {
    Int(i64),
    Text(String),
}

impl fmt::Display for BreweryId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreweryId::Int(i) => write!(formatter, "{}", i),
            BreweryId::Text(s) => write!(formatter, "{}", s),
        }
    }
}

// A stop on the itinerary as returned by the route service
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VisitRecord {
    pub id: BreweryId,
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl fmt::Display for VisitRecord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {} {:?} {:?}",
               self.id, self.name, self.lat, self.long)
    }
}

// Element of the `breweries` array. The service mixes plain strings with
// structured records in the same list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawBrewery {
    Visit(VisitRecord),
    Text(String),
}

/// Body of a successful `find-path` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FindPathResponse {
    pub beer: Vec<String>,
    pub breweries: Vec<RawBrewery>,
    pub distance: Vec<f64>,
}

impl FindPathResponse {
    pub fn from_slice(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }
}

/// One row of the brewery log.
///
/// A visit carries the distance found at its own index in the `distance`
/// array, or `None` when the service sent fewer distances than breweries.
#[derive(Clone, Debug, PartialEq)]
pub enum LogEntry {
    Placeholder(String),
    Visit(VisitRecord, Option<f64>),
}

impl LogEntry {
    pub fn is_visit(&self) -> bool {
        matches!(self, LogEntry::Visit(..))
    }
}

/// The snapshot the result panels are drawn from.
///
/// Only ever replaced as a whole: by `DisplayState::empty()` on start-up and
/// on failure, or by `From<FindPathResponse>` on success.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub beer_inventory: Vec<String>,
    pub brewery_log: Vec<LogEntry>,
    pub distances: Vec<f64>,
}

impl DisplayState {
    pub fn empty() -> Self {
        Self {
            beer_inventory: vec![],
            brewery_log: vec![LogEntry::Placeholder(
                PLACEHOLDER_TEXT.to_string())],
            distances: vec![],
        }
    }

    pub fn total_distance(&self) -> f64 {
        self.distances.iter().sum()
    }

    pub fn visits(&self) -> usize {
        self.brewery_log.iter().filter(|e| e.is_visit()).count()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        DisplayState::empty()
    }
}

impl From<FindPathResponse> for DisplayState {
    fn from(resp: FindPathResponse) -> Self {
        let brewery_log = resp.breweries.into_iter()
            .enumerate()
            .map(|(i, b)| match b {
                RawBrewery::Text(s) => LogEntry::Placeholder(s),
                RawBrewery::Visit(v) => {
                    LogEntry::Visit(v, resp.distance.get(i).copied())
                },
            })
            .collect();

        Self {
            beer_inventory: resp.beer,
            brewery_log: brewery_log,
            distances: resp.distance,
        }
    }
}
