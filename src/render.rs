use crate::results::{DisplayState, LogEntry};

use std::fmt;

/// Rows of the brewery log that are not visits (leading and trailing
/// summary rows). They are subtracted from the log length in the header.
pub const SYNTHETIC_ROWS: usize = 2;

pub const DISTANCE_UNIT: &str = "km";

#[derive(Clone, Debug, PartialEq)]
pub struct BreweryPanel {
    pub header: String,
    pub lines: Vec<String>,
    pub footer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BeerPanel {
    pub header: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panels {
    pub breweries: BreweryPanel,
    pub beer: BeerPanel,
}

// Rounds half up, the way the browser's Math.round does
fn round_half_up(x: f64) -> f64 {
    let r = x.round();

    // f64::round takes negative ties away from zero
    if x < 0.0 && r - x == -0.5 {
        r + 1.0
    }
    else {
        r
    }
}

fn log_line(entry: &LogEntry) -> String {
    match entry {
        LogEntry::Placeholder(text) => text.clone(),
        LogEntry::Visit(record, Some(d)) => {
            format!("{} {:?} {}", record, d, DISTANCE_UNIT)
        },
        LogEntry::Visit(record, None) => {
            format!("{} - {}", record, DISTANCE_UNIT)
        },
    }
}

pub fn factories_visited(state: &DisplayState) -> usize {
    state.brewery_log.len().saturating_sub(SYNTHETIC_ROWS)
}

pub fn render_breweries(state: &DisplayState) -> BreweryPanel {
    BreweryPanel {
        header: format!("Visited {} beer factories", factories_visited(state)),
        lines: state.brewery_log.iter().map(log_line).collect(),
        footer: format!("Total distance traveled: {} {}",
                        round_half_up(state.total_distance()), DISTANCE_UNIT),
    }
}

pub fn render_beer(state: &DisplayState) -> BeerPanel {
    BeerPanel {
        header: format!("Collected {} beer types", state.beer_inventory.len()),
        lines: state.beer_inventory.clone(),
    }
}

/// Computes both result panels from a display state. Never fails and never
/// touches the state.
pub fn render(state: &DisplayState) -> Panels {
    Panels {
        breweries: render_breweries(state),
        beer: render_beer(state),
    }
}

impl fmt::Display for BreweryPanel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "{}", self.header)?;
        for l in &self.lines {
            writeln!(formatter, "{}", l)?;
        }
        write!(formatter, "{}", self.footer)
    }
}

impl fmt::Display for BeerPanel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.header)?;
        for l in &self.lines {
            write!(formatter, "\n{}", l)?;
        }
        Ok(())
    }
}

impl fmt::Display for Panels {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}\n\n{}", self.breweries, self.beer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{BreweryId, FindPathResponse, RawBrewery, VisitRecord,
                         PLACEHOLDER_TEXT};

    fn record(id: i64, name: &str, lat: f64, long: f64) -> RawBrewery {
        RawBrewery::Visit(VisitRecord {
            id: BreweryId::Int(id),
            name: name.to_string(),
            lat: lat,
            long: long,
        })
    }

    #[test]
    fn test_initial_panels() {
        let p = render(&DisplayState::empty());

        assert_eq!(p.breweries.header, "Visited 0 beer factories");
        assert_eq!(p.breweries.lines, vec![PLACEHOLDER_TEXT.to_string()]);
        assert_eq!(p.breweries.footer, "Total distance traveled: 0 km");
        assert_eq!(p.beer.header, "Collected 0 beer types");
        assert!(p.beer.lines.is_empty());
    }

    #[test]
    fn test_single_visit() {
        let state = DisplayState::from(FindPathResponse {
            beer: vec!["IPA".to_string(), "Stout".to_string()],
            breweries: vec![record(1, "A", 1.0, 2.0)],
            distance: vec![3.5],
        });
        let p = render(&state);

        assert_eq!(p.breweries.header, "Visited 0 beer factories");
        assert_eq!(p.breweries.lines, vec!["[1] A 1.0 2.0 3.5 km".to_string()]);
        assert_eq!(p.breweries.footer, "Total distance traveled: 4 km");
        assert_eq!(p.beer.header, "Collected 2 beer types");
        assert_eq!(p.beer.lines, vec!["IPA".to_string(), "Stout".to_string()]);
    }

    #[test]
    fn test_synthetic_rows_and_alignment() {
        let state = DisplayState::from(FindPathResponse {
            beer: vec![],
            breweries: vec![
                RawBrewery::Text("HOME".to_string()),
                record(3, "Zoo", 50.5, 4.25),
                record(9, "Bar", 51.0, 5.0),
                RawBrewery::Text("HOME".to_string()),
            ],
            distance: vec![0.0, 10.25, 20.0, 30.0],
        });
        let p = render(&state);

        assert_eq!(p.breweries.header, "Visited 2 beer factories");
        assert_eq!(p.breweries.lines, vec![
            "HOME".to_string(),
            "[3] Zoo 50.5 4.25 10.25 km".to_string(),
            "[9] Bar 51.0 5.0 20.0 km".to_string(),
            "HOME".to_string(),
        ]);
        assert_eq!(p.breweries.footer, "Total distance traveled: 60 km");
    }

    #[test]
    fn test_home_rows_from_route_service() {
        let body = br#"{
            "breweries": [
                {"name": "", "id": "home", "lat": 52.0, "long": 5.0},
                {"name": "Brouwerij", "id": "123", "lat": 51.2, "long": 4.4},
                {"name": "", "id": "home", "lat": 52.0, "long": 5.0}
            ],
            "beer": ["IPA"],
            "distance": [12.5, 30.0]
        }"#;
        let state = DisplayState::from(FindPathResponse::from_slice(body)
                                       .unwrap());
        let p = render(&state);

        assert_eq!(p.breweries.header, "Visited 1 beer factories");
        assert_eq!(p.breweries.lines, vec![
            "[home]  52.0 5.0 12.5 km".to_string(),
            "[123] Brouwerij 51.2 4.4 30.0 km".to_string(),
            "[home]  52.0 5.0 - km".to_string(),
        ]);
        assert_eq!(p.breweries.footer, "Total distance traveled: 43 km");
        assert_eq!(p.beer.lines, vec!["IPA".to_string()]);
    }

    #[test]
    fn test_visit_without_distance() {
        let state = DisplayState::from(FindPathResponse {
            beer: vec![],
            breweries: vec![record(1, "A", 1.0, 2.0), record(2, "B", 3.0, 4.0)],
            distance: vec![1.25],
        });
        let p = render(&state);

        assert_eq!(p.breweries.lines[0], "[1] A 1.0 2.0 1.25 km");
        assert_eq!(p.breweries.lines[1], "[2] B 3.0 4.0 - km");
    }

    #[test]
    fn test_beer_order_and_duplicates_preserved() {
        let state = DisplayState::from(FindPathResponse {
            beer: vec!["Stout".to_string(), "IPA".to_string(),
                       "Stout".to_string()],
            breweries: vec![],
            distance: vec![],
        });
        let p = render(&state);

        assert_eq!(p.beer.header, "Collected 3 beer types");
        assert_eq!(p.beer.lines, state.beer_inventory);
        assert_eq!(p.breweries.header, "Visited 0 beer factories");
        assert!(p.breweries.lines.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = DisplayState::from(FindPathResponse {
            beer: vec!["IPA".to_string()],
            breweries: vec![record(1, "A", 1.0, 2.0)],
            distance: vec![2.4],
        });
        let before = state.clone();

        assert_eq!(render(&state), render(&state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(4503599627370497.0), 4503599627370497.0);
    }

    #[test]
    fn test_panels_display() {
        let p = render(&DisplayState::empty());
        assert_eq!(p.to_string(),
                   "Visited 0 beer factories\n\
                    Enter valid coordinates\n\
                    Total distance traveled: 0 km\n\
                    \n\
                    Collected 0 beer types");
    }
}
