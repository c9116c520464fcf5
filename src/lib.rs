mod app;
mod canvas;
mod channel;
mod config;
mod controller;
mod error;
mod query;
mod render;
mod results;
mod service;

pub use crate::app::{App, run_headless};
pub use crate::canvas::init_with_canvas;
pub use crate::channel::RequestToken;
pub use crate::config::{CONFIG, Config};
pub use crate::controller::{Notifier, Phase, QueryController,
                            ResolutionPolicy};
pub use crate::error::QueryFailed;
pub use crate::query::QueryInput;
pub use crate::render::{render, BeerPanel, BreweryPanel, Panels,
                        SYNTHETIC_ROWS};
pub use crate::results::{BreweryId, DisplayState, FindPathResponse, LogEntry,
                         RawBrewery, VisitRecord, PLACEHOLDER_TEXT};
pub use crate::service::{HttpRouteService, RouteService};
