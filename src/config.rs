use crate::controller::ResolutionPolicy;
use crate::query::QueryInput;

use clap::{arg, ArgMatches};
use config::{*, ext::*};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Deserialize, Serialize, Debug)]
pub struct Config {
    pub base_url: String,
    pub headless: bool,
    pub escape_segments: bool,
    pub policy: String,
    pub command: String,
    pub latitude: String,
    pub longitude: String,
    pub runs: String,
}

lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

pub const CLAP_STYLING: clap::builder::styling::Styles =
    clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

fn command() -> clap::Command {
    clap::Command::new("beerpath")
        .bin_name("beerpath")
        .styles(CLAP_STYLING)
        .args([
            arg!(-u --url <URL> "Base url of the route service"),
            arg!(-H --headless "Don't open the window"),
            arg!(-e --escape "Percent-encode the query fields in the request path"),
            arg!(--policy <POLICY> "Which response wins when queries overlap")
                .value_parser(["last-resolved", "latest-issued"]),
        ])
        .subcommand_required(false)
        .subcommand(clap::command!("find-path")
                    .about("Run one query and print the result")
                    .args([
                        arg!(<LATITUDE> "Latitude"),
                        arg!(<LONGITUDE> "Longitude"),
                        arg!(<RUNS> "Number of runs"),
                    ]))
}

fn get_str<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(|s| s.as_str()).unwrap_or("")
}

impl Config {
    pub fn new() -> Self {
        Config::from_matches(&command().get_matches())
    }

    pub fn try_from_args<I, T>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)
            .map_err(|e| e.to_string())?;

        Ok(Config::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let base_url = matches.get_one::<String>("url")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_BASE_URL);
        let policy = matches.get_one::<String>("policy")
            .map(|s| s.as_str())
            .unwrap_or("last-resolved");
        let mut headless = matches.get_flag("headless");
        let escape = matches.get_flag("escape");

        let (mut command, mut latitude, mut longitude, mut runs) =
            ("", "", "", "");

        if let Some((cmd, sub)) = matches.subcommand() {
            command = cmd;
            latitude = get_str(sub, "LATITUDE");
            longitude = get_str(sub, "LONGITUDE");
            runs = get_str(sub, "RUNS");
            headless = true;
        }

        // Create config with default settings
        let config = DefaultConfigurationBuilder::new()
            .add_in_memory(&[
                ("base_url", base_url),
                ("headless", &headless.to_string()),
                ("escape_segments", &escape.to_string()),
                ("policy", policy),
                ("command", command),
                ("latitude", latitude),
                ("longitude", longitude),
                ("runs", runs),
            ])
            .build()
            .expect("in-memory configuration always builds");

        config.reify()
    }

    pub fn policy(&self) -> Result<ResolutionPolicy, String> {
        self.policy.parse()
    }

    // Query given on the command line
    pub fn query(&self) -> QueryInput {
        QueryInput::new(&self.latitude, &self.longitude, &self.runs)
    }
}
