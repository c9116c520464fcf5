use crate::channel::RequestToken;
use crate::config::Config;
use crate::controller::{Notifier, Phase, QueryController, ResolutionPolicy};
use crate::query::QueryInput;
use crate::render::{render, Panels};
use crate::results::DisplayState;
use crate::service::{HttpRouteService, RouteService};

use log::info;
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};

/// The query form and the controller behind it. Shared by the window and
/// the headless command.
pub struct App {
    controller: QueryController,
    input: QueryInput,
}

impl App {
    pub fn new(service: Arc<dyn RouteService>, runtime: Handle,
               policy: ResolutionPolicy) -> Self {
        Self {
            controller: QueryController::new(service, runtime, policy),
            input: QueryInput::default(),
        }
    }

    pub fn from_config(config: &Config, runtime: Handle)
                       -> Result<Self, String> {
        let policy = config.policy()?;
        let service = HttpRouteService::new(&config.base_url,
                                            config.escape_segments);

        info!("Route service at {} ({:?}, escape segments: {})",
              service.base_url(), policy, config.escape_segments);

        Ok(App::new(Arc::new(service), runtime, policy))
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.controller.set_notifier(notifier);
    }

    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut QueryInput {
        &mut self.input
    }

    pub fn state(&self) -> &DisplayState {
        self.controller.state()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    // Submit whatever is in the input fields right now
    pub fn find_path(&mut self) -> RequestToken {
        self.controller.submit(&self.input)
    }

    // Take in finished requests. True if the state was replaced.
    pub fn update(&mut self) -> bool {
        self.controller.poll() > 0
    }

    pub fn panels(&self) -> Panels {
        render(self.controller.state())
    }

    /// Submits the current input and blocks until every request has
    /// resolved. There is no timeout.
    pub fn compute(&mut self) -> Panels {
        self.find_path();

        while self.controller.wait(None).is_some() {}

        self.panels()
    }
}

pub fn run_headless(config: &Config) -> Result<(), String> {
    match config.command.as_str() {
        "find-path" => {
            let rt = Runtime::new().map_err(|e| e.to_string())?;
            let mut app = App::from_config(config, rt.handle().clone())?;

            *app.input_mut() = config.query();
            println!("{}", app.compute());
        },
        "" => {
            println!("Nothing to do (try 'find-path <LATITUDE> <LONGITUDE> <RUNS>')");
        },
        _ => {
            println!("Invalid command");
        },
    }

    Ok(())
}
