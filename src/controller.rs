use crate::channel::{ControllerMsg, ControllerReceiver, ControllerSender,
                     RequestToken, create_controller_channel};
use crate::query::QueryInput;
use crate::results::DisplayState;
use crate::service::RouteService;

use crossbeam_channel::RecvTimeoutError;
use log::{debug, trace};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Called from the runtime whenever a request resolves.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Pending,
}

/// Which response ends up on screen when requests overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolutionPolicy {
    // Every response replaces the state in the order they come back
    LastResolved,
    // Responses older than the newest one already shown are dropped
    LatestIssued,
}

impl FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-resolved" => Ok(ResolutionPolicy::LastResolved),
            "latest-issued" => Ok(ResolutionPolicy::LatestIssued),
            s => Err(format!("Invalid policy '{}'", s)),
        }
    }
}

/// Owns the display state and the requests that may replace it.
///
/// Requests run on the tokio runtime given at construction. Their outcomes
/// come back over a channel and are applied on the owner's thread by
/// `poll` or `wait`, one at a time, in the order they resolved.
pub struct QueryController {
    service: Arc<dyn RouteService>,
    runtime: Handle,
    tx: ControllerSender,
    rx: ControllerReceiver,
    state: DisplayState,
    policy: ResolutionPolicy,
    next_token: u64,
    in_flight: usize,
    newest_applied: Option<RequestToken>,
    notifier: Option<Notifier>,
}

impl QueryController {
    pub fn new(service: Arc<dyn RouteService>, runtime: Handle,
               policy: ResolutionPolicy) -> Self {
        let (tx, rx) = create_controller_channel();

        Self {
            service: service,
            runtime: runtime,
            tx: tx,
            rx: rx,
            state: DisplayState::empty(),
            policy: policy,
            next_token: 1,
            in_flight: 0,
            newest_applied: None,
            notifier: None,
        }
    }

    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier.replace(notifier);
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight == 0 {
            Phase::Idle
        }
        else {
            Phase::Pending
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sends one request for `input`. Does not wait, and does not care
    /// whether other requests are still out.
    pub fn submit(&mut self, input: &QueryInput) -> RequestToken {
        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.in_flight += 1;

        debug!("Query {} for {} ({} in flight)", token, input, self.in_flight);

        let service = self.service.clone();
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();
        let input = input.clone();

        self.runtime.spawn(async move {
            let outcome = service.find_path(&input).await;
            // The receiver lives as long as the controller
            let _ = tx.send(ControllerMsg::Resolved(token, outcome));

            if let Some(notify) = notifier {
                notify();
            }
        });

        token
    }

    /// Applies every outcome that has arrived so far. Returns the number of
    /// outcomes taken off the channel.
    pub fn poll(&mut self) -> usize {
        let mut n = 0;

        while let Ok(msg) = self.rx.try_recv() {
            self.apply(msg);
            n += 1;
        }

        n
    }

    /// Blocks until the next outcome arrives and applies it. Returns `None`
    /// right away when nothing is in flight, or when `timeout` runs out.
    pub fn wait(&mut self, timeout: Option<Duration>) -> Option<RequestToken> {
        if self.in_flight == 0 {
            return None;
        }

        let msg = match timeout {
            Some(t) => {
                match self.rx.recv_timeout(t) {
                    Ok(msg) => msg,
                    Err(RecvTimeoutError::Timeout) => {
                        return None;
                    },
                    Err(RecvTimeoutError::Disconnected) => {
                        return None;
                    },
                }
            },
            None => self.rx.recv().ok()?,
        };

        Some(self.apply(msg))
    }

    fn apply(&mut self, msg: ControllerMsg) -> RequestToken {
        let ControllerMsg::Resolved(token, outcome) = msg;
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == ResolutionPolicy::LatestIssued {
            if let Some(newest) = self.newest_applied {
                if token < newest {
                    debug!("Query {} resolved after {}, discarded",
                           token, newest);
                    return token;
                }
            }
        }

        self.newest_applied = self.newest_applied.max(Some(token));

        self.state = match outcome {
            Ok(response) => {
                debug!("Query {} resolved: ok", token);
                DisplayState::from(response)
            },
            Err(e) => {
                debug!("Query {} resolved: failed", token);
                trace!("Query {}: {}", token, e);
                DisplayState::empty()
            },
        };

        token
    }
}
