use crate::error::QueryFailed;
use crate::results::FindPathResponse;

use crossbeam_channel::{Sender, Receiver, unbounded};
use std::fmt;

/// Issue number of a request. Strictly increasing per controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

#[derive(Debug)]
pub enum ControllerMsg {
    Resolved(RequestToken, Result<FindPathResponse, QueryFailed>),
}

pub type ControllerSender = Sender<ControllerMsg>;
pub type ControllerReceiver = Receiver<ControllerMsg>;

pub fn create_controller_channel() -> (ControllerSender, ControllerReceiver) {
    unbounded()
}
