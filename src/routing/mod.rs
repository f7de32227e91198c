mod first_available;
mod shortest_queue;

use crate::customer::CustomerKind;
use crate::server::{Server, WaitingLines};

pub use first_available::FirstAvailablePolicy;
pub use shortest_queue::ShortestQueuePolicy;

pub trait RoutingPolicy {
    fn route(&self, ctx: &RoutingContext) -> Route;
}

pub struct RoutingContext<'a> {
    pub servers: &'a [Server],
    pub lines: &'a WaitingLines,
    pub queue_max: usize,
}

/// Where an arriving customer goes. Indices point into the server list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Serve(usize),
    Wait(usize),
    Leave,
}

pub fn policy_for(kind: CustomerKind) -> &'static dyn RoutingPolicy {
    match kind {
        CustomerKind::Plain => &FirstAvailablePolicy,
        CustomerKind::Greedy => &ShortestQueuePolicy,
    }
}

/// First server in list order that can serve right away.
pub(crate) fn find_available(ctx: &RoutingContext) -> Option<usize> {
    ctx.servers
        .iter()
        .position(|server| server.is_available(ctx.lines))
}
