use std::cmp::Ordering;
use std::fmt;

use crate::customer::Customer;
use crate::server::ServerRef;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventState {
    Arrives,
    Served,
    Leaves,
    Done,
    Waits,
    ServerRest,
    ServerBack,
}

impl EventState {
    /// Rank used at equal timestamps: a higher rank is processed first.
    pub fn rank(self) -> u8 {
        match self {
            EventState::Arrives => 1,
            EventState::Served => 2,
            EventState::Leaves => 3,
            EventState::Done => 4,
            EventState::Waits => 5,
            EventState::ServerRest => 6,
            EventState::ServerBack => 7,
        }
    }

    pub fn is_bookkeeping(self) -> bool {
        matches!(self, EventState::ServerRest | EventState::ServerBack)
    }
}

/// A point on the timeline. Every transition returns a new event.
#[derive(Clone, Copy, Debug)]
pub struct Event {
    customer: Option<Customer>,
    time: f64,
    server: Option<ServerRef>,
    state: EventState,
}

impl Event {
    pub fn arrival(customer: Customer) -> Self {
        Self::at(customer, customer.arrival_time())
    }

    pub fn at(customer: Customer, time: f64) -> Self {
        Self {
            customer: Some(customer),
            time,
            server: None,
            state: EventState::Arrives,
        }
    }

    pub fn server_rests(server: ServerRef, time: f64) -> Self {
        Self {
            customer: None,
            time,
            server: Some(server),
            state: EventState::ServerRest,
        }
    }

    #[must_use]
    pub fn serve(self, server: ServerRef) -> Self {
        Self {
            server: Some(server),
            state: EventState::Served,
            ..self
        }
    }

    #[must_use]
    pub fn waits(self, server: ServerRef) -> Self {
        Self {
            server: Some(server),
            state: EventState::Waits,
            ..self
        }
    }

    #[must_use]
    pub fn leaves(self) -> Self {
        Self {
            server: None,
            state: EventState::Leaves,
            ..self
        }
    }

    #[must_use]
    pub fn done(self) -> Self {
        Self {
            state: EventState::Done,
            ..self
        }
    }

    #[must_use]
    pub fn server_back(self, rest: f64) -> Self {
        Self {
            time: self.time + rest,
            state: EventState::ServerBack,
            ..self
        }
    }

    #[must_use]
    pub fn add_time(self, delta: f64) -> Self {
        Self {
            time: self.time + delta,
            ..self
        }
    }

    pub fn customer(&self) -> Option<Customer> {
        self.customer
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn server(&self) -> Option<ServerRef> {
        self.server
    }

    pub fn server_index(&self) -> Option<usize> {
        self.server.map(|server| server.index())
    }

    pub fn state(&self) -> EventState {
        self.state
    }

    pub fn is_logged(&self) -> bool {
        !self.state.is_bookkeeping()
    }

    fn tiebreaker(&self) -> (usize, usize) {
        (
            self.customer.map_or(0, |customer| customer.id()),
            self.server.map_or(0, |server| server.id),
        )
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| other.state.rank().cmp(&self.state.rank()))
            .then_with(|| self.tiebreaker().cmp(&other.tiebreaker()))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Event {}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} ", self.time)?;
        match (self.customer, self.server) {
            (Some(customer), server) => {
                write!(f, "{}", customer)?;
                match (self.state, server) {
                    (EventState::Arrives, _) => write!(f, " arrives"),
                    (EventState::Leaves, _) => write!(f, " leaves"),
                    (EventState::Served, Some(server)) => write!(f, " served by {}", server),
                    (EventState::Waits, Some(server)) => {
                        write!(f, " waits to be served by {}", server)
                    }
                    (EventState::Done, Some(server)) => {
                        write!(f, " done serving by {}", server)
                    }
                    _ => Ok(()),
                }
            }
            (None, Some(server)) => match self.state {
                EventState::ServerRest => write!(f, "{} rests", server),
                EventState::ServerBack => write!(f, "{} returns", server),
                _ => write!(f, "{}", server),
            },
            (None, None) => Ok(()),
        }
    }
}
