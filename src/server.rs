use std::collections::VecDeque;
use std::fmt;

use crate::customer::Customer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ServerKind {
    Human,
    /// Self-check counters share one waiting line and never rest.
    SelfCheck,
}

/// Identity of a server as carried by an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServerRef {
    pub id: usize,
    pub kind: ServerKind,
}

impl ServerRef {
    pub fn index(&self) -> usize {
        self.id - 1
    }
}

impl fmt::Display for ServerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ServerKind::Human => write!(f, "server {}", self.id),
            ServerKind::SelfCheck => write!(f, "self-check {}", self.id),
        }
    }
}

/// Idle/resting state of one server. Transitions consume the value and
/// return the replacement; the waiting line itself lives in [`WaitingLines`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Server {
    id: usize,
    kind: ServerKind,
    idle: bool,
    resting: bool,
}

impl Server {
    pub fn human(id: usize) -> Self {
        Self {
            id,
            kind: ServerKind::Human,
            idle: true,
            resting: false,
        }
    }

    pub fn self_check(id: usize) -> Self {
        Self {
            id,
            kind: ServerKind::SelfCheck,
            idle: true,
            resting: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn index(&self) -> usize {
        self.id - 1
    }

    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    pub fn reference(&self) -> ServerRef {
        ServerRef {
            id: self.id,
            kind: self.kind,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn can_rest(&self) -> bool {
        self.kind == ServerKind::Human
    }

    pub fn shares_queue(&self) -> bool {
        self.kind == ServerKind::SelfCheck
    }

    #[must_use]
    pub fn set_busy(self) -> Self {
        Self { idle: false, ..self }
    }

    #[must_use]
    pub fn set_free(self) -> Self {
        Self { idle: true, ..self }
    }

    #[must_use]
    pub fn start_rest(self) -> Self {
        Self {
            resting: self.can_rest(),
            ..self
        }
    }

    #[must_use]
    pub fn stop_rest(self) -> Self {
        Self {
            resting: false,
            ..self
        }
    }

    /// Queues `customer` behind this server and marks the server busy.
    #[must_use]
    pub fn add_customer(self, customer: Customer, lines: &mut WaitingLines) -> Self {
        lines.push(&self, customer);
        self.set_busy()
    }

    /// Takes the earliest queued customer, if any, leaving the server state
    /// untouched.
    pub fn remove_head(&self, lines: &mut WaitingLines) -> Option<Customer> {
        lines.pop_front(self)
    }

    /// Idle, not resting and nobody queued: can take a customer right away.
    pub fn is_available(&self, lines: &WaitingLines) -> bool {
        self.idle && !self.resting && lines.is_empty(self)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reference(), f)
    }
}

/// FIFO waiting lines for every server: one private line per human server and
/// a single line shared by all self-check servers.
#[derive(Clone, Debug, Default)]
pub struct WaitingLines {
    private: Vec<VecDeque<Customer>>,
    shared: VecDeque<Customer>,
}

impl WaitingLines {
    pub fn new(servers: usize) -> Self {
        Self {
            private: vec![VecDeque::new(); servers],
            shared: VecDeque::new(),
        }
    }

    pub fn line(&self, server: &Server) -> &VecDeque<Customer> {
        if server.shares_queue() {
            &self.shared
        } else {
            &self.private[server.index()]
        }
    }

    fn line_mut(&mut self, server: &Server) -> &mut VecDeque<Customer> {
        if server.shares_queue() {
            &mut self.shared
        } else {
            &mut self.private[server.index()]
        }
    }

    pub fn len(&self, server: &Server) -> usize {
        self.line(server).len()
    }

    pub fn is_empty(&self, server: &Server) -> bool {
        self.line(server).is_empty()
    }

    pub fn is_full(&self, server: &Server, limit: usize) -> bool {
        self.len(server) >= limit
    }

    pub fn push(&mut self, server: &Server, customer: Customer) {
        self.line_mut(server).push_back(customer);
    }

    pub fn pop_front(&mut self, server: &Server) -> Option<Customer> {
        self.line_mut(server).pop_front()
    }
}
