use tracing::{debug, trace};

use crate::customer::Customer;
use crate::events::{Event, EventState};
use crate::routing::{policy_for, Route, RoutingContext};
use crate::server::{Server, WaitingLines};
use crate::source::StochasticSource;
use crate::stats::Statistics;
use crate::timeline::Timeline;

/// Receives every customer-facing event as it is popped off the timeline.
pub trait EventLog {
    fn record(&mut self, event: &Event);
}

impl EventLog for Vec<Event> {
    fn record(&mut self, event: &Event) {
        self.push(*event);
    }
}

/// Drops everything; used when only the statistics are wanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardLog;

impl EventLog for DiscardLog {
    fn record(&mut self, _event: &Event) {}
}

#[derive(Clone, Debug)]
pub struct Shop {
    servers: Vec<Server>,
    lines: WaitingLines,
    queue_max: usize,
    rest_prob: f64,
}

impl Shop {
    /// Human servers take ids `1..=humans`, self-check servers follow.
    pub fn new(humans: usize, self_checks: usize, queue_max: usize, rest_prob: f64) -> Self {
        let mut servers: Vec<Server> = (1..=humans).map(Server::human).collect();
        servers.extend((humans + 1..=humans + self_checks).map(Server::self_check));
        let lines = WaitingLines::new(servers.len());
        Self {
            servers,
            lines,
            queue_max,
            rest_prob,
        }
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn lines(&self) -> &WaitingLines {
        &self.lines
    }

    /// Builds the arrival timeline: per customer one type draw, then one gap
    /// draw that spaces out the next arrival.
    pub fn make_customers(
        count: usize,
        greedy_fraction: f64,
        source: &mut dyn StochasticSource,
    ) -> Timeline {
        let mut timeline = Timeline::new();
        let mut time = 0.0;
        for id in 1..=count {
            let customer = if source.customer_type() < greedy_fraction {
                Customer::greedy(id, time)
            } else {
                Customer::new(id, time)
            };
            timeline.offer(Event::arrival(customer));
            time += source.inter_arrival_gap();
        }
        timeline
    }

    pub fn simulate(
        &mut self,
        mut timeline: Timeline,
        source: &mut dyn StochasticSource,
        log: &mut dyn EventLog,
    ) -> Statistics {
        let mut statistics = Statistics::new(timeline.len());

        while let Some(event) = timeline.poll() {
            trace!(time = event.time(), state = ?event.state(), pending = timeline.len(), "event");
            if event.is_logged() {
                log.record(&event);
            }

            match (event.state(), event.customer(), event.server_index()) {
                (EventState::Arrives, Some(customer), _) => {
                    let next = self.dispatch_arrival(event, customer);
                    if next.state() == EventState::Served {
                        statistics = statistics.increment_served();
                    }
                    timeline.offer(next);
                }
                (EventState::Served, _, _) => {
                    let duration = source.service_duration();
                    timeline.offer(event.done().add_time(duration));
                }
                (EventState::Done, _, Some(idx)) => {
                    statistics =
                        self.complete_service(idx, event.time(), source, &mut timeline, statistics);
                }
                (EventState::ServerBack, _, Some(idx)) => {
                    self.servers[idx] = self.servers[idx].stop_rest();
                    debug!(server = idx + 1, time = event.time(), "server back from rest");
                    statistics = self.serve_next(idx, event.time(), &mut timeline, statistics);
                }
                _ => {}
            }
        }

        statistics
    }

    fn dispatch_arrival(&mut self, event: Event, customer: Customer) -> Event {
        let ctx = RoutingContext {
            servers: &self.servers,
            lines: &self.lines,
            queue_max: self.queue_max,
        };

        match policy_for(customer.kind()).route(&ctx) {
            Route::Serve(idx) => {
                let server = self.servers[idx].set_busy();
                self.servers[idx] = server;
                event.serve(server.reference())
            }
            Route::Wait(idx) => {
                let server = self.servers[idx].add_customer(customer, &mut self.lines);
                self.servers[idx] = server;
                event.waits(server.reference())
            }
            Route::Leave => event.leaves(),
        }
    }

    fn complete_service(
        &mut self,
        idx: usize,
        time: f64,
        source: &mut dyn StochasticSource,
        timeline: &mut Timeline,
        statistics: Statistics,
    ) -> Statistics {
        let server = self.servers[idx];

        if server.can_rest() && source.rest_decision() < self.rest_prob {
            let rest = source.rest_duration();
            debug!(server = server.id(), time, rest, "server starts resting");
            self.servers[idx] = server.start_rest();
            let rest_event = Event::server_rests(server.reference(), time);
            timeline.offer(rest_event);
            timeline.offer(rest_event.server_back(rest));
            return statistics;
        }

        self.serve_next(idx, time, timeline, statistics)
    }

    /// Frees the server, or hands it the head of its line at `time`.
    fn serve_next(
        &mut self,
        idx: usize,
        time: f64,
        timeline: &mut Timeline,
        statistics: Statistics,
    ) -> Statistics {
        let server = self.servers[idx];
        match server.remove_head(&mut self.lines) {
            None => {
                self.servers[idx] = server.set_free();
                statistics
            }
            Some(customer) => {
                let server = server.set_busy();
                self.servers[idx] = server;
                timeline.offer(Event::at(customer, time).serve(server.reference()));
                statistics
                    .increment_served()
                    .add_wait_time(time - customer.arrival_time())
            }
        }
    }
}
