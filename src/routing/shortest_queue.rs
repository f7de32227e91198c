use crate::routing::{find_available, Route, RoutingContext, RoutingPolicy};

#[derive(Default)]
pub struct ShortestQueuePolicy;

impl RoutingPolicy for ShortestQueuePolicy {
    fn route(&self, ctx: &RoutingContext) -> Route {
        if let Some(idx) = find_available(ctx) {
            return Route::Serve(idx);
        }

        let mut shortest: Option<(usize, usize)> = None;
        for (idx, server) in ctx.servers.iter().enumerate() {
            let len = ctx.lines.len(server);
            if shortest.map_or(true, |(_, min_len)| len < min_len) {
                shortest = Some((idx, len));
            }
        }

        match shortest {
            Some((idx, len)) if len < ctx.queue_max => Route::Wait(idx),
            _ => Route::Leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Customer;
    use crate::routing::testing::busy_with_queues;
    use crate::server::{Server, WaitingLines};

    #[test]
    fn prefers_idle_server_over_empty_queue() {
        let mut servers = vec![Server::human(1).set_busy(), Server::human(2)];
        let lines = WaitingLines::new(servers.len());
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 3,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Serve(1));

        servers[1] = servers[1].set_busy();
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 3,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Wait(0));
    }

    #[test]
    fn picks_globally_shortest_queue() {
        let (servers, lines) = busy_with_queues(&[2, 1, 3, 0, 1]);
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 4,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Wait(3));
    }

    #[test]
    fn ties_resolve_to_first_in_list() {
        let (servers, lines) = busy_with_queues(&[2, 1, 1]);
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 3,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Wait(1));
    }

    #[test]
    fn leaves_when_shortest_queue_is_full() {
        let (servers, lines) = busy_with_queues(&[2, 1, 1]);
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 1,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Leave);
    }

    #[test]
    fn self_check_length_is_the_shared_line() {
        let mut lines = WaitingLines::new(3);
        let human = Server::human(1)
            .set_busy()
            .add_customer(Customer::new(1, 0.0), &mut lines)
            .add_customer(Customer::new(2, 0.0), &mut lines);
        let counter_a = Server::self_check(2)
            .set_busy()
            .add_customer(Customer::new(3, 0.0), &mut lines);
        let counter_b = Server::self_check(3).set_busy();
        let servers = vec![human, counter_a, counter_b];
        let ctx = RoutingContext {
            servers: &servers,
            lines: &lines,
            queue_max: 3,
        };
        assert_eq!(ShortestQueuePolicy.route(&ctx), Route::Wait(1));
    }
}
