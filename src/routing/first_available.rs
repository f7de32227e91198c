use crate::routing::{find_available, Route, RoutingContext, RoutingPolicy};

#[derive(Default)]
pub struct FirstAvailablePolicy;

impl RoutingPolicy for FirstAvailablePolicy {
    fn route(&self, ctx: &RoutingContext) -> Route {
        if let Some(idx) = find_available(ctx) {
            return Route::Serve(idx);
        }

        ctx.servers
            .iter()
            .position(|server| !ctx.lines.is_full(server, ctx.queue_max))
            .map_or(Route::Leave, Route::Wait)
    }
}
