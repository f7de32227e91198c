use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shop_sim::customer::{Customer, CustomerKind};
use shop_sim::routing::{policy_for, RoutingContext};
use shop_sim::server::{Server, WaitingLines};

const SERVERS: usize = 16;
const ITERATIONS: usize = 1_000;

fn build_shop(count: usize) -> (Vec<Server>, WaitingLines) {
    let mut lines = WaitingLines::new(count);
    let mut next_id = 1;
    let servers = (1..=count)
        .map(|id| {
            let mut server = Server::human(id).set_busy();
            for _ in 0..(id % 4) {
                server = server.add_customer(Customer::new(next_id, 0.0), &mut lines);
                next_id += 1;
            }
            server
        })
        .collect::<Vec<_>>();
    (servers, lines)
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    let (servers, lines) = build_shop(SERVERS);
    let size_label = format!("{}x{}", ITERATIONS, SERVERS);

    for kind in [CustomerKind::Plain, CustomerKind::Greedy] {
        let label = format!("{:?}", kind).to_lowercase();
        group.bench_with_input(BenchmarkId::new(label, &size_label), &kind, |b, kind| {
            let policy = policy_for(*kind);
            b.iter(|| {
                for _ in 0..ITERATIONS {
                    let ctx = RoutingContext {
                        servers: &servers,
                        lines: &lines,
                        queue_max: 4,
                    };
                    black_box(policy.route(&ctx));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
