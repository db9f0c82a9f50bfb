use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_anim_clock::{AnimInterface, Config, ManualClock, NoHooks};

fn bench_frame_query(c: &mut Criterion) {
    let clock = ManualClock::with_time(0.0);
    let anim = AnimInterface::with_parts(&Config::default(), Arc::new(clock.clone()), NoHooks);
    anim.set_num_frames(120);
    anim.pingpong(true);

    c.bench_function("frame_query_pingpong", |b| {
        b.iter(|| {
            clock.advance(1.0 / 60.0);
            black_box((anim.frame(), anim.next_frame(), anim.frac()))
        })
    });

    c.bench_function("set_play_rate_rebase", |b| {
        let mut rate = 1.0;
        b.iter(|| {
            rate = -rate;
            anim.set_play_rate(black_box(rate));
        })
    });
}

criterion_group!(benches, bench_frame_query);
criterion_main!(benches);
