//! Criterion benchmarks for the timetabling GA.
//!
//! Fitness evaluation is O(E²) per chromosome and dominates a run, so it is
//! measured on its own next to full searches and single generations.

use chrono::NaiveTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_timetable::ga::fitness::count_conflicts;
use u_timetable::ga::{evolve, Chromosome, GaConfig, GaRunner, Population};
use u_timetable::models::{Event, Room, SlotAxis};
use u_timetable::random::create_rng;
use u_timetable::ProblemInstance;

// ===========================================================================
// Problem generator: `rooms` open rooms over an 8-hour day
// ===========================================================================

fn problem(rooms: u32, events: usize) -> ProblemInstance {
    let axis = SlotAxis::hourly(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    )
    .unwrap();
    let rooms = (1..=rooms)
        .map(|id| Room::always_available(id, axis.len()))
        .collect();
    let names: Vec<String> = (1..=events).map(|i| format!("Event {i}")).collect();
    ProblemInstance::new(rooms, Event::from_names(&names), axis).unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &events in &[8usize, 50, 200] {
        let problem = problem(10, events);
        let mut rng = create_rng(42);
        let chr = Chromosome::random(&problem, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(events), &chr, |b, chr| {
            b.iter(|| black_box(count_conflicts(&problem, black_box(chr.genes()))))
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.sample_size(20);

    for &events in &[8usize, 50] {
        let problem = problem(5, events);
        let config = GaConfig::default();
        let mut rng = create_rng(42);
        let mut pop = Population::seed(config.population_size, &problem, &mut rng).unwrap();
        pop.sort_best_first();
        group.bench_with_input(BenchmarkId::from_parameter(events), &pop, |b, pop| {
            b.iter(|| {
                let mut next = evolve(black_box(pop), &config, &mut rng).unwrap();
                next.sort_best_first();
                black_box(next)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for (rooms, events) in [(3u32, 8usize), (4, 24), (6, 40)] {
        let problem = problem(rooms, events);
        let config = GaConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("r{rooms}_e{events}"), events),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run_seeded(black_box(&problem), black_box(config));
                    black_box(result.map(|r| r.best_conflicts))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_generation, bench_search);
criterion_main!(benches);
