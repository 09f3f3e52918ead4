use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roster::construct::{Person, Roster, MAX_AGE};
use roster::query::filter;

fn grow(roster: &mut Roster, from: i64, to: i64) {
    for n in from..to {
        // ages cycle through the whole valid range
        let person = Person::new(format!("person-{}", n), n % (MAX_AGE + 1)).unwrap();
        roster.keep(person);
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut roster = Roster::new();
    c.bench_function("filter 0", |b| {
        b.iter(|| filter(black_box(roster.persons()), |p| p.age() >= 30))
    });
    grow(&mut roster, 0, 1000);
    c.bench_function("filter 1k", |b| {
        b.iter(|| filter(black_box(roster.persons()), |p| p.age() >= 30))
    });
    grow(&mut roster, 1000, 100000);
    c.bench_function("filter 100k", |b| {
        b.iter(|| filter(black_box(roster.persons()), |p| p.age() >= 30))
    });
    grow(&mut roster, 100000, 1000000);
    c.bench_function("filter 1M", |b| {
        b.iter(|| filter(black_box(roster.persons()), |p| p.age() >= 30))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
