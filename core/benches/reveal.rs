use criterion::{Criterion, criterion_group, criterion_main};
use hexmines_core::{Area, Minefield, SizeClass, flood_fill_from};
use std::hint::black_box;

fn area_generation(c: &mut Criterion) {
    c.bench_function("generate_enormous_area", |b| {
        b.iter(|| Area::generate(black_box(SizeClass::Enormous.radius())))
    });
}

fn flood_fill(c: &mut Criterion) {
    let area = Area::generate(SizeClass::Enormous.radius());
    let minefield = Minefield::new();
    c.bench_function("flood_fill_mine_free_enormous", |b| {
        b.iter(|| flood_fill_from(black_box((0, 0)), &area, &minefield))
    });
}

criterion_group!(benches, area_generation, flood_fill);
criterion_main!(benches);
