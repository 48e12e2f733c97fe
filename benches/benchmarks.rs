//! Performance benchmarks for the hot editor paths:
//! - Input coercion
//! - Label resolution
//! - Collection updates

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use homecard::card_styles::{FieldEdit, StyleEdit, default_card_styles};
use homecard::coerce::{parse_int_lenient, parse_offset};
use homecard::labels::card_label;

fn bench_coercion(c: &mut Criterion) {
    c.bench_function("parse_int_lenient", |b| {
        b.iter(|| parse_int_lenient(black_box("  -1234.56px")))
    });

    c.bench_function("parse_offset", |b| b.iter(|| parse_offset(black_box("-40"))));
}

fn bench_labels(c: &mut Criterion) {
    c.bench_function("card_label_known", |b| {
        b.iter(|| card_label(black_box("calendarCard")))
    });

    c.bench_function("card_label_derived", |b| {
        b.iter(|| card_label(black_box("someCustomWeatherCard")))
    });
}

fn bench_apply(c: &mut Criterion) {
    let styles = default_card_styles().clone();
    let edit = StyleEdit {
        key: "clockCard".to_string(),
        edit: FieldEdit::OffsetX(Some(-40)),
    };

    c.bench_function("card_styles_apply", |b| {
        b.iter(|| {
            let mut styles = styles.clone();
            styles.apply(black_box(&edit));
            styles
        })
    });
}

criterion_group!(benches, bench_coercion, bench_labels, bench_apply);
criterion_main!(benches);
