use criterion::{black_box, criterion_group, criterion_main, Criterion};

use romanize_cyrillic::{romanize, Language, OutputMode};

fn bench_romanize(c: &mut Criterion) {
    let russian = "Съешь же ещё этих мягких французских булок, да выпей чаю. ".repeat(64);
    let ukrainian = "Згурський віз до Києва їжакевича через Борщагівку. ".repeat(64);

    c.bench_function("ru_diacritics", |b| {
        b.iter(|| romanize(black_box(&russian), Language::Ru, OutputMode::Diacritics))
    });
    c.bench_function("uk_ascii", |b| {
        b.iter(|| romanize(black_box(&ukrainian), Language::Uk, OutputMode::Ascii))
    });
    c.bench_function("mixed_script", |b| {
        b.iter(|| {
            romanize(
                black_box("DNS сервер перезапущен, status OK"),
                Language::Ru,
                OutputMode::Diacritics,
            )
        })
    });
}

criterion_group!(benches, bench_romanize);
criterion_main!(benches);
