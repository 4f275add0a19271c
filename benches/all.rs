use criterion::{black_box, criterion_group, criterion_main, Criterion};

use titleize::{title_case_word, titleize};

const TITLES: &[&str] = &[
    "tears for fears @ rule the world: the greatest hits",
    "anna von hausswolff - the truth, the glow, the fall",
    "bob marley & the wailers - no woman, no cry (live)",
    "danzig - satan (from satan's sadists)",
    "sepultura - r.i.p. (rest in pain)",
];

fn titleize_titles(c: &mut Criterion) {
    c.bench_function("titleize titles", |b| {
        b.iter(|| {
            for title in TITLES {
                black_box(titleize(black_box(title)));
            }
        })
    });
}

fn titleize_paragraph(c: &mut Criterion) {
    let paragraph = TITLES.join(" ").repeat(50);
    c.bench_function("titleize paragraph", |b| {
        b.iter(|| titleize(black_box(&paragraph)))
    });
}

fn title_case_words(c: &mut Criterion) {
    c.bench_function("title_case_word", |b| {
        b.iter(|| {
            black_box(title_case_word(black_box("göran's")));
            black_box(title_case_word(black_box("a.b.r.")));
            black_box(title_case_word(black_box("(live)")));
        })
    });
}

criterion_group!(benches, titleize_titles, titleize_paragraph, title_case_words);
criterion_main!(benches);
