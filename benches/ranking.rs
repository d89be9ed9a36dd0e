use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rankingrs::{canonicalize, count_ranking_entries, extract_rankings, RawBlock};

const COUNTRIES: [&str; 6] = [
    "Massachusetts | United States",
    "England | United Kingdom",
    "Ontario | Canada",
    "Tokyo | Japan",
    "Zurich | Switzerland",
    "Victoria | Australia",
];

const CITIES: [&str; 6] = ["Boston", "Oxford", "Toronto", "Tokyo", "Zurich", "Melbourne"];

fn text_dump(entries: usize) -> String {
    let mut text = String::from("BEST COLLEGES\nHome / Education / Best Global Universities\n");
    for i in 0..entries {
        text.push_str(&format!(
            "University Number {i}\n{}\n#{}\nin Best Global Universities\nGlobal Score\n{}.{}\nEnrollment\n{},{:03}\n",
            COUNTRIES[i % COUNTRIES.len()],
            i + 1,
            100 - (i % 60),
            i % 10,
            10 + i % 40,
            i % 1000,
        ));
    }
    text
}

fn markup(entries: usize) -> String {
    let mut html = String::from("<main><ul>");
    for i in 0..entries {
        html.push_str(&format!(
            r#"<li class="item-list__item"><h3><a href="/education/best-global-universities/u-{i}">University Number {i}</a></h3><p>{}</p><span>#{}</span><a href="/u-{i}#more">Read More</a></li>"#,
            CITIES[i % CITIES.len()],
            i + 1,
        ));
    }
    html.push_str("</ul></main>");
    html
}

fn bench_extract_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for entries in [10, 100, 500] {
        for (kind, source) in [("text", text_dump(entries)), ("markup", markup(entries))] {
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(BenchmarkId::new(kind, entries), &source, |b, source| {
                b.iter(|| {
                    let blocks = vec![RawBlock::new(0, std::hint::black_box(source.as_str()))];
                    std::hint::black_box(extract_rankings(blocks, None).unwrap())
                });
            });
        }
    }

    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let html = markup(500);
    let mut group = c.benchmark_group("probe");
    group.throughput(Throughput::Bytes(html.len() as u64));
    group.bench_function("count_500", |b| {
        b.iter(|| std::hint::black_box(count_ranking_entries(std::hint::black_box(&html), None)))
    });
    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let inputs = [
        "Cambridge (U.K.)",
        "Tokyo",
        "Boston, USA",
        "Lyon, France",
        "Unknown Town",
        "São Paulo - Brazil",
    ];
    c.bench_function("canonicalize", |b| {
        b.iter(|| {
            for input in inputs {
                std::hint::black_box(canonicalize(std::hint::black_box(input)));
            }
        })
    });
}

criterion_group!(benches, bench_extract_by_size, bench_probe, bench_canonicalize);
criterion_main!(benches);
