use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use stitch_html::{expand_str, parser, MemoryStore, Settings};

const PAGE: &str = "\
<!DOCTYPE html>
<html>
<head>
<title>Bench</title>
<meta charset=\"utf-8\">
</head>
<body>
<header>#[nav]</header>
<main>
<h1>Benchmark page</h1>
<p>Some text with a #[badge] in the middle.</p>
<ul>
<li>#[item]</li>
<li>#[item]</li>
<li>#[item]</li>
</ul>
</main>
<footer>#[footer]</footer>
</body>
</html>
";

fn component_store() -> MemoryStore {
    [
        ("nav", "<nav><a href=\"/\">home</a><a href=\"/about\">about</a></nav>"),
        ("badge", "<span class=\"badge\">new</span>"),
        ("item", "<article><h2>#[badge]</h2><p>entry</p></article>"),
        ("footer", "<p>fin</p>"),
    ]
    .into_iter()
    .collect()
}

fn expansion_benchmark(c: &mut Criterion) {
    let components = component_store();
    let settings = Settings::default();

    let mut group = c.benchmark_group("expansion");

    group.throughput(Throughput::Bytes(PAGE.len() as u64));

    group.bench_function("tokenize", |b| {
        b.iter(|| parser::tokenize(black_box(PAGE)));
    });

    group.bench_function("expand", |b| {
        b.iter(|| expand_str(black_box(PAGE), &components, &settings).unwrap());
    });

    group.finish();
}

criterion_group!(benches, expansion_benchmark);
criterion_main!(benches);
