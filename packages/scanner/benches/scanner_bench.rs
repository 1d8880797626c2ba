use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordsmith_scanner::{scan_comments, scan_placeholders, LineIndex};

fn chapter(paragraphs: usize) -> String {
    let paragraph = r#"{hero} pushed open the door of {inn}. The keeper, {keeper}, looked up
from the ledger and frowned. "You're late," {keeper} said. // tighten this
{hero} shrugged and set {sword} on the counter. Outside, {weather} rolled in
over {city}, and somewhere a bell rang for the {hour} watch.

"#;
    paragraph.repeat(paragraphs)
}

fn scan_short_chapter(c: &mut Criterion) {
    let source = chapter(10);

    c.bench_function("scan_placeholders_short", |b| {
        b.iter(|| scan_placeholders(black_box(&source)))
    });
    c.bench_function("scan_comments_short", |b| {
        b.iter(|| scan_comments(black_box(&source)))
    });
}

fn scan_long_chapter(c: &mut Criterion) {
    let source = chapter(500);

    c.bench_function("scan_placeholders_long", |b| {
        b.iter(|| scan_placeholders(black_box(&source)))
    });
    c.bench_function("line_index_long", |b| {
        b.iter(|| LineIndex::new(black_box(&source)))
    });
}

criterion_group!(benches, scan_short_chapter, scan_long_chapter);
criterion_main!(benches);
