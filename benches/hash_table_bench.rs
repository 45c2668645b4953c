use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use word_dict::{ContainerKind, HashTable};

const TABLE_SIZE: usize = 3877;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Lowercase words of 3..=8 letters, so prefixes collide like real text.
fn word(n: u64) -> String {
    let len = 3 + (n % 6) as usize;
    (0..len)
        .map(|i| char::from(b'a' + ((n >> (i * 5)) % 26) as u8))
        .collect()
}

fn kind_name(kind: ContainerKind) -> &'static str {
    match kind {
        ContainerKind::FlexArray => "flex_array",
        ContainerKind::RedBlackTree => "rbt",
    }
}

fn filled(kind: ContainerKind, words: &[String]) -> HashTable {
    let mut h = HashTable::new(TABLE_SIZE, kind).unwrap();
    for w in words {
        let _ = h.insert(w);
    }
    h
}

fn bench_fill(c: &mut Criterion) {
    let words: Vec<String> = lcg(1).take(20_000).map(word).collect();
    for kind in [ContainerKind::FlexArray, ContainerKind::RedBlackTree] {
        c.bench_function(&format!("fill_20k_{}", kind_name(kind)), |b| {
            b.iter_batched(
                || HashTable::new(TABLE_SIZE, kind).unwrap(),
                |mut h| {
                    for w in &words {
                        let _ = h.insert(w);
                    }
                    black_box(h)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_search_hit(c: &mut Criterion) {
    let words: Vec<String> = lcg(7).take(20_000).map(word).collect();
    for kind in [ContainerKind::FlexArray, ContainerKind::RedBlackTree] {
        let h = filled(kind, &words);
        let mut it = words.iter().cycle();
        c.bench_function(&format!("search_hit_{}", kind_name(kind)), |b| {
            b.iter(|| {
                let w = it.next().unwrap();
                black_box(h.search(w));
            })
        });
    }
}

fn bench_search_miss(c: &mut Criterion) {
    let words: Vec<String> = lcg(11).take(20_000).map(word).collect();
    for kind in [ContainerKind::FlexArray, ContainerKind::RedBlackTree] {
        let h = filled(kind, &words);
        let mut miss = lcg(0xdead_beef);
        c.bench_function(&format!("search_miss_{}", kind_name(kind)), |b| {
            b.iter(|| {
                // Longer than any stored word, so never present.
                let w = word(miss.next().unwrap()) + "zzzzzz";
                black_box(h.search(&w));
            })
        });
    }
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_fill, bench_search_hit, bench_search_miss
}
criterion_main!(benches);
