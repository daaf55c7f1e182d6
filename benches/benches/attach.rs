// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_overlay` attachment and reads.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_overlay::{Defaults, DefaultsBuilder, Key, Node};

const VALUE: Key = Key::from_static("value");

fn slots(depth: usize) -> Vec<Key> {
    (0..depth)
        .map(|i| Key::new(format!("level{i}")).expect("non-empty name"))
        .collect()
}

/// Builds an unattached chain of `depth` children under a fresh root.
fn chain(slots: &[Key]) -> (Node, Node) {
    let root = Node::new_root(Defaults::empty());
    let leaf = slots
        .iter()
        .fold(root.clone(), |node, slot| node.child(slot, Defaults::empty()));
    (root, leaf)
}

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/attach");

    for depth in [1_usize, 4, 16, 64] {
        let keys = slots(depth);

        group.bench_function(BenchmarkId::new("first_write", depth), |b| {
            b.iter_batched(
                || chain(&keys),
                |(root, leaf)| {
                    leaf.set_value_and_attach(&VALUE, 1.0);
                    black_box(root)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("linked_write", depth), |b| {
            let (_root, leaf) = chain(&keys);
            leaf.set_value_and_attach(&VALUE, 0.0);
            let mut n = 0.0;
            b.iter(|| {
                n += 1.0;
                leaf.set_value_and_attach(&VALUE, black_box(n));
            });
        });

        group.bench_function(BenchmarkId::new("is_attached", depth), |b| {
            let (_root, leaf) = chain(&keys);
            leaf.attach();
            b.iter(|| black_box(leaf.is_attached()));
        });
    }

    group.finish();
}

fn bench_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/read");

    let defaults = DefaultsBuilder::new().set(VALUE, 12).build();
    let node = Node::new_root(defaults);

    group.bench_function("resolve_default", |b| {
        b.iter(|| black_box(node.resolve(&VALUE, 0.0)));
    });

    let stored = Node::new_root(Defaults::empty());
    stored.set_value(&VALUE, 16);
    group.bench_function("get_stored", |b| {
        b.iter(|| black_box(stored.get_number(&VALUE, 0.0)));
    });

    let (root, leaf) = chain(&slots(8));
    leaf.set_value_and_attach(&VALUE, "x");
    group.bench_function("to_json_string", |b| {
        b.iter(|| black_box(root.to_json_string().expect("shallow tree")));
    });

    group.finish();
}

criterion_group!(benches, bench_attach, bench_reads);
criterion_main!(benches);
