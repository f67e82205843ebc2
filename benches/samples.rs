// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use larissa::model::Graph;
use larissa::samples::{family_tree, simple_graph, simple_interactive_graph, state_machine};

// Benchmark identity (keep stable):
// - Group name in this file: `samples.build`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `simple`, `family_tree`).
fn benches_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("samples.build");

    let cases: [(&str, fn() -> Graph); 4] = [
        ("simple", simple_graph),
        ("simple_interactive", simple_interactive_graph),
        ("family_tree", family_tree),
        ("state_machine", state_machine),
    ];

    for (case_id, builder) in cases {
        let nodes = builder().nodes().len() as u64;
        group.throughput(Throughput::Elements(nodes));
        group.bench_function(case_id, move |b| {
            b.iter(|| {
                let graph = black_box(builder)();
                black_box(graph.nodes().len() + graph.edges().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benches_samples);
criterion_main!(benches);
