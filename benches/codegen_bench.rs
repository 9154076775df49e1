//! Codegen Benchmark
//!
//! Measures `generate` throughput on synthetic render trees of growing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vgen::ir::{Fragment, HelperId, IRNode, Property, RootNode};
use vgen::{CodegenMode, CodegenOptions, generate};

// =============================================================================
// Synthetic Trees
// =============================================================================

/// One list item: `_createVNode("li", { key: i, class: ... }, [text, interpolation])`.
fn list_item(index: usize) -> Fragment {
    let props = IRNode::object(vec![
        Property::init("key", IRNode::simple(index.to_string(), false)),
        Property::init(
            "class",
            IRNode::conditional(
                IRNode::simple(format!("_ctx.active{index}"), false),
                IRNode::simple("active", true),
                IRNode::simple("idle", true),
            ),
        ),
    ]);
    let children = vec![
        Fragment::from(IRNode::call(
            HelperId::CREATE_TEXT,
            vec![IRNode::text(format!("item {index}: ")).into()],
        )),
        Fragment::from(IRNode::interpolation(format!("_ctx.items[{index}].label"))),
    ];
    IRNode::call(
        HelperId::CREATE_VNODE,
        vec!["\"li\"".into(), props.into(), children.into()],
    )
    .into()
}

fn build_root(items: usize) -> RootNode {
    let list: Vec<Fragment> = (0..items).map(list_item).collect();
    let body = IRNode::call(
        HelperId::CREATE_BLOCK,
        vec!["\"ul\"".into(), "null".into(), list.into()],
    );
    RootNode {
        helpers: vec![
            HelperId::OPEN_BLOCK,
            HelperId::CREATE_BLOCK,
            HelperId::CREATE_VNODE,
            HelperId::CREATE_TEXT,
            HelperId::TO_DISPLAY_STRING,
        ],
        components: vec!["Item".into()],
        ..RootNode::with_codegen(body)
    }
}

// =============================================================================
// Codegen Benchmarks
// =============================================================================

/// Benchmark: small tree in both modes
fn bench_generate_small(c: &mut Criterion) {
    let root = build_root(5);
    let function = CodegenOptions::function();
    let module = CodegenOptions::module();

    c.bench_function("generate_small_function", |b| {
        b.iter(|| black_box(generate(&root, &function).map(|result| result.code)))
    });
    c.bench_function("generate_small_module", |b| {
        b.iter(|| black_box(generate(&root, &module).map(|result| result.code)))
    });
}

/// Benchmark: generate throughput for various tree sizes
fn bench_generate_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen_throughput");
    let options = CodegenOptions {
        mode: CodegenMode::Module,
        prefix_identifiers: true,
        ..CodegenOptions::default()
    };

    for items in [10usize, 100, 1000] {
        let root = build_root(items);
        let bytes = generate(&root, &options)
            .map(|result| result.code.len() as u64)
            .unwrap_or_default();

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(BenchmarkId::new("generate", items), &root, |b, root| {
            b.iter(|| black_box(generate(root, &options).map(|result| result.code)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_small, bench_generate_throughput);
criterion_main!(benches);
