//! Benchmarks for tree rebuilding
//!
//! Measures performance of:
//! - Identity rebuilds of small, medium and deep trees
//! - A single-rule pass against the identity baseline
//! - Multi-pass pipelines

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use sql_rebuilder::ir::error::UnsupportedNodeKind;
use sql_rebuilder::ir::pipeline::{Pipeline, Transform};
use sql_rebuilder::ir::rebuilder::{Identity, Rebuilder};
use sql_rebuilder::ir::sql_node::*;
use test_utils::ir::fixtures;

struct ShiftIntegers;

impl Rebuilder for ShiftIntegers {
    type Context = ();
    type Error = UnsupportedNodeKind;

    fn rebuild_long_literal(&self, _node: &Expression, value: i64, _ctx: &mut ()) -> Result<Expression, Self::Error> {
        Ok(Expression::long(value + 1))
    }
}

/// `1 + (1 + (1 + ...))`, `depth` levels deep.
fn nested_arithmetic(depth: usize) -> Node {
    let mut expression = Expression::long(1);
    for _ in 0..depth {
        expression = Expression::arithmetic(ArithmeticOperator::Add, Expression::long(1), expression);
    }
    Node::from(expression)
}

/// A UNION of `width` copies of the kitchen-sink query body.
fn wide_union(width: usize) -> Node {
    let body = match fixtures::kitchen_sink() {
        Statement::Query(query) => query.body,
        other => panic!("Expected a query statement, got {:?}", other),
    };
    Node::from(Statement::query(Relation::union(vec![body; width], false)))
}

// ============================================================================
// Benchmark: Identity Rebuilds
// ============================================================================

fn bench_identity_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity_rebuild");

    let small = Node::from(fixtures::select_a_plus_one());
    let medium = Node::from(fixtures::kitchen_sink());

    group.bench_function("small", |b| b.iter(|| black_box(Identity.rebuild(&small, &mut ()))));
    group.bench_function("medium", |b| b.iter(|| black_box(Identity.rebuild(&medium, &mut ()))));

    for width in [4, 16, 64] {
        let tree = wide_union(width);
        group.bench_with_input(BenchmarkId::new("wide_union", width), &tree, |b, tree| {
            b.iter(|| black_box(Identity.rebuild(tree, &mut ())))
        });
    }

    for depth in [10, 100, 1000] {
        let tree = nested_arithmetic(depth);
        group.bench_with_input(BenchmarkId::new("deep_arithmetic", depth), &tree, |b, tree| {
            b.iter(|| black_box(Identity.rebuild(tree, &mut ())))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Overriding Passes
// ============================================================================

fn bench_overriding_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("overriding_pass");

    let tree = wide_union(16);
    group.bench_function("identity", |b| b.iter(|| black_box(Identity.rebuild(&tree, &mut ()))));
    group.bench_function("shift_integers", |b| b.iter(|| black_box(ShiftIntegers.rebuild(&tree, &mut ()))));

    group.finish();
}

// ============================================================================
// Benchmark: Pipeline
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let tree = wide_union(16);
    for passes in [1, 4] {
        let mut pipeline = Pipeline::new();
        for i in 0..passes {
            let transform = Transform::new(format!("shift_{}", i), ShiftIntegers);
            let transform = if i > 0 { transform.after(format!("shift_{}", i - 1)) } else { transform };
            pipeline.add_transform(transform).unwrap();
        }
        group.bench_with_input(BenchmarkId::new("shift_passes", passes), &tree, |b, tree| {
            b.iter(|| black_box(pipeline.apply(tree).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2));
    targets =
        bench_identity_rebuild,
        bench_overriding_pass,
        bench_pipeline
}

criterion_main!(benches);
