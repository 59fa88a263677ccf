//! Multi-pass rewriting through the pipeline, including a pass that keeps an
//! ancestor stack in its context.

use sql_rebuilder::ir::error::UnsupportedNodeKind;
use sql_rebuilder::ir::pipeline::{Pipeline, Transform};
use sql_rebuilder::ir::rebuilder::Rebuilder;
use sql_rebuilder::ir::rebuilder::combinators::{opt, seq};
use sql_rebuilder::ir::sql_node::*;
use sql_rebuilder::logging::init_logger;
use test_utils::ir::fixtures;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
enum SpatialError {
    #[error("wrong number of arguments to function {function}")]
    Arity { function: String },
    #[error("wrong first argument to function CONTAINS: not a POINT")]
    NotAPoint,
    #[error("wrong second argument to function CONTAINS: not a shape")]
    NotAShape,
    #[error("CONTAINS is only allowed inside a predicate")]
    OutsidePredicate,
    #[error(transparent)]
    Unsupported(#[from] UnsupportedNodeKind),
}

/// Translates `CONTAINS(POINT(ra, dec), CIRCLE(...))` into the scisql UDF call.
///
/// The context is the stack of node kinds being rebuilt, maintained by the
/// visit hooks, so the rule can check where the call appears.
struct SpatialRewriter;

impl SpatialRewriter {
    fn contains(&self, arguments: Vec<Expression>, ancestors: &[NodeKind]) -> Result<Expression, SpatialError> {
        // The stack ends with the call itself; its parent must be a predicate.
        let parent = ancestors.iter().rev().nth(1);
        if !matches!(parent, Some(NodeKind::Comparison) | Some(NodeKind::LogicalBinary) | Some(NodeKind::QuerySpecification)) {
            return Err(SpatialError::OutsidePredicate);
        }
        let [point, shape]: [Expression; 2] = arguments
            .try_into()
            .map_err(|_| SpatialError::Arity { function: "CONTAINS".into() })?;
        let point_args = match point {
            Expression::FunctionCall { name, arguments, .. } if name.suffix().eq_ignore_ascii_case("point") => arguments,
            _ => return Err(SpatialError::NotAPoint),
        };
        let (function, shape_args) = match shape {
            Expression::FunctionCall { name, arguments, .. } if name.suffix().eq_ignore_ascii_case("circle") => {
                ("scisql_s2PtInCircle", arguments)
            }
            Expression::FunctionCall { name, arguments, .. } if name.suffix().eq_ignore_ascii_case("polygon") => {
                if arguments.len() < 6 || arguments.len() % 2 == 1 {
                    return Err(SpatialError::Arity { function: "POLYGON".into() });
                }
                ("scisql_s2PtInCPoly", arguments)
            }
            _ => return Err(SpatialError::NotAShape),
        };
        debug!(function, "rewriting CONTAINS");
        Ok(Expression::function(function, point_args.into_iter().chain(shape_args).collect()))
    }
}

impl Rebuilder for SpatialRewriter {
    type Context = Vec<NodeKind>;
    type Error = SpatialError;

    fn pre_visit(&self, kind: NodeKind, ctx: &mut Vec<NodeKind>) -> Result<(), SpatialError> {
        ctx.push(kind);
        Ok(())
    }

    fn post_visit(&self, _kind: NodeKind, ctx: &mut Vec<NodeKind>) -> Result<(), SpatialError> {
        ctx.pop();
        Ok(())
    }

    fn rebuild_function_call(
        &self,
        name: &QualifiedName,
        window: Option<&Window>,
        filter: Option<&Expression>,
        order_by: Option<&OrderBy>,
        distinct: bool,
        arguments: &[Expression],
        ctx: &mut Vec<NodeKind>,
    ) -> Result<Expression, SpatialError> {
        let arguments = seq(arguments, |e| self.process_expression(e, ctx))?;
        if name.suffix().eq_ignore_ascii_case("contains") {
            return self.contains(arguments, ctx);
        }
        Ok(Expression::FunctionCall {
            name: name.clone(),
            window: opt(window, |w| self.process_window(w, ctx))?,
            filter: opt(filter, |e| self.process_expression(e, ctx))?.map(Box::new),
            order_by: opt(order_by, |o| self.process_order_by(o, ctx))?,
            distinct,
            arguments,
            location: Location::none(),
        })
    }
}

/// Renames every table to lower case.
struct LowercaseTables;

impl Rebuilder for LowercaseTables {
    type Context = ();
    type Error = UnsupportedNodeKind;

    fn rebuild_table(&self, _node: &Relation, name: &QualifiedName, _ctx: &mut ()) -> Result<Relation, Self::Error> {
        Ok(Relation::Table {
            name: QualifiedName::of(name.parts.iter().map(|p| p.to_lowercase()).collect::<Vec<_>>()),
            location: Location::none(),
        })
    }
}

fn expected_circle_query() -> Statement {
    let call = Expression::function(
        "scisql_s2PtInCircle",
        vec![
            Expression::dereference(Expression::identifier("o"), "ra"),
            Expression::dereference(Expression::identifier("o"), "decl"),
            Expression::long(1),
            Expression::long(2),
            Expression::long(3),
        ],
    );
    Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::all()]),
        Some(Relation::aliased(Relation::table("object"), "o")),
        Some(Expression::comparison(ComparisonOperator::Equal, Expression::long(1), call)),
    ))
}

#[test]
fn test_contains_rewritten_inside_predicate() {
    let _ = init_logger(false, Some("warn"));
    let mut ancestors = Vec::new();
    let rebuilt = SpatialRewriter.process_statement(&fixtures::contains_point_in_circle(), &mut ancestors).unwrap();
    assert!(ancestors.is_empty());
    let expected = match expected_circle_query() {
        // This pass leaves table names alone.
        Statement::Query(mut query) => {
            if let Relation::QuerySpecification { from: Some(from), .. } = &mut query.body {
                **from = Relation::aliased(Relation::table("Object"), "o");
            }
            Statement::Query(query)
        }
        other => other,
    };
    assert_eq!(rebuilt, expected);
}

#[test]
fn test_contains_outside_predicate_is_rejected() {
    let point = Expression::function("POINT", vec![Expression::long(1), Expression::long(2)]);
    let circle = Expression::function("CIRCLE", vec![Expression::long(1), Expression::long(2), Expression::long(3)]);
    let statement = Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::column(Expression::function("CONTAINS", vec![point, circle]))]),
        None,
        None,
    ));
    let err = SpatialRewriter.process_statement(&statement, &mut Vec::new()).unwrap_err();
    assert_eq!(err, SpatialError::OutsidePredicate);
}

#[test]
fn test_pipeline_runs_passes_in_dependency_order() {
    let mut pipeline = Pipeline::new();
    pipeline.add_transform(Transform::new("lowercase_tables", LowercaseTables)).unwrap();
    pipeline.add_transform(Transform::new("spatial", SpatialRewriter).after("lowercase_tables")).unwrap();
    assert_eq!(pipeline.order().unwrap(), vec!["lowercase_tables", "spatial"]);

    let rebuilt = pipeline.apply(&Node::from(fixtures::contains_point_in_circle())).unwrap();
    assert_eq!(rebuilt, Node::from(expected_circle_query()));
}

#[test]
fn test_pipeline_surfaces_pass_error_type() {
    let mut pipeline = Pipeline::new();
    pipeline.add_transform(Transform::new("spatial", SpatialRewriter)).unwrap();

    let bad = Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::all()]),
        Some(Relation::table("Object")),
        Some(Expression::comparison(
            ComparisonOperator::Equal,
            Expression::long(1),
            Expression::function("CONTAINS", vec![Expression::long(1), Expression::long(2)]),
        )),
    ));
    let err = pipeline.apply(&Node::from(bad)).unwrap_err();
    assert_eq!(err.downcast_ref::<SpatialError>(), Some(&SpatialError::NotAPoint));
}
