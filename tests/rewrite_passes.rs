//! Passes that override a handful of rules and inherit the rest.

use sql_rebuilder::ir::error::UnsupportedNodeKind;
use sql_rebuilder::ir::rebuilder::combinators::seq;
use sql_rebuilder::ir::rebuilder::{Identity, Rebuilder};
use sql_rebuilder::ir::sql_node::*;
use sql_rebuilder::logging::init_logger;
use test_utils::ir::fixtures;
use tracing::debug;

fn rebuild<R: Rebuilder>(pass: &R, statement: Statement, ctx: &mut R::Context) -> Result<Statement, R::Error> {
    pass.process_statement(&statement, ctx)
}

/// `SELECT a + 1 FROM t WHERE a > 0` with both literals replaced.
fn select_with_literals(select_literal: i64, where_literal: i64) -> Statement {
    Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::column(Expression::arithmetic(
            ArithmeticOperator::Add,
            Expression::identifier("a"),
            Expression::long(select_literal),
        ))]),
        Some(Relation::table("t")),
        Some(Expression::comparison(
            ComparisonOperator::GreaterThan,
            Expression::identifier("a"),
            Expression::long(where_literal),
        )),
    ))
}

// ----------------------------------------------------------------------
// Integer literal shifting, globally and scoped to the select list
// ----------------------------------------------------------------------

/// Adds a constant to every integer literal.
struct ShiftIntegers(i64);

impl Rebuilder for ShiftIntegers {
    type Context = ();
    type Error = UnsupportedNodeKind;

    fn rebuild_long_literal(&self, _node: &Expression, value: i64, _ctx: &mut ()) -> Result<Expression, Self::Error> {
        Ok(Expression::long(value + self.0))
    }
}

/// Number of enclosing SELECT lists.
#[derive(Default)]
struct SelectDepth(usize);

/// Adds a constant to integer literals inside a select list only, tracking
/// the scope with the visit hooks.
struct ShiftSelectedIntegers(i64);

impl Rebuilder for ShiftSelectedIntegers {
    type Context = SelectDepth;
    type Error = UnsupportedNodeKind;

    fn pre_visit(&self, kind: NodeKind, ctx: &mut SelectDepth) -> Result<(), Self::Error> {
        if kind == NodeKind::Select {
            ctx.0 += 1;
        }
        Ok(())
    }

    fn post_visit(&self, kind: NodeKind, ctx: &mut SelectDepth) -> Result<(), Self::Error> {
        if kind == NodeKind::Select {
            ctx.0 -= 1;
        }
        Ok(())
    }

    fn rebuild_long_literal(
        &self,
        node: &Expression,
        value: i64,
        ctx: &mut SelectDepth,
    ) -> Result<Expression, Self::Error> {
        if ctx.0 > 0 { Ok(Expression::long(value + self.0)) } else { Ok(node.clone()) }
    }
}

/// Same effect as `ShiftSelectedIntegers`, but the select rule hands its
/// items a narrowed context instead of relying on hooks.
struct ShiftSelectedByContext(i64);

impl Rebuilder for ShiftSelectedByContext {
    type Context = bool;
    type Error = UnsupportedNodeKind;

    fn rebuild_select(&self, node: &Select, _ctx: &mut bool) -> Result<Select, Self::Error> {
        let mut in_select = true;
        Ok(Select {
            distinct: node.distinct,
            select_items: seq(&node.select_items, |item| self.process_select_item(item, &mut in_select))?,
            location: Location::none(),
        })
    }

    fn rebuild_long_literal(&self, node: &Expression, value: i64, ctx: &mut bool) -> Result<Expression, Self::Error> {
        if *ctx { Ok(Expression::long(value + self.0)) } else { Ok(node.clone()) }
    }
}

#[test]
fn test_shift_all_integer_literals() {
    let _ = init_logger(false, Some("warn"));
    let rebuilt = rebuild(&ShiftIntegers(100), fixtures::select_a_plus_one(), &mut ()).unwrap();
    assert_eq!(rebuilt, select_with_literals(101, 100));
}

#[test]
fn test_shift_scoped_by_hooks() {
    let mut ctx = SelectDepth::default();
    let rebuilt = rebuild(&ShiftSelectedIntegers(100), fixtures::select_a_plus_one(), &mut ctx).unwrap();
    assert_eq!(rebuilt, select_with_literals(101, 0));
    assert_eq!(ctx.0, 0, "hooks must leave the context balanced");
}

#[test]
fn test_shift_scoped_by_narrowed_context() {
    let mut ctx = false;
    let rebuilt = rebuild(&ShiftSelectedByContext(100), fixtures::select_a_plus_one(), &mut ctx).unwrap();
    assert_eq!(rebuilt, select_with_literals(101, 0));
    assert!(!ctx, "the outer context must not see the narrowed one");
}

// ----------------------------------------------------------------------
// Set operations
// ----------------------------------------------------------------------

/// Renames every table to `<name>_v2`.
struct VersionTables;

impl Rebuilder for VersionTables {
    type Context = ();
    type Error = UnsupportedNodeKind;

    fn rebuild_table(&self, _node: &Relation, name: &QualifiedName, _ctx: &mut ()) -> Result<Relation, Self::Error> {
        Ok(Relation::table(&format!("{}_v2", name)))
    }
}

#[test]
fn test_union_keeps_its_relation_list() {
    let rebuilt = rebuild(&VersionTables, fixtures::union_of_three(), &mut ()).unwrap();
    let expected = Statement::query(Relation::union(
        vec![
            fixtures::select_column("x", "t1_v2"),
            fixtures::select_column("x", "t2_v2"),
            fixtures::select_column("x", "t3_v2"),
        ],
        true,
    ));
    assert_eq!(rebuilt, expected);
}

#[test]
fn test_except_keeps_left_and_right() {
    let rebuilt = rebuild(&VersionTables, fixtures::except_of_two(), &mut ()).unwrap();
    let expected = Statement::query(Relation::except(
        fixtures::select_column("x", "t1_v2"),
        fixtures::select_column("x", "t2_v2"),
        true,
    ));
    assert_eq!(rebuilt, expected);
    // Operands are never swapped or flattened into a list.
    assert_ne!(
        rebuilt,
        Statement::query(Relation::except(
            fixtures::select_column("x", "t2_v2"),
            fixtures::select_column("x", "t1_v2"),
            true,
        ))
    );
}

// ----------------------------------------------------------------------
// Join criteria
// ----------------------------------------------------------------------

/// Negates ON conditions; USING and NATURAL joins pass through untouched.
struct NegateOnConditions;

impl Rebuilder for NegateOnConditions {
    type Context = ();
    type Error = UnsupportedNodeKind;

    fn rebuild_join_criteria(&self, node: &JoinCriteria, ctx: &mut ()) -> Result<JoinCriteria, Self::Error> {
        match node {
            JoinCriteria::On(condition) => Ok(JoinCriteria::On(Expression::not(self.process_expression(condition, ctx)?))),
            JoinCriteria::Using(columns) => Ok(JoinCriteria::Using(columns.clone())),
            JoinCriteria::Natural => Ok(JoinCriteria::Natural),
        }
    }
}

#[test]
fn test_join_criteria_shapes_survive_identity() {
    for criteria in [fixtures::on_criteria(), fixtures::using_criteria(), JoinCriteria::Natural] {
        let statement = fixtures::join_with(JoinType::Inner, Some(criteria));
        assert_eq!(rebuild(&Identity, statement.clone(), &mut ()).unwrap(), statement);
    }
}

#[test]
fn test_on_only_override() {
    let on_join = fixtures::join_with(JoinType::Inner, Some(fixtures::on_criteria()));
    let rebuilt = rebuild(&NegateOnConditions, on_join, &mut ()).unwrap();
    let negated = JoinCriteria::On(match fixtures::on_criteria() {
        JoinCriteria::On(condition) => Expression::not(condition),
        other => panic!("Expected ON criteria, got {:?}", other),
    });
    assert_eq!(rebuilt, fixtures::join_with(JoinType::Inner, Some(negated)));

    let using_join = fixtures::join_with(JoinType::Left, Some(fixtures::using_criteria()));
    assert_eq!(rebuild(&NegateOnConditions, using_join.clone(), &mut ()).unwrap(), using_join);

    let natural_join = fixtures::join_with(JoinType::Full, Some(JoinCriteria::Natural));
    assert_eq!(rebuild(&NegateOnConditions, natural_join.clone(), &mut ()).unwrap(), natural_join);

    let cross_join = fixtures::join_with(JoinType::Cross, None);
    assert_eq!(rebuild(&NegateOnConditions, cross_join.clone(), &mut ()).unwrap(), cross_join);
}

// ----------------------------------------------------------------------
// Catalog-qualified table names
// ----------------------------------------------------------------------

/// Drops the leading catalog part of three-part table names and notes
/// whether the statement contains boolean literals.
struct StripCatalog;

#[derive(Default)]
struct StripCatalogState {
    has_boolean_literals: bool,
}

impl Rebuilder for StripCatalog {
    type Context = StripCatalogState;
    type Error = UnsupportedNodeKind;

    fn rebuild_table(
        &self,
        node: &Relation,
        name: &QualifiedName,
        _ctx: &mut StripCatalogState,
    ) -> Result<Relation, Self::Error> {
        if name.parts.len() == 3 {
            debug!(table = %name, "stripping catalog");
            return Ok(Relation::Table { name: QualifiedName::of(name.parts[1..].to_vec()), location: Location::none() });
        }
        Ok(node.clone())
    }

    fn rebuild_show_columns(&self, table: &QualifiedName, _ctx: &mut StripCatalogState) -> Result<Statement, Self::Error> {
        let stripped = table.parts.iter().skip(1).cloned().collect::<Vec<_>>();
        Ok(Statement::ShowColumns { table: QualifiedName::of(stripped), location: Location::none() })
    }

    fn rebuild_boolean_literal(
        &self,
        node: &Expression,
        _value: bool,
        ctx: &mut StripCatalogState,
    ) -> Result<Expression, Self::Error> {
        ctx.has_boolean_literals = true;
        Ok(node.clone())
    }
}

#[test]
fn test_strip_catalog_from_table_names() {
    let mut state = StripCatalogState::default();
    let rebuilt = rebuild(&StripCatalog, fixtures::three_part_table_select(), &mut state).unwrap();
    let Statement::Query(query) = rebuilt else {
        panic!("Expected a query statement");
    };
    match &query.body {
        Relation::QuerySpecification { from: Some(from), select, .. } => {
            match from.as_ref() {
                Relation::Table { name, .. } => assert_eq!(name.parts, vec!["Sch", "Tab"]),
                other => panic!("Expected Table, got {:?}", other),
            }
            assert_eq!(
                select.select_items[1],
                SelectItem::column(Expression::Identifier { value: "B".into(), delimited: true, location: Location::none() })
            );
        }
        other => panic!("Expected QuerySpecification, got {:?}", other),
    }
    assert!(!state.has_boolean_literals);
}

#[test]
fn test_strip_catalog_from_show_columns_and_flag_booleans() {
    let mut state = StripCatalogState::default();
    let show = Statement::ShowColumns { table: QualifiedName::parse("lsst.Sch.Tab"), location: Location::at(1, 1) };
    let rebuilt = rebuild(&StripCatalog, show, &mut state).unwrap();
    assert_eq!(rebuilt, Statement::ShowColumns { table: QualifiedName::parse("Sch.Tab"), location: Location::none() });

    let with_boolean = Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::all()]),
        Some(Relation::table("t")),
        Some(Expression::boolean(true)),
    ));
    rebuild(&StripCatalog, with_boolean, &mut state).unwrap();
    assert!(state.has_boolean_literals);
}

// ----------------------------------------------------------------------
// GROUPING() columns
// ----------------------------------------------------------------------

/// Renames the table qualifier of `t.column` references to `u` and counts
/// how many it rewrote.
struct RequalifyColumns;

impl Rebuilder for RequalifyColumns {
    type Context = usize;
    type Error = UnsupportedNodeKind;

    fn rebuild_dereference(&self, base: &Expression, field: &Ident, ctx: &mut usize) -> Result<Expression, Self::Error> {
        *ctx += 1;
        let base = match base {
            Expression::Identifier { value, .. } if value == "t" => Expression::identifier("u"),
            other => self.process_expression(other, ctx)?,
        };
        Ok(Expression::Dereference { base: Box::new(base), field: field.clone(), location: Location::none() })
    }
}

fn grouping_query(qualifier: &str) -> Statement {
    let column = |name: &str| Expression::dereference(Expression::identifier(qualifier), name);
    Statement::query(Relation::QuerySpecification {
        select: Select::new(vec![
            SelectItem::column(column("ra")),
            SelectItem::column(Expression::GroupingOperation {
                columns: vec![column("ra"), column("decl")],
                location: Location::none(),
            }),
        ]),
        from: Some(Box::new(Relation::table("t"))),
        where_clause: None,
        group_by: Some(GroupBy {
            distinct: false,
            grouping_elements: vec![GroupingElement::Rollup {
                columns: vec![column("ra"), column("decl")],
                location: Location::none(),
            }],
            location: Location::none(),
        }),
        having: None,
        order_by: None,
        limit: None,
        location: Location::none(),
    })
}

#[test]
fn test_grouping_columns_follow_group_by_rewrites() {
    let mut rewritten = 0;
    let rebuilt = rebuild(&RequalifyColumns, grouping_query("t"), &mut rewritten).unwrap();
    assert_eq!(rebuilt, grouping_query("u"));
    // One in the select list, two in GROUPING(), two in the ROLLUP.
    assert_eq!(rewritten, 5);
}
