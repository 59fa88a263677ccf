//! Random SQL trees for property-based testing.
//!
//! `SqlTree` produces statements (and occasionally bare queries, relations or
//! expressions) covering every node kind that has a default reconstruction
//! rule. Kinds without one are produced separately by `UnsupportedStatement`
//! so properties over `SqlTree` can expect rebuilding to succeed.
//!
//! Generation functions take a depth and stop nesting at zero, which keeps
//! trees small enough for quick shrinking-free runs.

use quickcheck::{Arbitrary, Gen};
use sql_rebuilder::ir::sql_node::*;

/// Maximum recursion depth for generation.
const MAX_DEPTH: usize = 4;

const NAMES: &[&str] = &["a", "b", "ra", "decl", "obj_id", "flux", "t", "Object", "Source"];

/// A random tree that the default rules rebuild without error.
#[derive(Clone, Debug)]
pub struct SqlTree(pub Node);

/// A random statement of a kind that has no default rule.
#[derive(Clone, Debug)]
pub struct UnsupportedStatement(pub Statement);

impl Arbitrary for SqlTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(MAX_DEPTH);
        let node = match gen_range(g, 0, 9) {
            0 => Node::Expression(gen_expr(g, depth)),
            1 => Node::Relation(gen_relation(g, depth)),
            2 => Node::Query(gen_query(g, depth)),
            _ => Node::Statement(gen_statement(g, depth)),
        };
        SqlTree(node)
    }
}

impl Arbitrary for UnsupportedStatement {
    fn arbitrary(g: &mut Gen) -> Self {
        UnsupportedStatement(gen_unsupported_statement(g))
    }
}

/// Generates a random number in the range [min, max] inclusive.
fn gen_range(g: &mut Gen, min: u32, max: u32) -> u32 {
    min + (u32::arbitrary(g) % (max - min + 1))
}

fn pick<T: Copy>(g: &mut Gen, choices: &[T]) -> T {
    *g.choose(choices).unwrap()
}

fn gen_name(g: &mut Gen) -> String {
    pick(g, NAMES).to_string()
}

fn gen_ident(g: &mut Gen) -> Ident {
    Ident { value: gen_name(g), delimited: gen_range(g, 0, 4) == 0 }
}

fn gen_idents(g: &mut Gen) -> Vec<Ident> {
    (0..gen_range(g, 1, 3)).map(|_| gen_ident(g)).collect()
}

fn gen_qualified_name(g: &mut Gen) -> QualifiedName {
    QualifiedName::of((0..gen_range(g, 1, 3)).map(|_| gen_name(g)).collect::<Vec<_>>())
}

/// Half of all nodes carry a source position, as if parsed.
fn gen_location(g: &mut Gen) -> Location {
    if bool::arbitrary(g) {
        Location::at(gen_range(g, 1, 40) as usize, gen_range(g, 1, 120) as usize)
    } else {
        Location::none()
    }
}

fn gen_text(g: &mut Gen) -> String {
    pick(g, &["", "x", "2024-01-01", "12:00:00", "1.5", "it''s"]).to_string()
}

fn gen_opt_text(g: &mut Gen) -> Option<String> {
    if bool::arbitrary(g) { Some(gen_text(g)) } else { None }
}

fn gen_limit(g: &mut Gen) -> Option<String> {
    if bool::arbitrary(g) { Some(gen_range(g, 1, 1000).to_string()) } else { None }
}

fn gen_exprs(g: &mut Gen, depth: usize, min: u32, max: u32) -> Vec<Expression> {
    (0..gen_range(g, min, max)).map(|_| gen_expr(g, depth)).collect()
}

fn gen_opt_expr(g: &mut Gen, depth: usize) -> Option<Expression> {
    if bool::arbitrary(g) { Some(gen_expr(g, depth)) } else { None }
}

fn gen_boxed(g: &mut Gen, depth: usize) -> Box<Expression> {
    Box::new(gen_expr(g, depth))
}

/// `name` or `table.name`, as written in GROUP BY and GROUPING().
fn gen_column_reference(g: &mut Gen) -> Expression {
    let column = Expression::Identifier { value: gen_name(g), delimited: false, location: gen_location(g) };
    if bool::arbitrary(g) {
        Expression::Dereference { base: Box::new(column), field: Ident::new(gen_name(g)), location: gen_location(g) }
    } else {
        column
    }
}

fn gen_literal(g: &mut Gen) -> Expression {
    let location = gen_location(g);
    match gen_range(g, 0, 12) {
        0 => Expression::Identifier { value: gen_name(g), delimited: bool::arbitrary(g), location },
        1 => Expression::LongLiteral { value: i64::from(gen_range(g, 0, 10_000)), location },
        2 => Expression::DoubleLiteral { value: Double(f64::from(gen_range(g, 0, 360)) / 4.0), location },
        3 => Expression::DecimalLiteral { value: format!("{}.25", gen_range(g, 0, 99)), location },
        4 => Expression::StringLiteral { value: gen_text(g), location },
        5 => Expression::BooleanLiteral { value: bool::arbitrary(g), location },
        6 => Expression::NullLiteral { location },
        7 => Expression::GenericLiteral { type_name: "VARCHAR".to_string(), value: gen_text(g), location },
        8 => Expression::TimeLiteral { value: "12:00:00".to_string(), location },
        9 => Expression::TimestampLiteral { value: "2024-01-01 12:00:00".to_string(), location },
        10 => Expression::IntervalLiteral {
            value: gen_range(g, 1, 30).to_string(),
            sign: pick(g, &[IntervalSign::Positive, IntervalSign::Negative]),
            start_field: pick(g, &[IntervalField::Year, IntervalField::Day, IntervalField::Hour]),
            end_field: if bool::arbitrary(g) { Some(IntervalField::Second) } else { None },
            location,
        },
        11 => Expression::CurrentTime {
            function: pick(g, &[CurrentTimeFunction::Date, CurrentTimeFunction::Timestamp, CurrentTimeFunction::LocalTime]),
            precision: if bool::arbitrary(g) { Some(gen_range(g, 0, 6)) } else { None },
            location,
        },
        _ => Expression::GroupingOperation {
            columns: (0..gen_range(g, 1, 2)).map(|_| gen_column_reference(g)).collect(),
            location,
        },
    }
}

fn gen_comparison_op(g: &mut Gen) -> ComparisonOperator {
    pick(g, &[
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEqual,
        ComparisonOperator::IsDistinctFrom,
    ])
}

/// Generates a random expression of any supported kind.
pub fn gen_expr(g: &mut Gen, depth: usize) -> Expression {
    if depth == 0 || gen_range(g, 0, 3) == 0 {
        return gen_literal(g);
    }
    let d = depth - 1;
    let location = gen_location(g);
    match gen_range(g, 0, 31) {
        0 => Expression::Dereference { base: gen_boxed(g, d), field: gen_ident(g), location },
        1 => Expression::ArithmeticBinary {
            op: pick(g, &[
                ArithmeticOperator::Add,
                ArithmeticOperator::Subtract,
                ArithmeticOperator::Multiply,
                ArithmeticOperator::Divide,
                ArithmeticOperator::Modulus,
            ]),
            left: gen_boxed(g, d),
            right: gen_boxed(g, d),
            location,
        },
        2 => Expression::ArithmeticUnary { sign: pick(g, &[Sign::Plus, Sign::Minus]), value: gen_boxed(g, d), location },
        3 => Expression::Comparison { op: gen_comparison_op(g), left: gen_boxed(g, d), right: gen_boxed(g, d), location },
        4 => Expression::LogicalBinary {
            op: pick(g, &[LogicalOperator::And, LogicalOperator::Or]),
            left: gen_boxed(g, d),
            right: gen_boxed(g, d),
            location,
        },
        5 => Expression::Not { value: gen_boxed(g, d), location },
        6 => Expression::Between { value: gen_boxed(g, d), min: gen_boxed(g, d), max: gen_boxed(g, d), location },
        7 => Expression::In {
            value: gen_boxed(g, d),
            value_list: Box::new(Expression::InList { values: gen_exprs(g, d, 1, 3), location: gen_location(g) }),
            location,
        },
        8 => Expression::Like {
            value: gen_boxed(g, d),
            pattern: gen_boxed(g, d),
            escape: gen_opt_expr(g, d).map(Box::new),
            location,
        },
        9 => Expression::IsNull { value: gen_boxed(g, d), location },
        10 => Expression::IsNotNull { value: gen_boxed(g, d), location },
        11 => Expression::Exists {
            subquery: Box::new(Expression::Subquery { query: Box::new(gen_query(g, d)), location: gen_location(g) }),
            location,
        },
        12 => Expression::QuantifiedComparison {
            op: gen_comparison_op(g),
            quantifier: pick(g, &[Quantifier::All, Quantifier::Any, Quantifier::Some]),
            value: gen_boxed(g, d),
            subquery: Box::new(Expression::Subquery { query: Box::new(gen_query(g, d)), location: gen_location(g) }),
            location,
        },
        13 => Expression::Subquery { query: Box::new(gen_query(g, d)), location },
        14 => Expression::FunctionCall {
            name: gen_qualified_name(g),
            window: if gen_range(g, 0, 3) == 0 { Some(gen_window(g, d)) } else { None },
            filter: if gen_range(g, 0, 3) == 0 { Some(gen_boxed(g, d)) } else { None },
            order_by: if gen_range(g, 0, 3) == 0 { Some(gen_order_by(g, d)) } else { None },
            distinct: bool::arbitrary(g),
            arguments: gen_exprs(g, d, 0, 3),
            location,
        },
        15 => Expression::Cast {
            expression: gen_boxed(g, d),
            type_name: pick(g, &["BIGINT", "DOUBLE", "VARCHAR"]).to_string(),
            safe: bool::arbitrary(g),
            type_only: bool::arbitrary(g),
            location,
        },
        16 => Expression::Extract {
            expression: gen_boxed(g, d),
            field: pick(g, &[ExtractField::Year, ExtractField::Month, ExtractField::DayOfWeek, ExtractField::TimezoneHour]),
            location,
        },
        17 => Expression::AtTimeZone { value: gen_boxed(g, d), time_zone: gen_boxed(g, d), location },
        18 => Expression::ArrayConstructor { values: gen_exprs(g, d, 0, 3), location },
        19 => Expression::Subscript { base: gen_boxed(g, d), index: gen_boxed(g, d), location },
        20 => Expression::Coalesce { operands: gen_exprs(g, d, 1, 3), location },
        21 => Expression::NullIf { first: gen_boxed(g, d), second: gen_boxed(g, d), location },
        22 => Expression::If {
            condition: gen_boxed(g, d),
            true_value: gen_boxed(g, d),
            false_value: gen_opt_expr(g, d).map(Box::new),
            location,
        },
        23 => Expression::Try { inner: gen_boxed(g, d), location },
        24 => Expression::Bind { values: gen_exprs(g, d, 1, 2), function: gen_boxed(g, d), location },
        25 => Expression::Lambda { arguments: gen_idents(g), body: gen_boxed(g, d), location },
        26 => Expression::SimpleCase {
            operand: gen_boxed(g, d),
            when_clauses: (0..gen_range(g, 1, 2)).map(|_| gen_when_clause(g, d)).collect(),
            default_value: gen_opt_expr(g, d).map(Box::new),
            location,
        },
        27 => Expression::SearchedCase {
            when_clauses: (0..gen_range(g, 1, 2)).map(|_| gen_when_clause(g, d)).collect(),
            default_value: gen_opt_expr(g, d).map(Box::new),
            location,
        },
        28 => Expression::Row { items: gen_exprs(g, d, 1, 3), location },
        29 => Expression::InList { values: gen_exprs(g, d, 1, 3), location },
        _ => gen_literal(g),
    }
}

fn gen_when_clause(g: &mut Gen, depth: usize) -> WhenClause {
    WhenClause { operand: gen_expr(g, depth), result: gen_expr(g, depth), location: gen_location(g) }
}

fn gen_sort_item(g: &mut Gen, depth: usize) -> SortItem {
    SortItem {
        sort_key: gen_expr(g, depth),
        ordering: pick(g, &[SortOrdering::Ascending, SortOrdering::Descending]),
        null_ordering: pick(g, &[NullOrdering::First, NullOrdering::Last, NullOrdering::Undefined]),
        location: gen_location(g),
    }
}

fn gen_order_by(g: &mut Gen, depth: usize) -> OrderBy {
    OrderBy {
        sort_items: (0..gen_range(g, 1, 2)).map(|_| gen_sort_item(g, depth)).collect(),
        location: gen_location(g),
    }
}

fn gen_frame_bound(g: &mut Gen, depth: usize) -> FrameBound {
    let bound_type = pick(g, &[
        FrameBoundType::UnboundedPreceding,
        FrameBoundType::Preceding,
        FrameBoundType::CurrentRow,
        FrameBoundType::Following,
        FrameBoundType::UnboundedFollowing,
    ]);
    let value = match bound_type {
        FrameBoundType::Preceding | FrameBoundType::Following => Some(Box::new(gen_expr(g, depth))),
        _ => None,
    };
    FrameBound { bound_type, value, location: gen_location(g) }
}

fn gen_window(g: &mut Gen, depth: usize) -> Window {
    Window {
        partition_by: gen_exprs(g, depth, 0, 2),
        order_by: if bool::arbitrary(g) { Some(gen_order_by(g, depth)) } else { None },
        frame: if bool::arbitrary(g) {
            Some(WindowFrame {
                frame_type: pick(g, &[WindowFrameType::Range, WindowFrameType::Rows]),
                start: gen_frame_bound(g, depth),
                end: if bool::arbitrary(g) { Some(gen_frame_bound(g, depth)) } else { None },
                location: gen_location(g),
            })
        } else {
            None
        },
        location: gen_location(g),
    }
}

fn gen_select_item(g: &mut Gen, depth: usize) -> SelectItem {
    if gen_range(g, 0, 4) == 0 {
        SelectItem::AllColumns {
            prefix: if bool::arbitrary(g) { Some(gen_qualified_name(g)) } else { None },
            location: gen_location(g),
        }
    } else {
        SelectItem::SingleColumn {
            expression: gen_expr(g, depth),
            alias: if bool::arbitrary(g) { Some(gen_ident(g)) } else { None },
            location: gen_location(g),
        }
    }
}

fn gen_grouping_element(g: &mut Gen, depth: usize) -> GroupingElement {
    let location = gen_location(g);
    match gen_range(g, 0, 3) {
        0 => GroupingElement::Simple { columns: gen_exprs(g, depth, 1, 2), location },
        1 => GroupingElement::Rollup { columns: gen_exprs(g, depth, 1, 2), location },
        2 => GroupingElement::Cube { columns: gen_exprs(g, depth, 1, 2), location },
        _ => GroupingElement::GroupingSets {
            sets: (0..gen_range(g, 1, 2)).map(|_| gen_exprs(g, depth, 0, 2)).collect(),
            location,
        },
    }
}

fn gen_query_specification(g: &mut Gen, depth: usize) -> Relation {
    Relation::QuerySpecification {
        select: Select {
            distinct: bool::arbitrary(g),
            select_items: (0..gen_range(g, 1, 3)).map(|_| gen_select_item(g, depth)).collect(),
            location: gen_location(g),
        },
        from: if gen_range(g, 0, 4) > 0 { Some(Box::new(gen_relation(g, depth))) } else { None },
        where_clause: gen_opt_expr(g, depth),
        group_by: if gen_range(g, 0, 3) == 0 {
            Some(GroupBy {
                distinct: bool::arbitrary(g),
                grouping_elements: (0..gen_range(g, 1, 2)).map(|_| gen_grouping_element(g, depth)).collect(),
                location: gen_location(g),
            })
        } else {
            None
        },
        having: if gen_range(g, 0, 3) == 0 { Some(gen_expr(g, depth)) } else { None },
        order_by: if gen_range(g, 0, 3) == 0 { Some(gen_order_by(g, depth)) } else { None },
        limit: gen_limit(g),
        location: gen_location(g),
    }
}

fn gen_table(g: &mut Gen) -> Relation {
    Relation::Table { name: gen_qualified_name(g), location: gen_location(g) }
}

/// Generates a random relation of any kind.
pub fn gen_relation(g: &mut Gen, depth: usize) -> Relation {
    if depth == 0 {
        return gen_table(g);
    }
    let d = depth - 1;
    let location = gen_location(g);
    match gen_range(g, 0, 11) {
        0 => gen_query_specification(g, d),
        1 => Relation::SetOperation(SetOperation::Union {
            relations: (0..gen_range(g, 2, 3)).map(|_| gen_relation(g, d)).collect(),
            distinct: bool::arbitrary(g),
            location,
        }),
        2 => Relation::SetOperation(SetOperation::Intersect {
            relations: (0..gen_range(g, 2, 3)).map(|_| gen_relation(g, d)).collect(),
            distinct: bool::arbitrary(g),
            location,
        }),
        3 => Relation::SetOperation(SetOperation::Except {
            left: Box::new(gen_relation(g, d)),
            right: Box::new(gen_relation(g, d)),
            distinct: bool::arbitrary(g),
            location,
        }),
        4 => Relation::Values { rows: gen_exprs(g, d, 1, 3), location },
        5 => Relation::TableSubquery { query: Box::new(gen_query(g, d)), location },
        6 => Relation::Aliased {
            relation: Box::new(gen_relation(g, d)),
            alias: gen_ident(g),
            column_names: if bool::arbitrary(g) { Some(gen_idents(g)) } else { None },
            location,
        },
        7 => Relation::Sampled {
            relation: Box::new(gen_relation(g, d)),
            sample_type: pick(g, &[SampleType::Bernoulli, SampleType::System]),
            percentage: Box::new(gen_expr(g, d)),
            location,
        },
        8 => {
            let join_type = pick(g, &[
                JoinType::Cross,
                JoinType::Inner,
                JoinType::Left,
                JoinType::Right,
                JoinType::Full,
                JoinType::Implicit,
            ]);
            let criteria = match join_type {
                JoinType::Cross | JoinType::Implicit => None,
                _ => Some(match gen_range(g, 0, 2) {
                    0 => JoinCriteria::On(gen_expr(g, d)),
                    1 => JoinCriteria::Using(gen_idents(g)),
                    _ => JoinCriteria::Natural,
                }),
            };
            Relation::Join {
                join_type,
                left: Box::new(gen_relation(g, d)),
                right: Box::new(gen_relation(g, d)),
                criteria,
                location,
            }
        }
        9 => Relation::Unnest { expressions: gen_exprs(g, d, 1, 2), with_ordinality: bool::arbitrary(g), location },
        10 => Relation::Lateral { query: Box::new(gen_query(g, d)), location },
        _ => gen_table(g),
    }
}

/// Generates a random query, sometimes with a WITH clause.
pub fn gen_query(g: &mut Gen, depth: usize) -> Query {
    let d = depth.saturating_sub(1);
    let with = if depth > 0 && gen_range(g, 0, 4) == 0 {
        Some(With {
            recursive: bool::arbitrary(g),
            queries: (0..gen_range(g, 1, 2))
                .map(|_| WithQuery {
                    name: gen_ident(g),
                    query: Box::new(gen_query(g, d)),
                    column_names: if bool::arbitrary(g) { Some(gen_idents(g)) } else { None },
                    location: gen_location(g),
                })
                .collect(),
            location: gen_location(g),
        })
    } else {
        None
    };
    let body = if bool::arbitrary(g) { gen_query_specification(g, d) } else { gen_relation(g, depth) };
    Query {
        with,
        body,
        order_by: if depth > 0 && gen_range(g, 0, 3) == 0 { Some(gen_order_by(g, d)) } else { None },
        limit: gen_limit(g),
        location: gen_location(g),
    }
}

fn gen_property(g: &mut Gen, depth: usize) -> Property {
    Property { name: gen_ident(g), value: gen_expr(g, depth), location: gen_location(g) }
}

fn gen_properties(g: &mut Gen, depth: usize) -> Vec<Property> {
    (0..gen_range(g, 0, 2)).map(|_| gen_property(g, depth)).collect()
}

fn gen_column_definition(g: &mut Gen, depth: usize) -> ColumnDefinition {
    ColumnDefinition {
        name: gen_ident(g),
        type_name: pick(g, &["BIGINT", "DOUBLE", "VARCHAR"]).to_string(),
        properties: gen_properties(g, depth),
        comment: gen_opt_text(g),
        location: gen_location(g),
    }
}

/// Generates a random statement with a default rule.
pub fn gen_statement(g: &mut Gen, depth: usize) -> Statement {
    let d = depth.saturating_sub(1);
    let location = gen_location(g);
    match gen_range(g, 0, 16) {
        0 => Statement::Insert {
            target: gen_qualified_name(g),
            columns: if bool::arbitrary(g) { Some(gen_idents(g)) } else { None },
            query: Box::new(gen_query(g, d)),
            location,
        },
        1 => Statement::Delete { table: Box::new(gen_table(g)), where_clause: gen_opt_expr(g, d), location },
        2 => Statement::CreateTableAsSelect {
            name: gen_qualified_name(g),
            query: Box::new(gen_query(g, d)),
            not_exists: bool::arbitrary(g),
            properties: gen_properties(g, d),
            with_data: bool::arbitrary(g),
            column_aliases: if bool::arbitrary(g) { Some(gen_idents(g)) } else { None },
            comment: gen_opt_text(g),
            location,
        },
        3 => Statement::CreateView {
            name: gen_qualified_name(g),
            query: Box::new(gen_query(g, d)),
            replace: bool::arbitrary(g),
            location,
        },
        4 => Statement::CreateTable {
            name: gen_qualified_name(g),
            elements: (0..gen_range(g, 1, 3))
                .map(|_| {
                    if gen_range(g, 0, 3) == 0 {
                        TableElement::Like(LikeClause {
                            table: gen_qualified_name(g),
                            properties_option: if bool::arbitrary(g) {
                                Some(pick(g, &[LikeOption::IncludingProperties, LikeOption::ExcludingProperties]))
                            } else {
                                None
                            },
                            location: gen_location(g),
                        })
                    } else {
                        TableElement::Column(gen_column_definition(g, d))
                    }
                })
                .collect(),
            not_exists: bool::arbitrary(g),
            properties: gen_properties(g, d),
            comment: gen_opt_text(g),
            location,
        },
        5 => Statement::AddColumn { name: gen_qualified_name(g), column: gen_column_definition(g, d), location },
        6 => Statement::SetSession { name: gen_qualified_name(g), value: gen_expr(g, d), location },
        7 => Statement::ShowPartitions {
            table: gen_qualified_name(g),
            where_clause: gen_opt_expr(g, d),
            order_by: (0..gen_range(g, 0, 2)).map(|_| gen_sort_item(g, d)).collect(),
            limit: gen_limit(g),
            location,
        },
        8 => Statement::ShowColumns { table: gen_qualified_name(g), location },
        9 => Statement::StartTransaction {
            modes: (0..gen_range(g, 0, 2))
                .map(|_| {
                    if bool::arbitrary(g) {
                        TransactionMode::Isolation {
                            level: pick(g, &[
                                IsolationLevel::Serializable,
                                IsolationLevel::RepeatableRead,
                                IsolationLevel::ReadCommitted,
                                IsolationLevel::ReadUncommitted,
                            ]),
                            location: gen_location(g),
                        }
                    } else {
                        TransactionMode::AccessMode { read_only: bool::arbitrary(g), location: gen_location(g) }
                    }
                })
                .collect(),
            location,
        },
        10 if depth > 0 => Statement::Explain {
            statement: Box::new(gen_statement(g, d)),
            analyze: bool::arbitrary(g),
            verbose: bool::arbitrary(g),
            options: (0..gen_range(g, 0, 2))
                .map(|_| {
                    if bool::arbitrary(g) {
                        ExplainOption::Format {
                            format: pick(g, &[ExplainFormat::Text, ExplainFormat::Graphviz, ExplainFormat::Json]),
                            location: gen_location(g),
                        }
                    } else {
                        ExplainOption::Type {
                            explain_type: pick(g, &[
                                ExplainType::Logical,
                                ExplainType::Distributed,
                                ExplainType::Validate,
                                ExplainType::Io,
                            ]),
                            location: gen_location(g),
                        }
                    }
                })
                .collect(),
            location,
        },
        _ => Statement::Query(Box::new(gen_query(g, depth))),
    }
}

/// Generates one of the statements that have no default rule.
pub fn gen_unsupported_statement(g: &mut Gen) -> Statement {
    let location = gen_location(g);
    match gen_range(g, 0, 18) {
        0 => Statement::Prepare {
            name: gen_ident(g),
            statement: Box::new(Statement::Query(Box::new(gen_query(g, 1)))),
            location,
        },
        1 => Statement::Execute { name: gen_ident(g), parameters: gen_exprs(g, 1, 0, 2), location },
        2 => Statement::Deallocate { name: gen_ident(g), location },
        3 => Statement::Grant {
            privileges: Some(vec!["SELECT".to_string()]),
            table: gen_qualified_name(g),
            grantee: gen_ident(g),
            with_grant_option: bool::arbitrary(g),
            location,
        },
        4 => Statement::Revoke {
            grant_option_for: bool::arbitrary(g),
            privileges: None,
            table: gen_qualified_name(g),
            grantee: gen_ident(g),
            location,
        },
        5 => Statement::CreateSchema {
            name: gen_qualified_name(g),
            not_exists: bool::arbitrary(g),
            properties: gen_properties(g, 1),
            location,
        },
        6 => Statement::DropSchema {
            name: gen_qualified_name(g),
            exists: bool::arbitrary(g),
            cascade: bool::arbitrary(g),
            location,
        },
        7 => Statement::DropTable { name: gen_qualified_name(g), exists: bool::arbitrary(g), location },
        8 => Statement::DropView { name: gen_qualified_name(g), exists: bool::arbitrary(g), location },
        9 => Statement::RenameTable { source: gen_qualified_name(g), target: gen_qualified_name(g), location },
        10 => Statement::Use {
            catalog: if bool::arbitrary(g) { Some(gen_ident(g)) } else { None },
            schema: gen_ident(g),
            location,
        },
        11 => Statement::ShowTables {
            schema: if bool::arbitrary(g) { Some(gen_qualified_name(g)) } else { None },
            like_pattern: gen_opt_text(g),
            location,
        },
        12 => Statement::ShowSchemas {
            catalog: if bool::arbitrary(g) { Some(gen_ident(g)) } else { None },
            like_pattern: gen_opt_text(g),
            location,
        },
        13 => Statement::ShowCatalogs { like_pattern: gen_opt_text(g), location },
        14 => Statement::ShowSession { location },
        15 => Statement::ShowFunctions { location },
        16 => Statement::ResetSession { name: gen_qualified_name(g), location },
        17 => Statement::Commit { location },
        _ => Statement::Rollback { location },
    }
}
