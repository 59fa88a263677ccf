//! Hand-built trees for the queries the tests keep coming back to.

use sql_rebuilder::ir::sql_node::*;

/// `SELECT a + 1 FROM t WHERE a > 0`
pub fn select_a_plus_one() -> Statement {
    let plus_one = Expression::ArithmeticBinary {
        op: ArithmeticOperator::Add,
        left: Box::new(Expression::Identifier { value: "a".into(), delimited: false, location: Location::at(1, 8) }),
        right: Box::new(Expression::LongLiteral { value: 1, location: Location::at(1, 12) }),
        location: Location::at(1, 8),
    };
    let a_positive = Expression::Comparison {
        op: ComparisonOperator::GreaterThan,
        left: Box::new(Expression::Identifier { value: "a".into(), delimited: false, location: Location::at(1, 27) }),
        right: Box::new(Expression::LongLiteral { value: 0, location: Location::at(1, 31) }),
        location: Location::at(1, 27),
    };
    Statement::Query(Box::new(Query {
        with: None,
        body: Relation::QuerySpecification {
            select: Select {
                distinct: false,
                select_items: vec![SelectItem::SingleColumn {
                    expression: plus_one,
                    alias: None,
                    location: Location::at(1, 8),
                }],
                location: Location::at(1, 1),
            },
            from: Some(Box::new(Relation::Table { name: QualifiedName::parse("t"), location: Location::at(1, 19) })),
            where_clause: Some(a_positive),
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            location: Location::at(1, 1),
        },
        order_by: None,
        limit: None,
        location: Location::at(1, 1),
    }))
}

/// `SELECT x FROM <table>`
pub fn select_column(column: &str, table: &str) -> Relation {
    Relation::query_specification(
        Select::new(vec![SelectItem::column(Expression::identifier(column))]),
        Some(Relation::table(table)),
        None,
    )
}

/// `SELECT x FROM t1 UNION SELECT x FROM t2 UNION SELECT x FROM t3`
pub fn union_of_three() -> Statement {
    Statement::query(Relation::union(
        vec![select_column("x", "t1"), select_column("x", "t2"), select_column("x", "t3")],
        true,
    ))
}

/// `SELECT x FROM t1 EXCEPT SELECT x FROM t2`
pub fn except_of_two() -> Statement {
    Statement::query(Relation::except(select_column("x", "t1"), select_column("x", "t2"), true))
}

/// `SELECT * FROM r <join_type> JOIN s <criteria>`
pub fn join_with(join_type: JoinType, criteria: Option<JoinCriteria>) -> Statement {
    Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::all()]),
        Some(Relation::join(join_type, Relation::table("r"), Relation::table("s"), criteria)),
        None,
    ))
}

/// `... JOIN s ON r.id = s.id AND s.flag = 1`
pub fn on_criteria() -> JoinCriteria {
    JoinCriteria::On(Expression::and(
        Expression::comparison(
            ComparisonOperator::Equal,
            Expression::dereference(Expression::identifier("r"), "id"),
            Expression::dereference(Expression::identifier("s"), "id"),
        ),
        Expression::comparison(
            ComparisonOperator::Equal,
            Expression::dereference(Expression::identifier("s"), "flag"),
            Expression::long(1),
        ),
    ))
}

/// `... JOIN s USING (id, run)`
pub fn using_criteria() -> JoinCriteria {
    JoinCriteria::Using(vec![Ident::new("id"), Ident::new("run")])
}

/// `SELECT a, "B" FROM "//lsst:4040"."Sch".Tab`
pub fn three_part_table_select() -> Statement {
    Statement::query(Relation::query_specification(
        Select::new(vec![
            SelectItem::column(Expression::identifier("a")),
            SelectItem::column(Expression::Identifier { value: "B".into(), delimited: true, location: Location::none() }),
        ]),
        Some(Relation::Table {
            name: QualifiedName::of(["//lsst:4040", "Sch", "Tab"]),
            location: Location::at(1, 18),
        }),
        None,
    ))
}

/// `SELECT * FROM Object o WHERE 1 = CONTAINS(POINT(o.ra, o.decl), CIRCLE(1, 2, 3))`
pub fn contains_point_in_circle() -> Statement {
    let point = Expression::function(
        "POINT",
        vec![
            Expression::dereference(Expression::identifier("o"), "ra"),
            Expression::dereference(Expression::identifier("o"), "decl"),
        ],
    );
    let circle = Expression::function("CIRCLE", vec![Expression::long(1), Expression::long(2), Expression::long(3)]);
    Statement::query(Relation::query_specification(
        Select::new(vec![SelectItem::all()]),
        Some(Relation::aliased(Relation::table("Object"), "o")),
        Some(Expression::comparison(
            ComparisonOperator::Equal,
            Expression::long(1),
            Expression::function("CONTAINS", vec![point, circle]),
        )),
    ))
}

/// A statement touching most node kinds at least once:
///
/// ```sql
/// WITH recent (id) AS (SELECT id FROM runs ORDER BY id DESC LIMIT 10)
/// SELECT
///   count(DISTINCT id) FILTER (WHERE id IS NOT NULL)
///     OVER (PARTITION BY band ORDER BY mjd ROWS BETWEEN 1 PRECEDING AND CURRENT ROW),
///   CASE WHEN flux > 0 THEN 'pos' ELSE 'neg' END,
///   CAST(ra AS DOUBLE),
///   *
/// FROM recent r JOIN obs o USING (id)
/// WHERE o.mjd BETWEEN 1 AND 2 AND o.band IN ('g', 'r') AND o.name LIKE 'a%'
/// GROUP BY ROLLUP (band), CUBE (mjd), GROUPING SETS ((band), ())
/// HAVING NOT EXISTS (SELECT 1)
/// ```
pub fn kitchen_sink() -> Statement {
    let recent = WithQuery {
        name: Ident::new("recent"),
        query: Box::new(Query {
            with: None,
            body: select_column("id", "runs"),
            order_by: Some(OrderBy {
                sort_items: vec![SortItem {
                    sort_key: Expression::identifier("id"),
                    ordering: SortOrdering::Descending,
                    null_ordering: NullOrdering::Undefined,
                    location: Location::none(),
                }],
                location: Location::none(),
            }),
            limit: Some("10".into()),
            location: Location::at(1, 27),
        }),
        column_names: Some(vec![Ident::new("id")]),
        location: Location::at(1, 6),
    };

    let window = Window {
        partition_by: vec![Expression::identifier("band")],
        order_by: Some(OrderBy {
            sort_items: vec![SortItem {
                sort_key: Expression::identifier("mjd"),
                ordering: SortOrdering::Ascending,
                null_ordering: NullOrdering::Last,
                location: Location::none(),
            }],
            location: Location::none(),
        }),
        frame: Some(WindowFrame {
            frame_type: WindowFrameType::Rows,
            start: FrameBound {
                bound_type: FrameBoundType::Preceding,
                value: Some(Box::new(Expression::long(1))),
                location: Location::none(),
            },
            end: Some(FrameBound { bound_type: FrameBoundType::CurrentRow, value: None, location: Location::none() }),
            location: Location::none(),
        }),
        location: Location::none(),
    };
    let counted = Expression::FunctionCall {
        name: QualifiedName::parse("count"),
        window: Some(window),
        filter: Some(Box::new(Expression::IsNotNull {
            value: Box::new(Expression::identifier("id")),
            location: Location::none(),
        })),
        order_by: None,
        distinct: true,
        arguments: vec![Expression::identifier("id")],
        location: Location::at(3, 3),
    };
    let case = Expression::SearchedCase {
        when_clauses: vec![WhenClause {
            operand: Expression::comparison(
                ComparisonOperator::GreaterThan,
                Expression::identifier("flux"),
                Expression::long(0),
            ),
            result: Expression::string("pos"),
            location: Location::none(),
        }],
        default_value: Some(Box::new(Expression::string("neg"))),
        location: Location::at(5, 3),
    };
    let cast = Expression::Cast {
        expression: Box::new(Expression::identifier("ra")),
        type_name: "DOUBLE".into(),
        safe: false,
        type_only: false,
        location: Location::at(6, 3),
    };

    let mjd_between = Expression::Between {
        value: Box::new(Expression::dereference(Expression::identifier("o"), "mjd")),
        min: Box::new(Expression::long(1)),
        max: Box::new(Expression::long(2)),
        location: Location::none(),
    };
    let band_in = Expression::In {
        value: Box::new(Expression::dereference(Expression::identifier("o"), "band")),
        value_list: Box::new(Expression::InList {
            values: vec![Expression::string("g"), Expression::string("r")],
            location: Location::none(),
        }),
        location: Location::none(),
    };
    let name_like = Expression::Like {
        value: Box::new(Expression::dereference(Expression::identifier("o"), "name")),
        pattern: Box::new(Expression::string("a%")),
        escape: None,
        location: Location::none(),
    };

    let group_by = GroupBy {
        distinct: false,
        grouping_elements: vec![
            GroupingElement::Rollup { columns: vec![Expression::identifier("band")], location: Location::none() },
            GroupingElement::Cube { columns: vec![Expression::identifier("mjd")], location: Location::none() },
            GroupingElement::GroupingSets {
                sets: vec![vec![Expression::identifier("band")], vec![]],
                location: Location::none(),
            },
        ],
        location: Location::none(),
    };
    let having = Expression::not(Expression::Exists {
        subquery: Box::new(Expression::subquery(Query::new(Relation::query_specification(
            Select::new(vec![SelectItem::column(Expression::long(1))]),
            None,
            None,
        )))),
        location: Location::none(),
    });

    Statement::Query(Box::new(Query {
        with: Some(With { recursive: false, queries: vec![recent], location: Location::at(1, 1) }),
        body: Relation::QuerySpecification {
            select: Select::new(vec![
                SelectItem::column(counted),
                SelectItem::column(case),
                SelectItem::column(cast),
                SelectItem::all(),
            ]),
            from: Some(Box::new(Relation::join(
                JoinType::Inner,
                Relation::aliased(Relation::table("recent"), "r"),
                Relation::aliased(Relation::table("obs"), "o"),
                Some(using_criteria()),
            ))),
            where_clause: Some(Expression::and(Expression::and(mjd_between, band_in), name_like)),
            group_by: Some(group_by),
            having: Some(having),
            order_by: None,
            limit: None,
            location: Location::at(2, 1),
        },
        order_by: None,
        limit: None,
        location: Location::at(1, 1),
    }))
}

/// `CREATE TABLE IF NOT EXISTS sch.obs (id BIGINT WITH (nullable = false), LIKE sch.runs)`
pub fn create_table() -> Statement {
    Statement::CreateTable {
        name: QualifiedName::parse("sch.obs"),
        elements: vec![
            TableElement::Column(ColumnDefinition {
                name: Ident::new("id"),
                type_name: "BIGINT".into(),
                properties: vec![Property {
                    name: Ident::new("nullable"),
                    value: Expression::boolean(false),
                    location: Location::none(),
                }],
                comment: Some("primary key".into()),
                location: Location::at(1, 37),
            }),
            TableElement::Like(LikeClause {
                table: QualifiedName::parse("sch.runs"),
                properties_option: Some(LikeOption::IncludingProperties),
                location: Location::none(),
            }),
        ],
        not_exists: true,
        properties: vec![],
        comment: None,
        location: Location::at(1, 1),
    }
}
