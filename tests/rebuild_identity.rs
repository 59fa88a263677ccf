//! The default rules must rebuild every supported tree into an equal tree.

use sql_rebuilder::ir::rebuilder::{Identity, Rebuilder};
use sql_rebuilder::ir::sql_node::*;
use sql_rebuilder::logging::init_logger;
use test_utils::ir::fixtures;

fn assert_identity(statement: Statement) {
    let tree = Node::from(statement);
    let rebuilt = Identity.rebuild(&tree, &mut ()).expect("identity rebuild failed");
    assert_eq!(rebuilt, tree);
}

#[test]
fn test_identity_select_a_plus_one() {
    let _ = init_logger(false, Some("warn"));
    assert_identity(fixtures::select_a_plus_one());
}

#[test]
fn test_identity_set_operations() {
    assert_identity(fixtures::union_of_three());
    assert_identity(fixtures::except_of_two());
    assert_identity(Statement::query(Relation::intersect(
        vec![fixtures::select_column("x", "t1"), fixtures::select_column("x", "t2")],
        false,
    )));
}

#[test]
fn test_identity_joins() {
    assert_identity(fixtures::join_with(JoinType::Inner, Some(fixtures::on_criteria())));
    assert_identity(fixtures::join_with(JoinType::Left, Some(fixtures::using_criteria())));
    assert_identity(fixtures::join_with(JoinType::Full, Some(JoinCriteria::Natural)));
    assert_identity(fixtures::join_with(JoinType::Cross, None));
}

#[test]
fn test_identity_kitchen_sink() {
    assert_identity(fixtures::kitchen_sink());
}

#[test]
fn test_identity_ddl_and_session_statements() {
    assert_identity(fixtures::create_table());
    assert_identity(Statement::CreateView {
        name: QualifiedName::parse("sch.v"),
        query: Box::new(Query::new(fixtures::select_column("a", "t"))),
        replace: true,
        location: Location::at(1, 1),
    });
    assert_identity(Statement::SetSession {
        name: QualifiedName::parse("query_max_run_time"),
        value: Expression::string("10m"),
        location: Location::none(),
    });
    assert_identity(Statement::StartTransaction {
        modes: vec![
            TransactionMode::Isolation { level: IsolationLevel::Serializable, location: Location::none() },
            TransactionMode::AccessMode { read_only: true, location: Location::none() },
        ],
        location: Location::none(),
    });
    assert_identity(Statement::Explain {
        statement: Box::new(fixtures::select_a_plus_one()),
        analyze: true,
        verbose: false,
        options: vec![
            ExplainOption::Format { format: ExplainFormat::Json, location: Location::none() },
            ExplainOption::Type { explain_type: ExplainType::Distributed, location: Location::none() },
        ],
        location: Location::none(),
    });
    assert_identity(Statement::ShowPartitions {
        table: QualifiedName::parse("obs"),
        where_clause: Some(Expression::comparison(
            ComparisonOperator::LessThan,
            Expression::identifier("mjd"),
            Expression::long(5),
        )),
        order_by: vec![SortItem {
            sort_key: Expression::identifier("mjd"),
            ordering: SortOrdering::Ascending,
            null_ordering: NullOrdering::First,
            location: Location::none(),
        }],
        limit: Some("5".into()),
        location: Location::none(),
    });
}

#[test]
fn test_identity_on_every_node_family() {
    let expression = Expression::If {
        condition: Box::new(Expression::boolean(true)),
        true_value: Box::new(Expression::long(1)),
        false_value: None,
        location: Location::none(),
    };
    let nodes = vec![
        Node::Expression(expression.clone()),
        Node::Relation(fixtures::select_column("a", "t")),
        Node::Query(Query::new(Relation::table("t"))),
        Node::SelectItem(SelectItem::aliased(expression.clone(), "c")),
        Node::GroupingElement(GroupingElement::Simple { columns: vec![expression.clone()], location: Location::none() }),
        Node::JoinCriteria(fixtures::using_criteria()),
        Node::WhenClause(WhenClause {
            operand: expression.clone(),
            result: Expression::null(),
            location: Location::none(),
        }),
        Node::Property(Property { name: Ident::new("format"), value: Expression::string("ORC"), location: Location::none() }),
        Node::FrameBound(FrameBound { bound_type: FrameBoundType::UnboundedFollowing, value: None, location: Location::none() }),
        Node::TableElement(TableElement::Like(LikeClause {
            table: QualifiedName::parse("t"),
            properties_option: None,
            location: Location::none(),
        })),
    ];
    for node in nodes {
        let rebuilt = Identity.rebuild(&node, &mut ()).unwrap();
        assert_eq!(rebuilt.kind(), node.kind());
        assert_eq!(rebuilt, node);
    }
}

#[test]
fn test_optional_children_stay_absent() {
    let tree = fixtures::select_a_plus_one();
    let rebuilt = Identity.process_statement(&tree, &mut ()).unwrap();
    let Statement::Query(query) = rebuilt else {
        panic!("Expected a query statement");
    };
    assert!(query.with.is_none());
    assert!(query.order_by.is_none());
    match query.body {
        Relation::QuerySpecification { group_by, having, order_by, limit, from, where_clause, .. } => {
            assert!(group_by.is_none() && having.is_none() && order_by.is_none() && limit.is_none());
            assert!(from.is_some() && where_clause.is_some());
        }
        other => panic!("Expected QuerySpecification, got {:?}", other),
    }
}

#[test]
fn test_sequences_keep_order() {
    let rebuilt = Identity.process_statement(&fixtures::union_of_three(), &mut ()).unwrap();
    let Statement::Query(query) = rebuilt else {
        panic!("Expected a query statement");
    };
    let Relation::SetOperation(SetOperation::Union { relations, .. }) = query.body else {
        panic!("Expected a union body");
    };
    let tables: Vec<String> = relations
        .iter()
        .map(|r| match r {
            Relation::QuerySpecification { from: Some(from), .. } => match from.as_ref() {
                Relation::Table { name, .. } => name.to_string(),
                other => panic!("Expected Table, got {:?}", other),
            },
            other => panic!("Expected QuerySpecification, got {:?}", other),
        })
        .collect();
    assert_eq!(tables, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_locations_kept_on_leaves_dropped_on_composites() {
    let rebuilt = Identity.process_statement(&fixtures::select_a_plus_one(), &mut ()).unwrap();
    let Statement::Query(query) = rebuilt else {
        panic!("Expected a query statement");
    };
    assert!(!query.location.is_known());
    let Relation::QuerySpecification { select, from, where_clause, location, .. } = query.body else {
        panic!("Expected QuerySpecification");
    };
    assert!(!location.is_known());
    assert!(!select.location.is_known());
    match from.as_deref() {
        Some(Relation::Table { location, .. }) => assert!(!location.is_known()),
        other => panic!("Expected Table, got {:?}", other),
    }
    match where_clause {
        Some(Expression::Comparison { left, right, location, .. }) => {
            assert!(!location.is_known());
            match (*left, *right) {
                (
                    Expression::Identifier { location: ident_at, .. },
                    Expression::LongLiteral { location: literal_at, .. },
                ) => {
                    assert_eq!(ident_at.position(), Some(Position { line: 1, column: 27 }));
                    assert_eq!(literal_at.position(), Some(Position { line: 1, column: 31 }));
                }
                other => panic!("Expected identifier and literal, got {:?}", other),
            }
        }
        other => panic!("Expected Comparison, got {:?}", other),
    }
}

#[test]
fn test_input_tree_is_untouched() {
    let tree = Node::from(fixtures::kitchen_sink());
    let snapshot = serde_json::to_string(&tree).unwrap();
    let _ = Identity.rebuild(&tree, &mut ()).unwrap();
    assert_eq!(serde_json::to_string(&tree).unwrap(), snapshot);
}

#[test]
fn test_identity_on_non_finite_doubles() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0] {
        let tree = Node::from(Expression::comparison(
            ComparisonOperator::NotEqual,
            Expression::identifier("ra"),
            Expression::double(value),
        ));
        let rebuilt = Identity.rebuild(&tree, &mut ()).unwrap();
        assert_eq!(rebuilt, tree, "identity changed the literal {}", value);
    }
    // Distinct values still differ.
    assert_ne!(Expression::double(0.0), Expression::double(-0.0));
    assert_ne!(Expression::double(f64::NAN), Expression::double(1.0));
}
