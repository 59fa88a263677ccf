//! Constructor helpers for building trees by hand.
//!
//! Parsers set real locations; everything built here is unlocated.

use super::node_types::*;

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident { value: value.into(), delimited: false }
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Ident { value: value.into(), delimited: true }
    }
}

impl QualifiedName {
    pub fn of<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QualifiedName { parts: parts.into_iter().map(Into::into).collect() }
    }

    /// Splits a dotted name such as `sch.tab`. Quoting is not interpreted.
    pub fn parse(dotted: &str) -> Self {
        QualifiedName::of(dotted.split('.'))
    }

    /// The last part of the name, e.g. the bare function or table name.
    pub fn suffix(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or("")
    }
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { value: name.into(), delimited: false, location: Location::none() }
    }

    pub fn long(value: i64) -> Self {
        Expression::LongLiteral { value, location: Location::none() }
    }

    pub fn double(value: f64) -> Self {
        Expression::DoubleLiteral { value: Double(value), location: Location::none() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral { value: value.into(), location: Location::none() }
    }

    pub fn boolean(value: bool) -> Self {
        Expression::BooleanLiteral { value, location: Location::none() }
    }

    pub fn null() -> Self {
        Expression::NullLiteral { location: Location::none() }
    }

    pub fn dereference(base: Expression, field: impl Into<String>) -> Self {
        Expression::Dereference {
            base: Box::new(base),
            field: Ident::new(field),
            location: Location::none(),
        }
    }

    pub fn arithmetic(op: ArithmeticOperator, left: Expression, right: Expression) -> Self {
        Expression::ArithmeticBinary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        }
    }

    pub fn negate(value: Expression) -> Self {
        Expression::ArithmeticUnary { sign: Sign::Minus, value: Box::new(value), location: Location::none() }
    }

    pub fn comparison(op: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Expression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::LogicalBinary {
            op: LogicalOperator::And,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        }
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::LogicalBinary {
            op: LogicalOperator::Or,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        }
    }

    pub fn not(value: Expression) -> Self {
        Expression::Not { value: Box::new(value), location: Location::none() }
    }

    /// A plain call `name(arguments...)` with no window, filter or ordering.
    pub fn function(name: &str, arguments: Vec<Expression>) -> Self {
        Expression::FunctionCall {
            name: QualifiedName::parse(name),
            window: None,
            filter: None,
            order_by: None,
            distinct: false,
            arguments,
            location: Location::none(),
        }
    }

    pub fn subquery(query: Query) -> Self {
        Expression::Subquery { query: Box::new(query), location: Location::none() }
    }
}

impl SelectItem {
    pub fn column(expression: Expression) -> Self {
        SelectItem::SingleColumn { expression, alias: None, location: Location::none() }
    }

    pub fn aliased(expression: Expression, alias: impl Into<String>) -> Self {
        SelectItem::SingleColumn {
            expression,
            alias: Some(Ident::new(alias)),
            location: Location::none(),
        }
    }

    pub fn all() -> Self {
        SelectItem::AllColumns { prefix: None, location: Location::none() }
    }
}

impl Select {
    pub fn new(select_items: Vec<SelectItem>) -> Self {
        Select { distinct: false, select_items, location: Location::none() }
    }
}

impl Relation {
    pub fn table(name: &str) -> Self {
        Relation::Table { name: QualifiedName::parse(name), location: Location::none() }
    }

    pub fn aliased(relation: Relation, alias: impl Into<String>) -> Self {
        Relation::Aliased {
            relation: Box::new(relation),
            alias: Ident::new(alias),
            column_names: None,
            location: Location::none(),
        }
    }

    /// `SELECT select [FROM from] [WHERE where_clause]` with no grouping,
    /// ordering or limit.
    pub fn query_specification(
        select: Select,
        from: Option<Relation>,
        where_clause: Option<Expression>,
    ) -> Self {
        Relation::QuerySpecification {
            select,
            from: from.map(Box::new),
            where_clause,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            location: Location::none(),
        }
    }

    pub fn join(join_type: JoinType, left: Relation, right: Relation, criteria: Option<JoinCriteria>) -> Self {
        Relation::Join {
            join_type,
            left: Box::new(left),
            right: Box::new(right),
            criteria,
            location: Location::none(),
        }
    }

    pub fn union(relations: Vec<Relation>, distinct: bool) -> Self {
        Relation::SetOperation(SetOperation::Union { relations, distinct, location: Location::none() })
    }

    pub fn intersect(relations: Vec<Relation>, distinct: bool) -> Self {
        Relation::SetOperation(SetOperation::Intersect { relations, distinct, location: Location::none() })
    }

    pub fn except(left: Relation, right: Relation, distinct: bool) -> Self {
        Relation::SetOperation(SetOperation::Except {
            left: Box::new(left),
            right: Box::new(right),
            distinct,
            location: Location::none(),
        })
    }
}

impl Query {
    pub fn new(body: Relation) -> Self {
        Query { with: None, body, order_by: None, limit: None, location: Location::none() }
    }
}

impl Statement {
    pub fn query(body: Relation) -> Self {
        Statement::Query(Box::new(Query::new(body)))
    }
}

impl From<Statement> for Node {
    fn from(statement: Statement) -> Self {
        Node::Statement(statement)
    }
}

impl From<Expression> for Node {
    fn from(expression: Expression) -> Self {
        Node::Expression(expression)
    }
}

impl From<Relation> for Node {
    fn from(relation: Relation) -> Self {
        Node::Relation(relation)
    }
}

impl From<Query> for Node {
    fn from(query: Query) -> Self {
        Node::Query(query)
    }
}
