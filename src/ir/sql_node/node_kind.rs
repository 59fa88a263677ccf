use std::fmt;

use serde::{Deserialize, Serialize};

use super::node_types::*;

/// Discriminates the concrete kind of a node, independent of its fields.
///
/// Umbrella families report the kind of their concrete shape: a
/// `SetOperation` is `Union`, `Intersect` or `Except`, never "set operation".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    // Statements
    Query,
    Insert,
    Delete,
    CreateTableAsSelect,
    CreateView,
    CreateTable,
    AddColumn,
    SetSession,
    ShowPartitions,
    ShowColumns,
    StartTransaction,
    Explain,
    Prepare,
    Execute,
    Deallocate,
    Grant,
    Revoke,
    CreateSchema,
    DropSchema,
    DropTable,
    DropView,
    RenameTable,
    Use,
    ShowTables,
    ShowSchemas,
    ShowCatalogs,
    ShowSession,
    ShowFunctions,
    ResetSession,
    Commit,
    Rollback,

    // Relations
    Table,
    QuerySpecification,
    Union,
    Intersect,
    Except,
    Values,
    TableSubquery,
    AliasedRelation,
    SampledRelation,
    Join,
    Unnest,
    Lateral,

    // Expressions
    Identifier,
    Dereference,
    LongLiteral,
    DoubleLiteral,
    DecimalLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    GenericLiteral,
    TimeLiteral,
    TimestampLiteral,
    IntervalLiteral,
    CurrentTime,
    Parameter,
    FieldReference,
    ArithmeticBinary,
    ArithmeticUnary,
    Comparison,
    LogicalBinary,
    Not,
    Between,
    InPredicate,
    InList,
    Like,
    IsNull,
    IsNotNull,
    Exists,
    QuantifiedComparison,
    SubqueryExpression,
    FunctionCall,
    Cast,
    Extract,
    AtTimeZone,
    ArrayConstructor,
    Subscript,
    Coalesce,
    NullIf,
    If,
    Try,
    Bind,
    Lambda,
    SimpleCase,
    SearchedCase,
    Row,
    GroupingOperation,

    // Clause support
    With,
    WithQuery,
    Select,
    SingleColumn,
    AllColumns,
    GroupBy,
    SimpleGroupBy,
    Rollup,
    Cube,
    GroupingSets,
    OrderBy,
    SortItem,
    Window,
    WindowFrame,
    FrameBound,
    WhenClause,
    JoinOn,
    JoinUsing,
    NaturalJoin,
    Property,
    ColumnDefinition,
    LikeClause,
    Isolation,
    TransactionAccessMode,
    ExplainFormat,
    ExplainType,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Expression {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Identifier { .. } => NodeKind::Identifier,
            Expression::Dereference { .. } => NodeKind::Dereference,
            Expression::LongLiteral { .. } => NodeKind::LongLiteral,
            Expression::DoubleLiteral { .. } => NodeKind::DoubleLiteral,
            Expression::DecimalLiteral { .. } => NodeKind::DecimalLiteral,
            Expression::StringLiteral { .. } => NodeKind::StringLiteral,
            Expression::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
            Expression::NullLiteral { .. } => NodeKind::NullLiteral,
            Expression::GenericLiteral { .. } => NodeKind::GenericLiteral,
            Expression::TimeLiteral { .. } => NodeKind::TimeLiteral,
            Expression::TimestampLiteral { .. } => NodeKind::TimestampLiteral,
            Expression::IntervalLiteral { .. } => NodeKind::IntervalLiteral,
            Expression::CurrentTime { .. } => NodeKind::CurrentTime,
            Expression::Parameter { .. } => NodeKind::Parameter,
            Expression::FieldReference { .. } => NodeKind::FieldReference,
            Expression::ArithmeticBinary { .. } => NodeKind::ArithmeticBinary,
            Expression::ArithmeticUnary { .. } => NodeKind::ArithmeticUnary,
            Expression::Comparison { .. } => NodeKind::Comparison,
            Expression::LogicalBinary { .. } => NodeKind::LogicalBinary,
            Expression::Not { .. } => NodeKind::Not,
            Expression::Between { .. } => NodeKind::Between,
            Expression::In { .. } => NodeKind::InPredicate,
            Expression::InList { .. } => NodeKind::InList,
            Expression::Like { .. } => NodeKind::Like,
            Expression::IsNull { .. } => NodeKind::IsNull,
            Expression::IsNotNull { .. } => NodeKind::IsNotNull,
            Expression::Exists { .. } => NodeKind::Exists,
            Expression::QuantifiedComparison { .. } => NodeKind::QuantifiedComparison,
            Expression::Subquery { .. } => NodeKind::SubqueryExpression,
            Expression::FunctionCall { .. } => NodeKind::FunctionCall,
            Expression::Cast { .. } => NodeKind::Cast,
            Expression::Extract { .. } => NodeKind::Extract,
            Expression::AtTimeZone { .. } => NodeKind::AtTimeZone,
            Expression::ArrayConstructor { .. } => NodeKind::ArrayConstructor,
            Expression::Subscript { .. } => NodeKind::Subscript,
            Expression::Coalesce { .. } => NodeKind::Coalesce,
            Expression::NullIf { .. } => NodeKind::NullIf,
            Expression::If { .. } => NodeKind::If,
            Expression::Try { .. } => NodeKind::Try,
            Expression::Bind { .. } => NodeKind::Bind,
            Expression::Lambda { .. } => NodeKind::Lambda,
            Expression::SimpleCase { .. } => NodeKind::SimpleCase,
            Expression::SearchedCase { .. } => NodeKind::SearchedCase,
            Expression::Row { .. } => NodeKind::Row,
            Expression::GroupingOperation { .. } => NodeKind::GroupingOperation,
        }
    }
}

impl SetOperation {
    pub fn kind(&self) -> NodeKind {
        match self {
            SetOperation::Union { .. } => NodeKind::Union,
            SetOperation::Intersect { .. } => NodeKind::Intersect,
            SetOperation::Except { .. } => NodeKind::Except,
        }
    }
}

impl Relation {
    pub fn kind(&self) -> NodeKind {
        match self {
            Relation::Table { .. } => NodeKind::Table,
            Relation::QuerySpecification { .. } => NodeKind::QuerySpecification,
            Relation::SetOperation(set_operation) => set_operation.kind(),
            Relation::Values { .. } => NodeKind::Values,
            Relation::TableSubquery { .. } => NodeKind::TableSubquery,
            Relation::Aliased { .. } => NodeKind::AliasedRelation,
            Relation::Sampled { .. } => NodeKind::SampledRelation,
            Relation::Join { .. } => NodeKind::Join,
            Relation::Unnest { .. } => NodeKind::Unnest,
            Relation::Lateral { .. } => NodeKind::Lateral,
        }
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Query(_) => NodeKind::Query,
            Statement::Insert { .. } => NodeKind::Insert,
            Statement::Delete { .. } => NodeKind::Delete,
            Statement::CreateTableAsSelect { .. } => NodeKind::CreateTableAsSelect,
            Statement::CreateView { .. } => NodeKind::CreateView,
            Statement::CreateTable { .. } => NodeKind::CreateTable,
            Statement::AddColumn { .. } => NodeKind::AddColumn,
            Statement::SetSession { .. } => NodeKind::SetSession,
            Statement::ShowPartitions { .. } => NodeKind::ShowPartitions,
            Statement::ShowColumns { .. } => NodeKind::ShowColumns,
            Statement::StartTransaction { .. } => NodeKind::StartTransaction,
            Statement::Explain { .. } => NodeKind::Explain,
            Statement::Prepare { .. } => NodeKind::Prepare,
            Statement::Execute { .. } => NodeKind::Execute,
            Statement::Deallocate { .. } => NodeKind::Deallocate,
            Statement::Grant { .. } => NodeKind::Grant,
            Statement::Revoke { .. } => NodeKind::Revoke,
            Statement::CreateSchema { .. } => NodeKind::CreateSchema,
            Statement::DropSchema { .. } => NodeKind::DropSchema,
            Statement::DropTable { .. } => NodeKind::DropTable,
            Statement::DropView { .. } => NodeKind::DropView,
            Statement::RenameTable { .. } => NodeKind::RenameTable,
            Statement::Use { .. } => NodeKind::Use,
            Statement::ShowTables { .. } => NodeKind::ShowTables,
            Statement::ShowSchemas { .. } => NodeKind::ShowSchemas,
            Statement::ShowCatalogs { .. } => NodeKind::ShowCatalogs,
            Statement::ShowSession { .. } => NodeKind::ShowSession,
            Statement::ShowFunctions { .. } => NodeKind::ShowFunctions,
            Statement::ResetSession { .. } => NodeKind::ResetSession,
            Statement::Commit { .. } => NodeKind::Commit,
            Statement::Rollback { .. } => NodeKind::Rollback,
        }
    }
}

impl SelectItem {
    pub fn kind(&self) -> NodeKind {
        match self {
            SelectItem::SingleColumn { .. } => NodeKind::SingleColumn,
            SelectItem::AllColumns { .. } => NodeKind::AllColumns,
        }
    }
}

impl GroupingElement {
    pub fn kind(&self) -> NodeKind {
        match self {
            GroupingElement::Simple { .. } => NodeKind::SimpleGroupBy,
            GroupingElement::Rollup { .. } => NodeKind::Rollup,
            GroupingElement::Cube { .. } => NodeKind::Cube,
            GroupingElement::GroupingSets { .. } => NodeKind::GroupingSets,
        }
    }
}

impl JoinCriteria {
    pub fn kind(&self) -> NodeKind {
        match self {
            JoinCriteria::On(_) => NodeKind::JoinOn,
            JoinCriteria::Using(_) => NodeKind::JoinUsing,
            JoinCriteria::Natural => NodeKind::NaturalJoin,
        }
    }
}

impl TableElement {
    pub fn kind(&self) -> NodeKind {
        match self {
            TableElement::Column(_) => NodeKind::ColumnDefinition,
            TableElement::Like(_) => NodeKind::LikeClause,
        }
    }
}

impl TransactionMode {
    pub fn kind(&self) -> NodeKind {
        match self {
            TransactionMode::Isolation { .. } => NodeKind::Isolation,
            TransactionMode::AccessMode { .. } => NodeKind::TransactionAccessMode,
        }
    }
}

impl ExplainOption {
    pub fn kind(&self) -> NodeKind {
        match self {
            ExplainOption::Format { .. } => NodeKind::ExplainFormat,
            ExplainOption::Type { .. } => NodeKind::ExplainType,
        }
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Statement(statement) => statement.kind(),
            Node::Query(_) => NodeKind::Query,
            Node::Relation(relation) => relation.kind(),
            Node::Expression(expression) => expression.kind(),
            Node::With(_) => NodeKind::With,
            Node::WithQuery(_) => NodeKind::WithQuery,
            Node::Select(_) => NodeKind::Select,
            Node::SelectItem(item) => item.kind(),
            Node::GroupBy(_) => NodeKind::GroupBy,
            Node::GroupingElement(element) => element.kind(),
            Node::OrderBy(_) => NodeKind::OrderBy,
            Node::SortItem(_) => NodeKind::SortItem,
            Node::Window(_) => NodeKind::Window,
            Node::WindowFrame(_) => NodeKind::WindowFrame,
            Node::FrameBound(_) => NodeKind::FrameBound,
            Node::WhenClause(_) => NodeKind::WhenClause,
            Node::JoinCriteria(criteria) => criteria.kind(),
            Node::Property(_) => NodeKind::Property,
            Node::TableElement(element) => element.kind(),
            Node::TransactionMode(mode) => mode.kind(),
            Node::ExplainOption(option) => option.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbrella_families_report_concrete_shape() {
        let except = Relation::SetOperation(SetOperation::Except {
            left: Box::new(Relation::Table {
                name: QualifiedName { parts: vec!["a".to_string()] },
                location: Location::none(),
            }),
            right: Box::new(Relation::Table {
                name: QualifiedName { parts: vec!["b".to_string()] },
                location: Location::none(),
            }),
            distinct: true,
            location: Location::none(),
        });
        assert_eq!(except.kind(), NodeKind::Except);
        assert_eq!(JoinCriteria::Natural.kind(), NodeKind::NaturalJoin);
        assert_eq!(
            Node::JoinCriteria(JoinCriteria::Using(vec![])).kind(),
            NodeKind::JoinUsing
        );
    }

    #[test]
    fn test_display_uses_variant_name() {
        assert_eq!(NodeKind::QuantifiedComparison.to_string(), "QuantifiedComparison");
        assert_eq!(NodeKind::Except.to_string(), "Except");
    }
}
