use std::fmt;

use serde::{Deserialize, Serialize};

pub use super::position::{Location, Position};

/// A bare name as written in the query: an alias, a column name, a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub value: String,
    /// Whether the name was written between double quotes.
    pub delimited: bool,
}

/// A dotted name such as `catalog.schema.table`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    pub parts: Vec<String>,
}

/// The value of a double literal.
///
/// Equality follows the literal's bits, with every NaN equal to every other
/// NaN, so a rebuilt `NaN` literal still equals its input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(pub f64);

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        (self.0.is_nan() && other.0.is_nan()) || self.0.to_bits() == other.0.to_bits()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.delimited {
            write!(f, "\"{}\"", self.value.replace('"', "\"\""))
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("."))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    IsDistinctFrom,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    And,
    Or,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    All,
    Any,
    Some,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ExtractField {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    DayOfWeek,
    DayOfYear,
    Hour,
    Minute,
    Second,
    TimezoneHour,
    TimezoneMinute,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum CurrentTimeFunction {
    Time,
    Date,
    Timestamp,
    LocalTime,
    LocalTimestamp,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum IntervalSign {
    Positive,
    Negative,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum SortOrdering {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum NullOrdering {
    First,
    Last,
    Undefined,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum WindowFrameType {
    Range,
    Rows,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum FrameBoundType {
    UnboundedPreceding,
    Preceding,
    CurrentRow,
    Following,
    UnboundedFollowing,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum JoinType {
    Cross,
    Inner,
    Left,
    Right,
    Full,
    /// Comma-separated relations in a FROM clause.
    Implicit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum SampleType {
    Bernoulli,
    System,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum IsolationLevel {
    Serializable,
    RepeatableRead,
    ReadCommitted,
    ReadUncommitted,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ExplainFormat {
    Text,
    Graphviz,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ExplainType {
    Logical,
    Distributed,
    Validate,
    Io,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum LikeOption {
    IncludingProperties,
    ExcludingProperties,
}

/// Scalar and boolean expressions, including predicates and literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Bare column or variable name (e.g., `a` or `"B"`).
    Identifier {
        value: String,
        delimited: bool,
        location: Location,
    },
    /// Field access on a row or qualified column (e.g., `o.ra`).
    Dereference {
        base: Box<Expression>,
        field: Ident,
        location: Location,
    },
    LongLiteral {
        value: i64,
        location: Location,
    },
    DoubleLiteral {
        value: Double,
        location: Location,
    },
    /// Exact decimal kept in its textual form (e.g., `DECIMAL '1.50'`).
    DecimalLiteral {
        value: String,
        location: Location,
    },
    StringLiteral {
        value: String,
        location: Location,
    },
    BooleanLiteral {
        value: bool,
        location: Location,
    },
    NullLiteral {
        location: Location,
    },
    /// Typed literal such as `DATE '2018-01-01'`.
    GenericLiteral {
        type_name: String,
        value: String,
        location: Location,
    },
    TimeLiteral {
        value: String,
        location: Location,
    },
    TimestampLiteral {
        value: String,
        location: Location,
    },
    /// `INTERVAL '3' DAY` or `INTERVAL '1-2' YEAR TO MONTH`.
    IntervalLiteral {
        value: String,
        sign: IntervalSign,
        start_field: IntervalField,
        end_field: Option<IntervalField>,
        location: Location,
    },
    /// `CURRENT_TIMESTAMP(3)` and friends.
    CurrentTime {
        function: CurrentTimeFunction,
        precision: Option<u32>,
        location: Location,
    },
    /// Positional `?` parameter of a prepared statement.
    Parameter {
        position: usize,
        location: Location,
    },
    /// Planner-internal reference to an input field by index.
    FieldReference {
        field_index: usize,
        location: Location,
    },
    ArithmeticBinary {
        op: ArithmeticOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Location,
    },
    ArithmeticUnary {
        sign: Sign,
        value: Box<Expression>,
        location: Location,
    },
    Comparison {
        op: ComparisonOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Location,
    },
    LogicalBinary {
        op: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        location: Location,
    },
    Not {
        value: Box<Expression>,
        location: Location,
    },
    Between {
        value: Box<Expression>,
        min: Box<Expression>,
        max: Box<Expression>,
        location: Location,
    },
    /// `value IN value_list`, where the list is an `InList` or a subquery.
    In {
        value: Box<Expression>,
        value_list: Box<Expression>,
        location: Location,
    },
    InList {
        values: Vec<Expression>,
        location: Location,
    },
    Like {
        value: Box<Expression>,
        pattern: Box<Expression>,
        escape: Option<Box<Expression>>,
        location: Location,
    },
    IsNull {
        value: Box<Expression>,
        location: Location,
    },
    IsNotNull {
        value: Box<Expression>,
        location: Location,
    },
    Exists {
        subquery: Box<Expression>,
        location: Location,
    },
    /// `value > ALL (subquery)` and similar.
    QuantifiedComparison {
        op: ComparisonOperator,
        quantifier: Quantifier,
        value: Box<Expression>,
        subquery: Box<Expression>,
        location: Location,
    },
    Subquery {
        query: Box<Query>,
        location: Location,
    },
    FunctionCall {
        name: QualifiedName,
        window: Option<Window>,
        filter: Option<Box<Expression>>,
        order_by: Option<OrderBy>,
        distinct: bool,
        arguments: Vec<Expression>,
        location: Location,
    },
    Cast {
        expression: Box<Expression>,
        type_name: String,
        safe: bool,
        type_only: bool,
        location: Location,
    },
    Extract {
        expression: Box<Expression>,
        field: ExtractField,
        location: Location,
    },
    AtTimeZone {
        value: Box<Expression>,
        time_zone: Box<Expression>,
        location: Location,
    },
    ArrayConstructor {
        values: Vec<Expression>,
        location: Location,
    },
    Subscript {
        base: Box<Expression>,
        index: Box<Expression>,
        location: Location,
    },
    Coalesce {
        operands: Vec<Expression>,
        location: Location,
    },
    NullIf {
        first: Box<Expression>,
        second: Box<Expression>,
        location: Location,
    },
    If {
        condition: Box<Expression>,
        true_value: Box<Expression>,
        false_value: Option<Box<Expression>>,
        location: Location,
    },
    Try {
        inner: Box<Expression>,
        location: Location,
    },
    /// Partial application of a lambda to leading values.
    Bind {
        values: Vec<Expression>,
        function: Box<Expression>,
        location: Location,
    },
    Lambda {
        arguments: Vec<Ident>,
        body: Box<Expression>,
        location: Location,
    },
    SimpleCase {
        operand: Box<Expression>,
        when_clauses: Vec<WhenClause>,
        default_value: Option<Box<Expression>>,
        location: Location,
    },
    SearchedCase {
        when_clauses: Vec<WhenClause>,
        default_value: Option<Box<Expression>>,
        location: Location,
    },
    Row {
        items: Vec<Expression>,
        location: Location,
    },
    /// `GROUPING(a, b)` inside an aggregation query.
    GroupingOperation {
        columns: Vec<Expression>,
        location: Location,
    },
}

/// A `WHEN operand THEN result` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    pub operand: Expression,
    pub result: Expression,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub sort_items: Vec<SortItem>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortItem {
    pub sort_key: Expression,
    pub ordering: SortOrdering,
    pub null_ordering: NullOrdering,
    pub location: Location,
}

/// An `OVER (...)` window specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub partition_by: Vec<Expression>,
    pub order_by: Option<OrderBy>,
    pub frame: Option<WindowFrame>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub frame_type: WindowFrameType,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
    pub location: Location,
}

/// One end of a window frame; `value` is present only for the
/// `n PRECEDING` and `n FOLLOWING` forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameBound {
    pub bound_type: FrameBoundType,
    pub value: Option<Box<Expression>>,
    pub location: Location,
}

/// A complete query: optional WITH clause, a body and trailing ORDER BY / LIMIT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub with: Option<With>,
    pub body: Relation,
    pub order_by: Option<OrderBy>,
    pub limit: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    pub recursive: bool,
    pub queries: Vec<WithQuery>,
    pub location: Location,
}

/// A named common table expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithQuery {
    pub name: Ident,
    pub query: Box<Query>,
    pub column_names: Option<Vec<Ident>>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,
    pub select_items: Vec<SelectItem>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectItem {
    /// `expression [AS alias]`
    SingleColumn {
        expression: Expression,
        alias: Option<Ident>,
        location: Location,
    },
    /// `*` or `prefix.*`
    AllColumns {
        prefix: Option<QualifiedName>,
        location: Location,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub distinct: bool,
    pub grouping_elements: Vec<GroupingElement>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupingElement {
    Simple {
        columns: Vec<Expression>,
        location: Location,
    },
    Rollup {
        columns: Vec<Expression>,
        location: Location,
    },
    Cube {
        columns: Vec<Expression>,
        location: Location,
    },
    GroupingSets {
        sets: Vec<Vec<Expression>>,
        location: Location,
    },
}

/// Set operations. `Union` and `Intersect` are n-ary over a relation list;
/// `Except` is strictly binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetOperation {
    Union {
        relations: Vec<Relation>,
        distinct: bool,
        location: Location,
    },
    Intersect {
        relations: Vec<Relation>,
        distinct: bool,
        location: Location,
    },
    Except {
        left: Box<Relation>,
        right: Box<Relation>,
        distinct: bool,
        location: Location,
    },
}

/// How the two sides of a join are matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinCriteria {
    On(Expression),
    Using(Vec<Ident>),
    Natural,
}

/// Anything that produces rows: tables, subqueries, joins, query bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Relation {
    Table {
        name: QualifiedName,
        location: Location,
    },
    /// A `SELECT ... FROM ... WHERE ...` block.
    QuerySpecification {
        select: Select,
        from: Option<Box<Relation>>,
        where_clause: Option<Expression>,
        group_by: Option<GroupBy>,
        having: Option<Expression>,
        order_by: Option<OrderBy>,
        limit: Option<String>,
        location: Location,
    },
    SetOperation(SetOperation),
    Values {
        rows: Vec<Expression>,
        location: Location,
    },
    /// A parenthesized query used as a relation.
    TableSubquery {
        query: Box<Query>,
        location: Location,
    },
    Aliased {
        relation: Box<Relation>,
        alias: Ident,
        column_names: Option<Vec<Ident>>,
        location: Location,
    },
    /// `relation TABLESAMPLE type (percentage)`
    Sampled {
        relation: Box<Relation>,
        sample_type: SampleType,
        percentage: Box<Expression>,
        location: Location,
    },
    Join {
        join_type: JoinType,
        left: Box<Relation>,
        right: Box<Relation>,
        criteria: Option<JoinCriteria>,
        location: Location,
    },
    Unnest {
        expressions: Vec<Expression>,
        with_ordinality: bool,
        location: Location,
    },
    Lateral {
        query: Box<Query>,
        location: Location,
    },
}

/// `name = value` in a WITH (...) property list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: Ident,
    pub value: Expression,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: Ident,
    pub type_name: String,
    pub properties: Vec<Property>,
    pub comment: Option<String>,
    pub location: Location,
}

/// `LIKE table [INCLUDING | EXCLUDING PROPERTIES]` inside CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeClause {
    pub table: QualifiedName,
    pub properties_option: Option<LikeOption>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableElement {
    Column(ColumnDefinition),
    Like(LikeClause),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransactionMode {
    Isolation {
        level: IsolationLevel,
        location: Location,
    },
    AccessMode {
        read_only: bool,
        location: Location,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExplainOption {
    Format {
        format: ExplainFormat,
        location: Location,
    },
    Type {
        explain_type: ExplainType,
        location: Location,
    },
}

/// Top-level statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Query(Box<Query>),
    Insert {
        target: QualifiedName,
        columns: Option<Vec<Ident>>,
        query: Box<Query>,
        location: Location,
    },
    /// `DELETE FROM table [WHERE ...]`; `table` is a `Relation::Table` in parser output.
    Delete {
        table: Box<Relation>,
        where_clause: Option<Expression>,
        location: Location,
    },
    CreateTableAsSelect {
        name: QualifiedName,
        query: Box<Query>,
        not_exists: bool,
        properties: Vec<Property>,
        with_data: bool,
        column_aliases: Option<Vec<Ident>>,
        comment: Option<String>,
        location: Location,
    },
    CreateView {
        name: QualifiedName,
        query: Box<Query>,
        replace: bool,
        location: Location,
    },
    CreateTable {
        name: QualifiedName,
        elements: Vec<TableElement>,
        not_exists: bool,
        properties: Vec<Property>,
        comment: Option<String>,
        location: Location,
    },
    AddColumn {
        name: QualifiedName,
        column: ColumnDefinition,
        location: Location,
    },
    SetSession {
        name: QualifiedName,
        value: Expression,
        location: Location,
    },
    ShowPartitions {
        table: QualifiedName,
        where_clause: Option<Expression>,
        order_by: Vec<SortItem>,
        limit: Option<String>,
        location: Location,
    },
    ShowColumns {
        table: QualifiedName,
        location: Location,
    },
    StartTransaction {
        modes: Vec<TransactionMode>,
        location: Location,
    },
    Explain {
        statement: Box<Statement>,
        analyze: bool,
        verbose: bool,
        options: Vec<ExplainOption>,
        location: Location,
    },
    Prepare {
        name: Ident,
        statement: Box<Statement>,
        location: Location,
    },
    Execute {
        name: Ident,
        parameters: Vec<Expression>,
        location: Location,
    },
    Deallocate {
        name: Ident,
        location: Location,
    },
    Grant {
        privileges: Option<Vec<String>>,
        table: QualifiedName,
        grantee: Ident,
        with_grant_option: bool,
        location: Location,
    },
    Revoke {
        grant_option_for: bool,
        privileges: Option<Vec<String>>,
        table: QualifiedName,
        grantee: Ident,
        location: Location,
    },
    CreateSchema {
        name: QualifiedName,
        not_exists: bool,
        properties: Vec<Property>,
        location: Location,
    },
    DropSchema {
        name: QualifiedName,
        exists: bool,
        cascade: bool,
        location: Location,
    },
    DropTable {
        name: QualifiedName,
        exists: bool,
        location: Location,
    },
    DropView {
        name: QualifiedName,
        exists: bool,
        location: Location,
    },
    RenameTable {
        source: QualifiedName,
        target: QualifiedName,
        location: Location,
    },
    Use {
        catalog: Option<Ident>,
        schema: Ident,
        location: Location,
    },
    ShowTables {
        schema: Option<QualifiedName>,
        like_pattern: Option<String>,
        location: Location,
    },
    ShowSchemas {
        catalog: Option<Ident>,
        like_pattern: Option<String>,
        location: Location,
    },
    ShowCatalogs {
        like_pattern: Option<String>,
        location: Location,
    },
    ShowSession {
        location: Location,
    },
    ShowFunctions {
        location: Location,
    },
    ResetSession {
        name: QualifiedName,
        location: Location,
    },
    Commit {
        location: Location,
    },
    Rollback {
        location: Location,
    },
}

/// Any node of the taxonomy, grouped by family.
///
/// This is the input and output type of [`Rebuilder::process`], which always
/// returns a node of the same variant it was given.
///
/// [`Rebuilder::process`]: crate::ir::rebuilder::Rebuilder::process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Statement(Statement),
    Query(Query),
    Relation(Relation),
    Expression(Expression),
    With(With),
    WithQuery(WithQuery),
    Select(Select),
    SelectItem(SelectItem),
    GroupBy(GroupBy),
    GroupingElement(GroupingElement),
    OrderBy(OrderBy),
    SortItem(SortItem),
    Window(Window),
    WindowFrame(WindowFrame),
    FrameBound(FrameBound),
    WhenClause(WhenClause),
    JoinCriteria(JoinCriteria),
    Property(Property),
    TableElement(TableElement),
    TransactionMode(TransactionMode),
    ExplainOption(ExplainOption),
}
