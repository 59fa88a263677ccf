use tracing::{debug, trace};

use super::combinators::{opt, seq};
use crate::ir::error::UnsupportedNodeKind;
use crate::ir::sql_node::*;

/// Runs one node's rule between the visit hooks.
fn visited<R, T>(
    pass: &R,
    kind: NodeKind,
    ctx: &mut R::Context,
    rule: impl FnOnce(&mut R::Context) -> Result<T, R::Error>,
) -> Result<T, R::Error>
where
    R: Rebuilder + ?Sized,
{
    pass.pre_visit(kind, ctx)?;
    trace!(%kind, "rebuilding node");
    let rebuilt = rule(ctx)?;
    pass.post_visit(kind, ctx)?;
    Ok(rebuilt)
}

fn unsupported<T, E: From<UnsupportedNodeKind>>(kind: NodeKind) -> Result<T, E> {
    debug!(%kind, "no reconstruction rule for node kind");
    Err(UnsupportedNodeKind::new(kind).into())
}

/// Rebuilds SQL trees node by node, threading a pass-defined context.
///
/// Every node kind has a `rebuild_*` rule with a default implementation that
/// rebuilds the node's children through the matching `process_*` dispatcher
/// and constructs a fresh node of the same kind. Scalar fields are copied and
/// source locations are dropped. Identifiers and literals are leaves: their
/// default rule returns a copy of the input, location included.
///
/// A pass overrides only the rules for the kinds it rewrites; everything else
/// falls through to the defaults, so with no overrides at all the rebuilt tree
/// is structurally equal to the input.
///
/// The context is handed to every call as `&mut Self::Context` and is never
/// inspected by the engine. A rule may pass a different context to a subtree.
///
/// A handful of kinds (some expressions and administrative statements) have
/// no default rule and fail with [`UnsupportedNodeKind`] unless overridden.
pub trait Rebuilder {
    type Context;
    type Error: From<UnsupportedNodeKind>;

    /// Entry point: rebuilds `root` and everything below it.
    ///
    /// Either the whole tree is rebuilt or an error is returned; no partial
    /// tree escapes.
    fn rebuild(&self, root: &Node, ctx: &mut Self::Context) -> Result<Node, Self::Error> {
        debug!(kind = %root.kind(), "rebuilding tree");
        self.process(root, ctx)
    }

    /// Called once before each visited node's rule runs.
    fn pre_visit(&self, _kind: NodeKind, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once after each visited node's rule succeeds.
    fn post_visit(&self, _kind: NodeKind, _ctx: &mut Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Dispatches any node to its family dispatcher. The result is always
    /// the same `Node` variant as the input.
    fn process(&self, node: &Node, ctx: &mut Self::Context) -> Result<Node, Self::Error> {
        match node {
            Node::Statement(n) => self.process_statement(n, ctx).map(Node::Statement),
            Node::Query(n) => self.process_query(n, ctx).map(Node::Query),
            Node::Relation(n) => self.process_relation(n, ctx).map(Node::Relation),
            Node::Expression(n) => self.process_expression(n, ctx).map(Node::Expression),
            Node::With(n) => self.process_with(n, ctx).map(Node::With),
            Node::WithQuery(n) => self.process_with_query(n, ctx).map(Node::WithQuery),
            Node::Select(n) => self.process_select(n, ctx).map(Node::Select),
            Node::SelectItem(n) => self.process_select_item(n, ctx).map(Node::SelectItem),
            Node::GroupBy(n) => self.process_group_by(n, ctx).map(Node::GroupBy),
            Node::GroupingElement(n) => self.process_grouping_element(n, ctx).map(Node::GroupingElement),
            Node::OrderBy(n) => self.process_order_by(n, ctx).map(Node::OrderBy),
            Node::SortItem(n) => self.process_sort_item(n, ctx).map(Node::SortItem),
            Node::Window(n) => self.process_window(n, ctx).map(Node::Window),
            Node::WindowFrame(n) => self.process_window_frame(n, ctx).map(Node::WindowFrame),
            Node::FrameBound(n) => self.process_frame_bound(n, ctx).map(Node::FrameBound),
            Node::WhenClause(n) => self.process_when_clause(n, ctx).map(Node::WhenClause),
            Node::JoinCriteria(n) => self.process_join_criteria(n, ctx).map(Node::JoinCriteria),
            Node::Property(n) => self.process_property(n, ctx).map(Node::Property),
            Node::TableElement(n) => self.process_table_element(n, ctx).map(Node::TableElement),
            Node::TransactionMode(n) => self.process_transaction_mode(n, ctx).map(Node::TransactionMode),
            Node::ExplainOption(n) => self.process_explain_option(n, ctx).map(Node::ExplainOption),
        }
    }

    // ------------------------------------------------------------------
    // Family dispatchers
    // ------------------------------------------------------------------

    fn process_statement(&self, node: &Statement, ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| match node {
            Statement::Query(query) => self.rebuild_query(query, ctx).map(|q| Statement::Query(Box::new(q))),
            Statement::Insert { target, columns, query, .. } => self.rebuild_insert(target, columns, query, ctx),
            Statement::Delete { table, where_clause, .. } => {
                self.rebuild_delete(table, where_clause.as_ref(), ctx)
            }
            Statement::CreateTableAsSelect {
                name,
                query,
                not_exists,
                properties,
                with_data,
                column_aliases,
                comment,
                ..
            } => self.rebuild_create_table_as_select(
                name,
                query,
                *not_exists,
                properties,
                *with_data,
                column_aliases,
                comment,
                ctx,
            ),
            Statement::CreateView { name, query, replace, .. } => self.rebuild_create_view(name, query, *replace, ctx),
            Statement::CreateTable { name, elements, not_exists, properties, comment, .. } => {
                self.rebuild_create_table(name, elements, *not_exists, properties, comment, ctx)
            }
            Statement::AddColumn { name, column, .. } => self.rebuild_add_column(name, column, ctx),
            Statement::SetSession { name, value, .. } => self.rebuild_set_session(name, value, ctx),
            Statement::ShowPartitions { table, where_clause, order_by, limit, .. } => {
                self.rebuild_show_partitions(table, where_clause.as_ref(), order_by, limit, ctx)
            }
            Statement::ShowColumns { table, .. } => self.rebuild_show_columns(table, ctx),
            Statement::StartTransaction { modes, .. } => self.rebuild_start_transaction(modes, ctx),
            Statement::Explain { statement, analyze, verbose, options, .. } => {
                self.rebuild_explain(statement, *analyze, *verbose, options, ctx)
            }
            Statement::Prepare { .. } => self.rebuild_prepare(node, ctx),
            Statement::Execute { .. } => self.rebuild_execute(node, ctx),
            Statement::Deallocate { .. } => self.rebuild_deallocate(node, ctx),
            Statement::Grant { .. } => self.rebuild_grant(node, ctx),
            Statement::Revoke { .. } => self.rebuild_revoke(node, ctx),
            Statement::CreateSchema { .. } => self.rebuild_create_schema(node, ctx),
            Statement::DropSchema { .. } => self.rebuild_drop_schema(node, ctx),
            Statement::DropTable { .. } => self.rebuild_drop_table(node, ctx),
            Statement::DropView { .. } => self.rebuild_drop_view(node, ctx),
            Statement::RenameTable { .. } => self.rebuild_rename_table(node, ctx),
            Statement::Use { .. } => self.rebuild_use(node, ctx),
            Statement::ShowTables { .. } => self.rebuild_show_tables(node, ctx),
            Statement::ShowSchemas { .. } => self.rebuild_show_schemas(node, ctx),
            Statement::ShowCatalogs { .. } => self.rebuild_show_catalogs(node, ctx),
            Statement::ShowSession { .. } => self.rebuild_show_session(node, ctx),
            Statement::ShowFunctions { .. } => self.rebuild_show_functions(node, ctx),
            Statement::ResetSession { .. } => self.rebuild_reset_session(node, ctx),
            Statement::Commit { .. } => self.rebuild_commit(node, ctx),
            Statement::Rollback { .. } => self.rebuild_rollback(node, ctx),
        })
    }

    fn process_query(&self, node: &Query, ctx: &mut Self::Context) -> Result<Query, Self::Error> {
        visited(self, NodeKind::Query, ctx, |ctx| self.rebuild_query(node, ctx))
    }

    fn process_relation(&self, node: &Relation, ctx: &mut Self::Context) -> Result<Relation, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| match node {
            Relation::Table { name, .. } => self.rebuild_table(node, name, ctx),
            Relation::QuerySpecification { select, from, where_clause, group_by, having, order_by, limit, .. } => {
                self.rebuild_query_specification(
                    select,
                    from.as_deref(),
                    where_clause.as_ref(),
                    group_by.as_ref(),
                    having.as_ref(),
                    order_by.as_ref(),
                    limit,
                    ctx,
                )
            }
            Relation::SetOperation(set_operation) => {
                self.rebuild_set_operation(set_operation, ctx).map(Relation::SetOperation)
            }
            Relation::Values { rows, .. } => self.rebuild_values(rows, ctx),
            Relation::TableSubquery { query, .. } => self.rebuild_table_subquery(query, ctx),
            Relation::Aliased { relation, alias, column_names, .. } => {
                self.rebuild_aliased_relation(relation, alias, column_names, ctx)
            }
            Relation::Sampled { relation, sample_type, percentage, .. } => {
                self.rebuild_sampled_relation(relation, *sample_type, percentage, ctx)
            }
            Relation::Join { join_type, left, right, criteria, .. } => {
                self.rebuild_join(*join_type, left, right, criteria.as_ref(), ctx)
            }
            Relation::Unnest { expressions, with_ordinality, .. } => {
                self.rebuild_unnest(expressions, *with_ordinality, ctx)
            }
            Relation::Lateral { query, .. } => self.rebuild_lateral(query, ctx),
        })
    }

    fn process_expression(&self, node: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| match node {
            Expression::Identifier { value, delimited, .. } => self.rebuild_identifier(node, value, *delimited, ctx),
            Expression::Dereference { base, field, .. } => self.rebuild_dereference(base, field, ctx),
            Expression::LongLiteral { value, .. } => self.rebuild_long_literal(node, *value, ctx),
            Expression::DoubleLiteral { value, .. } => self.rebuild_double_literal(node, value.0, ctx),
            Expression::DecimalLiteral { value, .. } => self.rebuild_decimal_literal(node, value, ctx),
            Expression::StringLiteral { value, .. } => self.rebuild_string_literal(node, value, ctx),
            Expression::BooleanLiteral { value, .. } => self.rebuild_boolean_literal(node, *value, ctx),
            Expression::NullLiteral { .. } => self.rebuild_null_literal(node, ctx),
            Expression::GenericLiteral { .. } => self.rebuild_generic_literal(node, ctx),
            Expression::TimeLiteral { .. } => self.rebuild_time_literal(node, ctx),
            Expression::TimestampLiteral { .. } => self.rebuild_timestamp_literal(node, ctx),
            Expression::IntervalLiteral { .. } => self.rebuild_interval_literal(node, ctx),
            Expression::CurrentTime { .. } => self.rebuild_current_time(node, ctx),
            Expression::Parameter { .. } => self.rebuild_parameter(node, ctx),
            Expression::FieldReference { .. } => self.rebuild_field_reference(node, ctx),
            Expression::ArithmeticBinary { op, left, right, .. } => self.rebuild_arithmetic_binary(*op, left, right, ctx),
            Expression::ArithmeticUnary { sign, value, .. } => self.rebuild_arithmetic_unary(*sign, value, ctx),
            Expression::Comparison { op, left, right, .. } => self.rebuild_comparison(*op, left, right, ctx),
            Expression::LogicalBinary { op, left, right, .. } => self.rebuild_logical_binary(*op, left, right, ctx),
            Expression::Not { value, .. } => self.rebuild_not(value, ctx),
            Expression::Between { value, min, max, .. } => self.rebuild_between(value, min, max, ctx),
            Expression::In { value, value_list, .. } => self.rebuild_in_predicate(value, value_list, ctx),
            Expression::InList { values, .. } => self.rebuild_in_list(values, ctx),
            Expression::Like { value, pattern, escape, .. } => {
                self.rebuild_like(value, pattern, escape.as_deref(), ctx)
            }
            Expression::IsNull { value, .. } => self.rebuild_is_null(value, ctx),
            Expression::IsNotNull { value, .. } => self.rebuild_is_not_null(value, ctx),
            Expression::Exists { subquery, .. } => self.rebuild_exists(subquery, ctx),
            Expression::QuantifiedComparison { op, quantifier, value, subquery, .. } => {
                self.rebuild_quantified_comparison(*op, *quantifier, value, subquery, ctx)
            }
            Expression::Subquery { query, .. } => self.rebuild_subquery_expression(query, ctx),
            Expression::FunctionCall { name, window, filter, order_by, distinct, arguments, .. } => self
                .rebuild_function_call(
                    name,
                    window.as_ref(),
                    filter.as_deref(),
                    order_by.as_ref(),
                    *distinct,
                    arguments,
                    ctx,
                ),
            Expression::Cast { expression, type_name, safe, type_only, .. } => {
                self.rebuild_cast(expression, type_name, *safe, *type_only, ctx)
            }
            Expression::Extract { expression, field, .. } => self.rebuild_extract(expression, *field, ctx),
            Expression::AtTimeZone { value, time_zone, .. } => self.rebuild_at_time_zone(value, time_zone, ctx),
            Expression::ArrayConstructor { values, .. } => self.rebuild_array_constructor(values, ctx),
            Expression::Subscript { base, index, .. } => self.rebuild_subscript(base, index, ctx),
            Expression::Coalesce { operands, .. } => self.rebuild_coalesce(operands, ctx),
            Expression::NullIf { first, second, .. } => self.rebuild_null_if(first, second, ctx),
            Expression::If { condition, true_value, false_value, .. } => {
                self.rebuild_if(condition, true_value, false_value.as_deref(), ctx)
            }
            Expression::Try { inner, .. } => self.rebuild_try(inner, ctx),
            Expression::Bind { values, function, .. } => self.rebuild_bind(values, function, ctx),
            Expression::Lambda { arguments, body, .. } => self.rebuild_lambda(arguments, body, ctx),
            Expression::SimpleCase { operand, when_clauses, default_value, .. } => {
                self.rebuild_simple_case(operand, when_clauses, default_value.as_deref(), ctx)
            }
            Expression::SearchedCase { when_clauses, default_value, .. } => {
                self.rebuild_searched_case(when_clauses, default_value.as_deref(), ctx)
            }
            Expression::Row { items, .. } => self.rebuild_row(items, ctx),
            Expression::GroupingOperation { columns, .. } => self.rebuild_grouping_operation(columns, ctx),
        })
    }

    fn process_with(&self, node: &With, ctx: &mut Self::Context) -> Result<With, Self::Error> {
        visited(self, NodeKind::With, ctx, |ctx| self.rebuild_with(node, ctx))
    }

    fn process_with_query(&self, node: &WithQuery, ctx: &mut Self::Context) -> Result<WithQuery, Self::Error> {
        visited(self, NodeKind::WithQuery, ctx, |ctx| self.rebuild_with_query(node, ctx))
    }

    fn process_select(&self, node: &Select, ctx: &mut Self::Context) -> Result<Select, Self::Error> {
        visited(self, NodeKind::Select, ctx, |ctx| self.rebuild_select(node, ctx))
    }

    fn process_select_item(&self, node: &SelectItem, ctx: &mut Self::Context) -> Result<SelectItem, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| self.rebuild_select_item(node, ctx))
    }

    fn process_group_by(&self, node: &GroupBy, ctx: &mut Self::Context) -> Result<GroupBy, Self::Error> {
        visited(self, NodeKind::GroupBy, ctx, |ctx| self.rebuild_group_by(node, ctx))
    }

    fn process_grouping_element(
        &self,
        node: &GroupingElement,
        ctx: &mut Self::Context,
    ) -> Result<GroupingElement, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| self.rebuild_grouping_element(node, ctx))
    }

    fn process_order_by(&self, node: &OrderBy, ctx: &mut Self::Context) -> Result<OrderBy, Self::Error> {
        visited(self, NodeKind::OrderBy, ctx, |ctx| self.rebuild_order_by(node, ctx))
    }

    fn process_sort_item(&self, node: &SortItem, ctx: &mut Self::Context) -> Result<SortItem, Self::Error> {
        visited(self, NodeKind::SortItem, ctx, |ctx| self.rebuild_sort_item(node, ctx))
    }

    fn process_window(&self, node: &Window, ctx: &mut Self::Context) -> Result<Window, Self::Error> {
        visited(self, NodeKind::Window, ctx, |ctx| self.rebuild_window(node, ctx))
    }

    fn process_window_frame(&self, node: &WindowFrame, ctx: &mut Self::Context) -> Result<WindowFrame, Self::Error> {
        visited(self, NodeKind::WindowFrame, ctx, |ctx| self.rebuild_window_frame(node, ctx))
    }

    fn process_frame_bound(&self, node: &FrameBound, ctx: &mut Self::Context) -> Result<FrameBound, Self::Error> {
        visited(self, NodeKind::FrameBound, ctx, |ctx| self.rebuild_frame_bound(node, ctx))
    }

    fn process_when_clause(&self, node: &WhenClause, ctx: &mut Self::Context) -> Result<WhenClause, Self::Error> {
        visited(self, NodeKind::WhenClause, ctx, |ctx| self.rebuild_when_clause(node, ctx))
    }

    fn process_join_criteria(
        &self,
        node: &JoinCriteria,
        ctx: &mut Self::Context,
    ) -> Result<JoinCriteria, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| self.rebuild_join_criteria(node, ctx))
    }

    fn process_property(&self, node: &Property, ctx: &mut Self::Context) -> Result<Property, Self::Error> {
        visited(self, NodeKind::Property, ctx, |ctx| self.rebuild_property(node, ctx))
    }

    /// Routes a table element to the dispatcher of its concrete shape; the
    /// element itself is visited there, once.
    fn process_table_element(
        &self,
        node: &TableElement,
        ctx: &mut Self::Context,
    ) -> Result<TableElement, Self::Error> {
        match node {
            TableElement::Column(column) => self.process_column_definition(column, ctx).map(TableElement::Column),
            TableElement::Like(like) => self.process_like_clause(like, ctx).map(TableElement::Like),
        }
    }

    fn process_column_definition(
        &self,
        node: &ColumnDefinition,
        ctx: &mut Self::Context,
    ) -> Result<ColumnDefinition, Self::Error> {
        visited(self, NodeKind::ColumnDefinition, ctx, |ctx| self.rebuild_column_definition(node, ctx))
    }

    fn process_like_clause(&self, node: &LikeClause, ctx: &mut Self::Context) -> Result<LikeClause, Self::Error> {
        visited(self, NodeKind::LikeClause, ctx, |ctx| self.rebuild_like_clause(node, ctx))
    }

    fn process_transaction_mode(
        &self,
        node: &TransactionMode,
        ctx: &mut Self::Context,
    ) -> Result<TransactionMode, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| self.rebuild_transaction_mode(node, ctx))
    }

    fn process_explain_option(
        &self,
        node: &ExplainOption,
        ctx: &mut Self::Context,
    ) -> Result<ExplainOption, Self::Error> {
        visited(self, node.kind(), ctx, |ctx| self.rebuild_explain_option(node, ctx))
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn rebuild_insert(
        &self,
        target: &QualifiedName,
        columns: &Option<Vec<Ident>>,
        query: &Query,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        Ok(Statement::Insert {
            target: target.clone(),
            columns: columns.clone(),
            query: Box::new(self.process_query(query, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_delete(
        &self,
        table: &Relation,
        where_clause: Option<&Expression>,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        let table = self.process_relation(table, ctx)?;
        let where_clause = opt(where_clause, |e| self.process_expression(e, ctx))?;
        Ok(Statement::Delete { table: Box::new(table), where_clause, location: Location::none() })
    }

    #[allow(clippy::too_many_arguments)]
    fn rebuild_create_table_as_select(
        &self,
        name: &QualifiedName,
        query: &Query,
        not_exists: bool,
        properties: &[Property],
        with_data: bool,
        column_aliases: &Option<Vec<Ident>>,
        comment: &Option<String>,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        let query = self.process_query(query, ctx)?;
        let properties = seq(properties, |p| self.process_property(p, ctx))?;
        Ok(Statement::CreateTableAsSelect {
            name: name.clone(),
            query: Box::new(query),
            not_exists,
            properties,
            with_data,
            column_aliases: column_aliases.clone(),
            comment: comment.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_create_view(
        &self,
        name: &QualifiedName,
        query: &Query,
        replace: bool,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        Ok(Statement::CreateView {
            name: name.clone(),
            query: Box::new(self.process_query(query, ctx)?),
            replace,
            location: Location::none(),
        })
    }

    fn rebuild_create_table(
        &self,
        name: &QualifiedName,
        elements: &[TableElement],
        not_exists: bool,
        properties: &[Property],
        comment: &Option<String>,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        let elements = seq(elements, |e| self.process_table_element(e, ctx))?;
        let properties = seq(properties, |p| self.process_property(p, ctx))?;
        Ok(Statement::CreateTable {
            name: name.clone(),
            elements,
            not_exists,
            properties,
            comment: comment.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_add_column(
        &self,
        name: &QualifiedName,
        column: &ColumnDefinition,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        Ok(Statement::AddColumn {
            name: name.clone(),
            column: self.process_column_definition(column, ctx)?,
            location: Location::none(),
        })
    }

    fn rebuild_set_session(
        &self,
        name: &QualifiedName,
        value: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        Ok(Statement::SetSession {
            name: name.clone(),
            value: self.process_expression(value, ctx)?,
            location: Location::none(),
        })
    }

    fn rebuild_show_partitions(
        &self,
        table: &QualifiedName,
        where_clause: Option<&Expression>,
        order_by: &[SortItem],
        limit: &Option<String>,
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        let where_clause = opt(where_clause, |e| self.process_expression(e, ctx))?;
        let order_by = seq(order_by, |s| self.process_sort_item(s, ctx))?;
        Ok(Statement::ShowPartitions {
            table: table.clone(),
            where_clause,
            order_by,
            limit: limit.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_show_columns(&self, table: &QualifiedName, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        Ok(Statement::ShowColumns { table: table.clone(), location: Location::none() })
    }

    fn rebuild_start_transaction(
        &self,
        modes: &[TransactionMode],
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        Ok(Statement::StartTransaction {
            modes: seq(modes, |m| self.process_transaction_mode(m, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_explain(
        &self,
        statement: &Statement,
        analyze: bool,
        verbose: bool,
        options: &[ExplainOption],
        ctx: &mut Self::Context,
    ) -> Result<Statement, Self::Error> {
        let statement = self.process_statement(statement, ctx)?;
        let options = seq(options, |o| self.process_explain_option(o, ctx))?;
        Ok(Statement::Explain {
            statement: Box::new(statement),
            analyze,
            verbose,
            options,
            location: Location::none(),
        })
    }

    // Statements without a default rule. Override to support them.

    fn rebuild_prepare(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_execute(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_deallocate(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_grant(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_revoke(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_create_schema(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_drop_schema(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_drop_table(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_drop_view(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_rename_table(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_use(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_show_tables(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_show_schemas(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_show_catalogs(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_show_session(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_show_functions(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_reset_session(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_commit(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_rollback(&self, node: &Statement, _ctx: &mut Self::Context) -> Result<Statement, Self::Error> {
        unsupported(node.kind())
    }

    // ------------------------------------------------------------------
    // Queries and relations
    // ------------------------------------------------------------------

    /// Rebuilds the optional WITH clause, the body, and the optional ORDER BY.
    fn rebuild_query(&self, node: &Query, ctx: &mut Self::Context) -> Result<Query, Self::Error> {
        let with = opt(node.with.as_ref(), |w| self.process_with(w, ctx))?;
        let body = self.process_relation(&node.body, ctx)?;
        let order_by = opt(node.order_by.as_ref(), |o| self.process_order_by(o, ctx))?;
        Ok(Query { with, body, order_by, limit: node.limit.clone(), location: Location::none() })
    }

    fn rebuild_with(&self, node: &With, ctx: &mut Self::Context) -> Result<With, Self::Error> {
        Ok(With {
            recursive: node.recursive,
            queries: seq(&node.queries, |q| self.process_with_query(q, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_with_query(&self, node: &WithQuery, ctx: &mut Self::Context) -> Result<WithQuery, Self::Error> {
        Ok(WithQuery {
            name: node.name.clone(),
            query: Box::new(self.process_query(&node.query, ctx)?),
            column_names: node.column_names.clone(),
            location: Location::none(),
        })
    }

    /// Tables carry only a name, which is copied.
    fn rebuild_table(
        &self,
        _node: &Relation,
        name: &QualifiedName,
        _ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        Ok(Relation::Table { name: name.clone(), location: Location::none() })
    }

    #[allow(clippy::too_many_arguments)]
    fn rebuild_query_specification(
        &self,
        select: &Select,
        from: Option<&Relation>,
        where_clause: Option<&Expression>,
        group_by: Option<&GroupBy>,
        having: Option<&Expression>,
        order_by: Option<&OrderBy>,
        limit: &Option<String>,
        ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        let select = self.process_select(select, ctx)?;
        let from = opt(from, |r| self.process_relation(r, ctx))?;
        let where_clause = opt(where_clause, |e| self.process_expression(e, ctx))?;
        let group_by = opt(group_by, |g| self.process_group_by(g, ctx))?;
        let having = opt(having, |e| self.process_expression(e, ctx))?;
        let order_by = opt(order_by, |o| self.process_order_by(o, ctx))?;
        Ok(Relation::QuerySpecification {
            select,
            from: from.map(Box::new),
            where_clause,
            group_by,
            having,
            order_by,
            limit: limit.clone(),
            location: Location::none(),
        })
    }

    /// Union and intersect rebuild their relation lists; except rebuilds its
    /// fixed left/right pair.
    fn rebuild_set_operation(
        &self,
        node: &SetOperation,
        ctx: &mut Self::Context,
    ) -> Result<SetOperation, Self::Error> {
        match node {
            SetOperation::Union { relations, distinct, .. } => Ok(SetOperation::Union {
                relations: seq(relations, |r| self.process_relation(r, ctx))?,
                distinct: *distinct,
                location: Location::none(),
            }),
            SetOperation::Intersect { relations, distinct, .. } => Ok(SetOperation::Intersect {
                relations: seq(relations, |r| self.process_relation(r, ctx))?,
                distinct: *distinct,
                location: Location::none(),
            }),
            SetOperation::Except { left, right, distinct, .. } => {
                let left = self.process_relation(left, ctx)?;
                let right = self.process_relation(right, ctx)?;
                Ok(SetOperation::Except {
                    left: Box::new(left),
                    right: Box::new(right),
                    distinct: *distinct,
                    location: Location::none(),
                })
            }
        }
    }

    fn rebuild_values(&self, rows: &[Expression], ctx: &mut Self::Context) -> Result<Relation, Self::Error> {
        Ok(Relation::Values {
            rows: seq(rows, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_table_subquery(&self, query: &Query, ctx: &mut Self::Context) -> Result<Relation, Self::Error> {
        Ok(Relation::TableSubquery {
            query: Box::new(self.process_query(query, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_aliased_relation(
        &self,
        relation: &Relation,
        alias: &Ident,
        column_names: &Option<Vec<Ident>>,
        ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        Ok(Relation::Aliased {
            relation: Box::new(self.process_relation(relation, ctx)?),
            alias: alias.clone(),
            column_names: column_names.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_sampled_relation(
        &self,
        relation: &Relation,
        sample_type: SampleType,
        percentage: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        let relation = self.process_relation(relation, ctx)?;
        let percentage = self.process_expression(percentage, ctx)?;
        Ok(Relation::Sampled {
            relation: Box::new(relation),
            sample_type,
            percentage: Box::new(percentage),
            location: Location::none(),
        })
    }

    /// Rebuilds a join from its two operands and its criteria.
    ///
    /// # Arguments
    /// * join_type - Copied verbatim.
    /// * left - Left operand, always rebuilt.
    /// * right - Right operand, always rebuilt.
    /// * criteria - Absent for CROSS and implicit joins; only rebuilt when present.
    ///
    /// # Returns
    /// A new join of the same type.
    fn rebuild_join(
        &self,
        join_type: JoinType,
        left: &Relation,
        right: &Relation,
        criteria: Option<&JoinCriteria>,
        ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        let left = self.process_relation(left, ctx)?;
        let right = self.process_relation(right, ctx)?;
        let criteria = opt(criteria, |c| self.process_join_criteria(c, ctx))?;
        Ok(Relation::Join {
            join_type,
            left: Box::new(left),
            right: Box::new(right),
            criteria,
            location: Location::none(),
        })
    }

    /// ON rebuilds its expression; USING copies its column list; NATURAL has
    /// nothing to rebuild.
    fn rebuild_join_criteria(
        &self,
        node: &JoinCriteria,
        ctx: &mut Self::Context,
    ) -> Result<JoinCriteria, Self::Error> {
        match node {
            JoinCriteria::On(expression) => Ok(JoinCriteria::On(self.process_expression(expression, ctx)?)),
            JoinCriteria::Using(columns) => Ok(JoinCriteria::Using(columns.clone())),
            JoinCriteria::Natural => Ok(JoinCriteria::Natural),
        }
    }

    fn rebuild_unnest(
        &self,
        expressions: &[Expression],
        with_ordinality: bool,
        ctx: &mut Self::Context,
    ) -> Result<Relation, Self::Error> {
        Ok(Relation::Unnest {
            expressions: seq(expressions, |e| self.process_expression(e, ctx))?,
            with_ordinality,
            location: Location::none(),
        })
    }

    fn rebuild_lateral(&self, query: &Query, ctx: &mut Self::Context) -> Result<Relation, Self::Error> {
        Ok(Relation::Lateral {
            query: Box::new(self.process_query(query, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_select(&self, node: &Select, ctx: &mut Self::Context) -> Result<Select, Self::Error> {
        Ok(Select {
            distinct: node.distinct,
            select_items: seq(&node.select_items, |i| self.process_select_item(i, ctx))?,
            location: Location::none(),
        })
    }

    /// A single column rebuilds its expression and keeps its alias; `*` or
    /// `prefix.*` has no children.
    fn rebuild_select_item(&self, node: &SelectItem, ctx: &mut Self::Context) -> Result<SelectItem, Self::Error> {
        match node {
            SelectItem::SingleColumn { expression, alias, .. } => Ok(SelectItem::SingleColumn {
                expression: self.process_expression(expression, ctx)?,
                alias: alias.clone(),
                location: Location::none(),
            }),
            SelectItem::AllColumns { prefix, .. } => {
                Ok(SelectItem::AllColumns { prefix: prefix.clone(), location: Location::none() })
            }
        }
    }

    fn rebuild_group_by(&self, node: &GroupBy, ctx: &mut Self::Context) -> Result<GroupBy, Self::Error> {
        Ok(GroupBy {
            distinct: node.distinct,
            grouping_elements: seq(&node.grouping_elements, |g| self.process_grouping_element(g, ctx))?,
            location: Location::none(),
        })
    }

    /// Every grouping element shape is rebuilt, including the nested sets of
    /// GROUPING SETS.
    fn rebuild_grouping_element(
        &self,
        node: &GroupingElement,
        ctx: &mut Self::Context,
    ) -> Result<GroupingElement, Self::Error> {
        match node {
            GroupingElement::Simple { columns, .. } => Ok(GroupingElement::Simple {
                columns: seq(columns, |e| self.process_expression(e, ctx))?,
                location: Location::none(),
            }),
            GroupingElement::Rollup { columns, .. } => Ok(GroupingElement::Rollup {
                columns: seq(columns, |e| self.process_expression(e, ctx))?,
                location: Location::none(),
            }),
            GroupingElement::Cube { columns, .. } => Ok(GroupingElement::Cube {
                columns: seq(columns, |e| self.process_expression(e, ctx))?,
                location: Location::none(),
            }),
            GroupingElement::GroupingSets { sets, .. } => Ok(GroupingElement::GroupingSets {
                sets: seq(sets, |set| seq(set, |e| self.process_expression(e, ctx)))?,
                location: Location::none(),
            }),
        }
    }

    fn rebuild_order_by(&self, node: &OrderBy, ctx: &mut Self::Context) -> Result<OrderBy, Self::Error> {
        Ok(OrderBy {
            sort_items: seq(&node.sort_items, |s| self.process_sort_item(s, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_sort_item(&self, node: &SortItem, ctx: &mut Self::Context) -> Result<SortItem, Self::Error> {
        Ok(SortItem {
            sort_key: self.process_expression(&node.sort_key, ctx)?,
            ordering: node.ordering,
            null_ordering: node.null_ordering,
            location: Location::none(),
        })
    }

    /// The partition list and ordering are rebuilt; the frame is optional.
    fn rebuild_window(&self, node: &Window, ctx: &mut Self::Context) -> Result<Window, Self::Error> {
        let partition_by = seq(&node.partition_by, |e| self.process_expression(e, ctx))?;
        let order_by = opt(node.order_by.as_ref(), |o| self.process_order_by(o, ctx))?;
        let frame = opt(node.frame.as_ref(), |f| self.process_window_frame(f, ctx))?;
        Ok(Window { partition_by, order_by, frame, location: Location::none() })
    }

    /// Rebuilds a window frame. The end bound is optional and is only
    /// rebuilt when present.
    fn rebuild_window_frame(&self, node: &WindowFrame, ctx: &mut Self::Context) -> Result<WindowFrame, Self::Error> {
        let start = self.process_frame_bound(&node.start, ctx)?;
        let end = opt(node.end.as_ref(), |b| self.process_frame_bound(b, ctx))?;
        Ok(WindowFrame { frame_type: node.frame_type, start, end, location: Location::none() })
    }

    fn rebuild_frame_bound(&self, node: &FrameBound, ctx: &mut Self::Context) -> Result<FrameBound, Self::Error> {
        Ok(FrameBound {
            bound_type: node.bound_type,
            value: opt(node.value.as_deref(), |e| self.process_expression(e, ctx))?.map(Box::new),
            location: Location::none(),
        })
    }

    fn rebuild_when_clause(&self, node: &WhenClause, ctx: &mut Self::Context) -> Result<WhenClause, Self::Error> {
        let operand = self.process_expression(&node.operand, ctx)?;
        let result = self.process_expression(&node.result, ctx)?;
        Ok(WhenClause { operand, result, location: Location::none() })
    }

    fn rebuild_property(&self, node: &Property, ctx: &mut Self::Context) -> Result<Property, Self::Error> {
        Ok(Property {
            name: node.name.clone(),
            value: self.process_expression(&node.value, ctx)?,
            location: Location::none(),
        })
    }

    fn rebuild_column_definition(
        &self,
        node: &ColumnDefinition,
        ctx: &mut Self::Context,
    ) -> Result<ColumnDefinition, Self::Error> {
        Ok(ColumnDefinition {
            name: node.name.clone(),
            type_name: node.type_name.clone(),
            properties: seq(&node.properties, |p| self.process_property(p, ctx))?,
            comment: node.comment.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_like_clause(&self, node: &LikeClause, _ctx: &mut Self::Context) -> Result<LikeClause, Self::Error> {
        Ok(LikeClause {
            table: node.table.clone(),
            properties_option: node.properties_option,
            location: Location::none(),
        })
    }

    fn rebuild_transaction_mode(
        &self,
        node: &TransactionMode,
        _ctx: &mut Self::Context,
    ) -> Result<TransactionMode, Self::Error> {
        match node {
            TransactionMode::Isolation { level, .. } => {
                Ok(TransactionMode::Isolation { level: *level, location: Location::none() })
            }
            TransactionMode::AccessMode { read_only, .. } => {
                Ok(TransactionMode::AccessMode { read_only: *read_only, location: Location::none() })
            }
        }
    }

    fn rebuild_explain_option(
        &self,
        node: &ExplainOption,
        _ctx: &mut Self::Context,
    ) -> Result<ExplainOption, Self::Error> {
        match node {
            ExplainOption::Format { format, .. } => {
                Ok(ExplainOption::Format { format: *format, location: Location::none() })
            }
            ExplainOption::Type { explain_type, .. } => {
                Ok(ExplainOption::Type { explain_type: *explain_type, location: Location::none() })
            }
        }
    }

    // ------------------------------------------------------------------
    // Expressions: leaves
    // ------------------------------------------------------------------

    fn rebuild_identifier(
        &self,
        node: &Expression,
        _value: &str,
        _delimited: bool,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_long_literal(
        &self,
        node: &Expression,
        _value: i64,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_double_literal(
        &self,
        node: &Expression,
        _value: f64,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_decimal_literal(
        &self,
        node: &Expression,
        _value: &str,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_string_literal(
        &self,
        node: &Expression,
        _value: &str,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_boolean_literal(
        &self,
        node: &Expression,
        _value: bool,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_null_literal(&self, node: &Expression, _ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_generic_literal(&self, node: &Expression, _ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_time_literal(&self, node: &Expression, _ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_timestamp_literal(
        &self,
        node: &Expression,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_interval_literal(
        &self,
        node: &Expression,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    fn rebuild_current_time(&self, node: &Expression, _ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(node.clone())
    }

    /// No default rule: parameters must be bound by a pass that knows their values.
    fn rebuild_parameter(&self, node: &Expression, _ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        unsupported(node.kind())
    }

    fn rebuild_field_reference(
        &self,
        node: &Expression,
        _ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        unsupported(node.kind())
    }

    // ------------------------------------------------------------------
    // Expressions: composites
    // ------------------------------------------------------------------

    fn rebuild_dereference(
        &self,
        base: &Expression,
        field: &Ident,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::Dereference {
            base: Box::new(self.process_expression(base, ctx)?),
            field: field.clone(),
            location: Location::none(),
        })
    }

    fn rebuild_arithmetic_binary(
        &self,
        op: ArithmeticOperator,
        left: &Expression,
        right: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let left = self.process_expression(left, ctx)?;
        let right = self.process_expression(right, ctx)?;
        Ok(Expression::ArithmeticBinary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        })
    }

    fn rebuild_arithmetic_unary(
        &self,
        sign: Sign,
        value: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::ArithmeticUnary {
            sign,
            value: Box::new(self.process_expression(value, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_comparison(
        &self,
        op: ComparisonOperator,
        left: &Expression,
        right: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let left = self.process_expression(left, ctx)?;
        let right = self.process_expression(right, ctx)?;
        Ok(Expression::Comparison {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        })
    }

    fn rebuild_logical_binary(
        &self,
        op: LogicalOperator,
        left: &Expression,
        right: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let left = self.process_expression(left, ctx)?;
        let right = self.process_expression(right, ctx)?;
        Ok(Expression::LogicalBinary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::none(),
        })
    }

    fn rebuild_not(&self, value: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Not {
            value: Box::new(self.process_expression(value, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_between(
        &self,
        value: &Expression,
        min: &Expression,
        max: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let value = self.process_expression(value, ctx)?;
        let min = self.process_expression(min, ctx)?;
        let max = self.process_expression(max, ctx)?;
        Ok(Expression::Between {
            value: Box::new(value),
            min: Box::new(min),
            max: Box::new(max),
            location: Location::none(),
        })
    }

    fn rebuild_in_predicate(
        &self,
        value: &Expression,
        value_list: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let value = self.process_expression(value, ctx)?;
        let value_list = self.process_expression(value_list, ctx)?;
        Ok(Expression::In {
            value: Box::new(value),
            value_list: Box::new(value_list),
            location: Location::none(),
        })
    }

    fn rebuild_in_list(&self, values: &[Expression], ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::InList {
            values: seq(values, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }

    /// Rebuilds `value LIKE pattern [ESCAPE escape]`.
    ///
    /// # Arguments
    /// * value - The tested expression.
    /// * pattern - The pattern expression.
    /// * escape - Optional escape character expression.
    fn rebuild_like(
        &self,
        value: &Expression,
        pattern: &Expression,
        escape: Option<&Expression>,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let value = self.process_expression(value, ctx)?;
        let pattern = self.process_expression(pattern, ctx)?;
        let escape = opt(escape, |e| self.process_expression(e, ctx))?;
        Ok(Expression::Like {
            value: Box::new(value),
            pattern: Box::new(pattern),
            escape: escape.map(Box::new),
            location: Location::none(),
        })
    }

    fn rebuild_is_null(&self, value: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::IsNull {
            value: Box::new(self.process_expression(value, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_is_not_null(&self, value: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::IsNotNull {
            value: Box::new(self.process_expression(value, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_exists(&self, subquery: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Exists {
            subquery: Box::new(self.process_expression(subquery, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_quantified_comparison(
        &self,
        op: ComparisonOperator,
        quantifier: Quantifier,
        value: &Expression,
        subquery: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let value = self.process_expression(value, ctx)?;
        let subquery = self.process_expression(subquery, ctx)?;
        Ok(Expression::QuantifiedComparison {
            op,
            quantifier,
            value: Box::new(value),
            subquery: Box::new(subquery),
            location: Location::none(),
        })
    }

    fn rebuild_subquery_expression(&self, query: &Query, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Subquery {
            query: Box::new(self.process_query(query, ctx)?),
            location: Location::none(),
        })
    }

    /// Arguments are rebuilt first, then the optional ordering, window and
    /// filter, each only when present.
    #[allow(clippy::too_many_arguments)]
    fn rebuild_function_call(
        &self,
        name: &QualifiedName,
        window: Option<&Window>,
        filter: Option<&Expression>,
        order_by: Option<&OrderBy>,
        distinct: bool,
        arguments: &[Expression],
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let arguments = seq(arguments, |e| self.process_expression(e, ctx))?;
        let order_by = opt(order_by, |o| self.process_order_by(o, ctx))?;
        let window = opt(window, |w| self.process_window(w, ctx))?;
        let filter = opt(filter, |e| self.process_expression(e, ctx))?;
        Ok(Expression::FunctionCall {
            name: name.clone(),
            window,
            filter: filter.map(Box::new),
            order_by,
            distinct,
            arguments,
            location: Location::none(),
        })
    }

    fn rebuild_cast(
        &self,
        expression: &Expression,
        type_name: &str,
        safe: bool,
        type_only: bool,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::Cast {
            expression: Box::new(self.process_expression(expression, ctx)?),
            type_name: type_name.to_string(),
            safe,
            type_only,
            location: Location::none(),
        })
    }

    fn rebuild_extract(
        &self,
        expression: &Expression,
        field: ExtractField,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::Extract {
            expression: Box::new(self.process_expression(expression, ctx)?),
            field,
            location: Location::none(),
        })
    }

    fn rebuild_at_time_zone(
        &self,
        value: &Expression,
        time_zone: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let value = self.process_expression(value, ctx)?;
        let time_zone = self.process_expression(time_zone, ctx)?;
        Ok(Expression::AtTimeZone {
            value: Box::new(value),
            time_zone: Box::new(time_zone),
            location: Location::none(),
        })
    }

    fn rebuild_array_constructor(
        &self,
        values: &[Expression],
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::ArrayConstructor {
            values: seq(values, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_subscript(
        &self,
        base: &Expression,
        index: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let base = self.process_expression(base, ctx)?;
        let index = self.process_expression(index, ctx)?;
        Ok(Expression::Subscript { base: Box::new(base), index: Box::new(index), location: Location::none() })
    }

    fn rebuild_coalesce(&self, operands: &[Expression], ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Coalesce {
            operands: seq(operands, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }

    fn rebuild_null_if(
        &self,
        first: &Expression,
        second: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let first = self.process_expression(first, ctx)?;
        let second = self.process_expression(second, ctx)?;
        Ok(Expression::NullIf { first: Box::new(first), second: Box::new(second), location: Location::none() })
    }

    /// Rebuilds `IF(condition, true_value[, false_value])`; the false branch
    /// is optional.
    fn rebuild_if(
        &self,
        condition: &Expression,
        true_value: &Expression,
        false_value: Option<&Expression>,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let condition = self.process_expression(condition, ctx)?;
        let true_value = self.process_expression(true_value, ctx)?;
        let false_value = opt(false_value, |e| self.process_expression(e, ctx))?;
        Ok(Expression::If {
            condition: Box::new(condition),
            true_value: Box::new(true_value),
            false_value: false_value.map(Box::new),
            location: Location::none(),
        })
    }

    fn rebuild_try(&self, inner: &Expression, ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Try {
            inner: Box::new(self.process_expression(inner, ctx)?),
            location: Location::none(),
        })
    }

    fn rebuild_bind(
        &self,
        values: &[Expression],
        function: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let values = seq(values, |e| self.process_expression(e, ctx))?;
        let function = self.process_expression(function, ctx)?;
        Ok(Expression::Bind { values, function: Box::new(function), location: Location::none() })
    }

    fn rebuild_lambda(
        &self,
        arguments: &[Ident],
        body: &Expression,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::Lambda {
            arguments: arguments.to_vec(),
            body: Box::new(self.process_expression(body, ctx)?),
            location: Location::none(),
        })
    }

    /// Rebuilds `CASE operand WHEN ... [ELSE ...] END`. The default
    /// result is optional.
    fn rebuild_simple_case(
        &self,
        operand: &Expression,
        when_clauses: &[WhenClause],
        default_value: Option<&Expression>,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let operand = self.process_expression(operand, ctx)?;
        let when_clauses = seq(when_clauses, |w| self.process_when_clause(w, ctx))?;
        let default_value = opt(default_value, |e| self.process_expression(e, ctx))?;
        Ok(Expression::SimpleCase {
            operand: Box::new(operand),
            when_clauses,
            default_value: default_value.map(Box::new),
            location: Location::none(),
        })
    }

    /// WHEN arms are rebuilt in order; the ELSE result is optional.
    fn rebuild_searched_case(
        &self,
        when_clauses: &[WhenClause],
        default_value: Option<&Expression>,
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        let when_clauses = seq(when_clauses, |w| self.process_when_clause(w, ctx))?;
        let default_value = opt(default_value, |e| self.process_expression(e, ctx))?;
        Ok(Expression::SearchedCase {
            when_clauses,
            default_value: default_value.map(Box::new),
            location: Location::none(),
        })
    }

    fn rebuild_row(&self, items: &[Expression], ctx: &mut Self::Context) -> Result<Expression, Self::Error> {
        Ok(Expression::Row {
            items: seq(items, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }

    /// Rebuilds each `GROUPING(...)` column as an expression, so column
    /// rewrites applied to GROUP BY reach it too.
    fn rebuild_grouping_operation(
        &self,
        columns: &[Expression],
        ctx: &mut Self::Context,
    ) -> Result<Expression, Self::Error> {
        Ok(Expression::GroupingOperation {
            columns: seq(columns, |e| self.process_expression(e, ctx))?,
            location: Location::none(),
        })
    }
}
