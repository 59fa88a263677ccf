//! Context-threaded tree rebuilding.
//!
//! A pass is any type implementing [`Rebuilder`]. It overrides the rules for
//! the node kinds it wants to rewrite and inherits a structure-preserving
//! default for everything else.
//!
//! ```
//! use sql_rebuilder::ir::error::UnsupportedNodeKind;
//! use sql_rebuilder::ir::rebuilder::Rebuilder;
//! use sql_rebuilder::ir::sql_node::*;
//!
//! /// Adds 100 to every integer literal.
//! struct Shift;
//!
//! impl Rebuilder for Shift {
//!     type Context = ();
//!     type Error = UnsupportedNodeKind;
//!
//!     fn rebuild_long_literal(&self, _node: &Expression, value: i64, _ctx: &mut ()) -> Result<Expression, Self::Error> {
//!         Ok(Expression::long(value + 100))
//!     }
//! }
//!
//! let tree = Node::from(Expression::arithmetic(
//!     ArithmeticOperator::Add,
//!     Expression::identifier("a"),
//!     Expression::long(1),
//! ));
//! let rebuilt = Shift.rebuild(&tree, &mut ()).unwrap();
//! assert_eq!(
//!     rebuilt,
//!     Node::from(Expression::arithmetic(
//!         ArithmeticOperator::Add,
//!         Expression::identifier("a"),
//!         Expression::long(101),
//!     ))
//! );
//! ```

pub mod combinators;
mod rebuilder_trait;

pub use rebuilder_trait::Rebuilder;

use super::error::UnsupportedNodeKind;

/// The pass with no overrides. Rebuilding with it yields a tree equal to the
/// input, or fails on a kind that has no default rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Rebuilder for Identity {
    type Context = ();
    type Error = UnsupportedNodeKind;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::sql_node::*;

    #[test]
    fn test_identity_on_simple_query() {
        let tree = Node::from(Statement::query(Relation::query_specification(
            Select::new(vec![SelectItem::column(Expression::identifier("a"))]),
            Some(Relation::table("t")),
            Some(Expression::comparison(
                ComparisonOperator::GreaterThan,
                Expression::identifier("a"),
                Expression::long(0),
            )),
        )));
        assert_eq!(Identity.rebuild(&tree, &mut ()), Ok(tree));
    }

    #[test]
    fn test_leaf_keeps_location_composite_drops_it() {
        let leaf = Expression::LongLiteral { value: 1, location: Location::at(1, 8) };
        let tree = Expression::Not { value: Box::new(leaf), location: Location::at(1, 4) };

        let rebuilt = Identity.process_expression(&tree, &mut ()).unwrap();
        match rebuilt {
            Expression::Not { value, location } => {
                assert!(!location.is_known());
                match *value {
                    Expression::LongLiteral { location, .. } => {
                        assert_eq!(location.position(), Some(Position { line: 1, column: 8 }))
                    }
                    other => panic!("Expected LongLiteral, got {:?}", other),
                }
            }
            other => panic!("Expected Not, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_expression_kind() {
        let tree = Expression::not(Expression::Parameter { position: 0, location: Location::none() });
        let err = Identity.process_expression(&tree, &mut ()).unwrap_err();
        assert_eq!(err.kind, NodeKind::Parameter);
    }

    #[test]
    fn test_unsupported_statement_kind() {
        let stmt = Statement::Commit { location: Location::none() };
        assert_eq!(Identity.process_statement(&stmt, &mut ()), Err(UnsupportedNodeKind::new(NodeKind::Commit)));
    }
}
