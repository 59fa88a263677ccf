pub mod error;
pub mod pipeline;
pub mod rebuilder;
pub mod sql_node;
