//! Read-only access to parsed SQL predicate trees.
//!
//! Trees arrive as JSON objects tagged by a `type` member, the shape produced by
//! `node-sql-parser` style parsers. Nothing in this module mutates a tree.

pub mod node;
