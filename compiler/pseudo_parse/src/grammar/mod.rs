//! Grammar productions, split by construct.
//!
//! - `block`: the frame stack that pairs openers with terminators
//! - `stmt`: statement dispatch, simple statements and block headers
//! - `expr`: expressions, lowest to highest precedence

mod block;
mod expr;
mod stmt;
