//! sqljudge - statement classification for sharding SQL middleware
//!
//! Before a statement can be routed, rewritten and dispatched to sharded backends,
//! the middleware needs to know what kind of statement it is and a few identifiers:
//! - query, mutation, transaction control or session `SET`
//! - dialect administrative statements (`USE`, `DESCRIBE`, `SHOW ...`) with their
//!   schema/table names
//! - a located table token for `SHOW CREATE TABLE`, ready for rewriting
//!
//! This is decided from the leading keywords only, after stripping comments and
//! hints, so it stays cheap on the per-request hot path.

pub mod config;
pub mod output;
pub mod script;
pub mod sql_judge;

pub use sql_judge::{judge, Dialect, JudgeError, SqlJudgeEngine, StatementCategory, TableToken};
