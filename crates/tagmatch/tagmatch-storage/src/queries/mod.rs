//! SQL for each table. Every function takes a borrowed connection.

pub mod similarity_ops;
pub mod user_ops;
