//! Postgres queries. Each function maps driver errors through
//! [`crate::error_convert::SqlxErrorExt`].

pub mod metadata;
pub mod todo;
