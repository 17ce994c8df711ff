//! Test infrastructure shared across the crate's unit tests.

mod db;

pub(crate) use db::TestDb;
