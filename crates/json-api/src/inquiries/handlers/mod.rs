//! Inquiry Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod partner;
pub(crate) mod statistics;
pub(crate) mod update_status;
