//! Desktop backend contract: endpoint table, wire types, and the async service trait.

pub mod endpoints;
pub mod service;
pub mod types;
