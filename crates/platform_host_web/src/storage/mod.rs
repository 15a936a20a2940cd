//! Browser persistence adapters.

pub mod local_kv;
