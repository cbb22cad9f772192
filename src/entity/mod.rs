//! sea-orm entities backing the relational store.

pub mod users;
