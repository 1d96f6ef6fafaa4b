//! Persistence boundary for account records.

pub mod customer_repository;
