//! Central module for the application's API surface shared between routes.

pub mod common;
