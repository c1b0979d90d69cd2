//! Campus Market Core - Shared types library.
//!
//! This crate provides common types used across all Campus Market components:
//! - `server` - HTTP backend exposing product listing and order checkout
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types and validation logic - no I/O, no
//! database access, no HTTP handling. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`entity`] - The `Entity` trait mapping schema types to collection names
//! - [`filter`] - Structured query predicates (equality, substring, OR-groups)
//! - [`schemas`] - Validated data shapes for products, orders, and users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entity;
pub mod filter;
pub mod schemas;

pub use entity::Entity;
pub use filter::{Condition, Filter};
pub use schemas::{Order, OrderItem, Product, User, ValidationError};
