//! Integration tests for Campus Market.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB and the server
//! docker run -d -p 27017:27017 mongo
//! DATABASE_URL=mongodb://localhost:27017 DATABASE_NAME=campus_market \
//!     cargo run -p campus-market-server
//!
//! # Run integration tests against it
//! cargo test -p campus-market-integration-tests -- --ignored
//! ```
//!
//! Tests target a live server (default `http://localhost:8000`, override via
//! `SERVER_BASE_URL`) and assume they own the `product` and `order`
//! collections of the configured database.
//!
//! # Test Categories
//!
//! - `products_api` - Product creation, listing, search, and seeding
//! - `orders_api` - Checkout creation and total verification
