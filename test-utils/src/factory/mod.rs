//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Defaults are derived from a shared atomic counter so that
//! every factory-created record satisfies the unique constraints of its table.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let spot = factory::parking_spot::create_parking_spot(&db).await?;
//!     let admin = factory::user::create_admin(&db, "admin", "secret").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let spot = factory::parking_spot::ParkingSpotFactory::new(&db)
//!     .license_plate_car("ABC1234")
//!     .apartment("101")
//!     .block("B")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `parking_spot` - Create parking spot entities
//! - `user` - Create users with hashed passwords and role assignments
//! - `role` - Create role entities
//! - `helpers` - Shared counter used for unique defaults

pub mod helpers;
pub mod parking_spot;
pub mod role;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use parking_spot::create_parking_spot;
pub use role::find_or_create_role;
pub use user::{create_admin, create_user};
