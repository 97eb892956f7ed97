//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── api_routes.rs - Endpoint wiring and guard application
//! └── router.rs     - Router assembly with ambient layers
//! ```

/// Endpoint wiring
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
