//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Smile ID sandbox/live environment selection
//! - `server` - HTTP server binding configuration
//! - `smile` - Smile ID partner credentials and connection parameters

pub mod environment;
pub mod server;
pub mod smile;

// Re-export commonly used types
pub use environment::Environment;
pub use server::ServerConfig;
pub use smile::{SmileConnection, SmileEnv};
