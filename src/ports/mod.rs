/// Ports - Interface definitions for infrastructure
pub mod outbound;
