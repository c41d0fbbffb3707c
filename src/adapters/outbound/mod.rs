/// Outbound adapters - Concrete implementations of the outbound ports
pub mod console;
pub mod filesystem;
pub mod network;
