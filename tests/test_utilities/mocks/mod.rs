pub mod mock_lifecycle;
pub mod mock_progress_reporter;
pub mod mock_registry_gateway;
pub mod mock_repository_signal;
pub mod mock_vulnerability_signal;

pub use mock_lifecycle::{MockLifecycleRegistry, MockOverrideSource};
pub use mock_progress_reporter::SilentProgressReporter;
pub use mock_registry_gateway::MockRegistryGateway;
pub use mock_repository_signal::MockRepositorySignal;
pub use mock_vulnerability_signal::MockVulnerabilitySignal;
