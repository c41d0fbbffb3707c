/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package registries, the source
/// hosting platform, the vulnerability signal, the lifecycle registry,
/// the file system, and the console).
pub mod bom_reader;
pub mod lifecycle;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_gateway;
pub mod repository_signal;
pub mod vulnerability_signal;

pub use bom_reader::BomReader;
pub use lifecycle::{EolOverrideSource, LifecycleRegistry};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_gateway::RegistryGateway;
pub use repository_signal::RepositorySignal;
pub use vulnerability_signal::VulnerabilitySignal;
