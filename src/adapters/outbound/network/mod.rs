pub mod caching_registry;
pub mod caching_repository;
pub mod eol_client;
pub mod github_client;
pub mod osv_client;
pub mod registry_client;

pub use caching_registry::CachingRegistryGateway;
pub use caching_repository::CachingRepositorySignal;
pub use eol_client::EolClient;
pub use github_client::GitHubClient;
pub use osv_client::OsvClient;
pub use registry_client::{RegistryClient, RegistryEndpoints};
