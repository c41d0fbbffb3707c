pub mod enrich_components;

pub use enrich_components::EnrichComponentsUseCase;
