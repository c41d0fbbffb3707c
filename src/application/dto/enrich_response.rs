use crate::enrichment::domain::Bom;

/// Counters describing one enrichment pass, for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub components_total: usize,
    pub with_registry: usize,
    pub with_vulnerability: usize,
    pub with_repository: usize,
    pub with_eol: usize,
}

/// Response DTO: the document with enrichment properties merged into each
/// component, plus pass statistics.
#[derive(Debug, Clone)]
pub struct EnrichResponse {
    pub bom: Bom,
    pub stats: EnrichmentStats,
}

impl EnrichResponse {
    pub fn new(bom: Bom, stats: EnrichmentStats) -> Self {
        Self { bom, stats }
    }
}
