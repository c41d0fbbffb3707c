use crate::enrichment::domain::Bom;

/// Request DTO for the enrichment use case: the parsed BOM document whose
/// components and declared vulnerabilities drive the pass.
#[derive(Debug, Clone)]
pub struct EnrichRequest {
    pub bom: Bom,
}

impl EnrichRequest {
    pub fn new(bom: Bom) -> Self {
        Self { bom }
    }
}
