use crate::enrichment::domain::Bom;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading the bill-of-materials document
///
/// Unlike the provider gateways, reading the input document is allowed to
/// fail hard: without a parseable BOM there is nothing to enrich.
pub trait BomReader {
    fn read_bom(&self, path: &Path) -> Result<Bom>;
}
