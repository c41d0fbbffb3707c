use crate::application::dto::{EnrichRequest, EnrichResponse, EnrichmentStats};
use crate::enrichment::domain::{
    Component, DeclaredVulnerability, Ecosystem, PropertySet, RepoMetadata, ResolvedIdentifier,
};
use crate::enrichment::services::{candidate_slugs, derive_properties, matching_cycle};
use crate::ports::outbound::{
    EolOverrideSource, LifecycleRegistry, ProgressReporter, RegistryGateway, RepositorySignal,
    VulnerabilitySignal,
};
use futures::stream::{FuturesUnordered, StreamExt};

/// Per-component result of one reconciliation pass.
struct ComponentOutcome {
    properties: PropertySet,
    registry: bool,
    vulnerability: bool,
    repository: bool,
    eol: bool,
}

/// EnrichComponentsUseCase - the property reconciler
///
/// Orchestrates one enrichment pass over a BOM document using generic
/// dependency injection for all provider gateways. Per component, the four
/// provider lookups fan out concurrently and are joined before the pure
/// derivation and merge steps; across the component list, all per-component
/// pipelines run concurrently with no artificial cap. A pass that starts
/// runs to completion for every component.
///
/// Provider failures never reach the caller: each gateway's no-data outcome
/// is an `Option::None`, and the worst case for any property is the "NA"
/// sentinel. `execute` is therefore infallible.
///
/// # Type Parameters
/// * `RG` - RegistryGateway implementation
/// * `RS` - RepositorySignal implementation
/// * `VS` - VulnerabilitySignal implementation
/// * `LR` - LifecycleRegistry implementation
/// * `OS` - EolOverrideSource implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichComponentsUseCase<RG, RS, VS, LR, OS, PR> {
    registry_gateway: RG,
    repository_signal: RS,
    vulnerability_signal: VS,
    lifecycle_registry: LR,
    override_source: OS,
    progress_reporter: PR,
}

impl<RG, RS, VS, LR, OS, PR> EnrichComponentsUseCase<RG, RS, VS, LR, OS, PR>
where
    RG: RegistryGateway,
    RS: RepositorySignal,
    VS: VulnerabilitySignal,
    LR: LifecycleRegistry,
    OS: EolOverrideSource,
    PR: ProgressReporter,
{
    /// Creates a new EnrichComponentsUseCase with injected dependencies
    pub fn new(
        registry_gateway: RG,
        repository_signal: RS,
        vulnerability_signal: VS,
        lifecycle_registry: LR,
        override_source: OS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            registry_gateway,
            repository_signal,
            vulnerability_signal,
            lifecycle_registry,
            override_source,
            progress_reporter,
        }
    }

    /// Executes one enrichment pass and returns the merged document.
    ///
    /// Re-running on an already-enriched document with unchanged upstream
    /// responses reproduces the same property values.
    pub async fn execute(&self, request: EnrichRequest) -> EnrichResponse {
        let EnrichRequest { mut bom } = request;
        let total = bom.components.len();

        self.progress_reporter
            .report(&format!("🔍 Enriching {} component(s)...", total));

        let declared = std::mem::take(&mut bom.vulnerabilities);
        let mut outcomes: Vec<Option<ComponentOutcome>> = Vec::new();
        outcomes.resize_with(total, || None);

        {
            // Fan out every per-component pipeline at once; completion
            // order is arbitrary, so results are slotted back by index.
            let mut lookups = FuturesUnordered::new();
            for (index, component) in bom.components.iter().enumerate() {
                let declared = &declared;
                lookups.push(async move {
                    (index, self.enrich_component(component, declared).await)
                });
            }

            let mut completed = 0usize;
            while let Some((index, outcome)) = lookups.next().await {
                completed += 1;
                self.progress_reporter.report_progress(
                    completed,
                    total,
                    Some("Reconciling provider answers..."),
                );
                outcomes[index] = Some(outcome);
            }
        }

        bom.vulnerabilities = declared;

        let mut stats = EnrichmentStats {
            components_total: total,
            ..Default::default()
        };
        for (component, outcome) in bom.components.iter_mut().zip(outcomes) {
            if let Some(outcome) = outcome {
                stats.with_registry += usize::from(outcome.registry);
                stats.with_vulnerability += usize::from(outcome.vulnerability);
                stats.with_repository += usize::from(outcome.repository);
                stats.with_eol += usize::from(outcome.eol);
                outcome.properties.merge_into(&mut component.properties);
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Enrichment complete: {} component(s) ({} registry, {} vulnerability, {} repository, {} end-of-life)",
            stats.components_total,
            stats.with_registry,
            stats.with_vulnerability,
            stats.with_repository,
            stats.with_eol,
        ));

        EnrichResponse::new(bom, stats)
    }

    /// One component's pipeline: resolve the identifier, join the four
    /// provider lookups, derive the property set.
    async fn enrich_component(
        &self,
        component: &Component,
        declared: &[DeclaredVulnerability],
    ) -> ComponentOutcome {
        let id = ResolvedIdentifier::resolve(component);

        let (registry, vulnerability, repository, eol) = tokio::join!(
            self.registry_gateway.fetch_metadata(&id),
            self.vulnerability_signal.fetch_report(&id),
            self.fetch_repository(component),
            self.resolve_end_of_life(component, &id),
        );

        let properties = derive_properties(
            component,
            &id,
            registry.as_ref(),
            vulnerability.as_ref(),
            repository.as_ref(),
            eol.as_deref(),
            declared,
        );

        ComponentOutcome {
            properties,
            registry: registry.is_some(),
            vulnerability: vulnerability.is_some(),
            repository: repository.is_some(),
            eol: eol.is_some(),
        }
    }

    async fn fetch_repository(&self, component: &Component) -> Option<RepoMetadata> {
        let url = component.repository_url()?;
        self.repository_signal.fetch_repo_metadata(url).await
    }

    /// Two-step end-of-life resolution: the override table first (maven
    /// only, where no public lifecycle data is reliably available), then
    /// the slug-candidate heuristic against the lifecycle registry. The
    /// first candidate with any matching cycle short-circuits the rest,
    /// even when that cycle carries no date.
    async fn resolve_end_of_life(
        &self,
        component: &Component,
        id: &ResolvedIdentifier,
    ) -> Option<String> {
        if id.ecosystem == Ecosystem::Maven {
            if let Some(group) = id.group.as_deref() {
                let key = format!("{}:{}", group, id.name).to_lowercase();
                if let Some(date) = self.override_source.maven_override(&key).await {
                    return Some(date);
                }
            }
        }

        for slug in candidate_slugs(&component.name) {
            if let Some(cycles) = self.lifecycle_registry.product_cycles(&slug).await {
                if let Some(cycle) = matching_cycle(&cycles, &id.version) {
                    return cycle.eol.as_dd_mm_yyyy();
                }
            }
        }

        None
    }
}
