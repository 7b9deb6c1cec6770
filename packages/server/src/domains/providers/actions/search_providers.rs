use anyhow::Result;
use tracing::{debug, info};

use crate::domains::providers::models::Provider;
use crate::domains::providers::search::{search, ProviderMatch, ProviderQuery};
use crate::kernel::ServerDeps;

/// Find providers near the query point, nearest first.
///
/// The catalog is narrowed in SQL by the same filters the in-memory search
/// applies, then distances are computed and the radius enforced here.
pub async fn search_providers(
    query: &ProviderQuery,
    deps: &ServerDeps,
) -> Result<Vec<ProviderMatch>> {
    let catalog = Provider::find_for_search(
        query.specialty_filter(),
        query.insurance_filter(),
        &deps.db_pool,
    )
    .await?;

    debug!(candidates = catalog.len(), "Loaded provider catalog for search");

    let matches = search(&catalog, query);

    info!(
        latitude = query.origin.latitude,
        longitude = query.origin.longitude,
        radius_miles = query.radius_miles,
        specialty = ?query.specialty_filter(),
        insurance = ?query.insurance_filter(),
        results = matches.len(),
        "Provider search complete"
    );

    Ok(matches)
}
