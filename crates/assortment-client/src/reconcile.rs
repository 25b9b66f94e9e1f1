//! Reconciliation of previously selected skus against the live assortment.
//!
//! Every requested sku comes back exactly once: either as a resolved
//! [`Preview::Resolved`] record or as a [`Preview::Missing`] placeholder.

use std::collections::HashSet;
use std::future::Future;

use assortment_core::Preview;
use futures::future::join_all;

use crate::error::ResolveError;
use crate::transform::to_catalog_record;
use crate::types::RawProductType;

/// Resolves `identifiers` through `lookup` and marks the unmatched ones missing.
///
/// `lookup` returns `Ok(None)` when a sku does not exist. All lookups are
/// started together and awaited as one batch: nothing is inspected until
/// every lookup has settled, so one slow lookup delays the whole result.
/// In-flight lookups are never cancelled.
///
/// Resolved records come first, in request order, followed by placeholders
/// for the unique requested skus that did not resolve. Each sku appears
/// once even if it was requested more than once; duplicates are still
/// looked up individually.
///
/// Missing skus are found by set difference against the `sku` of the
/// resolved records, so a response for `X` that reports id `Y` yields a
/// record for `Y` and a placeholder for `X`.
///
/// # Errors
///
/// - [`ResolveError::Lookup`] if any lookup fails. No partial result is
///   returned; the first failure in request order is reported.
/// - [`ResolveError::Shape`] if a resolved product type cannot be reshaped.
///   Lookup failures take precedence.
pub async fn resolve<L, Fut, E>(
    identifiers: &[String],
    lookup: L,
) -> Result<Vec<Preview>, ResolveError<E>>
where
    L: Fn(String) -> Fut,
    Fut: Future<Output = Result<Option<RawProductType>, E>>,
    E: std::error::Error + 'static,
{
    if identifiers.is_empty() {
        return Ok(Vec::new());
    }

    let settled = join_all(identifiers.iter().map(|sku| lookup(sku.clone()))).await;

    let mut found = Vec::with_capacity(settled.len());
    for (sku, outcome) in identifiers.iter().zip(settled) {
        match outcome {
            Ok(Some(product)) => found.push(product),
            Ok(None) => tracing::debug!(sku = %sku, "sku not found in assortment"),
            Err(source) => {
                return Err(ResolveError::Lookup {
                    sku: sku.clone(),
                    source,
                })
            }
        }
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(identifiers.len());
    let mut previews = Vec::with_capacity(identifiers.len());
    for product in found {
        let record = to_catalog_record(product)?;
        if seen.insert(record.sku.clone()) {
            previews.push(Preview::Resolved(record));
        }
    }

    let resolved = previews.len();
    let missing: Vec<String> = identifiers
        .iter()
        .filter(|sku| seen.insert((*sku).clone()))
        .cloned()
        .collect();

    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "selected skus are no longer in the assortment"
        );
    }
    tracing::info!(
        requested = identifiers.len(),
        resolved,
        missing = missing.len(),
        "reconciled sku previews"
    );

    previews.extend(missing.into_iter().map(Preview::Missing));
    Ok(previews)
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
