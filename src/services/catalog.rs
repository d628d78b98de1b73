//! Read-side queries over the specification graph.

use sea_orm::ConnectionTrait;

use crate::db::{specifications, trims};
use crate::error::AppResult;
use crate::models::{SupplierResponse, TrimResponse, TrimWithSuppliers};

/// Every trim of a specification with its suppliers.
///
/// One supplier query per trim; specifications hold tens of trims, not thousands.
pub async fn trims_with_suppliers<C: ConnectionTrait>(
    db: &C,
    spec_id: i32,
) -> AppResult<Vec<TrimWithSuppliers>> {
    specifications::get(db, spec_id).await?;

    let mut results = Vec::new();
    for trim in trims::list_by_spec(db, spec_id).await? {
        let suppliers = trims::list_suppliers(db, trim.id)
            .await?
            .into_iter()
            .map(SupplierResponse::from)
            .collect();
        results.push(TrimWithSuppliers {
            trim: TrimResponse::from(trim),
            suppliers,
        });
    }

    Ok(results)
}

/// Substring search over trim number and description, optionally scoped to
/// one specification.
pub async fn search_trims<C: ConnectionTrait>(
    db: &C,
    term: &str,
    spec_id: Option<i32>,
) -> AppResult<Vec<TrimResponse>> {
    Ok(trims::search(db, term.trim(), spec_id)
        .await?
        .into_iter()
        .map(TrimResponse::from)
        .collect())
}
