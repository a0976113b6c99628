//! # Entry Transaction Processor
//!
//! Records an inventory entry (stock in). Simpler sibling of the sale
//! processor: no tax, no currency conversion, and the unit price is *not*
//! caller-supplied - it is captured from the product's catalog price for
//! the entered tier, freezing the intake cost at entry time.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use bodega_core::validation::validate_quantity;
use bodega_core::{EntryMovement, UnitKind};

use crate::error::{EngineError, EngineResult};
use crate::service::InventoryService;

// =============================================================================
// Entry Request
// =============================================================================

/// A request to record an inventory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Business code of the product received.
    pub product_code: String,

    /// Business date of the entry.
    pub entry_date: NaiveDate,

    /// Tier received: wholesale packs or loose retail units.
    pub unit: UnitKind,

    /// Quantity received, in `unit` terms.
    pub quantity: i64,
}

// =============================================================================
// record_entry
// =============================================================================

impl InventoryService {
    /// Records an inventory entry and returns the appended movement.
    ///
    /// ## Errors
    /// * `Validation` - quantity not positive
    /// * `ProductNotFound` - unknown code; the ledger is untouched
    /// * `Persistence` - append failed; no partial record exists
    pub async fn record_entry(&self, request: EntryRequest) -> EngineResult<EntryMovement> {
        validate_quantity(request.quantity)?;

        let product = self
            .db()
            .products()
            .get_by_code(&request.product_code)
            .await?
            .ok_or_else(|| EngineError::ProductNotFound(request.product_code.clone()))?;

        // Catalog price for the entered tier, captured now
        let unit_price = product.price_for(request.unit);
        let total = unit_price.times(request.quantity);

        let movement = EntryMovement {
            id: Uuid::new_v4().to_string(),
            entry_date: request.entry_date,
            product_id: product.id,
            unit: request.unit,
            quantity: request.quantity,
            unit_price_cents: unit_price.cents(),
            total_cents: total.cents(),
            created_at: Utc::now(),
        };

        self.db().movements().append_entry(&movement).await?;

        info!(
            id = %movement.id,
            code = %product.code,
            unit = ?movement.unit,
            quantity = %movement.quantity,
            total_cents = %movement.total_cents,
            "Entry recorded"
        );

        Ok(movement)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{seeded_db, RICE_CODE};
    use bodega_core::ValidationError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn request(code: &str, unit: UnitKind, quantity: i64) -> EntryRequest {
        EntryRequest {
            product_code: code.to_string(),
            entry_date: date(),
            unit,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_price_captured_from_catalog_by_tier() {
        // Rice: wholesale 2.00, retail 2.50
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        let wholesale = service
            .record_entry(request(RICE_CODE, UnitKind::Wholesale, 5))
            .await
            .unwrap();
        assert_eq!(wholesale.unit_price_cents, 200);
        assert_eq!(wholesale.total_cents, 1_000);

        let retail = service
            .record_entry(request(RICE_CODE, UnitKind::Retail, 10))
            .await
            .unwrap();
        assert_eq!(retail.unit_price_cents, 250);
        assert_eq!(retail.total_cents, 2_500);
    }

    #[tokio::test]
    async fn test_entries_then_reconcile() {
        // Wholesale 5 + retail 10 in: 5 packs, 5×25 + 10 = 135 units
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        service
            .record_entry(request(RICE_CODE, UnitKind::Wholesale, 5))
            .await
            .unwrap();
        service
            .record_entry(request(RICE_CODE, UnitKind::Retail, 10))
            .await
            .unwrap();

        let stock = service.stock_for(RICE_CODE).await.unwrap();
        assert_eq!(stock.wholesale, 5);
        assert_eq!(stock.retail_units, 5 * 25 + 10);
    }

    #[tokio::test]
    async fn test_unknown_code_fails_without_mutation() {
        let db = seeded_db().await;
        let service = InventoryService::new(db.clone());

        let err = service
            .record_entry(request("Z999", UnitKind::Wholesale, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ProductNotFound(_)));
        assert_eq!(db.movements().count_entries().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_quantity_rejected() {
        let db = seeded_db().await;
        let service = InventoryService::new(db.clone());

        let err = service
            .record_entry(request(RICE_CODE, UnitKind::Retail, -3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(db.movements().count_entries().await.unwrap(), 0);
    }
}
