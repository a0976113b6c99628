//! # Sale Transaction Processor
//!
//! Records a sale: computes tax and the Bs total at the moment the sale is
//! recorded, then appends one immutable `SaleMovement`.
//!
//! ## Computation Order
//! ```text
//! SaleRequest
//!      │  validate quantity/price        (ValidationError, nothing ran)
//!      ▼
//! resolve product code                   (ProductNotFound, no mutation)
//!      │  oversell policy check          (InsufficientStock under Reject)
//!      ▼
//! read ConfigSnapshot                    (tax + exchange rate, right now)
//!      │
//!      ▼
//! subtotal = qty × price
//! tax      = subtotal × tax_rate
//! total    = subtotal + tax
//! total_b  = total × exchange_rate       (frozen into the record)
//!      │
//!      ▼
//! single INSERT into the ledger          (atomic: whole record or nothing)
//! ```
//!
//! The sale price comes from the caller, not the catalog - discounts and
//! markups happen at the counter. Stock is not decremented anywhere; it is
//! derived lazily by reconciliation.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use bodega_core::validation::{validate_price_cents, validate_quantity};
use bodega_core::{Money, SaleMovement, UnitKind};

use crate::error::{EngineError, EngineResult};
use crate::service::{InventoryService, OversellPolicy};

// =============================================================================
// Sale Request
// =============================================================================

/// A request to record a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    /// Business code of the product being sold.
    pub product_code: String,

    /// Business date of the sale.
    pub sale_date: NaiveDate,

    /// Tier being sold (decides which quantity column the record fills).
    pub unit: UnitKind,

    /// Quantity sold, in `unit` terms.
    pub quantity: i64,

    /// Unit price in USD cents, as agreed at the counter.
    pub unit_price_cents: i64,
}

// =============================================================================
// record_sale
// =============================================================================

impl InventoryService {
    /// Records a sale and returns the appended movement.
    ///
    /// ## Errors
    /// * `Validation` - quantity not positive or price negative
    /// * `ProductNotFound` - unknown code; the ledger is untouched
    /// * `InsufficientStock` - only under [`OversellPolicy::Reject`]
    /// * `Persistence` - append failed; no partial record exists and the
    ///   same request may be retried
    pub async fn record_sale(&self, request: SaleRequest) -> EngineResult<SaleMovement> {
        validate_quantity(request.quantity)?;
        validate_price_cents(request.unit_price_cents)?;

        let product = self
            .db()
            .products()
            .get_by_code(&request.product_code)
            .await?
            .ok_or_else(|| EngineError::ProductNotFound(request.product_code.clone()))?;

        if self.oversell_policy() == OversellPolicy::Reject {
            let stock = self.reconcile(&product).await?;
            let available = match request.unit {
                UnitKind::Wholesale => stock.wholesale,
                UnitKind::Retail => stock.retail_units,
            };
            if available < request.quantity {
                return Err(EngineError::InsufficientStock {
                    code: product.code,
                    available,
                    requested: request.quantity,
                });
            }
        }

        // The snapshot is read once, here; the computed figures below are
        // frozen into the record and survive any later config change.
        let config = self.current_config().await?;

        let unit_price = Money::from_cents(request.unit_price_cents);
        let subtotal = unit_price.times(request.quantity);
        let tax = subtotal.tax(config.tax_rate());
        let total = subtotal + tax;
        let total_b = total.to_b(config.exchange_rate());

        let (qty_wholesale, qty_retail) = match request.unit {
            UnitKind::Wholesale => (request.quantity, 0),
            UnitKind::Retail => (0, request.quantity),
        };

        let movement = SaleMovement {
            id: Uuid::new_v4().to_string(),
            sale_date: request.sale_date,
            product_id: product.id,
            unit: request.unit,
            qty_wholesale,
            qty_retail,
            unit_price_cents: request.unit_price_cents,
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
            total_b_cents: total_b.cents(),
            created_at: Utc::now(),
        };

        self.db().movements().append_sale(&movement).await?;

        info!(
            id = %movement.id,
            code = %product.code,
            unit = ?movement.unit,
            quantity = %request.quantity,
            total_cents = %movement.total_cents,
            total_b_cents = %movement.total_b_cents,
            "Sale recorded"
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
    use crate::testutil::{seeded_db, EGGS_CODE, RICE_CODE};
    use bodega_core::ValidationError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn request(code: &str, unit: UnitKind, quantity: i64, price: i64) -> SaleRequest {
        SaleRequest {
            product_code: code.to_string(),
            sale_date: date(),
            unit,
            quantity,
            unit_price_cents: price,
        }
    }

    #[tokio::test]
    async fn test_totals_at_default_rates() {
        // Default config: 30% tax, 35.50 Bs/USD.
        // Subtotal 100.00 → tax 30.00, total 130.00, Bs 4615.00.
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        let movement = service
            .record_sale(request(RICE_CODE, UnitKind::Wholesale, 50, 200))
            .await
            .unwrap();

        assert_eq!(movement.subtotal_cents, 10_000);
        assert_eq!(movement.tax_cents, 3_000);
        assert_eq!(movement.total_cents, 13_000);
        assert_eq!(movement.total_b_cents, 461_500);
    }

    #[tokio::test]
    async fn test_quantity_partitions_by_tier() {
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        let wholesale = service
            .record_sale(request(EGGS_CODE, UnitKind::Wholesale, 3, 12))
            .await
            .unwrap();
        assert_eq!(wholesale.qty_wholesale, 3);
        assert_eq!(wholesale.qty_retail, 0);

        let retail = service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 5, 15))
            .await
            .unwrap();
        assert_eq!(retail.qty_wholesale, 0);
        assert_eq!(retail.qty_retail, 5);
        assert_eq!(retail.quantity(), 5);
    }

    #[tokio::test]
    async fn test_unknown_code_fails_without_mutation() {
        let db = seeded_db().await;
        let service = InventoryService::new(db.clone());

        let before = db.movements().count_sales().await.unwrap();

        let err = service
            .record_sale(request("Z999", UnitKind::Retail, 1, 100))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::ProductNotFound(_)));

        let after = db.movements().count_sales().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_invalid_quantity_rejected_before_lookup() {
        let db = seeded_db().await;
        let service = InventoryService::new(db.clone());

        let err = service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 0, 100))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Validation(ValidationError::MustBePositive { .. })
        ));

        let err = service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 1, -5))
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));

        assert_eq!(db.movements().count_sales().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_caller_price_not_catalog_price() {
        // Sale price comes from the counter, not the catalog: a discount
        // below the catalog's 15 is recorded as given.
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        let movement = service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 10, 10))
            .await
            .unwrap();
        assert_eq!(movement.unit_price_cents, 10);
        assert_eq!(movement.subtotal_cents, 100);
    }

    #[tokio::test]
    async fn test_oversell_allowed_by_default() {
        let db = seeded_db().await;
        let service = InventoryService::new(db);

        // Nothing in stock, sale still goes through and stock goes negative
        service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 5, 15))
            .await
            .unwrap();

        let stock = service.stock_for(EGGS_CODE).await.unwrap();
        assert_eq!(stock.retail_units, -5);
    }

    #[tokio::test]
    async fn test_oversell_rejected_under_policy() {
        use crate::EntryRequest;

        let db = seeded_db().await;
        let service = InventoryService::with_policy(db.clone(), OversellPolicy::Reject);

        service
            .record_entry(EntryRequest {
                product_code: EGGS_CODE.to_string(),
                entry_date: date(),
                unit: UnitKind::Wholesale,
                quantity: 1,
            })
            .await
            .unwrap();

        // 1 pack on hand; selling 2 packs must fail and leave no record
        let err = service
            .record_sale(request(EGGS_CODE, UnitKind::Wholesale, 2, 12))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InsufficientStock {
                available: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(db.movements().count_sales().await.unwrap(), 0);

        // Selling within stock succeeds (30 units derive from the 1 pack)
        service
            .record_sale(request(EGGS_CODE, UnitKind::Retail, 30, 15))
            .await
            .unwrap();
    }
}
