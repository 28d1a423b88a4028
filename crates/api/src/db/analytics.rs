//! Analytics rollups over payment and menu data.
//!
//! Two read-only aggregations: dashboard summary stats (approximate counts
//! plus total revenue) and per-category order statistics computed by a
//! server-side unwind/lookup/group pipeline.

use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use super::{AccountRepository, MENU, MenuRepository, PAYMENTS, RepositoryError};

/// Dashboard summary: approximate entity counts and total revenue.
#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub users: u64,
    #[serde(rename = "menuItem")]
    pub menu_item: u64,
    pub orders: u64,
    pub revenue: f64,
}

/// Per-category order statistics.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategorySales {
    pub category: String,
    pub quantity: i64,
    pub revenue: f64,
}

/// Repository for cross-collection aggregations.
pub struct AnalyticsRepository<'a> {
    db: &'a Database,
}

impl<'a> AnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Compute the dashboard summary.
    ///
    /// Counts are estimated (exact consistency is not required for a
    /// dashboard); revenue is the sum of `price` across all payment records,
    /// zero when none exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any count or the aggregation
    /// fails.
    pub async fn summary(&self) -> Result<SummaryStats, RepositoryError> {
        // Counts reuse the per-collection repositories where possible; the
        // payment count goes straight at the collection since the payment
        // repository also wants the client handle for settlement.
        let users = AccountRepository::new(self.db).count().await?;
        let menu_item = MenuRepository::new(self.db).count().await?;
        let orders = self
            .db
            .collection::<Document>(PAYMENTS)
            .estimated_document_count()
            .await?;

        let mut cursor = self
            .db
            .collection::<Document>(PAYMENTS)
            .aggregate(revenue_pipeline())
            .await?;
        let revenue = match cursor.try_next().await? {
            Some(doc) => doc.get_f64("total").unwrap_or(0.0),
            None => 0.0,
        };

        Ok(SummaryStats {
            users,
            menu_item,
            orders,
            revenue,
        })
    }

    /// Compute per-category order statistics.
    ///
    /// Each payment's purchased menu-item ids are unwound into line entries,
    /// inner-joined against the menu collection (unresolvable ids drop out),
    /// and grouped by the resolved category of the joined item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the aggregation fails.
    pub async fn order_stats(&self) -> Result<Vec<CategorySales>, RepositoryError> {
        let cursor = self
            .db
            .collection::<Document>(PAYMENTS)
            .aggregate(order_stats_pipeline())
            .with_type::<CategorySales>()
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Pipeline summing the `price` field across all payment records.
pub(crate) fn revenue_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": null,
            "total": { "$sum": "$price" },
        }
    }]
}

/// Pipeline producing `{category, quantity, revenue}` per menu category.
pub(crate) fn order_stats_pipeline() -> Vec<Document> {
    vec![
        doc! { "$unwind": "$menu_item_ids" },
        doc! {
            "$lookup": {
                "from": MENU,
                "localField": "menu_item_ids",
                "foreignField": "_id",
                "as": "menu_items",
            }
        },
        doc! { "$unwind": "$menu_items" },
        doc! {
            "$group": {
                // Group on the resolved category of the joined menu item.
                "_id": "$menu_items.category",
                "quantity": { "$sum": 1 },
                "revenue": { "$sum": "$menu_items.price" },
            }
        },
        doc! {
            "$project": {
                "_id": 0,
                "category": "$_id",
                "quantity": 1,
                "revenue": 1,
            }
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_revenue_pipeline_sums_price_field() {
        let pipeline = revenue_pipeline();
        assert_eq!(pipeline.len(), 1);

        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&Bson::Null));
        assert_eq!(
            group.get_document("total").unwrap().get_str("$sum").unwrap(),
            "$price"
        );
    }

    #[test]
    fn test_order_stats_groups_on_resolved_category() {
        // The grouping key must be the joined document's category field,
        // never a literal constant.
        let pipeline = order_stats_pipeline();
        let group = pipeline[3].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$menu_items.category");
        assert_eq!(
            group
                .get_document("revenue")
                .unwrap()
                .get_str("$sum")
                .unwrap(),
            "$menu_items.price"
        );
    }

    #[test]
    fn test_order_stats_joins_menu_collection() {
        let pipeline = order_stats_pipeline();
        let lookup = pipeline[1].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), MENU);
        assert_eq!(lookup.get_str("localField").unwrap(), "menu_item_ids");
        assert_eq!(lookup.get_str("foreignField").unwrap(), "_id");
    }

    #[test]
    fn test_order_stats_output_shape() {
        let pipeline = order_stats_pipeline();
        let project = pipeline[4].get_document("$project").unwrap();
        assert_eq!(project.get_i32("_id").unwrap(), 0);
        assert_eq!(project.get_str("category").unwrap(), "$_id");
    }
}
