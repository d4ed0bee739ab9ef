//! Category aggregation: from raw item records to per-category views.

use tracing::warn;

use shelflife_catalog::Category;
use shelflife_inventory::ExpiryStatus;

use crate::report::{DataQualityReport, InvalidDateItem};
use crate::snapshot::ShopSnapshot;
use crate::view::{CategoryStatus, CategoryView, ItemView};

/// Resolve and classify every item in the snapshot.
///
/// Returns item views grouped by category position (matching
/// `snapshot.catalog().categories()` order) plus the report of everything
/// excluded. All items are judged against the snapshot's single `today`, so
/// a category cannot flip urgency mid-pass.
pub fn resolve_and_classify(snapshot: &ShopSnapshot) -> (Vec<Vec<ItemView>>, DataQualityReport) {
    let catalog = snapshot.catalog();
    let mut grouped: Vec<Vec<ItemView>> = vec![Vec::new(); catalog.categories().len()];
    let mut report = DataQualityReport {
        orphaned_products: catalog.orphaned_products().to_vec(),
        ..Default::default()
    };

    for record in snapshot.items() {
        let item = match record.parse() {
            Ok(item) => item,
            Err(err) => {
                warn!(item = %record.id, error = %err, "excluding item with unparseable expiry date");
                report.invalid_dates.push(InvalidDateItem {
                    item_id: record.id,
                    raw_expiry_date: record.expiry_date.clone(),
                });
                continue;
            }
        };

        let Some((product, category_idx)) = catalog.resolve_to_index(item.product_id) else {
            warn!(item = %record.id, product = %record.product_id, "excluding item with unresolved product reference");
            report.orphaned_items.push(record.id);
            continue;
        };

        grouped[category_idx].push(ItemView {
            item_id: item.id,
            product_id: product.id,
            product_name: product.name.clone(),
            image_url: product.image_url.clone(),
            expiry_date: item.expiry_date,
            status: ExpiryStatus::classify(item.expiry_date, snapshot.today()),
        });
    }

    (grouped, report)
}

/// Reduce one category's classified items into an aggregate view.
///
/// The aggregate status is the most urgent status among the items; any
/// expired/today/critical item elevates the category to critical and forces
/// it open. An empty item set yields no view at all, so empty categories
/// never appear downstream.
pub fn aggregate_category(category: &Category, items: &[ItemView]) -> Option<CategoryView> {
    let first = items.first()?;

    let mut aggregate_status = CategoryStatus::Ok;
    let mut earliest_expiry = first.expiry_date;
    let mut expanded = false;

    for item in items {
        aggregate_status = aggregate_status.min(CategoryStatus::from(item.status));
        earliest_expiry = earliest_expiry.min(item.expiry_date);
        expanded |= item.status.is_urgent();
    }

    Some(CategoryView {
        category_id: category.id,
        name: category.name.clone(),
        aggregate_status,
        item_count: items.len(),
        earliest_expiry: Some(earliest_expiry),
        expanded,
    })
}
