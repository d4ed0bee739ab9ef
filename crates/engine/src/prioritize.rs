//! Global prioritization: category ordering, item ordering, expand state.

use tracing::{debug, instrument, warn};

use crate::aggregate::{aggregate_category, resolve_and_classify};
use crate::snapshot::ShopSnapshot;
use crate::view::{CategorySection, PrioritizedInventory};

/// Compute the display-ready ordering for one shop snapshot.
///
/// Categories are ordered by aggregate status (critical, warning, ok), then
/// by earliest outstanding expiry ascending (first-in-first-out). Items
/// within a category are ordered by expiry ascending. Both sorts are stable,
/// so remaining ties keep the snapshot's input order and repeated calls on
/// the same snapshot return identical output.
///
/// The `expanded` flags in the result are frozen at this point: callers must
/// hold on to them until the next full reload instead of re-deriving them on
/// unrelated UI state changes.
#[instrument(skip(snapshot), fields(shop = %snapshot.shop_id(), items = snapshot.items().len()))]
pub fn prioritize(snapshot: &ShopSnapshot) -> PrioritizedInventory {
    let (grouped, report) = resolve_and_classify(snapshot);

    let mut categories: Vec<CategorySection> = Vec::new();
    for (category, mut items) in snapshot.catalog().categories().iter().zip(grouped) {
        items.sort_by_key(|item| item.expiry_date);
        if let Some(view) = aggregate_category(category, &items) {
            categories.push(CategorySection { view, items });
        }
    }

    categories.sort_by(|a, b| {
        a.view
            .aggregate_status
            .cmp(&b.view.aggregate_status)
            .then(a.view.earliest_expiry.cmp(&b.view.earliest_expiry))
    });

    if report.is_clean() {
        debug!(categories = categories.len(), "prioritized snapshot");
    } else {
        warn!(
            categories = categories.len(),
            excluded = %report.summary(),
            "prioritized snapshot with unresolvable records"
        );
    }

    PrioritizedInventory {
        shop_id: snapshot.shop_id(),
        today: snapshot.today(),
        categories,
        report,
    }
}
