use std::collections::BTreeSet;
use std::sync::Arc;

use glowcart_catalog::{Product, TagList};
use glowcart_core::{Entity, ProductId};
use glowcart_notify::{Notification, Notifier};
use glowcart_storage::{COMPARE_KEY, ListStore, load_list, save_list};

/// Maximum number of products that can be compared side by side.
pub const MAX_COMPARE_ITEMS: usize = 3;

/// What `add_to_compare` did with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    Full,
}

/// Owns the compare list: at most [`MAX_COMPARE_ITEMS`] full product snapshots,
/// unique by id, in the order the user arranged them.
///
/// The list is written to the `compareList` slot after every operation,
/// including those that leave it unchanged.
#[derive(Debug)]
pub struct CompareManager {
    store: Arc<dyn ListStore>,
    notifier: Notifier,
    entries: Vec<Product>,
}

impl CompareManager {
    /// Hydrate from the `compareList` slot (empty if missing or unreadable).
    pub fn load(store: Arc<dyn ListStore>, notifier: Notifier) -> Self {
        let entries = sanitize(load_list::<Product, _>(store.as_ref(), COMPARE_KEY));
        tracing::debug!(entries = entries.len(), "compare list hydrated");
        Self {
            store,
            notifier,
            entries,
        }
    }

    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_items(&self) -> usize {
        MAX_COMPARE_ITEMS
    }

    pub fn add_to_compare(&mut self, product: &Product) -> AddOutcome {
        let outcome = if self.is_in_compare_list(product.id) {
            self.notifier
                .info(format!("{} is already in your compare list", product.name));
            AddOutcome::AlreadyPresent
        } else if self.entries.len() >= MAX_COMPARE_ITEMS {
            self.notifier.warning(format!(
                "You can only compare up to {MAX_COMPARE_ITEMS} products. Remove one to add another."
            ));
            AddOutcome::Full
        } else {
            self.entries.push(product.clone());
            self.notifier
                .success(format!("{} added to compare list", product.name));
            AddOutcome::Added
        };

        tracing::debug!(product_id = %product.id, ?outcome, len = self.entries.len(), "add to compare");
        self.persist();
        outcome
    }

    pub fn remove_from_compare(&mut self, product_id: ProductId) {
        self.entries.retain(|p| p.id() != product_id);
        self.notifier.info("Product removed from compare list");
        self.persist();
    }

    pub fn clear_compare_list(&mut self) {
        self.entries.clear();
        self.notifier.info("Compare list cleared");
        self.persist();
    }

    pub fn is_in_compare_list(&self, product_id: ProductId) -> bool {
        self.entries.iter().any(|p| p.id() == product_id)
    }

    /// Move the entry at `from` to position `to`, shifting the ones between.
    ///
    /// An out-of-range `from` leaves the order untouched; `to` past the end
    /// lands on the last position.
    pub fn reorder_compare_list(&mut self, from: usize, to: usize) {
        if from < self.entries.len() {
            let moved = self.entries.remove(from);
            let to = to.min(self.entries.len());
            self.entries.insert(to, moved);
        }
        self.persist();
    }

    /// Distinct ingredients across the compared products, sorted.
    pub fn all_ingredients(&self) -> Vec<String> {
        self.collect_tags(|p| p.ingredients.as_ref())
    }

    /// Distinct skin types across the compared products, sorted.
    pub fn all_skin_types(&self) -> Vec<String> {
        self.collect_tags(|p| p.skin_type.as_ref())
    }

    /// Distinct concerns across the compared products, sorted.
    pub fn all_concerns(&self) -> Vec<String> {
        self.collect_tags(|p| p.concerns.as_ref())
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    fn collect_tags<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Product) -> Option<&TagList>,
    {
        self.entries
            .iter()
            .filter_map(|p| field(p).and_then(TagList::as_list))
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn persist(&self) {
        if let Err(err) = save_list(self.store.as_ref(), COMPARE_KEY, &self.entries) {
            tracing::warn!(error = %err, "failed to persist compare list; keeping in-memory state");
        }
    }
}

/// Enforce uniqueness and the size bound on a stored payload.
fn sanitize(stored: Vec<Product>) -> Vec<Product> {
    let mut entries: Vec<Product> = Vec::with_capacity(MAX_COMPARE_ITEMS);
    for product in stored {
        if entries.len() == MAX_COMPARE_ITEMS {
            break;
        }
        if !entries.iter().any(|p| p.id == product.id) {
            entries.push(product);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowcart_core::Money;
    use glowcart_notify::{ManualClock, NotificationKind};
    use glowcart_storage::MemoryStore;

    fn product(id: i64) -> Product {
        Product::new(ProductId::new(id), format!("Product {id}"), Money::new(100_000), "Serum")
    }

    fn compare_with(store: Arc<MemoryStore>) -> CompareManager {
        CompareManager::load(store, Notifier::new(Arc::new(ManualClock::default())))
    }

    fn compare() -> (Arc<MemoryStore>, CompareManager) {
        let store = Arc::new(MemoryStore::new());
        let compare = compare_with(store.clone());
        (store, compare)
    }

    fn ids(compare: &CompareManager) -> Vec<i64> {
        compare.entries().iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn fourth_product_is_rejected_with_warning() {
        let (_store, mut compare) = compare();
        for id in 1..=3 {
            assert_eq!(compare.add_to_compare(&product(id)), AddOutcome::Added);
        }

        assert_eq!(compare.add_to_compare(&product(4)), AddOutcome::Full);
        assert_eq!(compare.len(), 3);
        assert!(!compare.is_in_compare_list(ProductId::new(4)));

        let n = compare.notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(
            n.message,
            "You can only compare up to 3 products. Remove one to add another."
        );
    }

    #[test]
    fn duplicate_add_emits_info() {
        let (_store, mut compare) = compare();
        compare.add_to_compare(&product(1));
        assert_eq!(compare.notification().unwrap().kind, NotificationKind::Success);

        assert_eq!(compare.add_to_compare(&product(1)), AddOutcome::AlreadyPresent);
        assert_eq!(compare.len(), 1);
        let n = compare.notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.message, "Product 1 is already in your compare list");
    }

    #[test]
    fn duplicate_is_reported_before_capacity() {
        let (_store, mut compare) = compare();
        for id in 1..=3 {
            compare.add_to_compare(&product(id));
        }
        assert_eq!(compare.add_to_compare(&product(2)), AddOutcome::AlreadyPresent);
    }

    #[test]
    fn rejected_adds_still_persist() {
        let (store, mut compare) = compare();
        for id in 1..=3 {
            compare.add_to_compare(&product(id));
        }
        glowcart_storage::ListStore::remove(store.as_ref(), COMPARE_KEY).unwrap();

        compare.add_to_compare(&product(4));
        let stored: Vec<Product> = load_list(store.as_ref(), COMPARE_KEY);
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn remove_and_clear_notify_info() {
        let (store, mut compare) = compare();
        compare.add_to_compare(&product(1));
        compare.add_to_compare(&product(2));

        compare.remove_from_compare(ProductId::new(1));
        assert_eq!(ids(&compare), vec![2]);
        assert_eq!(compare.notification().unwrap().message, "Product removed from compare list");

        compare.remove_from_compare(ProductId::new(42));
        assert_eq!(compare.len(), 1);

        compare.clear_compare_list();
        assert!(compare.is_empty());
        assert_eq!(compare.notification().unwrap().message, "Compare list cleared");
        let stored: Vec<Product> = load_list(store.as_ref(), COMPARE_KEY);
        assert!(stored.is_empty());
    }

    #[test]
    fn reorder_moves_and_shifts() {
        let (_store, mut compare) = compare();
        for id in 1..=3 {
            compare.add_to_compare(&product(id));
        }
        let before = compare.notifier_mut().pending();

        compare.reorder_compare_list(0, 2);
        assert_eq!(ids(&compare), vec![2, 3, 1]);

        compare.reorder_compare_list(2, 0);
        assert_eq!(ids(&compare), vec![1, 2, 3]);

        compare.reorder_compare_list(0, 10);
        assert_eq!(ids(&compare), vec![2, 3, 1]);

        compare.reorder_compare_list(7, 0);
        assert_eq!(ids(&compare), vec![2, 3, 1]);

        assert_eq!(compare.notifier_mut().pending(), before);
    }

    #[test]
    fn reload_restores_order_and_snapshots() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut compare = compare_with(store.clone());
            compare.add_to_compare(&product(1).with_ingredients(vec!["niacinamide"]));
            compare.add_to_compare(&product(2));
            compare.reorder_compare_list(1, 0);
        }

        let reloaded = compare_with(store);
        assert_eq!(ids(&reloaded), vec![2, 1]);
        assert_eq!(reloaded.entries()[1], product(1).with_ingredients(vec!["niacinamide"]));
    }

    #[test]
    fn hydration_enforces_bound_and_uniqueness() {
        let store = Arc::new(MemoryStore::new());
        let stored = vec![product(1), product(1), product(2), product(3), product(4)];
        save_list(store.as_ref(), COMPARE_KEY, &stored).unwrap();

        let compare = compare_with(store);
        assert_eq!(ids(&compare), vec![1, 2, 3]);
    }

    #[test]
    fn comparison_table_helpers_collect_sorted_distinct_list_values() {
        let (_store, mut compare) = compare();
        compare.add_to_compare(
            &product(1)
                .with_ingredients(vec!["niacinamide", "zinc"])
                .with_skin_type(vec!["oily"]),
        );
        compare.add_to_compare(
            &product(2)
                .with_ingredients(vec!["hyaluronic acid", "niacinamide"])
                .with_concerns("acne, pores"),
        );

        assert_eq!(
            compare.all_ingredients(),
            vec!["hyaluronic acid", "niacinamide", "zinc"]
        );
        assert_eq!(compare.all_skin_types(), vec!["oily"]);
        assert!(compare.all_concerns().is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(i64),
            Remove(i64),
            Reorder(usize, usize),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (0i64..6).prop_map(Op::Add),
                2 => (0i64..6).prop_map(Op::Remove),
                2 => (0usize..4, 0usize..4).prop_map(|(from, to)| Op::Reorder(from, to)),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: reordering never changes which products are compared.
            #[test]
            fn reorder_preserves_membership(
                n in 0usize..=3,
                moves in prop::collection::vec((0usize..5, 0usize..5), 0..20)
            ) {
                let (_store, mut compare) = compare();
                for id in 0..n as i64 {
                    compare.add_to_compare(&product(id));
                }
                let mut expected = ids(&compare);
                expected.sort();

                for (from, to) in moves {
                    compare.reorder_compare_list(from, to);
                }

                let mut actual = ids(&compare);
                actual.sort();
                prop_assert_eq!(actual, expected);
            }

            /// Property: size never exceeds the bound, ids stay unique.
            #[test]
            fn adds_respect_bound(adds in prop::collection::vec(0i64..8, 0..30)) {
                let (_store, mut compare) = compare();
                for id in adds {
                    let before = compare.len();
                    let outcome = compare.add_to_compare(&product(id));
                    match outcome {
                        AddOutcome::Added => prop_assert_eq!(compare.len(), before + 1),
                        _ => prop_assert_eq!(compare.len(), before),
                    }
                }

                prop_assert!(compare.len() <= MAX_COMPARE_ITEMS);
                let mut all = ids(&compare);
                let count = all.len();
                all.sort();
                all.dedup();
                prop_assert_eq!(all.len(), count);
            }

            /// Property: the persisted slot always reloads to the in-memory list.
            #[test]
            fn persisted_compare_list_round_trips(ops in prop::collection::vec(op(), 0..40)) {
                let (store, mut compare) = compare();
                for op in ops {
                    match op {
                        Op::Add(id) => {
                            compare.add_to_compare(
                                &product(id).with_concerns(vec!["acne"]).with_skin_type("oily, dry"),
                            );
                        }
                        Op::Remove(id) => compare.remove_from_compare(ProductId::new(id)),
                        Op::Reorder(from, to) => compare.reorder_compare_list(from, to),
                        Op::Clear => compare.clear_compare_list(),
                    }
                }

                let reloaded = compare_with(store);
                prop_assert_eq!(reloaded.entries(), compare.entries());
            }
        }
    }
}
