use proptest::prelude::*;
use stock_core::store::INVENTORY_KEY;
use stock_core::{FixedClock, InventoryEntry, JsonStore, MemoryStore, NewOrder, StockBook};
use uuid::Uuid;

fn book() -> StockBook<MemoryStore> {
    StockBook::open(MemoryStore::new()).with_clock(FixedClock::new("2024-03-01 09:30:00"))
}

fn product_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// A valid receipt grows the ledger by exactly one entry carrying the input quantity.
    #[test]
    fn valid_add_appends_one_entry(product in product_name(), quantity in 0.1f64..1_000_000.0) {
        let mut book = book();
        book.inventory().add("Seed", 1.0).unwrap();
        let before = book.inventory_entries().len();

        let entry = book.inventory().add(&product, quantity).unwrap();

        prop_assert_eq!(book.inventory_entries().len(), before + 1);
        prop_assert_eq!(book.inventory_entries().last(), Some(&entry));
        prop_assert!((entry.quantity - quantity).abs() < 1e-9);
    }

    /// Sub-minimum quantities are rejected without changing state or writing.
    #[test]
    fn small_quantity_rejected(quantity in -1_000.0f64..0.0999) {
        let mut book = book();
        book.inventory().add("Seed", 1.0).unwrap();
        let writes = book.store().inner().writes();

        prop_assert!(book.inventory().add("Apples", quantity).is_err());
        prop_assert!(book.orders().add(NewOrder::new("Apples", 1.0, quantity)).is_err());

        prop_assert_eq!(book.inventory_entries().len(), 1);
        prop_assert!(book.order_entries().is_empty());
        prop_assert_eq!(book.store().inner().writes(), writes);
    }

    /// Order totals are price times quantity rounded to cents, fixed at creation.
    #[test]
    fn order_total_invariant(price in 0.0f64..10_000.0, quantity in 0.1f64..1_000.0) {
        let mut book = book();
        let order = book.orders().add(NewOrder::new("Apples", price, quantity)).unwrap();

        let expected = (price * quantity * 100.0).round() / 100.0;
        prop_assert_eq!(order.total, expected);
    }

    /// Whatever is set under a key reads back unchanged.
    #[test]
    fn store_round_trip(
        items in prop::collection::vec((product_name(), 0.1f64..10_000.0), 0..20)
    ) {
        let entries: Vec<InventoryEntry> = items
            .into_iter()
            .map(|(product, quantity)| InventoryEntry {
                id: Uuid::new_v4(),
                product,
                quantity,
                timestamp: "2024-03-01 09:30:00".to_string(),
            })
            .collect();
        let mut store = JsonStore::new(MemoryStore::new());

        store.set(INVENTORY_KEY, &entries).unwrap();
        let loaded: Vec<InventoryEntry> = store.get(INVENTORY_KEY);

        prop_assert_eq!(loaded, entries);
    }

    /// Summary totals match the raw sums of both ledgers for every product.
    #[test]
    fn summary_matches_raw_sums(
        receipts in prop::collection::vec((0usize..4, 0.1f64..100.0), 0..12),
        orders in prop::collection::vec((0usize..4, 0.1f64..100.0), 0..12),
    ) {
        let products = ["Apples", "Pears", "Plums", "Kiwis"];
        let mut book = book();
        for (p, q) in &receipts {
            book.inventory().add(products[*p], *q).unwrap();
        }
        for (p, q) in &orders {
            book.orders().add(NewOrder::new(products[*p], 1.0, *q)).unwrap();
        }

        let rows = book.summary();

        for row in &rows {
            let received: f64 = receipts.iter()
                .filter(|(p, _)| products[*p] == row.product)
                .map(|(_, q)| q)
                .sum();
            let ordered: f64 = orders.iter()
                .filter(|(p, _)| products[*p] == row.product)
                .map(|(_, q)| q)
                .sum();
            prop_assert!((row.total_received - received).abs() < 0.001);
            prop_assert!((row.total_ordered - ordered).abs() < 0.001);
            prop_assert!((row.remaining - (received - ordered)).abs() < 0.001);
        }
        let mut distinct: Vec<usize> = receipts.iter().chain(orders.iter()).map(|(p, _)| *p).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(rows.len(), distinct.len());
    }
}

#[test]
fn test_clear_twice_equals_clear_once() {
    let mut once = book();
    once.inventory().add("Apples", 1.0).unwrap();
    once.inventory().clear().unwrap();

    let mut twice = book();
    twice.inventory().add("Apples", 1.0).unwrap();
    twice.inventory().clear().unwrap();
    twice.inventory().clear().unwrap();

    assert_eq!(once.inventory_entries(), twice.inventory_entries());
    let a: Vec<InventoryEntry> = once.store().get(INVENTORY_KEY);
    let b: Vec<InventoryEntry> = twice.store().get(INVENTORY_KEY);
    assert_eq!(a, b);
}

#[test]
fn test_remove_absent_id_leaves_ledger_unchanged() {
    let mut book = book();
    book.inventory().add("Apples", 1.0).unwrap();
    let before = book.inventory_entries().to_vec();

    assert!(!book.inventory().remove(Uuid::new_v4()).unwrap());

    assert_eq!(book.inventory_entries(), before.as_slice());
}
