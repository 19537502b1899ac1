mod common;
use common::{fields, memory_store};
use rmaintlog::core::{RecordStore, filter, summarize};
use rmaintlog::db::kv::MemoryKv;
use rmaintlog::models::category::CategoryFilter;

fn sample_store() -> RecordStore<MemoryKv> {
    let mut store = memory_store();
    store
        .create(fields("Pump", 100.0, "Somchai", "Replaced impeller"))
        .expect("create");
    store
        .create(fields("Wiring", 50.0, "Niran", "breaker trips at night"))
        .expect("create");
    store
        .create(fields("AC unit", 800.0, "Anan", "cleaned filters for SOMCHAI's office"))
        .expect("create");
    store
        .create(fields("Pump", 20.25, "Niran", ""))
        .expect("create");
    store
}

#[test]
fn test_filter_all_empty_is_identity() {
    let store = sample_store();
    let view = filter(store.all(), &CategoryFilter::All, "");

    assert_eq!(view.len(), store.all().len());
    for (v, r) in view.iter().zip(store.all()) {
        assert_eq!(*v, r);
    }
}

#[test]
fn test_filter_whitespace_search_matches_everything() {
    let store = sample_store();
    assert_eq!(filter(store.all(), &CategoryFilter::All, "   \t").len(), 4);
}

#[test]
fn test_filter_by_category_exact() {
    let store = sample_store();
    let view = filter(store.all(), &CategoryFilter::Item("Pump".into()), "");

    assert_eq!(view.len(), 2);
    assert!(view.iter().all(|r| r.item == "Pump"));
    assert_eq!(view[0].technician, "Somchai");
    assert_eq!(view[1].technician, "Niran");

    // no prefix or case-folding on the category
    assert!(filter(store.all(), &CategoryFilter::Item("pump".into()), "").is_empty());
    assert!(filter(store.all(), &CategoryFilter::Item("Pu".into()), "").is_empty());
}

#[test]
fn test_search_is_case_insensitive_on_technician_or_notes() {
    let store = sample_store();

    let view = filter(store.all(), &CategoryFilter::All, "  somchai ");
    let ids: Vec<i64> = view.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![store.all()[0].id, store.all()[2].id]);

    let view = filter(store.all(), &CategoryFilter::All, "BREAKER");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].item, "Wiring");

    // item is not searched
    assert!(filter(store.all(), &CategoryFilter::All, "AC unit").is_empty());
}

#[test]
fn test_filters_are_conjunctive() {
    let store = sample_store();
    let view = filter(store.all(), &CategoryFilter::Item("Pump".into()), "niran");

    assert_eq!(view.len(), 1);
    assert_eq!(view[0].price, 20.25);
}

#[test]
fn test_filter_result_is_unmodified_subset() {
    let store = sample_store();
    let cat = CategoryFilter::Item("Pump".into());
    let view = filter(store.all(), &cat, "r");

    for v in &view {
        let src = store.all().iter().find(|r| r.id == v.id).expect("in source");
        assert_eq!(*v, src);
        assert!(cat.matches(&v.item));
        assert!(v.technician.to_lowercase().contains('r') || v.notes.to_lowercase().contains('r'));
    }
}

#[test]
fn test_category_filter_from_arg() {
    assert_eq!(CategoryFilter::from_arg(None), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_arg(Some("all")), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_arg(Some("ALL")), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_arg(Some(" ")), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from_arg(Some("Pump")),
        CategoryFilter::Item("Pump".into())
    );
}

#[test]
fn test_summarize_empty() {
    let s = summarize(std::iter::empty());
    assert_eq!(s.total, 0.0);
    assert!(s.by_category.is_empty());
    assert_eq!(s.count, 0);
    assert_eq!(s.total_display(), "0.00");
}

#[test]
fn test_summarize_single_record() {
    let mut store = memory_store();
    store
        .create(fields("Pump", 150.5, "Somchai", ""))
        .expect("create");

    let s = summarize(store.all());
    assert_eq!(s.total, 150.5);
    assert_eq!(s.by_category, vec![("Pump".to_string(), 150.5)]);
}

#[test]
fn test_summarize_filtered_view() {
    let mut store = memory_store();
    store.create(fields("Pump", 100.0, "A", "")).expect("create");
    store.create(fields("Wiring", 50.0, "B", "")).expect("create");

    let view = filter(store.all(), &CategoryFilter::Item("Pump".into()), "");
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].item, "Pump");

    let s = summarize(view);
    assert_eq!(s.total, 100.0);
    assert_eq!(s.subtotal("Pump"), Some(100.0));
    assert_eq!(s.subtotal("Wiring"), None);
}

#[test]
fn test_summarize_category_order_and_totals() {
    let store = sample_store();
    let s = summarize(store.all());

    let cats: Vec<&str> = s.by_category.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(cats, vec!["Pump", "Wiring", "AC unit"]);
    assert_eq!(s.subtotal("Pump"), Some(120.25));
    assert_eq!(s.count, 4);

    let sum_of_parts: f64 = s.by_category.iter().map(|(_, v)| v).sum();
    assert!((s.total - sum_of_parts).abs() < 1e-9);
    assert_eq!(s.total_display(), "970.25");
}

#[test]
fn test_summarize_rounds_only_for_display() {
    let mut store = memory_store();
    store.create(fields("Pump", 0.1, "A", "")).expect("create");
    store.create(fields("Pump", 0.2, "A", "")).expect("create");
    store.create(fields("Pump", 0.004, "A", "")).expect("create");

    let s = summarize(store.all());
    assert!((s.total - 0.304).abs() < 1e-12);
    assert_eq!(s.total_display(), "0.30");
}
