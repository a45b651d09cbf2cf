use super::*;
use crate::net::types::Customer;

fn entry(id: &str, name: &str, created: Option<&str>) -> CustomerEntry {
    CustomerEntry::new(Customer {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{id}@example.test"),
        deferral_days: 30,
        created_at: created.map(str::to_owned),
        updated_at: Some("2023-02-01T12:30:00Z".to_owned()),
        ..Customer::default()
    })
}

#[test]
fn table_rows_formats_every_column() {
    let rows = table_rows(&[entry("c1", "Ромашка", Some("2023-01-10T09:00:00Z"))]);
    assert_eq!(
        rows,
        vec![TableRow {
            key: "c1".to_owned(),
            name: "Ромашка".to_owned(),
            id: "c1".to_owned(),
            email: "c1@example.test".to_owned(),
            deferral: "30 дней".to_owned(),
            created: "10.01.2023".to_owned(),
            updated: "01.02.2023".to_owned(),
        }]
    );
}

#[test]
fn table_rows_keeps_order_and_count() {
    let entries = vec![
        entry("c1", "One", Some("2023-01-10T09:00:00Z")),
        entry("c2", "Two", Some("2023-01-11T09:00:00Z")),
        entry("c3", "Three", Some("2023-01-12T09:00:00Z")),
    ];
    let rows = table_rows(&entries);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["One", "Two", "Three"]);
    assert!(rows.iter().all(|r| r.created.len() == "DD.MM.YYYY".len()));
}

#[test]
fn table_rows_is_deterministic() {
    let entries = vec![entry("c1", "One", None), entry("c2", "Two", Some("2023-01-11"))];
    assert_eq!(table_rows(&entries), table_rows(&entries));
}

#[test]
fn table_rows_missing_date_renders_placeholder() {
    let rows = table_rows(&[entry("c1", "One", None)]);
    assert_eq!(rows[0].created, "—");
}

#[test]
fn columns_match_row_cells() {
    assert_eq!(COLUMNS.len(), 6);
    assert_eq!(COLUMNS[1], "ID");
}

#[test]
fn row_selection_follows_selected_keys() {
    let selected = vec!["c1".to_owned(), "c3".to_owned()];
    assert!(is_row_selected(&selected, "c1"));
    assert!(!is_row_selected(&selected, "c2"));
    assert!(!is_row_selected(&[], "c1"));
}
