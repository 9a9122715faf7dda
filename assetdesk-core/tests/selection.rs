use assetdesk_core::{record_id, HeaderCheckbox, Record, Selection};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: String,
}

impl Record for Row {
    fn id(&self) -> &str {
        &self.id
    }
}

fn rows(n: usize) -> Vec<Row> {
    (0..n).map(|i| Row { id: format!("task-{i}") }).collect()
}

#[test]
fn test_shift_click_selects_closed_range() {
    let records = rows(10);
    let s = Selection::new()
        .toggle("task-2", false, &records, record_id)
        .toggle("task-7", true, &records, record_id);

    let expected: Vec<String> = (2..=7).map(|i| format!("task-{i}")).collect();
    let mut got = s.selected_ids();
    got.sort_by_key(|id| id.trim_start_matches("task-").parse::<usize>().unwrap());
    assert_eq!(got, expected);
    assert_eq!(s.last_selected_id(), Some("task-7"));
}

#[test]
fn test_select_all_then_toggle_one_off() {
    let records = rows(10);
    let s = Selection::new().select_all(&records, record_id);
    let view = s.view(&records, record_id);
    assert!(view.is_all_selected());
    assert!(!view.is_indeterminate());

    let s = s.toggle("task-4", false, &records, record_id);
    let view = s.view(&records, record_id);
    assert!(view.is_indeterminate());
    assert!(!view.is_all_selected());
    assert_eq!(view.header(), HeaderCheckbox::Indeterminate);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let records = rows(5);
    for start in [Selection::new(), Selection::new().select_all(&records, record_id)] {
        for row in &records {
            let twice = start
                .toggle(&row.id, false, &records, record_id)
                .toggle(&row.id, false, &records, record_id);
            assert_eq!(twice.is_selected(&row.id), start.is_selected(&row.id));
            assert_eq!(twice.selected_ids(), start.selected_ids());
        }
    }
}

#[test]
fn test_range_toggle_is_idempotent() {
    let records = rows(10);
    let anchored = Selection::new()
        .toggle("task-8", false, &records, record_id)
        .toggle("task-0", false, &records, record_id)
        .toggle("task-0", false, &records, record_id);

    let once = anchored.toggle("task-3", true, &records, record_id);
    assert_eq!(once.selected_count(), 5);
    assert_eq!(once, anchored.toggle("task-3", true, &records, record_id));

    // Covering the same rows again from the other end changes nothing
    let again = once.toggle("task-0", true, &records, record_id);
    assert_eq!(again.selected_ids(), once.selected_ids());
}

#[test]
fn test_range_never_removes_outside_selection() {
    let records = rows(10);
    let s = Selection::new()
        .toggle("task-9", false, &records, record_id)
        .toggle("task-1", false, &records, record_id)
        .toggle("task-3", true, &records, record_id);
    assert_eq!(s.selected_count(), 4);
    assert!(s.is_selected("task-9"));
}

#[test]
fn test_select_all_then_clear() {
    let records = rows(6);
    let s = Selection::new().select_all(&records, record_id).cleared();
    let view = s.view(&records, record_id);
    assert_eq!(view.selected_count(), 0);
    assert!(!view.is_indeterminate());
    assert!(!view.has_selection());
}

#[test]
fn test_selected_records_follow_list_order() {
    let records = rows(6);
    let s = Selection::new()
        .toggle("task-5", false, &records, record_id)
        .toggle("task-1", false, &records, record_id);
    let view = s.view(&records, record_id);
    let picked: Vec<&str> = view.selected_records().into_iter().map(|r| r.id.as_str()).collect();
    assert_eq!(picked, vec!["task-1", "task-5"]);
}

#[test]
fn test_range_uses_filtered_order() {
    // Range is taken over the displayed list, not the raw one
    let raw = rows(10);
    let shown: Vec<&Row> = raw
        .iter()
        .filter(|r| r.id.ends_with(|c: char| matches!(c, '1' | '3' | '5' | '7')))
        .collect();
    let s = Selection::new()
        .toggle("task-1", false, &shown, |r: &&Row| r.id())
        .toggle("task-5", true, &shown, |r: &&Row| r.id());
    assert_eq!(s.selected_ids(), vec!["task-1", "task-3", "task-5"]);
}

#[test]
fn test_refresh_with_reconcile() {
    let before = rows(5);
    let s = Selection::for_epoch(1).select_all(&before, record_id);

    let after: Vec<Row> = rows(8).into_iter().skip(3).collect();
    assert!(s.is_stale(2));
    let s = s.reconcile(&after, record_id, 2);
    assert_eq!(s.selected_ids(), vec!["task-3", "task-4"]);
    assert!(s.view(&after, record_id).is_indeterminate());
}
