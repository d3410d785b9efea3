use super::*;

// =============================================================
// Day
// =============================================================

#[test]
fn day_all_is_week_order() {
    let labels: Vec<&str> = Day::ALL.iter().map(|d| d.label()).collect();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
}

#[test]
fn day_parses_its_own_label() {
    for day in Day::ALL {
        assert_eq!(day.label().parse::<Day>(), Ok(day));
    }
}

#[test]
fn day_rejects_unknown_label() {
    assert_eq!("Funday".parse::<Day>(), Err(CellIdError::UnknownDay("Funday".into())));
}

#[test]
fn day_serde_uses_label() {
    let json = serde_json::to_string(&Day::Wed).unwrap();
    assert_eq!(json, "\"Wed\"");
    let back: Day = serde_json::from_str("\"Sun\"").unwrap();
    assert_eq!(back, Day::Sun);
}

// =============================================================
// Time labels
// =============================================================

#[test]
fn time_label_formats_hours_and_halves() {
    assert_eq!(time_label(480), "8:00");
    assert_eq!(time_label(510), "8:30");
    assert_eq!(time_label(23 * 60), "23:00");
    assert_eq!(time_label(0), "0:00");
}

// =============================================================
// CellId display / parse
// =============================================================

#[test]
fn cell_id_display() {
    assert_eq!(CellId::at_hour(Day::Mon, 8).to_string(), "Mon-8:00");
    assert_eq!(CellId::new(Day::Sat, 13 * 60 + 30).to_string(), "Sat-13:30");
}

#[test]
fn cell_id_parses_display_form() {
    let id: CellId = "Tue-13:30".parse().unwrap();
    assert_eq!(id, CellId::new(Day::Tue, 810));
}

#[test]
fn cell_id_missing_separator() {
    assert_eq!("Mon8:00".parse::<CellId>(), Err(CellIdError::MissingSeparator));
}

#[test]
fn cell_id_unknown_day() {
    assert_eq!("Xyz-8:00".parse::<CellId>(), Err(CellIdError::UnknownDay("Xyz".into())));
}

#[test]
fn cell_id_invalid_times() {
    for bad in ["Mon-8", "Mon-8:0", "Mon-24:00", "Mon-8:60", "Mon-a:00", "Mon-8:xx"] {
        let err = bad.parse::<CellId>().unwrap_err();
        assert!(matches!(err, CellIdError::InvalidTime(_)), "{bad} gave {err:?}");
    }
}

#[test]
fn cell_ids_are_distinct_per_day_and_slot() {
    let a = CellId::at_hour(Day::Mon, 8);
    let b = CellId::at_hour(Day::Tue, 8);
    let c = CellId::new(Day::Mon, 8 * 60 + 30);
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(a.to_string(), c.to_string());
}

#[test]
fn cell_ids_order_by_day_then_time() {
    let mut ids = vec![
        CellId::at_hour(Day::Tue, 8),
        CellId::at_hour(Day::Mon, 9),
        CellId::at_hour(Day::Mon, 8),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![CellId::at_hour(Day::Mon, 8), CellId::at_hour(Day::Mon, 9), CellId::at_hour(Day::Tue, 8)]
    );
}
