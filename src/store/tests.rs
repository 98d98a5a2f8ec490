use super::{Fleet, GliderStore, Snapshot, StoreError};
use crate::audit::{AuditLog, MemoryAuditLog};
use crate::balance::LoadConfiguration;
use crate::model::{ComponentMasses, DatumConvention, EnvelopePoint, Glider, Instrument, ScaleReadings, Weighing};
use chrono::NaiveDate;
use rand::Rng;

const RECORDS: &str = r#"{
    "gliders": [
        {
            "registration": "F-CABC", "model": "LS4", "brand": "Rolladen-Schneider", "serial_number": "4712",
            "single_seat": true, "datum": 1, "pilot_position": 1,
            "datum_label": "wing root leading edge", "wedge": "45/1000", "wedge_position": "fuselage top",
            "mmwp": 525.0, "mmwv": 250.0, "mmenp": 120.0, "mm_harnais": 110.0, "weight_min_pilot": 70.0,
            "front_centering": 200.0, "rear_centering": 400.0,
            "arm_front_pilot": 1000.0, "arm_rear_pilot": 200.0, "arm_waterballast": 250.0,
            "arm_front_ballast": 1500.0, "arm_rear_watterballast_or_ballast": 4000.0,
            "arm_gas_tank": 0.0, "arm_instruments_panel": 1300.0
        },
        {
            "registration": "F-CXYZ", "model": "ASK 21", "brand": "Schleicher", "serial_number": "21555",
            "single_seat": false, "datum": 4, "pilot_position": 2
        }
    ],
    "weighings": [
        {
            "id": 3, "date": "2024-04-12", "registration": "F-CABC", "p1": 150.0, "p2": 120.0,
            "right_wing_weight": 60.0, "left_wing_weight": 60.0, "tail_weight": 10.0, "fuselage_weight": 70.0,
            "A": 300.0, "D": 1200.0
        },
        {
            "id": 7, "date": "2019-05-02", "registration": "F-CABC", "p1": 140.0, "p2": 118.0,
            "right_wing_weight": 59.0, "left_wing_weight": 59.0, "tail_weight": 10.0, "fuselage_weight": 68.0,
            "fix_ballast_weight": 1.5, "A": 300.0, "D": 1200.0
        }
    ],
    "wb_limits": [
        { "registration": "F-CABC", "point_index": 2, "center_of_gravity": 400.0, "weight": 525.0 },
        { "registration": "F-CABC", "point_index": 0, "center_of_gravity": 200.0, "weight": 200.0 },
        { "registration": "F-CABC", "point_index": 3, "center_of_gravity": 200.0, "weight": 525.0 },
        { "registration": "F-CABC", "point_index": 1, "center_of_gravity": 400.0, "weight": 200.0 }
    ],
    "inventory": [
        {
            "id": 2, "registration": "F-CABC", "on_board": false, "instrument": "flarm", "brand": "LXNAV",
            "type": "PowerFLARM", "number": "88", "date": null, "seat": "front"
        },
        {
            "id": 1, "registration": "F-CABC", "on_board": true, "instrument": "vario", "brand": "LXNAV",
            "type": "S8", "number": "1234", "date": "2023-03-01", "seat": "front"
        }
    ]
}"#;

fn snapshot() -> Snapshot { serde_json::from_str(RECORDS).unwrap() }

fn fleet() -> Fleet { Fleet::from_gliders(snapshot().into_gliders().unwrap()).unwrap() }

fn weighing(date: NaiveDate) -> Weighing {
    Weighing::new(
        0,
        date,
        ScaleReadings { p1: 150.0, p2: 120.0, a: 300.0, d: 1200.0 },
        ComponentMasses { right_wing: 60.0, left_wing: 60.0, tail: 10.0, fuselage: 70.0, fixed_ballast: 0.0 },
    )
}

fn day(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2025, 6, d).unwrap() }

#[test]
fn test_records_assemble_into_gliders() {
    let gliders = snapshot().into_gliders().unwrap();
    assert_eq!(gliders.len(), 2);
    let ls4 = &gliders[0];
    assert_eq!(ls4.registration(), "F-CABC");
    assert_eq!(ls4.datum(), DatumConvention::Wing2PointsAft);
    assert_eq!(ls4.datum_description().wedge, "45/1000");
    assert_eq!(ls4.arms().unwrap().rear_ballast, 4000.0);
    assert_eq!(ls4.latest_weighing().unwrap().id(), 3);
    assert_eq!(ls4.resolve_reference_arm(), Ok(833.0));
    assert_eq!(ls4.envelope(), [
        EnvelopePoint::new(200.0, 200.0),
        EnvelopePoint::new(400.0, 200.0),
        EnvelopePoint::new(400.0, 525.0),
        EnvelopePoint::new(200.0, 525.0),
    ]);
    assert_eq!(ls4.instruments()[0].instrument, "vario");
    assert_eq!(ls4.on_board_instruments().count(), 1);

    let ask21 = &gliders[1];
    assert_eq!(ask21.datum(), DatumConvention::ForwardGlider);
    assert!(ask21.limits().is_none());
    assert!(ask21.arms().is_none());
    assert!(ask21.compute(&LoadConfiguration::default()).is_err());
}

#[test]
fn test_invalid_records_are_rejected() {
    let mut bad_datum = snapshot();
    bad_datum.gliders[1].datum = 9;
    assert!(matches!(bad_datum.into_gliders(), Err(StoreError::InvalidRecord { table: "GLIDER", .. })));

    let mut incomplete = snapshot();
    incomplete.gliders[0].mmenp = None;
    match incomplete.into_gliders() {
        Err(StoreError::InvalidRecord { reason, .. }) => assert!(reason.contains("mmenp")),
        other => panic!("expected an invalid record, got {other:?}"),
    }

    let mut bad_registration = snapshot();
    bad_registration.gliders[0].registration = String::from("fcabc");
    assert!(matches!(bad_registration.into_gliders(), Err(StoreError::InvalidRecord { .. })));

    let mut orphan = snapshot();
    orphan.weighings[0].registration = String::from("D-1234");
    assert!(matches!(orphan.into_gliders(), Err(StoreError::UnknownRegistration { .. })));

    let mut repeated = snapshot();
    repeated.wb_limits[0].point_index = 0;
    assert!(matches!(repeated.into_gliders(), Err(StoreError::InvalidRecord { table: "WB_LIMIT", .. })));

    let mut duplicate = snapshot();
    duplicate.gliders[1] = duplicate.gliders[0].clone();
    assert!(matches!(duplicate.into_gliders(), Err(StoreError::DuplicateRegistration { .. })));
}

#[test]
fn test_repeated_weighing_ids_are_rejected() {
    // same id and date, different readings: the reference arm would depend on row order
    let mut same_glider = snapshot();
    let mut twin = same_glider.weighings[0].clone();
    twin.p2 = 200.0;
    same_glider.weighings.push(twin);
    match same_glider.into_gliders() {
        Err(StoreError::InvalidRecord { table: "WEIGHING", key, .. }) => assert_eq!(key, "3"),
        other => panic!("expected a repeated weighing id, got {other:?}"),
    }

    let mut across = snapshot();
    let mut foreign = across.weighings[1].clone();
    foreign.registration = String::from("F-CXYZ");
    across.weighings.push(foreign);
    assert!(matches!(across.into_gliders(), Err(StoreError::InvalidRecord { table: "WEIGHING", .. })));

    let mut gliders = snapshot().into_gliders().unwrap();
    let clash = Weighing::new(7, day(4), ScaleReadings::default(), ComponentMasses::default());
    gliders.push(Glider::new("F-CDEF", "Janus", "Schempp-Hirth", "55", false).with_weighing(clash));
    match Fleet::from_gliders(gliders) {
        Err(StoreError::InvalidRecord { table: "WEIGHING", key, .. }) => assert_eq!(key, "7"),
        other => panic!("expected a repeated weighing id, got {other:?}"),
    }
}

#[test]
fn test_weighing_id_space_exhaustion() {
    let mut last = snapshot();
    last.weighings[0].id = u32::MAX;
    let gliders = last.into_gliders().unwrap();
    assert!(matches!(Fleet::from_gliders(gliders), Err(StoreError::InvalidRecord { table: "WEIGHING", .. })));

    let audit = MemoryAuditLog::new();
    let mut nearly_full = snapshot();
    nearly_full.weighings[0].id = u32::MAX - 1;
    let mut fleet = Fleet::from_gliders(nearly_full.into_gliders().unwrap()).unwrap();
    assert!(matches!(
        fleet.add_weighing("F-CABC", weighing(day(5)), "alice", &audit),
        Err(StoreError::InvalidRecord { table: "WEIGHING", .. })
    ));
    assert_eq!(fleet.glider("F-CABC").unwrap().weighings().len(), 2);
    assert!(audit.events().is_empty());
}

#[test]
fn test_malformed_json() {
    let error = serde_json::from_str::<Snapshot>("{\"gliders\": 3}").map_err(StoreError::from);
    assert!(matches!(error, Err(StoreError::Parse { .. })));
}

#[test]
fn test_snapshot_survives_save_and_load() {
    let fleet = fleet();
    let path = std::env::temp_dir().join(format!("glider-wb-{}.json", rand::rng().random::<u64>()));
    fleet.save(&path).unwrap();
    let reloaded = Fleet::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    for registration in fleet.registrations() {
        assert_eq!(reloaded.glider(&registration).unwrap(), fleet.glider(&registration).unwrap());
    }
    assert!(matches!(Fleet::load(&path), Err(StoreError::Io { .. })));
}

#[test]
fn test_glider_edits() {
    let audit = MemoryAuditLog::new();
    let mut fleet = fleet();
    let duo = Glider::new("F-CDEF", "Janus", "Schempp-Hirth", "55", false).with_weighing(weighing(day(1)));
    fleet.add_glider(duo.clone(), "alice", &audit).unwrap();
    assert_eq!(fleet.registrations(), ["F-CABC", "F-CDEF", "F-CXYZ"]);
    assert_eq!(fleet.glider("F-CDEF").unwrap().weighings()[0].id(), 8);

    assert!(matches!(fleet.add_glider(duo, "alice", &audit), Err(StoreError::DuplicateRegistration { .. })));
    let lower = Glider::new("f-cdef", "Janus", "Schempp-Hirth", "55", false);
    assert!(matches!(fleet.add_glider(lower, "alice", &audit), Err(StoreError::InvalidRecord { .. })));

    let renamed = Glider::new("F-CABC", "LS4-b", "Rolladen-Schneider", "4712", true);
    fleet.update_glider(renamed, "bob", &audit).unwrap();
    let updated = fleet.glider("F-CABC").unwrap();
    assert_eq!(updated.model(), "LS4-b");
    assert_eq!(updated.weighings().len(), 2);
    assert_eq!(updated.envelope().len(), 4);
    assert!(updated.limits().is_none());

    let missing = Glider::new("D-1234", "Discus", "Schempp-Hirth", "1", true);
    assert!(matches!(fleet.update_glider(missing, "bob", &audit), Err(StoreError::UnknownRegistration { .. })));

    fleet.delete_glider("F-CXYZ", "bob", &audit).unwrap();
    assert!(matches!(fleet.glider("F-CXYZ"), Err(StoreError::UnknownRegistration { .. })));
    assert_eq!(fleet.len(), 2);

    let events = audit.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].username(), "alice");
    assert_eq!(events[0].event(), "added glider F-CDEF");
    assert_eq!(events[2].event(), "deleted glider F-CXYZ");
}

#[test]
fn test_weighing_ids_only_increase() {
    let audit = MemoryAuditLog::new();
    let mut fleet = fleet();
    let first = fleet.add_weighing("F-CABC", weighing(day(2)), "alice", &audit).unwrap();
    assert_eq!(first, 8);
    fleet.delete_weighing("F-CABC", first, "alice", &audit).unwrap();
    let second = fleet.add_weighing("F-CXYZ", weighing(day(2)), "alice", &audit).unwrap();
    assert!(second > first);
    assert!(matches!(
        fleet.delete_weighing("F-CABC", first, "alice", &audit),
        Err(StoreError::UnknownWeighing { id: 8, .. })
    ));
    assert!(matches!(
        fleet.add_weighing("D-1234", weighing(day(2)), "alice", &audit),
        Err(StoreError::UnknownRegistration { .. })
    ));
    assert_eq!(audit.events().len(), 3);
}

#[test]
fn test_latest_weighing_follows_edits() {
    let audit = MemoryAuditLog::new();
    let mut fleet = fleet();
    let before = fleet.glider("F-CABC").unwrap();
    let id = fleet.add_weighing("F-CABC", weighing(day(3)), "alice", &audit).unwrap();

    let corrected = Weighing::new(id, day(3), ScaleReadings { p1: 135.0, p2: 135.0, a: 300.0, d: 1200.0 }, ComponentMasses::default());
    fleet.update_weighing("F-CABC", corrected, "alice", &audit).unwrap();
    let glider = fleet.glider("F-CABC").unwrap();
    assert_eq!(glider.latest_weighing().unwrap().id(), id);
    assert_eq!(glider.resolve_reference_arm(), Ok(900.0));
    // snapshots taken earlier are not affected
    assert_eq!(before.latest_weighing().unwrap().id(), 3);

    let unknown = Weighing::new(99, day(3), ScaleReadings::default(), ComponentMasses::default());
    assert!(matches!(
        fleet.update_weighing("F-CABC", unknown, "alice", &audit),
        Err(StoreError::UnknownWeighing { id: 99, .. })
    ));
}

#[test]
fn test_envelope_and_inventory_replacement() {
    let audit = MemoryAuditLog::new();
    let mut fleet = fleet();
    let triangle = vec![EnvelopePoint::new(250.0, 250.0), EnvelopePoint::new(350.0, 250.0), EnvelopePoint::new(300.0, 500.0)];
    fleet.replace_envelope("F-CXYZ", triangle.clone(), "carol", &audit).unwrap();
    assert_eq!(fleet.glider("F-CXYZ").unwrap().envelope(), triangle.as_slice());
    assert!(fleet.glider("F-CXYZ").unwrap().is_within_envelope(300.0, 300.0));

    let broken = vec![EnvelopePoint::new(f64::NAN, 250.0)];
    assert!(matches!(
        fleet.replace_envelope("F-CXYZ", broken, "carol", &audit),
        Err(StoreError::InvalidRecord { table: "WB_LIMIT", .. })
    ));

    let barograph = Instrument {
        on_board: true,
        instrument: String::from("barograph"),
        brand: String::from("Winter"),
        kind: String::from("mechanical"),
        number: String::from("7"),
        date: None,
        seat: String::from("rear"),
    };
    fleet.replace_inventory("F-CABC", vec![barograph.clone()], "carol", &audit).unwrap();
    assert_eq!(fleet.glider("F-CABC").unwrap().instruments(), [barograph]);
    assert_eq!(audit.events().len(), 2);
    assert!(audit.events().iter().all(|e| e.username() == "carol"));
}
