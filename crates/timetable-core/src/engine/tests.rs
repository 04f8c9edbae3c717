//! Tests for the schedule conflict engine.

use super::*;
use crate::{
    catalog::Catalog,
    models::{Day, Meeting, TemplateCourse},
};

fn current_term() -> Vec<CurrentTermEntry> {
    let entry = |code: &str, section: &str, meetings: Vec<Meeting>| CurrentTermEntry {
        code: code.to_string(),
        name: format!("Enrolled {code}"),
        professor: Some("Staff".to_string()),
        section: section.to_string(),
        term: "II-2024".to_string(),
        location: Some("A1-1".to_string()),
        meetings,
    };
    vec![
        entry(
            "IC6400",
            "01",
            vec![
                Meeting::parse("Lunes", "09:00", "10:00").unwrap(),
                Meeting::parse("Jueves", "07:30", "09:20").unwrap(),
            ],
        ),
        entry(
            "IC6600",
            "02",
            vec![Meeting::parse("Viernes", "13:00", "14:50").unwrap()],
        ),
    ]
}

fn add(engine: &mut ScheduleConflictEngine, catalog: &Catalog, code: &str, group: u32) -> Outcome {
    let offering = catalog.offering(code).expect("offering exists");
    engine.add_course(offering, offering.group(group).expect("group exists"))
}

fn codes(engine: &ScheduleConflictEngine) -> Vec<&str> {
    engine.schedule().iter().map(|c| c.code.as_str()).collect()
}

fn flag_of(engine: &ScheduleConflictEngine, code: &str) -> bool {
    engine
        .schedule()
        .iter()
        .find(|c| c.code == code)
        .map(PlannedCourse::has_conflict)
        .expect("entry present")
}

#[test]
fn test_new_engine_is_empty_and_shows_current() {
    let engine = ScheduleConflictEngine::new();
    assert!(engine.schedule().is_empty());
    assert!(engine.show_current());
    assert_eq!(engine.current_term(), None);
}

#[test]
fn test_add_course_appends_speculative_entry() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();

    assert_eq!(add(&mut engine, &catalog, "IC6200", 1), Outcome::Applied);

    let schedule = engine.schedule();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].code, "IC6200");
    assert!(!schedule[0].is_current);
    assert!(!schedule[0].has_conflict());
    assert_eq!(schedule[0].location.as_deref(), Some("B3-2"));
    assert_eq!(schedule[0].meeting, Meeting::parse("Monday", "09:30", "09:50").unwrap());
}

#[test]
fn test_duplicate_add_is_rejected_and_keeps_first() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();

    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());
    let before = engine.schedule().to_vec();

    let outcome = add(&mut engine, &catalog, "IC6200", 2);
    assert_eq!(
        outcome,
        Outcome::unchanged(NoOp::AlreadyPlanned {
            code: "IC6200".to_string()
        })
    );
    assert_eq!(engine.schedule(), before.as_slice());
    assert_eq!(
        engine.schedule().iter().filter(|c| c.code == "IC6200").count(),
        1
    );
    assert_eq!(engine.schedule()[0].meeting.day(), Day::Monday);
}

#[test]
fn test_add_rejects_code_already_enrolled_even_when_hidden() {
    let catalog = Catalog {
        term: "I-2025".to_string(),
        offerings: vec![CourseOffering {
            code: "IC6600".to_string(),
            name: "Sistemas operativos".to_string(),
            professor: "Staff".to_string(),
            credits: Some(4),
            groups: vec![CourseGroup {
                id: 1,
                name: "Group 01".to_string(),
                meeting: Meeting::parse("Saturday", "08:00", "10:00").unwrap(),
                location: None,
            }],
            depends_on: vec![],
        }],
        templates: vec![],
    };
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());
    assert!(engine.set_current_visible(false).is_applied());

    assert!(engine.is_planned("IC6600"));
    assert!(!add(&mut engine, &catalog, "IC6600", 1).is_applied());
    assert!(engine.planned().is_empty());
}

#[test]
fn test_ids_are_unique() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());

    for code in ["IC6200", "IC7602", "IC7841", "AE4208"] {
        assert!(add(&mut engine, &catalog, code, 1).is_applied());
    }
    // Re-adding after removal must not reuse the old ID.
    let first = engine.planned()[0].id.clone();
    assert!(engine.remove_course(&first).is_applied());
    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());

    let mut ids: Vec<&EntryId> = engine.schedule().iter().map(|c| &c.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(engine.planned().iter().all(|c| c.id != first));
}

#[test]
fn test_conflict_flags_follow_mutations() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();

    // Monday morning and Tuesday afternoon never meet.
    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());
    assert!(add(&mut engine, &catalog, "IC7602", 2).is_applied());
    assert!(!flag_of(&engine, "IC6200"));
    assert!(!flag_of(&engine, "IC7602"));

    // The compact template has no overlaps.
    let compact = catalog.template("compact").unwrap();
    assert!(engine.apply_template(compact).is_applied());
    assert!(engine.schedule().iter().all(|c| !c.has_conflict()));
}

#[test]
fn test_remove_clears_conflicts() {
    let mut engine = ScheduleConflictEngine::new();
    let template = ScheduleTemplate {
        id: "clash".to_string(),
        name: "Clash".to_string(),
        description: String::new(),
        courses: vec![
            TemplateCourse {
                code: "A".to_string(),
                name: "A".to_string(),
                professor: "P".to_string(),
                meeting: Meeting::parse("Monday", "13:00", "14:50").unwrap(),
                location: None,
            },
            TemplateCourse {
                code: "B".to_string(),
                name: "B".to_string(),
                professor: "P".to_string(),
                meeting: Meeting::parse("Monday", "13:00", "14:50").unwrap(),
                location: None,
            },
        ],
    };
    assert!(engine.apply_template(&template).is_applied());
    assert!(flag_of(&engine, "A"));
    assert!(flag_of(&engine, "B"));
    assert_eq!(engine.conflicts().len(), 1);

    let a = engine.planned()[0].id.clone();
    assert!(engine.remove_course(&a).is_applied());
    assert_eq!(codes(&engine), vec!["B"]);
    assert!(!flag_of(&engine, "B"));
    assert!(engine.conflicts().is_empty());
}

#[test]
fn test_remove_unknown_and_current_are_noops() {
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());
    let before = engine.schedule().to_vec();

    let current_id = engine.current()[0].id.clone();
    assert_eq!(
        engine.remove_course(&current_id),
        Outcome::unchanged(NoOp::CurrentTermEntry {
            id: current_id.clone()
        })
    );

    let ghost = EntryId::from("planned:NOPE-1-99");
    assert_eq!(
        engine.remove_course(&ghost),
        Outcome::unchanged(NoOp::UnknownEntry { id: ghost.clone() })
    );
    assert_eq!(engine.schedule(), before.as_slice());

    assert!(engine.set_current_visible(false).is_applied());
    assert_eq!(
        engine.remove_course(&current_id),
        Outcome::unchanged(NoOp::CurrentTermEntry { id: current_id })
    );
    assert!(engine.current().iter().all(|c| !c.is_removable()));
}

#[test]
fn test_template_repeating_a_code_places_it_once() {
    let course = |day: &str, start: &str, end: &str| TemplateCourse {
        code: "IC6200".to_string(),
        name: "Inteligencia artificial".to_string(),
        professor: "P".to_string(),
        meeting: Meeting::parse(day, start, end).unwrap(),
        location: None,
    };
    let template = ScheduleTemplate {
        id: "dup".to_string(),
        name: "Duplicated".to_string(),
        description: String::new(),
        courses: vec![
            course("Monday", "09:30", "09:50"),
            course("Tuesday", "10:30", "11:50"),
        ],
    };

    let mut engine = ScheduleConflictEngine::new();
    assert!(engine.apply_template(&template).is_applied());

    let planned = engine.planned();
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].meeting.day(), Day::Monday);
    assert!(planned[0].is_removable());
    assert!(!planned[0].has_conflict());
}

#[test]
fn test_current_and_speculative_entries_conflict_with_each_other() {
    // The full visible set is compared, not just speculative entries.
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());

    // IC6400 meets Monday 09:00-10:00; IC6200 group 1 is Monday 09:30-09:50.
    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());
    assert!(flag_of(&engine, "IC6200"));
    assert!(flag_of(&engine, "IC6400"));

    // Hiding the enrolled term removes the clash from consideration.
    assert!(engine.set_current_visible(false).is_applied());
    assert!(!flag_of(&engine, "IC6200"));
    assert_eq!(codes(&engine), vec!["IC6200"]);
}

#[test]
fn test_template_replaces_speculative_set_only() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());

    assert!(add(&mut engine, &catalog, "IC7602", 2).is_applied());
    assert!(add(&mut engine, &catalog, "AE4208", 2).is_applied());
    let old_ids: Vec<EntryId> = engine.planned().iter().map(|c| c.id.clone()).collect();
    let current_before = engine.current().to_vec();

    let balanced = catalog.template("balanced").unwrap();
    assert!(engine.apply_template(balanced).is_applied());

    assert_eq!(engine.planned().len(), 4);
    assert!(engine.planned().iter().all(|c| !c.is_current));
    assert!(engine
        .planned()
        .iter()
        .all(|c| !old_ids.contains(&c.id)));
    assert_eq!(
        engine.planned().iter().map(|c| c.code.as_str()).collect::<Vec<_>>(),
        vec!["IC6200", "IC7602", "IC7841", "AE4208"]
    );
    assert_eq!(engine.current(), current_before.as_slice());
    // Three current meetings plus the four template entries.
    assert_eq!(engine.schedule().len(), 7);
}

#[test]
fn test_visibility_round_trip_restores_entries_and_flags() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());
    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());
    let before = engine.schedule().to_vec();

    assert!(engine.set_current_visible(false).is_applied());
    assert_eq!(codes(&engine), vec!["IC6200"]);
    assert_eq!(engine.current().len(), 3);

    assert_eq!(
        engine.set_current_visible(false),
        Outcome::unchanged(NoOp::VisibilityUnchanged { visible: false })
    );

    assert!(engine.set_current_visible(true).is_applied());
    assert_eq!(engine.schedule(), before.as_slice());
}

#[test]
fn test_visible_order_is_current_then_planned() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    assert!(add(&mut engine, &catalog, "AE4208", 1).is_applied());
    engine.load_current_term(&current_term());

    let flags: Vec<bool> = engine.schedule().iter().map(|c| c.is_current).collect();
    assert_eq!(flags, vec![true, true, true, false]);
    assert_eq!(engine.current_term(), Some("II-2024"));
}

#[test]
fn test_reloading_current_term_replaces_it() {
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());
    assert_eq!(engine.current().len(), 3);

    engine.load_current_term(&current_term()[1..]);
    assert_eq!(engine.current().len(), 1);

    engine.clear_current_term();
    assert!(engine.current().is_empty());
    assert_eq!(engine.current_term(), None);
}

#[test]
fn test_snapshot_restores_state_and_recomputes_flags() {
    let catalog = Catalog::demo();
    let mut engine = ScheduleConflictEngine::new();
    engine.load_current_term(&current_term());
    assert!(add(&mut engine, &catalog, "IC6200", 1).is_applied());
    assert!(engine.set_current_visible(false).is_applied());

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let restored = ScheduleConflictEngine::from_snapshot(serde_json::from_str(&json).unwrap());

    assert_eq!(restored.schedule(), engine.schedule());
    assert_eq!(restored.current(), engine.current());
    assert!(!restored.show_current());
    assert_eq!(restored.current_term(), Some("II-2024"));

    // The sequence survives, so new IDs stay fresh.
    let mut restored = restored;
    let first = restored.planned()[0].id.clone();
    assert!(restored.remove_course(&first).is_applied());
    assert!(add(&mut restored, &catalog, "IC6200", 1).is_applied());
    assert_ne!(restored.planned()[0].id, first);
}

#[test]
fn test_snapshot_json_never_sets_conflict_flag() {
    let json = r#"{
        "planned": [{
            "id": "planned:X-1-1", "code": "X", "name": "X", "professor": "P",
            "meeting": {"day": "Monday", "startTime": "08:00", "endTime": "09:00"},
            "hasConflict": true, "isCurrent": true
        }]
    }"#;
    let engine = ScheduleConflictEngine::from_snapshot(serde_json::from_str(json).unwrap());
    assert_eq!(engine.schedule().len(), 1);
    assert!(!engine.schedule()[0].has_conflict());
    assert!(!engine.schedule()[0].is_current);
    assert!(engine.show_current());
}
