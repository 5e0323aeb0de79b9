mod common;

use common::{create_test_planner, monday_morning};
use dayflow_core::params::{BlockId, InsertEmergency, MoveBlock, StartNewDay, SwitchView};
use dayflow_core::{
    ActiveView, BlockCategory, MoveDirection, PlannerBuilder, ScheduleStatus, TemplateKind,
};
use jiff::civil::date;

#[test]
fn test_complete_day_workflow() {
    let (_temp_dir, mut planner) = create_test_planner();

    // The default today sequence is the gym template, anchored at 07:30.
    let view = planner.timeline().expect("planner starts awake");
    assert_eq!(view.blocks.len(), 11);
    assert_eq!(view.blocks[0].start, date(2024, 3, 4).at(7, 30, 0, 0));

    // Complete the first two blocks.
    for scheduled in &view.blocks[..2] {
        let changed = planner
            .toggle_complete(&BlockId {
                id: scheduled.block.id,
            })
            .expect("toggle should not fail");
        assert!(changed);
    }

    // An emergency lands right at the current point of execution.
    let changed = planner
        .insert_emergency(&InsertEmergency { minutes: 45 })
        .expect("insert should not fail");
    assert!(changed);

    let view = planner.timeline().expect("still awake");
    assert_eq!(view.blocks.len(), 12);
    assert_eq!(view.blocks[2].block.category, BlockCategory::Emergency);
    assert_eq!(view.blocks[2].block.duration_minutes, 45);

    // Every block after the emergency shifted 45 minutes later, so the
    // 12:30 meeting is now reached at 13:05 and reports lateness.
    let meeting = view
        .blocks
        .iter()
        .find(|s| s.block.fixed_time.is_some())
        .expect("the gym template has a fixed meeting");
    assert_eq!(meeting.status, ScheduleStatus::Late);
    assert_eq!(meeting.conflict.as_deref(), Some("Vas 35 min tarde"));
    assert_eq!(meeting.start, date(2024, 3, 4).at(13, 5, 0, 0));

    // End the day: the timeline goes dark.
    assert!(planner.end_day().expect("end-day should not fail"));
    assert!(planner.timeline().is_none());
}

#[test]
fn test_emergency_insertion_index_property() {
    let (_temp_dir, mut planner) = create_test_planner();

    let ids: Vec<u64> = planner
        .timeline()
        .expect("awake")
        .blocks
        .iter()
        .map(|s| s.block.id)
        .collect();

    // Blocks at indices 0 and 1 complete, index 2 not.
    for id in &ids[..2] {
        planner
            .toggle_complete(&BlockId { id: *id })
            .expect("toggle should not fail");
    }

    planner
        .insert_emergency(&InsertEmergency { minutes: 30 })
        .expect("insert should not fail");

    let after: Vec<u64> = planner
        .timeline()
        .expect("awake")
        .blocks
        .iter()
        .map(|s| s.block.id)
        .collect();

    // Indices 0-1 unchanged, the new block at index 2, the old index-2
    // block now at index 3.
    assert_eq!(after[0], ids[0]);
    assert_eq!(after[1], ids[1]);
    assert!(!ids.contains(&after[2]));
    assert_eq!(after[3], ids[2]);
}

#[test]
fn test_day_rollover_property() {
    let (_temp_dir, mut planner) = create_test_planner();

    // Trim tomorrow down to two blocks while previewing it.
    planner
        .switch_view(&SwitchView {
            view: ActiveView::Tomorrow,
        })
        .expect("switch should not fail");
    let tomorrow_ids: Vec<u64> = planner
        .timeline()
        .expect("awake")
        .blocks
        .iter()
        .map(|s| s.block.id)
        .collect();
    for id in &tomorrow_ids[2..] {
        planner
            .delete_block(&BlockId { id: *id })
            .expect("delete should not fail");
    }

    planner.end_day().expect("end-day should not fail");
    planner
        .start_new_day(
            &StartNewDay {
                template: TemplateKind::Gym,
            },
            date(2024, 3, 5).at(7, 10, 0, 0),
        )
        .expect("start-new-day should not fail");

    // The two surviving preview blocks became today, reset and re-issued.
    let today = planner.timeline().expect("awake after rollover");
    assert_eq!(today.view, ActiveView::Today);
    assert_eq!(today.blocks.len(), 2);
    for scheduled in &today.blocks {
        assert!(!scheduled.block.completed);
        assert!(!tomorrow_ids.contains(&scheduled.block.id));
    }

    // Declaring a gym day seeds the new preview from the skill template.
    planner
        .switch_view(&SwitchView {
            view: ActiveView::Tomorrow,
        })
        .expect("switch should not fail");
    let preview = planner.timeline().expect("awake");
    assert_eq!(preview.blocks.len(), 9);
}

#[test]
fn test_state_survives_rebuild() {
    let (temp_dir, mut planner) = create_test_planner();
    let path = temp_dir.path().join("snapshot.json");

    let first_id = planner.timeline().expect("awake").blocks[0].block.id;
    planner
        .toggle_complete(&BlockId { id: first_id })
        .expect("toggle should not fail");
    planner
        .move_block(&MoveBlock {
            index: 1,
            direction: MoveDirection::Down,
        })
        .expect("move should not fail");
    drop(planner);

    // A new session picks up exactly where the old one left off.
    let reopened = PlannerBuilder::new()
        .with_snapshot_path(Some(&path))
        .build(date(2024, 3, 9).at(12, 0, 0, 0))
        .expect("Failed to reopen planner");

    let view = reopened.timeline().expect("awake");
    assert!(view.blocks[0].block.completed);
    assert_eq!(view.blocks[0].block.id, first_id);
    // The stored 07:30 anchor survives; rebuild time plays no part.
    assert_eq!(view.blocks[0].start, date(2024, 3, 4).at(7, 30, 0, 0));
}

#[test]
fn test_asleep_state_survives_rebuild() {
    let (temp_dir, mut planner) = create_test_planner();
    let path = temp_dir.path().join("snapshot.json");

    planner.end_day().expect("end-day should not fail");
    drop(planner);

    let reopened = PlannerBuilder::new()
        .with_snapshot_path(Some(&path))
        .build(monday_morning())
        .expect("Failed to reopen planner");
    assert!(reopened.timeline().is_none());
    assert!(reopened.cycle().is_asleep());
}

#[test]
fn test_moves_and_deletes_follow_the_active_view() {
    let (_temp_dir, mut planner) = create_test_planner();

    planner
        .switch_view(&SwitchView {
            view: ActiveView::Tomorrow,
        })
        .expect("switch should not fail");

    let preview_len = planner.timeline().expect("awake").blocks.len();
    let first_preview_id = planner.timeline().expect("awake").blocks[0].block.id;

    assert!(planner
        .delete_block(&BlockId {
            id: first_preview_id
        })
        .expect("delete should not fail"));

    // Tomorrow shrank; today is untouched.
    assert_eq!(planner.timeline().expect("awake").blocks.len(), preview_len - 1);
    planner
        .switch_view(&SwitchView {
            view: ActiveView::Today,
        })
        .expect("switch should not fail");
    assert_eq!(planner.timeline().expect("awake").blocks.len(), 11);
}

#[test]
fn test_out_of_bounds_move_is_ignored() {
    let (_temp_dir, mut planner) = create_test_planner();

    let before: Vec<u64> = planner
        .timeline()
        .expect("awake")
        .blocks
        .iter()
        .map(|s| s.block.id)
        .collect();

    assert!(!planner
        .move_block(&MoveBlock {
            index: 0,
            direction: MoveDirection::Up,
        })
        .expect("move should not fail"));
    assert!(!planner
        .move_block(&MoveBlock {
            index: 10,
            direction: MoveDirection::Down,
        })
        .expect("move should not fail"));

    let after: Vec<u64> = planner
        .timeline()
        .expect("awake")
        .blocks
        .iter()
        .map(|s| s.block.id)
        .collect();
    assert_eq!(before, after);
}
