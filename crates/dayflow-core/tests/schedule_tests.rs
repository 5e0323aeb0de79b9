use dayflow_core::models::{Block, BlockCategory, IdAllocator, TemplateKind};
use dayflow_core::schedule;
use dayflow_core::ScheduleStatus;
use jiff::civil::{date, time};

#[test]
fn test_gym_template_timeline_from_default_start() {
    let mut ids = IdAllocator::default();
    let day = TemplateKind::Gym.instantiate(&mut ids);
    let start = date(2024, 3, 4).at(7, 30, 0, 0);

    let timeline = schedule::compute(day.blocks(), start);
    assert_eq!(timeline.len(), 11);

    // Back-to-back until the fixed 12:30 meeting, reached at 12:20: the ten
    // free minutes are absorbed silently.
    let meeting = &timeline[4];
    assert_eq!(meeting.status, ScheduleStatus::Waiting);
    assert_eq!(meeting.conflict, None);
    assert_eq!(meeting.start, date(2024, 3, 4).at(12, 30, 0, 0));
    assert_eq!(meeting.end, date(2024, 3, 4).at(13, 15, 0, 0));

    // The rest of the day chains off the shifted cursor and ends well
    // before the overrun boundary.
    let end = schedule::end_of_day(&timeline).expect("non-empty timeline");
    assert_eq!(end, date(2024, 3, 4).at(20, 30, 0, 0));
    assert!(!schedule::is_overrun(end));
}

#[test]
fn test_waiting_example_reports_free_minutes() {
    // A 120-minute sprint from 07:30, then a 45-minute meeting fixed at
    // 12:30: three idle hours to report.
    let blocks = vec![
        Block {
            id: 1,
            title: "Sprint".to_string(),
            duration_minutes: 120,
            category: BlockCategory::DeepWork,
            completed: false,
            fixed_time: None,
        },
        Block {
            id: 2,
            title: "Reunión diaria".to_string(),
            duration_minutes: 45,
            category: BlockCategory::FixedAppointment,
            completed: false,
            fixed_time: Some(time(12, 30, 0, 0)),
        },
    ];
    let start = date(2024, 3, 4).at(7, 30, 0, 0);

    let timeline = schedule::compute(&blocks, start);

    assert_eq!(timeline[0].start, date(2024, 3, 4).at(7, 30, 0, 0));
    assert_eq!(timeline[0].end, date(2024, 3, 4).at(9, 30, 0, 0));

    assert_eq!(timeline[1].status, ScheduleStatus::Waiting);
    assert_eq!(timeline[1].conflict.as_deref(), Some("180 min libres antes"));
    assert_eq!(timeline[1].start, date(2024, 3, 4).at(12, 30, 0, 0));
    assert_eq!(timeline[1].end, date(2024, 3, 4).at(13, 15, 0, 0));
}

#[test]
fn test_skill_template_overruns_from_a_late_start() {
    let mut ids = IdAllocator::default();
    let day = TemplateKind::Skill.instantiate(&mut ids);

    // Starting at 14:00 pushes the twelve-hour skill day past midnight.
    let start = date(2024, 3, 4).at(14, 0, 0, 0);
    let timeline = schedule::compute(day.blocks(), start);

    let end = schedule::end_of_day(&timeline).expect("non-empty timeline");
    assert_eq!(end.date(), date(2024, 3, 5));
    assert!(schedule::is_overrun(end));

    // The 12:30 meeting is long gone by the time the cursor reaches it.
    let meeting = &timeline[4];
    assert_eq!(meeting.status, ScheduleStatus::Late);
}

#[test]
fn test_completion_flags_do_not_affect_timing() {
    let mut ids = IdAllocator::default();
    let day = TemplateKind::Gym.instantiate(&mut ids);
    let start = date(2024, 3, 4).at(7, 30, 0, 0);
    let plain = schedule::compute(day.blocks(), start);

    let mut completed = day.blocks().to_vec();
    for block in &mut completed {
        block.completed = true;
    }
    let done = schedule::compute(&completed, start);

    for (a, b) in plain.iter().zip(done.iter()) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.status, b.status);
    }
}
