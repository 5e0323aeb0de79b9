//! The schedule calculator.
//!
//! [`compute`] is the reusable heart of the planner: a pure function that
//! projects an ordered block sequence onto the wall-clock timeline starting
//! from a day-start anchor. It is invoked afresh after every mutation, so the
//! timeline always reflects structural edits without incremental-update
//! bookkeeping.
//!
//! The algorithm is a single left-to-right pass over the sequence with a
//! running cursor:
//!
//! - A block without a fixed-time anchor starts at the cursor and ends
//!   `duration` later.
//! - A block whose fixed-time anchor lies before the cursor is marked late;
//!   it still starts at the cursor. Lateness never rewinds the timeline.
//! - A block whose fixed-time anchor lies after the cursor is marked waiting
//!   and is shifted forward to the anchor, absorbing the idle gap.
//! - The cursor then advances to the block's end. Any drift, in either
//!   direction, carries forward unchanged; blocks are never shortened to
//!   recover time.
//!
//! Fixed-time anchors always refer to the scheduling day: the anchor instant
//! is built from the start instant's calendar date, so a schedule that
//! overflows past midnight cannot re-pin an anchor onto the next day.

use jiff::civil::{time, DateTime, Time};

use crate::models::{Block, ScheduleStatus, ScheduledBlock};

/// Idle gaps longer than this (in minutes) produce a free-time notice on
/// waiting blocks.
pub const FREE_TIME_NOTICE_MINUTES: i64 = 10;

/// A day whose last block ends at or after this clock time is overrun.
const OVERRUN_NIGHT: Time = time(23, 30, 0, 0);

/// A day whose last block ends before this clock time has rolled past
/// midnight and is also overrun.
const OVERRUN_MORNING: Time = time(4, 0, 0, 0);

/// Project `blocks` onto the timeline starting at `start`.
///
/// Pure and deterministic: identical inputs yield identical output, and the
/// output order always equals the input order. An empty input yields an
/// empty output.
///
/// # Examples
///
/// ```rust
/// use dayflow_core::models::{Block, BlockCategory};
/// use dayflow_core::schedule;
/// use jiff::civil::date;
///
/// let blocks = vec![Block {
///     id: 1,
///     title: "Desayuno".to_string(),
///     duration_minutes: 30,
///     category: BlockCategory::Routine,
///     completed: false,
///     fixed_time: None,
/// }];
///
/// let start = date(2024, 3, 4).at(7, 30, 0, 0);
/// let timeline = schedule::compute(&blocks, start);
/// assert_eq!(timeline[0].start, start);
/// assert_eq!(timeline[0].end, date(2024, 3, 4).at(8, 0, 0, 0));
/// ```
pub fn compute(blocks: &[Block], start: DateTime) -> Vec<ScheduledBlock> {
    let mut cursor = start;

    blocks
        .iter()
        .map(|block| {
            let mut block_start = cursor;
            let mut block_end = cursor.saturating_add(block.duration());
            let mut status = ScheduleStatus::Normal;
            let mut conflict = None;

            if let Some(fixed) = block.fixed_time {
                // Anchors are pinned to the scheduling day, seconds zeroed.
                let anchor = start
                    .date()
                    .to_datetime(time(fixed.hour(), fixed.minute(), 0, 0));

                if block_start > anchor {
                    status = ScheduleStatus::Late;
                    let minutes = minutes_between(anchor, block_start);
                    conflict = Some(format!("Vas {minutes} min tarde"));
                } else if block_start < anchor {
                    status = ScheduleStatus::Waiting;
                    let minutes = minutes_between(block_start, anchor);
                    if minutes > FREE_TIME_NOTICE_MINUTES {
                        conflict = Some(format!("{minutes} min libres antes"));
                    }
                    block_start = anchor;
                    block_end = anchor.saturating_add(block.duration());
                }
            }

            cursor = block_end;
            ScheduledBlock {
                block: block.clone(),
                start: block_start,
                end: block_end,
                status,
                conflict,
            }
        })
        .collect()
}

/// The computed end instant of the day: the last block's end.
pub fn end_of_day(timeline: &[ScheduledBlock]) -> Option<DateTime> {
    timeline.last().map(|scheduled| scheduled.end)
}

/// Whether an end-of-day instant falls too late at night or past midnight.
///
/// Purely informational; the calculator never reacts to it.
pub fn is_overrun(end: DateTime) -> bool {
    let clock = end.time();
    clock >= OVERRUN_NIGHT || clock < OVERRUN_MORNING
}

/// Whole minutes from `earlier` to `later`, rounded to the nearest minute.
fn minutes_between(earlier: DateTime, later: DateTime) -> i64 {
    let gap = earlier.duration_until(later);
    (gap.as_secs_f64() / 60.0).round() as i64
}
