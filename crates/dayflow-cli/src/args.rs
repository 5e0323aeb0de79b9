use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    DeleteArgs, EmergencyArgs, MoveArgs, NewDayArgs, TemplateArgs, ToggleArgs, ViewArgs,
};

/// Main command-line interface for the Dayflow daily planner
///
/// Dayflow projects an ordered list of activity blocks onto the wall-clock
/// timeline from a day-start anchor. Blocks pinned to fixed clock times
/// report lateness or free time; everything else flows around them, and any
/// drift pushes the rest of the day forward. The planner keeps two days at
/// once: the completion-tracked "today" and an editable "tomorrow" preview.
#[derive(Parser)]
#[command(version, about, name = "dayflow")]
pub struct Args {
    /// Path to the snapshot file. Defaults to
    /// $XDG_DATA_HOME/dayflow/snapshot.json
    #[arg(long, global = true)]
    pub snapshot_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Dayflow CLI
///
/// Running without a command shows the active timeline. Mutating commands
/// that do not apply in the current state (unknown block, out-of-bounds
/// move, wrong view, asleep) are reported as ignored rather than failing.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the active timeline
    #[command(alias = "s")]
    Show,
    /// Toggle a today block's completion flag
    #[command(alias = "t")]
    Toggle(ToggleArgs),
    /// Move a block one position up or down in the active sequence
    #[command(alias = "m")]
    Move(MoveArgs),
    /// Delete a block from the active sequence
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Splice an unplanned emergency into today's remaining schedule
    #[command(alias = "e")]
    Emergency(EmergencyArgs),
    /// Switch the active view between today and tomorrow
    #[command(alias = "v")]
    View(ViewArgs),
    /// Replace the tomorrow preview with a fresh template
    Template(TemplateArgs),
    /// End the day and go to sleep
    EndDay,
    /// Wake up: tomorrow becomes today
    NewDay(NewDayArgs),
    /// Re-anchor today's schedule to the current time
    ResetStart,
}
