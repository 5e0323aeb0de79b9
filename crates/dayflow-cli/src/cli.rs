//! Command-line interface definitions and command handling.
//!
//! This module implements the parameter wrapper pattern: each command has a
//! CLI-specific argument structure with clap derives that converts into the
//! framework-agnostic parameter types of `dayflow_core::params`. CLI
//! concerns (aliases, help text, value parsing) stay here; the core types
//! remain interface-agnostic.

use std::fmt::Write as _;

use anyhow::Result;
use clap::{Args, ValueEnum};
use dayflow_core::display::ClockTime;
use dayflow_core::params::{
    BlockId, InsertEmergency, LoadTemplate, MoveBlock, StartNewDay, SwitchView,
};
use dayflow_core::{
    ActiveView, MoveDirection, OperationStatus, Planner, TemplateKind, Timeline,
};
use jiff::civil::DateTime;
use log::debug;

use crate::args::Commands;
use crate::renderer::TerminalRenderer;

/// Toggle a today block's completion flag
#[derive(Args)]
pub struct ToggleArgs {
    /// Identifier of the block to toggle
    #[arg(help = "Identifier of the today block to toggle")]
    pub id: u64,
}

impl From<ToggleArgs> for BlockId {
    fn from(val: ToggleArgs) -> Self {
        BlockId { id: val.id }
    }
}

/// Move a block within the active sequence
#[derive(Args)]
pub struct MoveArgs {
    /// 0-based index of the block to move
    #[arg(help = "0-based index of the block to move")]
    pub index: usize,
    /// Direction to move the block
    #[arg(value_enum)]
    pub direction: DirectionArg,
}

impl From<MoveArgs> for MoveBlock {
    fn from(val: MoveArgs) -> Self {
        MoveBlock {
            index: val.index,
            direction: val.direction.into(),
        }
    }
}

/// Delete a block from the active sequence
#[derive(Args)]
pub struct DeleteArgs {
    /// Identifier of the block to delete
    #[arg(help = "Identifier of the block to delete from the active sequence")]
    pub id: u64,
}

impl From<DeleteArgs> for BlockId {
    fn from(val: DeleteArgs) -> Self {
        BlockId { id: val.id }
    }
}

/// Insert an unplanned emergency block into today's schedule
#[derive(Args)]
pub struct EmergencyArgs {
    /// Duration of the emergency in minutes
    #[arg(short, long, default_value_t = 30)]
    pub minutes: u32,
}

impl From<EmergencyArgs> for InsertEmergency {
    fn from(val: EmergencyArgs) -> Self {
        InsertEmergency {
            minutes: val.minutes,
        }
    }
}

/// Switch the active view
#[derive(Args)]
pub struct ViewArgs {
    /// The sequence to make active
    #[arg(value_enum)]
    pub view: ViewArg,
}

impl From<ViewArgs> for SwitchView {
    fn from(val: ViewArgs) -> Self {
        SwitchView {
            view: val.view.into(),
        }
    }
}

/// Load a template into the tomorrow preview
#[derive(Args)]
pub struct TemplateArgs {
    /// Which built-in template to load
    #[arg(value_enum)]
    pub template: TemplateArg,
}

impl From<TemplateArgs> for LoadTemplate {
    fn from(val: TemplateArgs) -> Self {
        LoadTemplate {
            template: val.template.into(),
        }
    }
}

/// Wake up into a new day of the declared kind
#[derive(Args)]
pub struct NewDayArgs {
    /// The kind of the upcoming day
    #[arg(value_enum, help = "Kind of the upcoming day; the new preview defaults to the opposite")]
    pub template: TemplateArg,
}

impl From<NewDayArgs> for StartNewDay {
    fn from(val: NewDayArgs) -> Self {
        StartNewDay {
            template: val.template.into(),
        }
    }
}

/// Command-line argument representation of a move direction
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Swap with the previous block
    Up,
    /// Swap with the next block
    Down,
}

impl From<DirectionArg> for MoveDirection {
    fn from(val: DirectionArg) -> Self {
        match val {
            DirectionArg::Up => MoveDirection::Up,
            DirectionArg::Down => MoveDirection::Down,
        }
    }
}

/// Command-line argument representation of the active view
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// The completion-tracked today sequence
    Today,
    /// The tomorrow preview
    Tomorrow,
}

impl From<ViewArg> for ActiveView {
    fn from(val: ViewArg) -> Self {
        match val {
            ViewArg::Today => ActiveView::Today,
            ViewArg::Tomorrow => ActiveView::Tomorrow,
        }
    }
}

/// Command-line argument representation of a template choice
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// High-intensity day built around a training block
    Gym,
    /// Lighter day built around skill deep work
    Skill,
}

impl From<TemplateArg> for TemplateKind {
    fn from(val: TemplateArg) -> Self {
        match val {
            TemplateArg::Gym => TemplateKind::Gym,
            TemplateArg::Skill => TemplateKind::Skill,
        }
    }
}

/// Command handler wiring the planner to the terminal renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command handler.
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Dispatch a parsed command.
    ///
    /// `now` is the wall-clock instant read once at startup; it is used for
    /// display and for the few commands that re-anchor the day, never for
    /// scheduling math.
    pub fn handle(mut self, command: Option<Commands>, now: DateTime) -> Result<()> {
        match command {
            None | Some(Commands::Show) => self.show(now),
            Some(Commands::Toggle(args)) => {
                let changed = self.planner.toggle_complete(&args.into())?;
                self.report(changed, "completion toggled", "toggle does not apply", now)
            }
            Some(Commands::Move(args)) => {
                let changed = self.planner.move_block(&args.into())?;
                self.report(changed, "block moved", "move does not apply", now)
            }
            Some(Commands::Delete(args)) => {
                let changed = self.planner.delete_block(&args.into())?;
                self.report(changed, "block deleted", "delete does not apply", now)
            }
            Some(Commands::Emergency(args)) => {
                let changed = self.planner.insert_emergency(&args.into())?;
                self.report(
                    changed,
                    "emergency inserted, rest of the day pushed back",
                    "emergency does not apply",
                    now,
                )
            }
            Some(Commands::View(args)) => {
                let params: SwitchView = args.into();
                let changed = self.planner.switch_view(&params)?;
                let applied = format!("now viewing {}", params.view.as_str());
                self.report(changed, &applied, "view switch does not apply", now)
            }
            Some(Commands::Template(args)) => {
                let params: LoadTemplate = args.into();
                let changed = self.planner.load_template(&params)?;
                let applied = format!(
                    "tomorrow replaced from the {} template",
                    params.template.as_str()
                );
                self.report(
                    changed,
                    &applied,
                    "templates load only while previewing tomorrow",
                    now,
                )
            }
            Some(Commands::EndDay) => {
                let changed = self.planner.end_day()?;
                self.report(changed, "day ended, sleep well", "already asleep", now)
            }
            Some(Commands::NewDay(args)) => {
                let changed = self.planner.start_new_day(&args.into(), now)?;
                self.report(
                    changed,
                    "new day started from the tomorrow plan",
                    "a new day starts only while asleep",
                    now,
                )
            }
            Some(Commands::ResetStart) => {
                let changed = self.planner.reset_start(now)?;
                self.report(changed, "day re-anchored to now", "reset does not apply", now)
            }
        }
    }

    /// Render the asleep screen or the active timeline.
    fn show(&self, now: DateTime) -> Result<()> {
        let mut output = String::new();
        match self.planner.timeline() {
            Some(view) => {
                debug!("rendering {} blocks", view.blocks.len());
                writeln!(output, "**Current time:** {}", ClockTime(&now))?;
                writeln!(output)?;
                write!(output, "{}", Timeline(view))?;
            }
            None => {
                writeln!(output, "# Resting")?;
                writeln!(output)?;
                writeln!(
                    output,
                    "The planner is asleep. Wake it with `dayflow new-day gym` \
                     or `dayflow new-day skill`."
                )?;
            }
        }
        self.renderer.render(&output)
    }

    /// Print an operation status line, then the refreshed timeline if the
    /// command applied.
    fn report(&self, changed: bool, applied: &str, ignored: &str, now: DateTime) -> Result<()> {
        let status = if changed {
            OperationStatus::applied(applied.to_string())
        } else {
            OperationStatus::ignored(ignored.to_string())
        };
        self.renderer.render(&status.to_string())?;
        if changed {
            self.show(now)?;
        }
        Ok(())
    }
}
