use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    GoalArgs, MoveArgs, PacesArgs, RaceDateArgs, ResetArgs, SelectArgs, ShowArgs, UnitsArgs,
};

/// Marathon training plan scheduler
///
/// Stride lays a training plan template onto the calendar so that its last
/// day is race day, lets you swap days around, and shows training paces for
/// your goal time. Everything you set is saved between runs.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory holding plan templates. Defaults to $STRIDE_PLANS_DIR, then
    /// $XDG_DATA_HOME/stride/plans
    #[arg(long, global = true)]
    pub plans_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `show` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// List available plan templates
    #[command(alias = "ls")]
    Plans,
    /// Select a plan template and load it
    Select(SelectArgs),
    /// Set the race date the schedule counts down to
    RaceDate(RaceDateArgs),
    /// Set display units (mi or km)
    Units(UnitsArgs),
    /// Set the marathon goal time used for paces
    Goal(GoalArgs),
    /// Show the schedule
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Swap the workouts of two days
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Show training paces
    Paces(PacesArgs),
    /// Rebuild the schedule from its template, undoing all moves. With
    /// --all, delete all saved state instead
    Reset(ResetArgs),
    /// Start the MCP server
    Serve,
}
