// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for the Habitica client.
//!
//! Uses clap's derive API for declarative CLI parsing with noun-verb
//! subcommands mirroring the task types.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};

/// Task difficulty, mapped to the service's priority multiplier.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum Difficulty {
    /// Multiplier 1 (default).
    #[default]
    Easy,
    /// Multiplier 1.5.
    Medium,
    /// Multiplier 2.
    Hard,
}

impl Difficulty {
    /// The priority multiplier sent with `todos add`.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

/// Global output configuration passed to commands.
#[derive(Clone, Copy)]
pub struct OutputContext {
    /// Enable verbose output.
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY).
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    #[must_use]
    pub fn from_cli(verbose: bool) -> Self {
        Self {
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners) should be shown.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.is_tty
    }
}

/// Habitica - command-line client for habitica.com.
///
/// Track habits, dailies and todos, and keep the stable fed, hatched and
/// decluttered, from the terminal.
#[derive(Parser)]
#[command(name = "habitica")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Difficulty for newly added todos (easy, medium, hard)
    #[arg(long, global = true, default_value = "easy", value_enum)]
    pub difficulty: Difficulty,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show HP, XP, GP, quest progress and more
    Status,

    /// List habits, or score them up/down
    Habits {
        /// Optional action (omit to just list)
        #[command(subcommand)]
        action: Option<HabitAction>,
    },

    /// List dailies, or mark them done/undone
    Dailies {
        /// Optional action (omit to just list)
        #[command(subcommand)]
        action: Option<DailyAction>,
    },

    /// List todos, complete them, or add a new one
    Todos {
        /// Optional action (omit to just list)
        #[command(subcommand)]
        action: Option<TodoAction>,
    },

    /// Show status of the Habitica service
    Server,

    /// Open the tasks page in the default browser
    Home,

    /// Show inventory categories, or the items of one category
    Item {
        /// Category name (food, pets, mounts, eggs, hatchingPotions)
        category: Option<String>,
    },

    /// Feed all held food to the best-matching pets
    Feed,

    /// Hatch eggs with held potions, then sell unneeded eggs
    Hatch,

    /// Sell all held potions of the given variants (or "all")
    Sell {
        /// Potion variants to sell, or "all"
        #[arg(required = true)]
        kinds: Vec<String>,
    },
}

/// Habit actions
#[derive(Subcommand)]
pub enum HabitAction {
    /// Score habits up (+)
    Up {
        /// Task ids (e.g. `1,3,6-9,11`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Score habits down (-)
    Down {
        /// Task ids (e.g. `1,3,6-9,11`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Daily actions
#[derive(Subcommand)]
pub enum DailyAction {
    /// Mark dailies complete
    Done {
        /// Task ids (e.g. `1,3,6-9,11`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Mark dailies incomplete
    Undo {
        /// Task ids (e.g. `1,3,6-9,11`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Todo actions
#[derive(Subcommand)]
pub enum TodoAction {
    /// Mark todos complete
    Done {
        /// Task ids (e.g. `1,3,6-9,11`)
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Add a new todo
    Add {
        /// Todo description (all words are joined)
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn difficulty_multipliers() {
        assert!((Difficulty::Easy.multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((Difficulty::Medium.multiplier() - 1.5).abs() < f64::EPSILON);
        assert!((Difficulty::Hard.multiplier() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_ranged_ids() {
        let cli = Cli::try_parse_from(["habitica", "todos", "done", "1-3,4", "8"]).unwrap();
        let Commands::Todos {
            action: Some(TodoAction::Done { ids }),
        } = cli.command
        else {
            panic!("expected todos done");
        };
        assert_eq!(ids, vec!["1-3,4".to_string(), "8".to_string()]);
    }

    #[test]
    fn difficulty_flag_is_global() {
        let cli =
            Cli::try_parse_from(["habitica", "todos", "add", "--difficulty", "hard", "read"])
                .unwrap();
        assert!(matches!(cli.difficulty, Difficulty::Hard));
    }
}
