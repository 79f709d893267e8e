use crate::model::DEFAULT_MILESTONE;
use crate::rules::Check;
use crate::session::TargetSpec;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pd")]
#[command(
    author,
    version,
    about = "Checks and initializes GitHub repositories against product-delivery conventions"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, global = true, env = "GH_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tools for managing our GitHub repos
    Repo(RepoCommand),
}

#[derive(Args)]
pub struct RepoCommand {
    /// GitHub access token
    #[arg(
        short = 'g',
        long = "ghtoken",
        env = "GH_ACCESS_TOKEN",
        global = true,
        hide_env_values = true
    )]
    pub ghtoken: Option<String>,

    #[command(subcommand)]
    pub action: RepoAction,
}

#[derive(Subcommand)]
pub enum RepoAction {
    /// Initialize labels and a milestone (or a project) for a repo
    Init {
        #[command(flatten)]
        target: TargetArgs,

        /// Initial milestone
        #[arg(short, long, conflicts_with = "project")]
        milestone: Option<String>,

        /// Create this project instead of a milestone
        #[arg(short, long)]
        project: Option<String>,

        /// Also create a tracking project named after the milestone
        #[arg(long, conflicts_with = "project")]
        with_project: bool,

        /// Milestone due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "project")]
        due: Option<NaiveDate>,
    },

    /// Create or update the standard labels
    InitLabels {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Create a new milestone
    CreateMilestone {
        #[command(flatten)]
        target: TargetArgs,

        /// Milestone title
        #[arg(short, long)]
        milestone: String,

        /// Milestone due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Create a new project with the standard columns
    CreateProject {
        #[command(flatten)]
        target: TargetArgs,

        /// Project title
        #[arg(short, long)]
        project: String,

        /// Project description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Check the repository against our standards
    Check {
        /// Which check to run
        #[arg(value_enum)]
        check: CheckArg,

        #[command(flatten)]
        target: TargetArgs,

        /// Fail the label check on any mismatch
        #[arg(long)]
        strict: bool,
    },
}

/// Repository selection shared by every repo subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Repository as owner/repo (a full GitHub URL works too)
    pub path: Option<String>,

    /// Repository owner (instead of owner/repo)
    #[arg(long, conflicts_with = "path")]
    pub owner: Option<String>,

    /// Repository name (instead of owner/repo)
    #[arg(long, conflicts_with = "path")]
    pub repo: Option<String>,
}

impl TargetArgs {
    pub fn as_spec(&self) -> TargetSpec<'_> {
        TargetSpec {
            path: self.path.as_deref(),
            owner: self.owner.as_deref(),
            repo: self.repo.as_deref(),
        }
    }
}

/// What `init` creates after the labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitTarget {
    Milestone {
        title: String,
        due: Option<NaiveDate>,
        with_project: bool,
    },
    Project {
        title: String,
    },
}

impl InitTarget {
    pub fn from_flags(
        milestone: Option<String>,
        project: Option<String>,
        with_project: bool,
        due: Option<NaiveDate>,
    ) -> Self {
        match project {
            Some(title) => InitTarget::Project { title },
            None => InitTarget::Milestone {
                title: milestone.unwrap_or_else(|| DEFAULT_MILESTONE.to_string()),
                due,
                with_project,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CheckArg {
    /// Run all checks
    All,
    /// Check the product-delivery topic is set
    Topic,
    /// Check the standard labels and their colors
    Labels,
    /// Verify P1 issues are assigned to somebody
    Unassigned,
    /// Find issues that do not have a label
    #[value(name = "unlabled", alias = "unlabeled")]
    Unlabeled,
    /// Verify milestones have a project to track them
    Milestones,
    /// Verify projects have a description and the standard columns
    Projects,
}

impl From<CheckArg> for Check {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::All => Check::All,
            CheckArg::Topic => Check::Topic,
            CheckArg::Labels => Check::Labels,
            CheckArg::Unassigned => Check::Unassigned,
            CheckArg::Unlabeled => Check::Unlabeled,
            CheckArg::Milestones => Check::Milestones,
            CheckArg::Projects => Check::Projects,
        }
    }
}
