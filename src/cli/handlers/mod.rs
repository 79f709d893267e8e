mod check;
mod create;
mod init;

pub use check::handle_check;
pub use create::{handle_create_milestone, handle_create_project};
pub use init::{handle_init, handle_init_labels};

use crate::cli::commands::TargetArgs;
use crate::config::PdConfig;
use crate::error::Result;
use crate::output::Reporter;
use crate::session::{Session, preflight};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PdConfig,
    pub token: Option<String>,
    pub quiet: bool,
}

impl CommandContext {
    pub fn new(config: PdConfig, token: Option<String>, quiet: bool) -> Self {
        Self {
            config,
            token,
            quiet,
        }
    }

    pub fn reporter(&self) -> Reporter<'static> {
        Reporter::stdio(self.quiet)
    }

    /// Runs preflight, then opens the one session the command will use.
    pub fn connect(&self, target: &TargetArgs, out: &mut Reporter<'_>) -> Result<Session> {
        let (token, repo) = preflight(self.token.as_deref(), &target.as_spec(), out)?;
        Session::open(&self.config, &token, repo, out)
    }
}
