//! Data models.
//!
//! - [`RepoRef`]: the `owner/name` pair a command targets
//! - [`LabelSpec`] and [`STANDARD_LABELS`]: the label table enforced on every repository
//! - [`REQUIRED_COLUMNS`]: the columns every tracking project must have

mod repo_ref;
mod standards;

pub use repo_ref::RepoRef;
pub use standards::{
    DEFAULT_MILESTONE, LEGACY_COLUMNS, LabelSpec, REQUIRED_COLUMNS, STANDARD_LABELS,
    canonical_column,
};
