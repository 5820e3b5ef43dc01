//! Page orchestration: template discovery, bootstrap, interaction events and output.

pub mod bootstrap;
pub mod events;
pub mod output;
pub mod run;
pub mod template;

pub use bootstrap::{Controls, PageView, bootstrap};
pub use events::{EventOutcome, PageEvent};
pub use run::{RunConfig, RunError, render_output, resolve_origin, run};
pub use template::{PageTemplate, discover};
