pub mod config;
pub mod input;
pub mod reaction;
pub mod spawn;
pub mod state;
pub mod stats;

pub use config::{Arena, TrainerConfig};
pub use input::{Cursor, Sensitivity};
pub use reaction::ReactionTracker;
pub use spawn::SpawnPolicy;
pub use state::{LifecyclePhase, Target, TargetMode, TrainerEvent, TrainerState};
pub use stats::{SessionStats, SessionSummary};
