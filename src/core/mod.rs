pub mod branch;
pub mod concurrent;
pub mod dispatch;
pub mod engine;

pub use crate::domain::model::{Command, Completion, Flow, Number, Token, WaitReport, WaitTask};
pub use crate::domain::ports::{Demo, Output};
pub use crate::utils::error::Result;

pub use branch::{Branch, BranchDemo};
pub use concurrent::ConcurrentWaitDemo;
pub use dispatch::{DispatchDemo, ScriptDemo};
pub use engine::{DemoEngine, RunSummary};
