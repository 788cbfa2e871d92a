//! Taiga API model types.

mod attachment;
mod common;
mod custom_attributes;
mod history;
mod issue;
mod membership;
mod milestone;
mod project;
mod task;
mod user;
mod userstory;
mod wiki;

pub use attachment::*;
pub use common::*;
pub use custom_attributes::*;
pub use history::*;
pub use issue::*;
pub use membership::*;
pub use milestone::*;
pub use project::*;
pub use task::*;
pub use user::*;
pub use userstory::*;
pub use wiki::*;
