//! Domain model for task records.
//!
//! The task domain owns the validated scalar types, the persisted task
//! entity, and the patch value object used for partial updates. Nothing in
//! here touches storage or HTTP.

mod description;
mod error;
mod ids;
mod patch;
mod task;
mod title;

pub use description::TaskDescription;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use task::{NewTask, PersistedTaskData, Task};
pub use title::TaskTitle;
