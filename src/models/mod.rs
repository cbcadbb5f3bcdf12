pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskUpdate};
pub use user::User;
