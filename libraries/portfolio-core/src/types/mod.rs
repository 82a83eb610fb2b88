mod ids;
mod project;
mod user;

pub use ids::{InvalidItsonId, ItsonId};
pub use project::{CreateProject, Project, UpdateProject};
pub use user::UserSummary;
