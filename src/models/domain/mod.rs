pub mod attempt;
pub mod course;
pub mod material;
pub mod quiz;
pub mod subject;
pub mod topic;
pub mod user;

pub use attempt::QuizAttempt;
pub use course::{Course, CourseDuration, Difficulty};
pub use material::{Material, MaterialKind};
pub use quiz::{Question, Quiz};
pub use subject::Subject;
pub use topic::{Topic, TopicKind};
pub use user::{Role, User};
