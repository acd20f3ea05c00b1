pub mod auth_service;
pub mod course_service;
pub mod file_store;
pub mod material_service;
pub mod quiz_generator;
pub mod quiz_service;
pub mod subject_service;
pub mod topic_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use course_service::CourseService;
pub use file_store::FileStore;
pub use material_service::{MaterialService, NewMaterial};
pub use quiz_generator::{HttpQuizGenerator, QuizGenerator};
pub use quiz_service::QuizService;
pub use subject_service::SubjectService;
pub use topic_service::{NewTopic, TopicService};
pub use user_service::UserService;
