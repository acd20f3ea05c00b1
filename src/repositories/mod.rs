pub mod attempt_repository;
pub mod course_repository;
pub mod material_repository;
pub mod quiz_repository;
pub mod subject_repository;
pub mod topic_repository;
pub mod user_repository;

pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use material_repository::{MaterialRepository, MongoMaterialRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use subject_repository::{MongoSubjectRepository, SubjectRepository};
pub use topic_repository::{MongoTopicRepository, TopicRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
