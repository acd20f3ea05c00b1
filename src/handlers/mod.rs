pub mod auth_handler;
pub mod course_handler;
pub mod health_handler;
pub mod material_handler;
pub mod quiz_handler;
pub mod subject_handler;
pub mod topic_handler;
pub mod user_handler;

pub use auth_handler::{login, register};
pub use course_handler::{create_course, delete_course, get_all_courses, get_course};
pub use health_handler::{health_check, health_check_ready};
pub use material_handler::{
    delete_material, download_material, get_materials_by_topic, upload_material,
};
pub use quiz_handler::{
    generate_quiz, get_all_attempts, get_all_quizzes, get_quiz_by_display_id,
    get_quiz_summaries, get_quizzes_by_topic, get_user_attempts, submit_attempt,
};
pub use subject_handler::{
    create_subject, delete_subject, get_all_subjects, get_subjects_by_course,
};
pub use topic_handler::{create_topic, delete_topic, get_all_topics, get_topics_by_subject};
pub use user_handler::{delete_user, get_all_users, get_user, update_user};
