use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAttemptRepository, MongoCourseRepository, MongoMaterialRepository,
        MongoQuizRepository, MongoSubjectRepository, MongoTopicRepository, MongoUserRepository,
        QuizRepository, UserRepository,
    },
    services::{
        AuthService, CourseService, FileStore, HttpQuizGenerator, MaterialService, QuizService,
        SubjectService, TopicService, UserService,
    },
};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub subject_service: Arc<SubjectService>,
    pub topic_service: Arc<TopicService>,
    pub material_service: Arc<MaterialService>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub database: Database,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let database = Database::connect(config).await?;

        let users = Arc::new(MongoUserRepository::new(&database));
        let courses = Arc::new(MongoCourseRepository::new(&database));
        let subjects = Arc::new(MongoSubjectRepository::new(&database));
        let topics = Arc::new(MongoTopicRepository::new(&database));
        let materials = Arc::new(MongoMaterialRepository::new(&database));
        let quizzes = Arc::new(MongoQuizRepository::new(&database));
        let attempts = Arc::new(MongoAttemptRepository::new(&database));

        users.ensure_indexes().await?;
        quizzes.ensure_indexes().await?;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));
        let files = Arc::new(FileStore::new(&config.upload_dir));
        let generator = Arc::new(HttpQuizGenerator::new(config)?);

        Ok(Self {
            auth_service: Arc::new(AuthService::new(users.clone(), jwt_service.clone())),
            user_service: Arc::new(UserService::new(users)),
            course_service: Arc::new(CourseService::new(courses.clone())),
            subject_service: Arc::new(SubjectService::new(subjects.clone(), courses)),
            topic_service: Arc::new(TopicService::new(
                topics.clone(),
                subjects,
                files.clone(),
            )),
            material_service: Arc::new(MaterialService::new(materials, topics.clone(), files)),
            quiz_service: Arc::new(QuizService::new(quizzes, attempts, topics, generator)),
            jwt_service,
            database,
        })
    }
}
