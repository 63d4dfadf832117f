pub mod exercise_service;
pub mod history_service;
pub mod session_service;
pub mod user_service;

pub use exercise_service::ExerciseService;
pub use history_service::HistoryService;
pub use session_service::SessionService;
pub use user_service::UserService;
