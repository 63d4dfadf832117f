pub mod exercise;
pub mod history;
pub mod id;
pub mod user;

pub use exercise::Exercise;
pub use history::{CreateHistory, HistoryByDay, HistoryRecord};
pub use user::{AvatarUpload, CreateUser, Credentials, ProfileForm, SessionResponse, UpdateUser, User};
