pub const GIT_VERSION: &str = env!("GIT_VERSION");

pub fn user_agent() -> String {
    format!("gymtrack/{}", GIT_VERSION)
}
