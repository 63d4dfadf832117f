//! User-facing pt-BR text: fallbacks shown when an error carries no server
//! message, and local form validation messages.

pub const SIGN_IN_FAILED: &str = "Não foi possível entrar. Tente novamente mais tarde.";
pub const SIGN_UP_FAILED: &str = "Não foi possível criar a conta. Tente novamente mais tarde.";
pub const USERS_FAILED: &str = "Não foi possível carregar os usuários.";
pub const GROUPS_FAILED: &str = "Não foi possível carregar os grupos musculares.";
pub const EXERCISES_FAILED: &str = "Não foi possível carregar os exercícios.";
pub const EXERCISE_DETAILS_FAILED: &str = "Não foi possível carregar os detalhes do exercício.";
pub const HISTORY_FAILED: &str = "Não foi possível carregar o histórico.";
pub const HISTORY_REGISTER_FAILED: &str = "Não foi possível registrar o exercício.";
pub const PROFILE_UPDATE_FAILED: &str = "Não foi possível atualizar os dados. Tente novamente mais tarde.";
pub const AVATAR_UPDATE_FAILED: &str = "Não foi possível atualizar a foto.";

pub const HISTORY_EMPTY: &str = "Não há exercícios registrados ainda.\nVamos fazer exercícios hoje?";
pub const HISTORY_REGISTERED: &str = "Parabéns! Exercício registrado no seu histórico.";
pub const PROFILE_UPDATED: &str = "Perfil atualizado com sucesso!";
pub const AVATAR_UPDATED: &str = "Foto atualizada!";

pub const NAME_REQUIRED: &str = "Informe o nome.";
pub const EMAIL_REQUIRED: &str = "Informe o e-mail";
pub const PASSWORD_REQUIRED: &str = "Informe a senha";
pub const OLD_PASSWORD_REQUIRED: &str = "Informe a senha antiga.";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 dígitos.";
pub const PASSWORD_MISMATCH: &str = "A confirmação da senha não confere.";
pub const AVATAR_EXTENSION_REQUIRED: &str = "Não foi possível identificar o formato da imagem.";

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn avatar_too_large(max_bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    let limit = if max_bytes >= MB {
        format!("{}MB", max_bytes / MB)
    } else if max_bytes >= 1024 {
        format!("{}KB", max_bytes / 1024)
    } else {
        format!("{} bytes", max_bytes)
    };
    format!("Essa imagem é muito grande. Escolha uma de até {}.", limit)
}
