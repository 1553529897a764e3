use serde::{Deserialize, Serialize};

/// Roles that scope what a user sees and may write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Apoyo,
    Docente,
    Invitado,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Apoyo => "APOYO",
            UserRole::Docente => "DOCENTE",
            UserRole::Invitado => "INVITADO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Apoyo => "Apoyo",
            UserRole::Docente => "Docente",
            UserRole::Invitado => "Invitado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "ADMIN" => Some(UserRole::Admin),
            "APOYO" => Some(UserRole::Apoyo),
            "DOCENTE" => Some(UserRole::Docente),
            "INVITADO" => Some(UserRole::Invitado),
            _ => None,
        }
    }
}
