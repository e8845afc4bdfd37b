//! User-facing message catalog (English and Spanish).

use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;

/// Catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            "es" | "es-es" | "es_es" => Ok(Locale::Es),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Es => write!(f, "es"),
        }
    }
}

/// Every message the view models can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    WelcomeBack,
    LoginSuccess,
    UnexpectedError,
    InvalidCredentials,
    AccessDenied,
    ServerError(u16),
    NetworkError,
    HeroesError,
}

impl From<&AppError> for MessageKey {
    fn from(error: &AppError) -> Self {
        match error {
            AppError::InvalidCredentials => MessageKey::InvalidCredentials,
            AppError::AccessDenied => MessageKey::AccessDenied,
            AppError::Server(code) => MessageKey::ServerError(*code),
            AppError::Network => MessageKey::NetworkError,
            AppError::Unexpected => MessageKey::UnexpectedError,
        }
    }
}

impl MessageKey {
    /// Localized text for this key.
    pub fn text(self, locale: Locale) -> String {
        match locale {
            Locale::En => self.english(),
            Locale::Es => self.spanish(),
        }
    }

    fn english(self) -> String {
        match self {
            MessageKey::WelcomeBack => "Welcome back!".to_string(),
            MessageKey::LoginSuccess => "Login successful.".to_string(),
            MessageKey::UnexpectedError => "An unexpected error occurred.".to_string(),
            MessageKey::InvalidCredentials => {
                "Invalid username or password. Check your credentials.".to_string()
            }
            MessageKey::AccessDenied => {
                "You do not have permission to access this resource.".to_string()
            }
            MessageKey::ServerError(code) => {
                format!("The server ran into a problem (code: {code}). Try again later.")
            }
            MessageKey::NetworkError => {
                "Could not reach the server. Check your connection.".to_string()
            }
            MessageKey::HeroesError => "Could not load heroes.".to_string(),
        }
    }

    fn spanish(self) -> String {
        match self {
            MessageKey::WelcomeBack => "¡Bienvenido de nuevo!".to_string(),
            MessageKey::LoginSuccess => "Inicio de sesión correcto.".to_string(),
            MessageKey::UnexpectedError => "Ha ocurrido un error inesperado.".to_string(),
            MessageKey::InvalidCredentials => {
                "Usuario o contraseña incorrectos. Revisa tus credenciales.".to_string()
            }
            MessageKey::AccessDenied => {
                "No tienes permiso para acceder a este recurso.".to_string()
            }
            MessageKey::ServerError(code) => {
                format!("Error del servidor (código: {code}). Inténtalo más tarde.")
            }
            MessageKey::NetworkError => {
                "No se pudo conectar con el servidor. Revisa tu conexión.".to_string()
            }
            MessageKey::HeroesError => "No se pudieron cargar los héroes.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [MessageKey; 8] = [
        MessageKey::WelcomeBack,
        MessageKey::LoginSuccess,
        MessageKey::UnexpectedError,
        MessageKey::InvalidCredentials,
        MessageKey::AccessDenied,
        MessageKey::ServerError(503),
        MessageKey::NetworkError,
        MessageKey::HeroesError,
    ];

    #[test]
    fn test_every_key_has_text_in_every_locale() {
        for key in ALL_KEYS {
            let en = key.text(Locale::En);
            let es = key.text(Locale::Es);
            assert!(!en.is_empty(), "{key:?} missing English text");
            assert!(!es.is_empty(), "{key:?} missing Spanish text");
            assert_ne!(en, es, "{key:?} is not translated");
        }
    }

    #[test]
    fn test_server_error_includes_code() {
        assert!(MessageKey::ServerError(502).text(Locale::En).contains("502"));
        assert!(MessageKey::ServerError(502).text(Locale::Es).contains("502"));
    }

    #[test]
    fn test_english_error_text_matches_error_display() {
        for error in [
            AppError::InvalidCredentials,
            AppError::AccessDenied,
            AppError::Server(500),
            AppError::Network,
            AppError::Unexpected,
        ] {
            assert_eq!(MessageKey::from(&error).text(Locale::En), error.to_string());
        }
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" ES ".parse::<Locale>(), Ok(Locale::Es));
        assert_eq!("es-ES".parse::<Locale>(), Ok(Locale::Es));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::En);
    }
}
