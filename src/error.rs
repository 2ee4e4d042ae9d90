use std::fmt;

/// Errors that can occur while bringing up SDL2
///
/// Each variant carries SDL2's own message. All of them are fatal.
#[derive(Debug, Clone)]
pub enum GameError {
    /// `sdl2::init()` failed
    SdlInit(String),

    /// Video subsystem unavailable
    Video(String),

    /// Window could not be created
    Window(String),

    /// Accelerated or software canvas could not be created
    Canvas(String),

    /// Event pump already taken or unavailable
    EventPump(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::SdlInit(msg) => write!(f, "Failed to initialize SDL2: {}", msg),
            GameError::Video(msg) => write!(f, "Failed to open video subsystem: {}", msg),
            GameError::Window(msg) => write!(f, "Failed to create window: {}", msg),
            GameError::Canvas(msg) => write!(f, "Failed to create canvas: {}", msg),
            GameError::EventPump(msg) => write!(f, "Failed to get event pump: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_stage() {
        let error = GameError::Window("no display".to_string());
        assert_eq!(error.to_string(), "Failed to create window: no display");
    }

    #[test]
    fn test_converts_to_string() {
        let message: String = GameError::SdlInit("boom".to_string()).into();
        assert!(message.contains("boom"));
    }
}
