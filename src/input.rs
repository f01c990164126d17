//! Keyboard to command translation.

use ggez::input::keyboard::KeyCode;

use crate::controller::{Command, GameState};

/// Arrow keys steer during play and walk the menu on the main menu.
pub fn command_for(key: KeyCode, state: GameState) -> Option<Command> {
    let in_menu = state == GameState::MainMenu;
    let command = match key {
        KeyCode::Up if in_menu => Command::NavigateUp,
        KeyCode::Down if in_menu => Command::NavigateDown,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Return | KeyCode::NumpadEnter => Command::Confirm,
        KeyCode::Escape => Command::Quit,
        KeyCode::P => Command::Pause,
        KeyCode::M => Command::ReturnToMenu,
        KeyCode::D => Command::CycleDifficulty,
        KeyCode::S => Command::ToggleSkin,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_depend_on_state() {
        assert_eq!(
            command_for(KeyCode::Up, GameState::MainMenu),
            Some(Command::NavigateUp)
        );
        assert_eq!(
            command_for(KeyCode::Down, GameState::MainMenu),
            Some(Command::NavigateDown)
        );
        assert_eq!(command_for(KeyCode::Up, GameState::Playing), Some(Command::MoveUp));
        assert_eq!(
            command_for(KeyCode::Left, GameState::MainMenu),
            Some(Command::MoveLeft)
        );
    }

    #[test]
    fn test_fixed_bindings() {
        for state in [GameState::MainMenu, GameState::Playing, GameState::GameOver] {
            assert_eq!(command_for(KeyCode::Return, state), Some(Command::Confirm));
            assert_eq!(command_for(KeyCode::NumpadEnter, state), Some(Command::Confirm));
            assert_eq!(command_for(KeyCode::Escape, state), Some(Command::Quit));
            assert_eq!(command_for(KeyCode::P, state), Some(Command::Pause));
            assert_eq!(command_for(KeyCode::M, state), Some(Command::ReturnToMenu));
        }
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(command_for(KeyCode::Q, GameState::Playing), None);
    }
}
