//! Top-level game phases and the legal moves between them

use serde::{Deserialize, Serialize};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu with play, quit and credits buttons
    TitleScreen,
    /// Active gameplay
    Playing,
    /// Credits screen, reached from the menu or by winning
    Credits,
    /// Process is shutting down
    Quit,
}

/// Something that may move the game to another phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Play button
    Play,
    /// Credits button on the title screen
    ShowCredits,
    /// Back button on the credits screen
    Back,
    /// Window close, Escape or the quit button
    Quit,
    /// A particle reached the player
    PlayerDied,
    /// The final wave went stable
    Won,
}

impl GamePhase {
    /// Phase reached from `self` on `event`, or `None` if the move is illegal
    pub fn next(self, event: PhaseEvent) -> Option<GamePhase> {
        use GamePhase::*;
        use PhaseEvent as E;

        match (self, event) {
            (Quit, _) => None,
            (_, E::Quit) => Some(Quit),
            (TitleScreen, E::Play) => Some(Playing),
            (TitleScreen, E::ShowCredits) => Some(Credits),
            (Credits, E::Back) => Some(TitleScreen),
            (Playing, E::PlayerDied) => Some(TitleScreen),
            (Playing, E::Won) => Some(Credits),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == GamePhase::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert_eq!(GamePhase::TitleScreen.next(PhaseEvent::Play), Some(GamePhase::Playing));
        assert_eq!(GamePhase::TitleScreen.next(PhaseEvent::ShowCredits), Some(GamePhase::Credits));
        assert_eq!(GamePhase::Credits.next(PhaseEvent::Back), Some(GamePhase::TitleScreen));
        assert_eq!(GamePhase::Playing.next(PhaseEvent::PlayerDied), Some(GamePhase::TitleScreen));
        assert_eq!(GamePhase::Playing.next(PhaseEvent::Won), Some(GamePhase::Credits));
    }

    #[test]
    fn test_quit_from_anywhere_and_terminal() {
        for phase in [GamePhase::TitleScreen, GamePhase::Playing, GamePhase::Credits] {
            assert_eq!(phase.next(PhaseEvent::Quit), Some(GamePhase::Quit));
            assert!(!phase.is_terminal());
        }
        assert!(GamePhase::Quit.is_terminal());
        assert_eq!(GamePhase::Quit.next(PhaseEvent::Play), None);
        assert_eq!(GamePhase::Quit.next(PhaseEvent::Quit), None);
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        assert_eq!(GamePhase::TitleScreen.next(PhaseEvent::Won), None);
        assert_eq!(GamePhase::Credits.next(PhaseEvent::Play), None);
        assert_eq!(GamePhase::Playing.next(PhaseEvent::Back), None);
        assert_eq!(GamePhase::Playing.next(PhaseEvent::Play), None);
    }
}
