//! Application Mode Controller
//!
//! Top-level screens and the discrete actions that move between them.

/// Top-level application modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Menu,
    Settings,
    UserVsUser,
    UserVsCpu,
    Pause,
    Exit,
}

/// Opponent selection, kept across pause/resume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    UserMode,
    CpuMode,
}

impl GameMode {
    /// The active-play mode this game mode resumes into
    pub fn play_mode(self) -> AppMode {
        match self {
            GameMode::UserMode => AppMode::UserVsUser,
            GameMode::CpuMode => AppMode::UserVsCpu,
        }
    }
}

/// Actions that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    Start,
    OpenSettings,
    Exit,
    SelectUser,
    SelectCpu,
    Back,
    TogglePause,
    Abort,
    Quit,
}

/// Result of a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: AppMode,
    pub to_state: AppMode,
    pub action: ModeAction,
}

impl TransitionResult {
    /// A fresh match begins with this transition
    pub fn starts_match(&self) -> bool {
        self.success
            && matches!(self.from_state, AppMode::Menu | AppMode::Settings)
            && is_play(self.to_state)
    }

    /// The in-progress match is thrown away with this transition
    pub fn ends_match(&self) -> bool {
        self.success && is_active(self.from_state) && !is_active(self.to_state)
    }
}

fn is_play(mode: AppMode) -> bool {
    matches!(mode, AppMode::UserVsUser | AppMode::UserVsCpu)
}

fn is_active(mode: AppMode) -> bool {
    is_play(mode) || mode == AppMode::Pause
}

/// Application mode state machine
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: AppMode,
    game_mode: GameMode,
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Menu,
            game_mode: GameMode::UserMode,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ModeAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ModeAction) -> TransitionResult {
        let from_state = self.mode;

        match self.get_next_state(action) {
            Some((next_state, game_mode)) => {
                self.mode = next_state;
                if let Some(game_mode) = game_mode {
                    self.game_mode = game_mode;
                }
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Next mode (and game mode, if it changes) for an action
    fn get_next_state(&self, action: ModeAction) -> Option<(AppMode, Option<GameMode>)> {
        use AppMode::*;

        match (self.mode, action) {
            // Closing the application works from anywhere
            (Exit, _) => None,
            (_, ModeAction::Quit) => Some((Exit, None)),

            // From Menu
            (Menu, ModeAction::Start) => Some((UserVsUser, Some(GameMode::UserMode))),
            (Menu, ModeAction::OpenSettings) => Some((Settings, None)),
            (Menu, ModeAction::Exit) => Some((Exit, None)),

            // From Settings
            (Settings, ModeAction::SelectUser) => Some((UserVsUser, Some(GameMode::UserMode))),
            (Settings, ModeAction::SelectCpu) => Some((UserVsCpu, Some(GameMode::CpuMode))),
            (Settings, ModeAction::Back) => Some((Menu, None)),

            // Active play
            (UserVsUser | UserVsCpu, ModeAction::TogglePause) => Some((Pause, None)),
            (Pause, ModeAction::TogglePause) => Some((self.game_mode.play_mode(), None)),
            (UserVsUser | UserVsCpu | Pause, ModeAction::Abort) => Some((Menu, None)),

            // Invalid transition
            _ => None,
        }
    }

    /// Simulation runs only in these modes
    pub fn is_playing(&self) -> bool {
        is_play(self.mode)
    }

    /// Playing or paused: a match exists
    pub fn in_match(&self) -> bool {
        is_active(self.mode)
    }

    pub fn should_exit(&self) -> bool {
        self.mode == AppMode::Exit
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
