//! One application frame: mode actions, simulation step, drawing

use game_core::{Game, GameRng, Opponent, Side};
use tracing::{debug, info, warn};

use crate::fsm::{AppMode, GameMode, ModeAction, ModeController, TransitionResult};
use crate::input::{paddle_keys, Clock, InputProvider, ABORT_KEY, PAUSE_KEY, QUIT_KEY, REPLAY_KEY};
use crate::renderer::{draw, Surface};
use crate::widgets::MenuButtons;

pub struct App {
    modes: ModeController,
    buttons: MenuButtons,
    game: Option<Game>,
    next_seed: Option<u64>,
}

impl App {
    /// `seed` makes every match's relaunch directions reproducible
    pub fn new(buttons: MenuButtons, seed: Option<u64>) -> Self {
        Self {
            modes: ModeController::new(),
            buttons,
            game: None,
            next_seed: seed,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.modes.mode()
    }

    pub fn game_mode(&self) -> GameMode {
        self.modes.game_mode()
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn is_running(&self) -> bool {
        !self.modes.should_exit()
    }

    /// Run one frame. Returns `false` once the application should close.
    pub fn frame(
        &mut self,
        input: &dyn InputProvider,
        clock: &dyn Clock,
        surface: &mut dyn Surface,
    ) -> bool {
        let now = clock.now();

        if let Some(action) = self.pending_action(input) {
            self.apply(action);
        }

        if self.modes.mode() == AppMode::Exit {
            return false;
        }

        if self.modes.is_playing() && input.is_key_pressed(REPLAY_KEY) {
            if let Some(game) = self.game.as_mut().filter(|g| g.state.is_game_over()) {
                game.reset();
            }
        }

        if self.modes.is_playing() {
            if let Some(game) = self.game.as_mut() {
                let events = game.tick(now, paddle_keys(input)).clone();
                if let Some(side) = events.ball_hit_paddle {
                    debug!(?side, "paddle hit");
                }
                if events.ball_hit_wall {
                    debug!("wall bounce");
                }
                if events.left_scored || events.right_scored {
                    let score = game.score();
                    debug!(left = score.left, right = score.right, "point scored");
                }
                if events.ball_released {
                    debug!("ball released");
                }
                if let Some(winner) = events.winner {
                    info!(winner = winner.player_number(), "winner decided");
                }
            }
        }

        self.draw(input, surface);
        true
    }

    /// The discrete action requested this frame, if any
    fn pending_action(&self, input: &dyn InputProvider) -> Option<ModeAction> {
        if input.is_key_pressed(QUIT_KEY) {
            return Some(ModeAction::Quit);
        }

        let buttons = &self.buttons;
        match self.modes.mode() {
            AppMode::Menu => {
                if buttons.start.is_clicked(input) {
                    Some(ModeAction::Start)
                } else if buttons.settings.is_clicked(input) {
                    Some(ModeAction::OpenSettings)
                } else if buttons.exit.is_clicked(input) {
                    Some(ModeAction::Exit)
                } else {
                    None
                }
            }
            AppMode::Settings => {
                if buttons.user.is_clicked(input) {
                    Some(ModeAction::SelectUser)
                } else if buttons.cpu.is_clicked(input) {
                    Some(ModeAction::SelectCpu)
                } else if buttons.back.is_clicked(input) {
                    Some(ModeAction::Back)
                } else {
                    None
                }
            }
            AppMode::UserVsUser | AppMode::UserVsCpu | AppMode::Pause => {
                // Abort wins over pause when both arrive in the same frame
                if input.is_key_pressed(ABORT_KEY) {
                    Some(ModeAction::Abort)
                } else if input.is_key_pressed(PAUSE_KEY) {
                    Some(ModeAction::TogglePause)
                } else {
                    None
                }
            }
            AppMode::Exit => None,
        }
    }

    /// Apply a mode action and keep the match in step with the new mode
    pub fn apply(&mut self, action: ModeAction) -> TransitionResult {
        let result = self.modes.transition(action);
        if !result.success {
            warn!(?action, mode = ?result.from_state, "action ignored in this mode");
            return result;
        }

        info!(from = ?result.from_state, to = ?result.to_state, ?action, "mode changed");

        if result.ends_match() {
            if let Some(game) = self.game.take() {
                let score = game.score();
                info!(left = score.left, right = score.right, "match discarded");
            }
        }

        if result.starts_match() {
            self.game = Some(self.new_game());
        }

        if let Some(game) = self.game.as_mut() {
            game.set_paused(result.to_state == AppMode::Pause);
        }

        result
    }

    fn new_game(&mut self) -> Game {
        let opponent = match self.modes.game_mode() {
            GameMode::UserMode => Opponent::Human,
            GameMode::CpuMode => Opponent::Cpu,
        };
        let rng = match self.next_seed {
            Some(seed) => {
                self.next_seed = Some(seed.wrapping_add(1));
                GameRng::new(seed)
            }
            None => GameRng::from_entropy(),
        };
        info!(?opponent, "match started");
        Game::new(opponent, Box::new(rng))
    }

    fn draw(&self, input: &dyn InputProvider, surface: &mut dyn Surface) {
        match self.modes.mode() {
            AppMode::Menu => draw::draw_buttons(surface, &self.buttons.menu(), input),
            AppMode::Settings => {
                draw::draw_buttons(surface, &self.buttons.settings_screen(), input)
            }
            AppMode::UserVsUser | AppMode::UserVsCpu | AppMode::Pause => {
                if let Some(game) = &self.game {
                    draw::draw_match(surface, game);
                }
            }
            AppMode::Exit => {}
        }
    }

    /// Winner of the current match, once decided
    pub fn winner(&self) -> Option<Side> {
        self.game.as_ref().and_then(Game::winner)
    }
}
