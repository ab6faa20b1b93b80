pub mod app;
pub mod assets;
pub mod error;
pub mod fsm;
pub mod input;
pub mod renderer;
pub mod terminal;
pub mod widgets;

pub use app::App;
pub use error::{AssetError, ShellError};
pub use fsm::{AppMode, GameMode, ModeAction, ModeController};
