//! Combat sessions - Turn-by-turn exchanges between a character and monsters

mod action;
mod monster;
mod result;
mod rewards;
mod session;

pub use action::{flee_chance, PlayerAction};
pub use monster::MonsterProfile;
pub use result::{Actor, CombatState, TurnReport};
pub use rewards::{rewards_for, CombatRewards};
pub use session::CombatSession;
