pub mod bracket;
pub mod journal;
pub mod lessons;
pub mod render;
pub mod script;
pub mod stack;
pub mod tutor;

pub mod prelude {
  //! Re-exports commonly used items.

  use super::*;

  pub use bracket::{match_brackets, BracketEvent, MatchReport};
  pub use journal::{Journal, JournalOp};
  pub use render::{Diagram, Rule};
  pub use script::{Op, DEMO_POP_COUNT, DEMO_PUSHES};
  pub use stack::{Stack, StackError};
  pub use tutor::Tutor;
}
