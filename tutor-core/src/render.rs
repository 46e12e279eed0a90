use core::fmt;

use yansi::Paint;

use crate::stack::Stack;

/// Width of every banner and rule in the lesson output.
pub const DISPLAY_WIDTH: usize = 55;

/// A horizontal rule of a single repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule(pub char);

impl fmt::Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    (0..DISPLAY_WIDTH).try_for_each(|_| write!(f, "{}", self.0))
  }
}

/// Centers its text within the display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Centered<'a>(pub &'a str);

impl fmt::Display for Centered<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let pad = DISPLAY_WIDTH.saturating_sub(self.0.len()) / 2;
    write!(f, "{:pad$}{}", "", self.0)
  }
}

/// Vertical ASCII box rendering of a stack, top element first.
///
/// Construction drains a snapshot of the stack; the live stack is never
/// mutated by rendering. The alternate formatter flag adds color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
  top_down: Vec<i64>,
}

impl Diagram {
  pub fn new(stack: &Stack<i64>) -> Self {
    let mut copy = stack.snapshot();
    let mut top_down = Vec::with_capacity(copy.len());
    while let Ok(value) = copy.pop() {
      top_down.push(value);
    }

    Self { top_down }
  }
}

impl fmt::Display for Diagram {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.top_down.is_empty() {
      writeln!(f, "   |     |  <- Empty stack")?;
      return write!(f, "   +-----+");
    }

    writeln!(f, "   +-----+")?;
    for (i, value) in self.top_down.iter().enumerate() {
      write!(f, "   | {value:>3} |")?;
      if i == 0 {
        let marker = " <- TOP (last added, first to remove)";
        if f.alternate() {
          write!(f, "{}", marker.green())?;
        } else {
          write!(f, "{marker}")?;
        }
      }
      writeln!(f)?;
    }
    writeln!(f, "   +-----+")?;
    write!(f, "   Bottom")
  }
}
