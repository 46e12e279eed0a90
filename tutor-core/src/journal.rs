use core::fmt;

use yansi::Paint;

/// A single demonstrated operation, as the audience saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalOp {
  Push(i64),
  Pop(i64),
  Underflow,
}

impl fmt::Display for JournalOp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
      match self {
        Self::Push(value) => {
          write!(f, "{}", format!("push({value})").green())
        }
        Self::Pop(value) => write!(f, "{}", format!("pop({value})").red()),
        Self::Underflow => write!(f, "{}", "underflow".yellow()),
      }
    } else {
      match self {
        Self::Push(value) => write!(f, "push({value})"),
        Self::Pop(value) => write!(f, "pop({value})"),
        Self::Underflow => write!(f, "underflow"),
      }
    }
  }
}

/// Records every operation the lesson performs so the summary can replay
/// the history, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Journal {
  ops: Vec<JournalOp>,
  size: Option<usize>,
}

impl Journal {
  #[inline]
  pub fn new() -> Self {
    Self {
      ops: Vec::new(),
      size: None,
    }
  }

  /// Caps how many entries the recap prints.
  #[inline]
  pub const fn with_size(mut self, size: usize) -> Self {
    self.size = Some(size);
    self
  }

  #[inline]
  pub fn push_op(&mut self, op: JournalOp) {
    self.ops.push(op);
  }

  #[inline]
  pub fn ops(&self) -> &[JournalOp] {
    &self.ops
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.ops.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.ops.is_empty()
  }
}

impl fmt::Display for Journal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.ops.is_empty() {
      return Ok(());
    }

    writeln!(f, "Operation History (most recent first):")?;
    for op in self
      .ops
      .iter()
      .rev()
      .take(self.size.unwrap_or(self.ops.len()))
    {
      if f.alternate() {
        writeln!(f, "  * {op:#}")?;
      } else {
        writeln!(f, "  * {op}")?;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use test_case::case;

  #[case(JournalOp::Push(10) => "push(10)" ; "push")]
  #[case(JournalOp::Pop(25) => "pop(25)" ; "pop")]
  #[case(JournalOp::Underflow => "underflow" ; "underflow")]
  fn op_display(op: JournalOp) -> String {
    op.to_string()
  }

  #[test]
  fn empty_journal_prints_nothing() {
    assert_eq!(Journal::new().to_string(), "");
  }

  #[test]
  fn recap_is_most_recent_first() {
    let mut journal = Journal::new();
    journal.push_op(JournalOp::Push(1));
    journal.push_op(JournalOp::Pop(1));
    journal.push_op(JournalOp::Underflow);

    assert_eq!(
      journal.to_string(),
      concat!(
        "Operation History (most recent first):\n",
        "  * underflow\n",
        "  * pop(1)\n",
        "  * push(1)\n"
      )
    );
  }

  #[test]
  fn size_caps_the_recap() {
    let mut journal = Journal::new().with_size(1);
    journal.push_op(JournalOp::Push(1));
    journal.push_op(JournalOp::Push(2));

    assert_eq!(
      journal.to_string(),
      "Operation History (most recent first):\n  * push(2)\n"
    );
  }
}
