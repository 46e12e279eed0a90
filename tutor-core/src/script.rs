use core::{fmt, iter};

/// The literal values pushed during the operations lesson.
pub const DEMO_PUSHES: [i64; 8] = [10, 25, 7, 33, 18, 42, 9, 15];

/// How many pops the lesson demonstrates after the pushes.
pub const DEMO_POP_COUNT: usize = 4;

/// One scripted stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
  Push(i64),
  Pop,
}

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Push(value) => write!(f, "PUSH({value})"),
      Self::Pop => write!(f, "POP()"),
    }
  }
}

/// The full scripted sequence: every demo push in order, then the pops.
pub fn demo_ops() -> impl Iterator<Item = Op> {
  DEMO_PUSHES
    .into_iter()
    .map(Op::Push)
    .chain(iter::repeat(Op::Pop).take(DEMO_POP_COUNT))
}

/// A visual checkpoint follows every third push.
#[inline]
pub const fn push_checkpoint(step: usize) -> bool {
  step % 3 == 0
}

/// A visual checkpoint follows every second pop.
#[inline]
pub const fn pop_checkpoint(step: usize) -> bool {
  step % 2 == 0
}

#[cfg(test)]
mod test {
  use super::*;
  use test_case::case;

  #[test]
  fn script_is_pushes_then_pops() {
    let ops: Vec<Op> = demo_ops().collect();

    assert_eq!(ops.len(), DEMO_PUSHES.len() + DEMO_POP_COUNT);

    let pushes: Vec<i64> = ops
      .iter()
      .filter_map(|op| match op {
        Op::Push(value) => Some(*value),
        Op::Pop => None,
      })
      .collect();
    assert_eq!(pushes, DEMO_PUSHES);

    assert!(ops[DEMO_PUSHES.len()..]
      .iter()
      .all(|op| matches!(op, &Op::Pop)));
  }

  #[case(1 => false ; "first push")]
  #[case(3 => true ; "third push")]
  #[case(4 => false ; "fourth push")]
  #[case(6 => true ; "sixth push")]
  fn push_checkpoints(step: usize) -> bool {
    push_checkpoint(step)
  }

  #[case(1 => false ; "first pop")]
  #[case(2 => true ; "second pop")]
  #[case(4 => true ; "fourth pop")]
  fn pop_checkpoints(step: usize) -> bool {
    pop_checkpoint(step)
  }

  #[case(Op::Push(42) => "PUSH(42)" ; "push")]
  #[case(Op::Pop => "POP()" ; "pop")]
  fn op_display(op: Op) -> String {
    op.to_string()
  }
}
