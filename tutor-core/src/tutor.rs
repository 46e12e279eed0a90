use std::io::{self, prelude::Write};

use crate::{
  bracket,
  journal::{Journal, JournalOp},
  lessons,
  render::Diagram,
  script::{self, Op},
  stack::{Stack, StackError},
};

/// The expression traced by the parentheses-matching scenario.
const BRACKET_EXPRESSION: &str = "((5+3)*(7-2))";

/// Drives the fixed lesson sequence over an integer stack, narrating every
/// operation to the supplied sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tutor {
  stack: Stack<i64>,
  journal: Journal,
}

impl Tutor {
  #[inline]
  pub fn new() -> Self {
    Self {
      stack: Stack::new(),
      journal: Journal::new(),
    }
  }

  #[inline]
  pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
    self.stack = Stack::with_capacity(capacity);
    self
  }

  #[inline]
  pub fn stack(&self) -> &Stack<i64> {
    &self.stack
  }

  #[inline]
  pub fn journal(&self) -> &Journal {
    &self.journal
  }

  /// Reports the push before and after it happens.
  pub fn push(
    &mut self,
    out: &mut impl Write,
    value: i64,
    step: usize,
  ) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Step {step}: {}", Op::Push(value))?;
    writeln!(out, "  Before: Stack size = {}", self.stack.len())?;

    self.stack.push(value);
    self.journal.push_op(JournalOp::Push(value));

    writeln!(out, "  Action: Adding {value} to the TOP of the stack")?;
    writeln!(out, "  After:  Stack size = {}", self.stack.len())?;
    writeln!(out, "  Result: {value} is now the topmost element")
  }

  /// Reports the pop, or the underflow lesson when the stack is empty. The
  /// underflow path never mutates and never fails.
  pub fn pop(&mut self, out: &mut impl Write, step: usize) -> io::Result<()> {
    writeln!(out)?;

    let size_before = self.stack.len();
    match self.stack.pop() {
      Err(StackError::Underflow) => {
        self.journal.push_op(JournalOp::Underflow);

        writeln!(out, "Step {step}: {} - CANNOT EXECUTE", Op::Pop)?;
        writeln!(out, "  Error: Stack is empty (Stack Underflow)")?;
        writeln!(out, "  Lesson: Always check if stack is empty before popping!")
      }
      Ok(removed) => {
        self.journal.push_op(JournalOp::Pop(removed));

        writeln!(out, "Step {step}: {}", Op::Pop)?;
        writeln!(
          out,
          "  Before: Top element = {removed}, Size = {size_before}"
        )?;
        writeln!(out, "  Action: Removing {removed} from the TOP")?;
        writeln!(out, "  After:  Size = {}", self.stack.len())?;

        match self.stack.top() {
          Some(top) => {
            writeln!(out, "  Result: {top} is now the new top element")
          }
          None => writeln!(out, "  Result: Stack is now EMPTY"),
        }
      }
    }
  }

  /// Read-only status report.
  pub fn query(&self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ">> Stack Query Information:")?;

    match self.stack.top() {
      None => writeln!(out, "   Status: EMPTY stack (no elements)")?,
      Some(top) => {
        writeln!(out, "   Status: ACTIVE stack (contains elements)")?;
        writeln!(out, "   Top Element: {top}")?;
      }
    }

    writeln!(out, "   Total Elements: {}", self.stack.len())?;
    writeln!(out, "   Note: We can only access the TOP element directly!")
  }

  /// Renders the box diagram over a snapshot; the live stack is untouched.
  pub fn visualize(&self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, ">> Visual Stack Representation:")?;
    writeln!(out, "{:#}", Diagram::new(&self.stack))
  }

  /// The whole lesson: header, concepts, the scripted operation demo,
  /// applications with the bracket scenario, then the summary.
  pub fn run(&mut self, out: &mut impl Write) -> io::Result<()> {
    lessons::header(out)?;

    lessons::lesson_banner(out, "LESSON 1: Understanding Stack Fundamentals")?;
    lessons::concepts(out)?;

    lessons::lesson_banner(out, "LESSON 2: Stack Operations in Action")?;
    self.run_script(out)?;

    lessons::lesson_banner(out, "LESSON 3: Stack Applications and Scenarios")?;
    lessons::applications(out)?;
    self.bracket_demo(out)?;

    lessons::summary(out)?;

    writeln!(out)?;
    write!(out, "{:#}", self.journal)?;

    lessons::closing(out)
  }

  fn run_script(&mut self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
      out,
      "Let's build a stack with numbers and observe the behavior:"
    )?;

    let mut pushes = 0;
    let mut pops = 0;

    for op in script::demo_ops() {
      match op {
        Op::Push(value) => {
          pushes += 1;
          self.push(out, value, pushes)?;

          if script::push_checkpoint(pushes) {
            writeln!(out)?;
            writeln!(out, "--- Learning Checkpoint ---")?;
            self.visualize(out)?;
            self.query(out)?;
          }
        }
        Op::Pop => {
          if pops == 0 {
            writeln!(out)?;
            writeln!(out, "Now let's demonstrate POP operations:")?;
          }

          pops += 1;
          self.pop(out, pops)?;

          if script::pop_checkpoint(pops) {
            self.visualize(out)?;
          }
        }
      }
    }

    Ok(())
  }

  fn bracket_demo(&self, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Practical Example: Parentheses Matching")?;
    writeln!(out, "Expression: ((5 + 3) * (7 - 2))")?;

    writeln!(out)?;
    write!(out, "{:#}", bracket::match_brackets(BRACKET_EXPRESSION))
  }
}
