use core::fmt;

use yansi::Paint;

use crate::stack::Stack;

/// One traced step of the bracket scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketEvent {
  /// An opening bracket was pushed; holds the marker count after the push.
  Open(usize),
  /// A closing bracket matched an open; holds the count after the pop.
  Close(usize),
}

/// Outcome of scanning an expression for balanced parentheses.
///
/// Only net imbalance is detected: a closing bracket with no matching open
/// is skipped rather than reported, so the verdict covers unclosed opens
/// only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
  pub events: Vec<BracketEvent>,
  pub unclosed: usize,
}

impl MatchReport {
  #[inline]
  pub fn matched(&self) -> bool {
    self.unclosed == 0
  }
}

/// Scans `expression` left to right, pushing a marker for each `(` and
/// popping one for each `)` that has an open to match.
pub fn match_brackets(expression: &str) -> MatchReport {
  let mut markers: Stack<char> = Stack::new();
  let mut events = Vec::new();

  for ch in expression.chars() {
    match ch {
      '(' => {
        markers.push(ch);
        events.push(BracketEvent::Open(markers.len()));
      }
      ')' => {
        if markers.pop().is_ok() {
          events.push(BracketEvent::Close(markers.len()));
        }
      }
      _ => {}
    }
  }

  MatchReport {
    events,
    unclosed: markers.len(),
  }
}

impl fmt::Display for MatchReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Tracing through the expression:")?;

    for event in self.events.iter() {
      match event {
        BracketEvent::Open(size) => {
          writeln!(f, "Found '(' - PUSH to stack. Stack size: {size}")?;
        }
        BracketEvent::Close(size) => {
          writeln!(f, "Found ')' - POP from stack. Stack size: {size}")?;
        }
      }
    }

    let verdict = if self.matched() {
      "All parentheses are properly matched!"
    } else {
      "Unmatched parentheses detected!"
    };

    if f.alternate() {
      let painted = if self.matched() {
        verdict.green()
      } else {
        verdict.red()
      };
      writeln!(f, "Result: {painted}")
    } else {
      writeln!(f, "Result: {verdict}")
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use test_case::case;

  #[case("((5+3)*(7-2))" => true ; "balanced arithmetic")]
  #[case("(()" => false ; "one unclosed open")]
  #[case("" => true ; "no brackets")]
  #[case("5+3" => true ; "no brackets at all")]
  #[case("((((" => false ; "only opens")]
  #[case(")" => true ; "lone close is skipped")]
  #[case(")(" => true ; "net balance only")]
  fn verdicts(expression: &str) -> bool {
    match_brackets(expression).matched()
  }

  #[case("(()" => 1 ; "one unclosed")]
  #[case("(((" => 3 ; "three unclosed")]
  #[case("((5+3)*(7-2))" => 0 ; "fully closed")]
  #[case("))" => 0 ; "closes never count")]
  fn unclosed_opens(expression: &str) -> usize {
    match_brackets(expression).unclosed
  }

  #[test]
  fn trace_records_sizes_after_each_event() {
    let report = match_brackets("(()");

    assert_eq!(
      report.events,
      vec![
        BracketEvent::Open(1),
        BracketEvent::Open(2),
        BracketEvent::Close(1),
      ]
    );
  }

  #[test]
  fn unmatched_close_emits_no_event() {
    let report = match_brackets(")(");

    assert_eq!(report.events, vec![BracketEvent::Open(1)]);
    assert!(report.matched());
  }

  #[test]
  fn display_ends_with_the_verdict() {
    let matched = match_brackets("()").to_string();
    assert!(matched.ends_with("Result: All parentheses are properly matched!\n"));

    let unmatched = match_brackets("(").to_string();
    assert!(unmatched.ends_with("Result: Unmatched parentheses detected!\n"));
  }
}
