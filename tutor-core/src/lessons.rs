//! The static text blocks of the tutorial: header, concept lesson,
//! real-world applications, and the closing summary.

use std::io::{self, prelude::Write};

use itertools::Itertools;

use crate::render::{Centered, Rule};

const PRIMARY_OPS: [(&str, &str); 5] = [
  ("PUSH:", "Add element to the top"),
  ("POP:", "Remove element from the top"),
  ("TOP:", "View the top element (without removing)"),
  ("EMPTY:", "Check if stack contains elements"),
  ("SIZE:", "Count total elements in stack"),
];

const APPLICATIONS: [(&str, [&str; 2]); 5] = [
  (
    "Function Call Management:",
    [
      "Program tracks function calls in execution stack",
      "When function finishes, program returns to caller",
    ],
  ),
  (
    "Undo Operations:",
    [
      "Text editors store previous states",
      "Ctrl+Z removes the most recent change",
    ],
  ),
  (
    "Browser History:",
    [
      "Back button returns to previous page",
      "Most recent page is first to be revisited",
    ],
  ),
  (
    "Expression Evaluation:",
    [
      "Mathematical expressions use stacks",
      "Parentheses matching and operator precedence",
    ],
  ),
  (
    "Memory Management:",
    [
      "Program variables stored in call stack",
      "Local variables created and destroyed automatically",
    ],
  ),
];

pub fn header(out: &mut impl Write) -> io::Result<()> {
  writeln!(out, "{}", Rule('='))?;
  writeln!(out, "{}", Centered("STACK DATA STRUCTURE TUTORIAL"))?;
  writeln!(out, "{}", Centered("Interactive Learning Demo"))?;
  writeln!(out, "{}", Rule('='))?;

  writeln!(out)?;
  writeln!(out, "Welcome to the Stack Learning Experience!")?;
  writeln!(out, "This demonstration teaches stack fundamentals through")?;
  writeln!(out, "hands-on examples and step-by-step visualizations.")
}

pub fn lesson_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", Rule('-'))?;
  writeln!(out, "{title}")?;
  writeln!(out, "{}", Rule('-'))
}

pub fn concepts(out: &mut impl Write) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "A STACK is a linear data structure that follows the")?;
  writeln!(out, "LIFO principle: Last In, First Out")?;

  writeln!(out)?;
  writeln!(out, "Think of a stack like a pile of plates:")?;
  writeln!(out, "- The last plate placed goes on TOP")?;
  writeln!(out, "- The first plate removed comes from the TOP")?;
  writeln!(out, "- The bottom plates remain until upper ones are removed")?;

  writeln!(out)?;
  writeln!(out, "Primary Stack Operations:")?;
  writeln!(
    out,
    "{}",
    PRIMARY_OPS
      .iter()
      .enumerate()
      .format_with("\n", |(i, (name, what)), f| {
        f(&format_args!("{}. {name:<5} {what}", i + 1))
      })
  )
}

pub fn applications(out: &mut impl Write) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "Real-World Stack Applications:")?;
  writeln!(
    out,
    "{}",
    APPLICATIONS
      .iter()
      .enumerate()
      .format_with("\n", |(i, (name, details)), f| {
        f(&format_args!(
          "\n{}. {name}\n   - {}\n   - {}",
          i + 1,
          details[0],
          details[1]
        ))
      })
  )
}

pub fn summary(out: &mut impl Write) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", Rule('='))?;
  writeln!(out, "EDUCATIONAL SUMMARY: Key Learning Points")?;
  writeln!(out, "{}", Rule('='))?;

  writeln!(out)?;
  writeln!(out, "What this lesson covered:")?;

  writeln!(out)?;
  writeln!(out, "* Stack Definition:")?;
  writeln!(out, "  LIFO data structure - Last In, First Out")?;

  writeln!(out)?;
  writeln!(out, "* Core Operations:")?;
  writeln!(out, "  PUSH: Add element to top")?;
  writeln!(out, "  POP:  Remove element from top")?;
  writeln!(out, "  TOP:  Access top element without removal")?;

  writeln!(out)?;
  writeln!(out, "* Important Properties:")?;
  writeln!(out, "  - Only top element is directly accessible")?;
  writeln!(out, "  - Stack can be empty (underflow risk)")?;
  writeln!(out, "  - Elements are processed in reverse order")?;

  writeln!(out)?;
  writeln!(out, "* Practical Applications:")?;
  writeln!(out, "  - Function call management")?;
  writeln!(out, "  - Undo operations in software")?;
  writeln!(out, "  - Expression evaluation and parsing")
}

pub fn closing(out: &mut impl Write) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", Rule('='))?;
  writeln!(out, "Educational demonstration completed successfully!")?;
  writeln!(out, "{}", Rule('='))
}

#[cfg(test)]
mod test {
  use super::*;

  fn capture(write: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut sink = Vec::new();
    write(&mut sink).unwrap();
    String::from_utf8(sink).unwrap()
  }

  #[test]
  fn concepts_list_all_five_operations() {
    let text = capture(|out| concepts(out));

    for (name, _) in PRIMARY_OPS {
      assert!(text.contains(name), "missing operation {name}");
    }
    assert!(text.contains("LIFO principle: Last In, First Out"));
  }

  #[test]
  fn applications_are_numbered() {
    let text = capture(|out| applications(out));

    for i in 1..=APPLICATIONS.len() {
      assert!(text.contains(&format!("{i}. ")), "missing entry {i}");
    }
  }

  #[test]
  fn banners_are_framed_by_rules() {
    let text = capture(|out| lesson_banner(out, "LESSON 9: Example"));

    let rule = "-".repeat(crate::render::DISPLAY_WIDTH);
    assert_eq!(text.matches(&rule).count(), 2);
    assert!(text.contains("LESSON 9: Example"));
  }
}
