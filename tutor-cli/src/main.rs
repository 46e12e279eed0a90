use core::fmt;
use std::io::{self, prelude::Write};

use tutor_core::prelude::*;

fn main() {
  let stdout = io::stdout();
  let mut out = stdout.lock();

  let mut tutor = Tutor::new().with_stack_capacity(DEMO_PUSHES.len());
  ok_or_exit(tutor.run(&mut out));
  ok_or_exit(out.flush());
}

fn ok_or_exit<T, E>(result: Result<T, E>) -> T
where
  E: fmt::Display,
{
  match result {
    Ok(x) => x,
    Err(e) => {
      eprintln!("error: {e}");
      std::process::exit(1);
    }
  }
}
