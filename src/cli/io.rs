//! JSON output for CLI
//!
//! One-shot query results are written to stdout as a single JSON array.

use std::io::{self, Write};

use crate::store::Todo;

use super::errors::CliResult;

/// Write todos as pretty-printed JSON to stdout
pub fn write_todos(todos: &[Todo]) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_todos_to(&mut stdout, todos)
}

fn write_todos_to<W: Write>(writer: &mut W, todos: &[Todo]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, todos)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
