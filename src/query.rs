//! The one-shot query: read piped input, assemble the query, ask, print.

use crate::errors::OqError;
use crate::input::{assemble_query, read_piped_input};
use crate::openai::query_chat;

/// Run a single query and print the first returned choice to stdout.
pub fn run_query(prompt: &str) -> Result<(), OqError> {
    let piped_input = read_piped_input()?;
    let query = assemble_query(prompt, &piped_input);
    let answer = query_chat(&query)?;
    println!("{}", answer);
    Ok(())
}
