//! Piped standard input handling and query assembly.

use std::io::{self, Read};
use std::os::fd::AsRawFd;

use tracing::debug;

use crate::errors::OqError;

/// Read the entirety of standard input if it is piped or redirected.
///
/// Returns an empty string when stdin is an interactive terminal, without attempting a read.
/// The input is taken as one text blob; invalid UTF-8 bytes are replaced.
pub fn read_piped_input() -> Result<String, OqError> {
    let stdin_fileno = io::stdin().as_raw_fd();
    if nix::unistd::isatty(stdin_fileno)? {
        return Ok(String::new());
    }
    let mut piped_input = Vec::new();
    io::stdin().lock().read_to_end(&mut piped_input)?;
    debug!(bytes = piped_input.len(), "read piped input");
    Ok(String::from_utf8_lossy(&piped_input).to_string())
}

/// Build the query text sent to the model: the prompt alone when there is no
/// piped input, otherwise `<prompt>: <input>`.
pub fn assemble_query(prompt: &str, input: &str) -> String {
    if input.is_empty() {
        prompt.to_string()
    } else {
        format!("{}: {}", prompt, input)
    }
}

#[cfg(test)]
mod tests {
    use super::assemble_query;

    #[test]
    fn empty_input_leaves_the_prompt_alone() {
        assert_eq!(assemble_query("summarize", ""), "summarize");
    }

    #[test]
    fn piped_input_is_appended_after_a_colon() {
        assert_eq!(
            assemble_query("summarize", "the quick brown fox"),
            "summarize: the quick brown fox"
        );
    }

    #[test]
    fn multiline_input_is_kept_as_one_blob() {
        assert_eq!(
            assemble_query("explain", "line one\nline two\n"),
            "explain: line one\nline two\n"
        );
    }
}
