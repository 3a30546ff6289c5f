//! # One-shot Query (`oq`)
//! Ask OpenAI a question from your terminal, with anything you pipe in attached as context.
//!
//! A command line program that sends a single prompt to the OpenAI chat completions endpoint
//! and prints the first returned answer. If standard input is piped or redirected, its full
//! contents are appended to the prompt, so you can `cat` a file or pipe a command's output
//! straight into a question.
//!
//! ## Usage
//! These are the library crate documentation for `oq`. For usage of the binary install the
//! local binary crate (`cargo install oq`) and see
//! ```shell
//! $ oq --help
//! ```
//!
//! One-shot question:
//! ```shell
//! $ oq "what is a pty"
//! ```
//!
//! With piped context:
//! ```shell
//! $ git diff | oq "summarize this change"
//! ```
//!
//! ## Environment Variables:
//! - `OQ_OPENAI_KEY`: Required. The OpenAI API key used for the query.
//! - `RUST_LOG`: Optional. Tracing filter for diagnostics on stderr (default: `warn,oq=info`).
//!
//! ## Notes:
//! - The query runs once, blocking, with a 60 second timeout. There are no retries; any
//!   failure prints a diagnostic and exits with a non-zero status.
//! - Piped input is read in full before the query is sent, so very large inputs are held
//!   in memory and may exceed the model's context window.
pub mod cli;
pub mod errors;
pub mod input;
pub mod logging;
pub mod openai;
pub mod query;
