use clap::{command, Parser};

/// CLI for `oq`
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The prompt to send. Piped stdin, if any, is appended as context.
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn prompt_is_required() {
        assert!(Args::try_parse_from(["oq"]).is_err());
    }

    #[test]
    fn single_prompt_parses() {
        let args = Args::try_parse_from(["oq", "summarize"]).unwrap();
        assert_eq!(args.prompt, "summarize");
    }

    #[test]
    fn extra_positionals_are_rejected() {
        assert!(Args::try_parse_from(["oq", "summarize", "this"]).is_err());
    }
}
