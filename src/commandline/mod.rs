use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "A lexical analyser for a C-like language")]
pub struct Options {
    /// Source file to scan. Starts an interactive session if omitted
    pub file: Option<PathBuf>,
    /// Only report lexical errors, exiting with a failure status if there are any
    #[clap(short, long, requires = "file")]
    pub check: bool,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_interactive() {
        let options = Options::try_parse_from(["clex"]).expect("valid arguments");

        assert_eq!(options.file, None);
        assert!(!options.check);
        assert_eq!(options.verbose, 1);
    }

    #[test]
    fn file_with_check() {
        let options = Options::try_parse_from(["clex", "--check", "-v", "3", "main.c"])
            .expect("valid arguments");

        assert_eq!(options.file, Some(PathBuf::from("main.c")));
        assert!(options.check);
        assert_eq!(options.verbose, 3);
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Options::try_parse_from(["clex", "--check"]).is_err());
    }

    #[test]
    fn more_than_one_file_is_rejected() {
        assert!(Options::try_parse_from(["clex", "a.c", "b.c"]).is_err());
    }
}
