//! Command line parser.
//!
//! Splits one line of input on runs of whitespace. There is no quoting,
//! escaping, expansion or piping: `echo "a b"` yields the two arguments
//! `"a` and `b"`.

/// A command line split into its name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased first token. Empty only for blank input.
    pub name: String,
    /// Remaining tokens in their original case and order.
    pub args: Vec<String>,
}

/// Parse a raw input line.
pub fn parse_line(input: &str) -> ParsedCommand {
    let mut words = input.split_whitespace();
    let name = words.next().unwrap_or_default().to_lowercase();
    let args = words.map(str::to_string).collect();

    ParsedCommand { name, args }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let cmd = parse_line("ls");
        assert_eq!(cmd.name, "ls");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_parse_args_keep_case() {
        let cmd = parse_line("OPEN /Courses/ML");
        assert_eq!(cmd.name, "open");
        assert_eq!(cmd.args, vec!["/Courses/ML"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let cmd = parse_line("  echo a  b \t  c  ");
        assert_eq!(cmd.name, "echo");
        assert_eq!(cmd.args, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_no_quoting() {
        let cmd = parse_line(r#"echo "hello world""#);
        assert_eq!(cmd.args, vec![r#""hello"#, r#"world""#]);
    }

    #[test]
    fn test_parse_blank() {
        for input in ["", "   ", "\t\n"] {
            let cmd = parse_line(input);
            assert_eq!(cmd.name, "");
            assert!(cmd.args.is_empty());
        }
    }
}
