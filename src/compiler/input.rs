/// Index-list reader for the command-line driver.
///
/// Line-oriented text; tokens are separated by whitespace or commas.
/// Comments begin with `//` or `#` and run to end of line.
///
/// Recognized tokens:
///   - Decimal integers:  `0`, `17`, `-3` (negatives parse; `compile` rejects them)
///   - Binary literals:   `0b000000101`
///
/// Range checking against the register width is left to `compile`.
use super::CompileError;

/// Parse every index in `source`, in order of appearance.
pub fn parse_indices(source: &str) -> Result<Vec<i64>, CompileError> {
    let mut indices = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_num = idx + 1;
        let content = strip_comment(line);

        for word in content.split(|c: char| c == ',' || c.is_whitespace()) {
            if word.is_empty() {
                continue;
            }
            indices.push(parse_word(word, line_num)?);
        }
    }

    Ok(indices)
}

/// Strip `//` and `#` comments from a source line.
fn strip_comment(line: &str) -> &str {
    let line = line.find("//").map_or(line, |p| &line[..p]);
    line.find('#').map_or(line, |p| &line[..p])
}

fn parse_word(word: &str, line: usize) -> Result<i64, CompileError> {
    let parsed = match word.strip_prefix("0b").or_else(|| word.strip_prefix("0B")) {
        Some(digits) => i64::from_str_radix(digits, 2),
        None => word.parse::<i64>(),
    };
    parsed.map_err(|_| CompileError::Parse {
        line,
        msg: format!("expected an integer index, found '{word}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_and_commas() {
        assert_eq!(parse_indices("1 2,3\n4,\t5").unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let src = "# selected states\n\n3 // first\n7 # second\n";
        assert_eq!(parse_indices(src).unwrap(), vec![3, 7]);
    }

    #[test]
    fn test_binary_literals() {
        assert_eq!(parse_indices("0b101 0B000000001").unwrap(), vec![5, 1]);
    }

    #[test]
    fn test_negative_passes_through() {
        assert_eq!(parse_indices("-4").unwrap(), vec![-4]);
    }

    #[test]
    fn test_bad_token_reports_line() {
        let err = parse_indices("1\n2\nthree").unwrap_err();
        assert!(matches!(err, CompileError::Parse { line: 3, .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_indices("").unwrap().is_empty());
        assert!(parse_indices("// nothing\n").unwrap().is_empty());
    }
}
