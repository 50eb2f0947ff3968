use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("no such file or directory") || haystack.contains("failed to read sample") {
        out.push("Verify the input path exists and is readable.".to_string());
    }

    if haystack.contains("invalid number") {
        out.push(
            "Sample files are plain text: whitespace-separated decimal numbers; \
             blank lines and `#` comments are skipped."
                .to_string(),
        );
    }

    if haystack.contains("empty input") || haystack.contains("insufficient data") {
        out.push("Provide enough observations; blank and `#` lines do not count.".to_string());
    }

    if haystack.contains("length mismatch") {
        out.push("The X and Y files must hold the same number of observations.".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn plain_errors_format_without_hints() {
        let err = anyhow!("something else went wrong");
        let out = format(&err);
        assert!(out.starts_with("Error: "));
        assert!(!out.contains("Hints:"));
    }

    #[test]
    fn parse_failures_get_a_file_format_hint() {
        let err = anyhow!("line 3: invalid number \"abc\"");
        let out = format(&err);
        assert!(out.contains("Hints:"));
        assert!(out.contains("whitespace-separated"));
    }

    #[test]
    fn mismatch_failures_get_a_length_hint() {
        let err = anyhow!("length mismatch: left sample has 2 observation(s), right has 3");
        let out = format(&err);
        assert!(out.contains("same number of observations"));
    }
}
