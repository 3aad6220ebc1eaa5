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

    if haystack.contains("embeddings directory not found") {
        push_hint(
            &mut out,
            "Check the path passed to `--embeddings-dir` (it must be a directory).",
        );
        push_hint(
            &mut out,
            "Spaces are plain text files named `<tag>.vec`, e.g. `en.vec`.",
        );
    }

    if haystack.contains("input text is empty") {
        push_hint(
            &mut out,
            "Pass the text to analyze as positional arguments: `textlens \"some text\" -a`.",
        );
    }

    if haystack.contains("config") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `config.json` syntax under your textlens config directory.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
