//! catalog::template
//!
//! Source for the sample entrypoint written by `create_app`.
//!
//! The template is picked from the entrypoint's extension so the sample
//! runs under the configured interpreter: `.sh` gets a POSIX shell script,
//! everything else gets a Python script.

use std::path::Path;

/// Render the sample entrypoint for `display_name`.
///
/// The generated program only prints `Hello from <display_name>!`.
///
/// # Example
///
/// ```
/// use daggerwork::catalog::template::sample_entrypoint;
///
/// let py = sample_entrypoint("Foo", "main.py");
/// assert!(py.contains("print(\"Hello from Foo!\")"));
///
/// let sh = sample_entrypoint("Foo", "main.sh");
/// assert!(sh.contains("echo 'Hello from Foo!'"));
/// ```
pub fn sample_entrypoint(display_name: &str, entrypoint: &str) -> String {
    let greeting = format!("Hello from {}!", display_name);
    match Path::new(entrypoint).extension().and_then(|e| e.to_str()) {
        Some("sh") => shell_script(&greeting),
        _ => python_script(&greeting),
    }
}

fn python_script(greeting: &str) -> String {
    format!(
        "def main():\n    print(\"{}\")\n\n\nif __name__ == \"__main__\":\n    main()\n",
        escape_python(greeting)
    )
}

fn shell_script(greeting: &str) -> String {
    format!("#!/bin/sh\necho '{}'\n", greeting.replace('\'', "'\\''"))
}

/// Escape text for a double-quoted Python string literal.
fn escape_python(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_template_is_self_contained() {
        let src = sample_entrypoint("Foo", "main.py");
        assert_eq!(
            src,
            "def main():\n    print(\"Hello from Foo!\")\n\n\nif __name__ == \"__main__\":\n    main()\n"
        );
    }

    #[test]
    fn python_template_escapes_quotes() {
        let src = sample_entrypoint("Say \"hi\"", "main.py");
        assert!(src.contains(r#"print("Hello from Say \"hi\"!")"#));
    }

    #[test]
    fn shell_template_escapes_single_quotes() {
        let src = sample_entrypoint("Bob's", "run.sh");
        assert_eq!(src, "#!/bin/sh\necho 'Hello from Bob'\\''s!'\n");
    }

    #[test]
    fn unknown_extension_falls_back_to_python() {
        assert!(sample_entrypoint("Foo", "app").starts_with("def main():"));
    }
}
