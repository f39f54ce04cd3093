//! Language detection for accumulated code blocks.
//!
//! Runs once per flushed code block over the joined (already redacted)
//! block text. Probes are ordered and the first hit wins, so a block
//! that looks like both HTML and CSS gets tagged `html`.

/// Detect the fence language tag for a code block.
///
/// The default is `javascript`: the inputs this tool sees are mostly
/// JS/TS project notes, and an untagged fence renders worse than a
/// mildly wrong one.
pub fn detect_language(block: &str) -> &'static str {
    if block.contains("<!DOCTYPE") || block.contains("<html") {
        return "html";
    }
    if block.contains(".class {") || block.contains("background:") {
        return "css";
    }
    if block.contains("interface ") || block.contains("type ") {
        return "typescript";
    }
    if block.contains("resource \"") || block.contains("provider \"") {
        return "hcl";
    }
    if block.contains("def ") || block.contains("import numpy") {
        return "python";
    }
    if block.contains("API_KEY=") || block.contains("DATABASE_URL=") {
        return "env";
    }
    if block.contains('{') && block.contains('"') {
        return "json";
    }
    "javascript"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_detection() {
        assert_eq!(detect_language("<!DOCTYPE html>\n<html>"), "html");
        assert_eq!(detect_language("<html lang=\"en\">"), "html");
    }

    #[test]
    fn test_css_detection() {
        assert_eq!(detect_language(".class {\n  color: red;\n}"), "css");
        assert_eq!(detect_language("body { background: #fff; }"), "css");
    }

    #[test]
    fn test_typescript_detection() {
        assert_eq!(detect_language("interface Foo {}"), "typescript");
        assert_eq!(detect_language("type Bar = string;"), "typescript");
    }

    #[test]
    fn test_hcl_detection() {
        assert_eq!(detect_language("resource \"aws_s3_bucket\" \"b\" {}"), "hcl");
        assert_eq!(detect_language("provider \"aws\" {}"), "hcl");
    }

    #[test]
    fn test_python_detection() {
        assert_eq!(detect_language("def main():\n    pass"), "python");
        assert_eq!(detect_language("import numpy as np"), "python");
    }

    #[test]
    fn test_env_detection() {
        assert_eq!(detect_language("API_KEY=...\nPORT=3000"), "env");
        assert_eq!(detect_language("DATABASE_URL=..."), "env");
    }

    #[test]
    fn test_json_detection() {
        assert_eq!(detect_language("{ \"name\": \"demo\" }"), "json");
    }

    #[test]
    fn test_javascript_default() {
        assert_eq!(detect_language("const x = 5;"), "javascript");
        assert_eq!(detect_language(""), "javascript");
    }

    #[test]
    fn test_priority_order() {
        // HTML wins over CSS when both signatures are present
        assert_eq!(detect_language("<html>\n.class {\n}"), "html");
        // TypeScript wins over JSON even with braces and quotes around
        assert_eq!(detect_language("interface X { \"a\": 1 }"), "typescript");
    }
}
