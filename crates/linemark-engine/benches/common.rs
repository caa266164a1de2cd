// Shared by bench targets; each target compiles its own copy.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with some content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n> Quoted line\n\n1. First\n2. Second\n\n---\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_crlf_content(size: usize) -> String {
    generate_markdown_content(size).replace('\n', "\r\n")
}
