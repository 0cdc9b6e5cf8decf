// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](./docs/guide.md).\n\n> A quoted line\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    (0..spans)
        .map(|i| format!("word {i} **bold {i}** _em {i}_ [link {i}](page-{i}.md) "))
        .collect()
}
