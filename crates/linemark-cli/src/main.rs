use anyhow::Result;
use linemark_config::{Config, OutputFormat};
use linemark_engine::{Document, Element};
use serde::Serialize;
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    process,
};

#[derive(Serialize)]
struct ElementReport<'a> {
    elements: &'a [Element],
}

/// Walks `doc` from the start and writes every element in `format`.
fn write_document(doc: &mut Document, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    doc.reset();
    match format {
        OutputFormat::Text => {
            let mut index = 0usize;
            while doc.advance() {
                if let Some(element) = doc.current() {
                    writeln!(out, "{index}\t{}\t{}", element.kind(), element.text())?;
                }
                index += 1;
            }
        }
        OutputFormat::Html => {
            while doc.advance() {
                if let Some(element) = doc.current() {
                    writeln!(out, "{}", element.render())?;
                }
            }
        }
        OutputFormat::Toml => {
            let mut elements = Vec::with_capacity(doc.len());
            while doc.advance() {
                if let Some(element) = doc.current() {
                    elements.push(element.clone());
                }
            }
            let report = toml::to_string(&ElementReport {
                elements: &elements,
            })?;
            write!(out, "{report}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let file = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match config.default_file.clone() {
            Some(path) => path,
            None => {
                eprintln!("Error: No file provided and no default_file configured");
                eprintln!("Usage: {} <file>", args[0]);
                eprintln!("Or set default_file in {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [file]", args[0]);
        process::exit(1);
    };

    let mut doc = Document::new();
    if let Err(e) = doc.parse_file(&file) {
        eprintln!("Error: failed to read '{}': {e}", file.display());
        process::exit(1);
    }
    log::debug!("{} elements in {}", doc.len(), file.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_document(&mut doc, config.format, &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(content: &str, format: OutputFormat) -> String {
        let mut doc = Document::new();
        doc.parse_str(content).unwrap();
        let mut out = Vec::new();
        write_document(&mut doc, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_lists_kinds() {
        let output = render("# Title\n\nSome text\n- item\n", OutputFormat::Text);
        assert_eq!(
            output,
            "0\theading\tTitle\n1\tparagraph\tSome text\n2\tlist_item\titem\n"
        );
    }

    #[test]
    fn html_output_one_fragment_per_line() {
        let output = render("> a & b\n---", OutputFormat::Html);
        assert_eq!(output, "<blockquote><p>a &amp; b</p></blockquote>\n<hr />\n");
    }

    #[test]
    fn toml_output_has_element_tables() {
        let output = render("# Title\n***", OutputFormat::Toml);
        assert!(output.contains("[[elements]]"));
        assert!(output.contains("kind = \"Heading\""));
        assert!(output.contains("text = \"Title\""));
        assert!(output.contains("kind = \"ThematicBreak\""));
    }

    #[test]
    fn output_starts_from_first_element_even_after_walking() {
        let mut doc = Document::new();
        doc.parse_str("a\nb").unwrap();
        while doc.advance() {}

        let mut out = Vec::new();
        write_document(&mut doc, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\tparagraph\ta\n1\tparagraph\tb\n");
    }

    #[test]
    fn empty_document_writes_nothing() {
        assert_eq!(render("\n\n", OutputFormat::Text), "");
        assert_eq!(render("", OutputFormat::Html), "");
    }

    #[test]
    fn document_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "1. one\r\n\r\n2. two\r\n").unwrap();

        let mut doc = Document::new();
        doc.parse_file(&path).unwrap();
        let mut out = Vec::new();
        write_document(&mut doc, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\tlist_item\tone\n1\tlist_item\ttwo\n"
        );
    }
}
