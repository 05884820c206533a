//! Docs command: render documentation for the application's options.

use anyhow::{Context, Result};
use envreg::DocFormat;
use std::io::Write;

use crate::app_config::options;

pub fn run(format: DocFormat, out: &mut impl Write) -> Result<()> {
    let docs = envreg::render(&options(), format).context("failed to render option docs")?;
    out.write_all(docs.as_bytes())?;
    if !docs.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_docs_list_every_option() {
        let mut out = Vec::new();
        run(DocFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        for decl in options() {
            assert!(text.contains(&format!("{}\n\tDescription: ", decl.name)));
        }
    }

    #[test]
    fn test_json_docs_end_with_newline() {
        let mut out = Vec::new();
        run(DocFormat::Json, &mut out).unwrap();
        assert!(out.ends_with(b"}\n"));
    }
}
