//! Binary entry point: read a JSON document, print the folded tree.

use std::io::Read;

use anyhow::Context;
use clap::Parser;

use json_fold::ansi::AnsiWriter;
use json_fold::cli::Cli;
use json_fold::session::{EXAMPLE_JSON, FormatterSession};
use json_fold::style::{ThemeColors, TreeStyleConfig, TreeStyler};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = read_input(&cli)?;

    if cli.compact {
        println!("{}", FormatterSession::compress(&input)?);
        return Ok(());
    }

    let mut session = FormatterSession::new();
    session.load(&input)?;

    if cli.pretty {
        println!("{}", session.pretty_text()?);
        return Ok(());
    }

    if cli.collapse_all {
        session.collapse_all();
    }
    if let Some(depth) = cli.collapse_depth {
        session.collapse_deeper_than(depth);
    }
    for path in &cli.collapse {
        session.collapse_set_mut().collapse(path.as_str());
    }

    let styler = TreeStyler::new(TreeStyleConfig {
        show_counts: !cli.no_counts,
        clickable_urls: !cli.no_color,
        ..Default::default()
    });
    let writer = AnsiWriter::new(!cli.no_color);
    if let Some(tree) = session.render() {
        let lines = styler.style(&tree, &ThemeColors::default());
        println!("{}", writer.render(&lines));
    }

    #[cfg(feature = "clipboard")]
    if cli.copy {
        session.copy_to_clipboard()?;
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if cli.example {
        return Ok(EXAMPLE_JSON.to_string());
    }
    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
