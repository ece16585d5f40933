//! Booklet Renderer
//!
//! Renders a stored booklet JSON file to a PDF report.
//!
//! Usage:
//!   cargo run --example render_booklet -- [booklet.json] [layout.json] [output.pdf]
//!
//! Examples:
//!   cargo run --example render_booklet -- demos/sample_booklet.json
//!   RUST_LOG=debug cargo run --example render_booklet -- demos/sample_booklet.json layout.json

use anyhow::Context;
use booklet_report::{BookletData, BookletReport, LayoutConfig};
use std::fs;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .unwrap_or_else(|| "demos/sample_booklet.json".to_string());
    let layout = args.next();
    let output = args.next().unwrap_or_else(|| "booklet.pdf".to_string());

    let booklet_json =
        fs::read_to_string(&input).with_context(|| format!("reading booklet {input}"))?;
    let booklet = BookletData::from_json(&booklet_json)?;

    let config = match layout {
        Some(path) => {
            let json =
                fs::read_to_string(&path).with_context(|| format!("reading layout {path}"))?;
            LayoutConfig::from_json(&json)?
        }
        None => LayoutConfig::default(),
    };

    let report = BookletReport::new(config);
    let bytes = report.generate(&booklet)?;
    fs::write(&output, &bytes).with_context(|| format!("writing {output}"))?;

    println!("{} -> {} ({} bytes)", input, output, bytes.len());
    Ok(())
}
