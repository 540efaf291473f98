use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use proofweave::html::to_html;
use proofweave::{
    erase_identifiers, load_document, page, resolve, GeneratorConfig, HtmlGenerator,
    InputDocument, Node, PlainHighlighter,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            minify,
            stem,
            standalone,
        } => run_render(&input, output.as_deref(), minify, stem, standalone),
        Commands::Inspect { input } => run_inspect(&input),
    };

    if let Err(e) = result {
        display::error(&e);
        std::process::exit(1);
    }
}

fn load(input: &str) -> Result<InputDocument, String> {
    load_document(Path::new(input)).map_err(|e| e.to_string())
}

fn run_render(
    input: &str,
    output: Option<&str>,
    minify: bool,
    stem: Option<String>,
    standalone: bool,
) -> Result<(), String> {
    let document = load(input)?;
    let mut config = document.config;
    config.minify |= minify;
    if let Some(stem) = stem {
        config.identifier_stem = stem;
    }

    if document.groups.is_empty() {
        display::warn("No fragment groups in input; output will be empty");
    }

    let group_count = document.groups.len();
    let mut generator = HtmlGenerator::new(PlainHighlighter, &config);
    let containers: Vec<Node> = generator.render(document.groups).collect();
    let script = generator.resolution_script();

    let html = if standalone {
        page::standalone(input, &containers, script.as_deref())
    } else {
        let mut html = to_html(&containers);
        if let Some(script) = script {
            html.push('\n');
            html.push_str(&script);
        }
        html
    };

    match output {
        Some(path) => {
            fs::write(path, &html).map_err(|e| format!("Failed to write {}: {}", path, e))?;
            let stats = generator.stats();
            let mode = if config.minify { "compact" } else { "verbose" };
            display::success(&format!(
                "Rendered {} groups ({} mode, {} placeholders) to {}",
                group_count, mode, stats.placeholders, path
            ));
        }
        None => io::stdout()
            .write_all(html.as_bytes())
            .map_err(|e| format!("Failed to write output: {}", e))?,
    }
    Ok(())
}

/// One rendering of the input, measured.
struct Measured {
    html: String,
    brotli: usize,
    crc32: u32,
}

impl Measured {
    fn new(html: String) -> Result<Self, String> {
        let brotli = compress_brotli(html.as_bytes())
            .map_err(|e| format!("Brotli compression failed: {}", e))?
            .len();
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(html.as_bytes());
        Ok(Self {
            crc32: hasher.finalize(),
            brotli,
            html,
        })
    }
}

fn compress_brotli(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        encoder.write_all(data)?;
    }
    Ok(compressed)
}

fn run_inspect(input: &str) -> Result<(), String> {
    let document = load(input)?;
    let stem = document.config.identifier_stem.clone();

    let mut verbose = HtmlGenerator::new(
        PlainHighlighter,
        &GeneratorConfig::verbose().with_stem(stem.clone()),
    );
    let mut verbose_tree: Vec<Node> = verbose.render(document.groups.clone()).collect();

    let mut compact = HtmlGenerator::new(PlainHighlighter, &GeneratorConfig::compact().with_stem(stem));
    let mut compact_tree: Vec<Node> = compact.render(document.groups).collect();
    let stats = compact.stats();
    let script = compact.resolution_script().unwrap_or_default();

    let verbose_out = Measured::new(to_html(&verbose_tree))?;
    let compact_out = Measured::new(format!("{}\n{}", to_html(&compact_tree), script))?;

    // Resolve the compact tree and check it against the verbose one
    let report = match compact.registry() {
        Some(registry) => resolve(&mut compact_tree, registry),
        None => return Err("Compact generator has no selector registry".to_string()),
    };
    erase_identifiers(&mut compact_tree);
    erase_identifiers(&mut verbose_tree);
    let equivalent = compact_tree == verbose_tree;

    display::section_top("SIZES");
    display::row(&format!(
        " {}{}{}{}",
        display::pad_right("mode", 12),
        display::pad_left("raw", 12),
        display::pad_left("brotli", 12),
        display::pad_left("crc32", 12)
    ));
    for (label, measured) in [("verbose", &verbose_out), ("compact", &compact_out)] {
        display::row(&format!(
            " {}{}{}{}",
            display::pad_right(label, 12),
            display::pad_left(&display::format_size(measured.html.len()), 12),
            display::pad_left(&display::format_size(measured.brotli), 12),
            display::pad_left(&format!("{:08x}", measured.crc32), 12)
        ));
    }
    display::row(&format!(
        " compact saves {} raw, {} compressed",
        display::savings_colored(verbose_out.html.len(), compact_out.html.len()).trim(),
        display::savings_colored(verbose_out.brotli, compact_out.brotli).trim()
    ));
    display::section_bot();

    display::section_top("DEDUPLICATION");
    display::row(&format!(" distinct subtrees   {:>8}", stats.memoized));
    display::row(&format!(" placeholders        {:>8}", stats.placeholders));
    display::row(&format!(" resolved            {:>8}", report.placeholders));
    display::row(&format!(" unresolved          {:>8}", report.unresolved));
    display::row(&format!(
        " toggles synthesized {:>8}",
        report.goal_toggles + report.output_toggles
    ));
    let verdict = if equivalent {
        display::themed(display::GREEN, &[display::BOLD], "equivalent")
    } else {
        display::themed(display::RED, &[display::BOLD], "DIVERGES")
    };
    display::row(&format!(" resolved vs verbose {:>8}", verdict));
    display::section_bot();

    if equivalent {
        Ok(())
    } else {
        Err("Resolved compact output differs from verbose output".to_string())
    }
}
