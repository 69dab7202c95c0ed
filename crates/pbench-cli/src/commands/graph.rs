//! Draw a saved frame-rate listing as a PPM bar graph

use anyhow::{Context, Result};
use pbench_runtime::{FrameGraph, FrameRates, GraphScale};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct GraphArgs {
    pub frames: PathBuf,
    pub relative: bool,
    pub max_fps: f64,
    pub output: Option<PathBuf>,
}

pub fn run(args: GraphArgs) -> Result<()> {
    let source = fs::read_to_string(&args.frames)
        .with_context(|| format!("Failed to read frames file '{}'", args.frames.display()))?;
    let graph = build_graph(&source, &args)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            let mut out = BufWriter::new(file);
            graph.write_ppm(&mut out)?;
            out.flush()?;
            eprintln!("[graph] wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            graph.write_ppm(&mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn build_graph(source: &str, args: &GraphArgs) -> Result<FrameGraph> {
    let parsed = FrameRates::parse(source);
    if parsed.skipped > 0 {
        eprintln!(
            "[graph] skipped {} entries that are not frame rates",
            parsed.skipped
        );
    }
    if parsed.rates.is_empty() {
        anyhow::bail!("No frame rates found in '{}'", args.frames.display());
    }

    let scale = if args.relative {
        GraphScale::Relative
    } else {
        GraphScale::Fixed(args.max_fps)
    };
    let graph = FrameGraph::new(&parsed.rates, scale).context("Failed to lay out graph")?;
    log_thinning(parsed.rates.len(), graph.bars().len(), &args.frames);
    Ok(graph)
}

fn log_thinning(samples: usize, rows: usize, path: &Path) {
    if rows < samples {
        eprintln!(
            "[graph] {}: thinned {} samples to {} rows",
            path.display(),
            samples,
            rows
        );
    }
}
