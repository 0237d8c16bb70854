//! aaline: draw one antialiased line and write it out as a PNG.
//!
//! Usage: `aaline X1 Y1 X2 Y2 [OPTIONS]`
//!
//! Any other number of coordinates prints usage and exits successfully.
//! Set `RUST_LOG=debug` (or `trace`) for diagnostics.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use aaline::prelude::*;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::info;
use std::path::PathBuf;

/// aaline: Wu antialiased line rasterizer
#[derive(Parser, Debug)]
#[command(name = "aaline")]
#[command(version)]
#[command(about = "Draw an antialiased line into an RGBA framebuffer", long_about = None)]
struct Cli {
    /// Endpoint coordinates: X1 Y1 X2 Y2
    #[arg(value_name = "COORD", allow_negative_numbers = true)]
    coords: Vec<i32>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 100)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 100)]
    height: u32,

    /// Background fill as RRGGBB or RRGGBBAA hex
    #[arg(long, default_value = "ff0000", value_parser = parse_color)]
    background: Rgba,

    /// Line color as RRGGBB or RRGGBBAA hex
    #[arg(long, default_value = "ffffff", value_parser = parse_color)]
    color: Rgba,

    /// Line thickness in pixels
    #[arg(short, long, default_value_t = 1)]
    thickness: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "framebuffer.png")]
    output: PathBuf,

    /// Print the packed pixel values to stdout
    #[arg(long)]
    dump: bool,

    /// Print an ASCII preview to stdout
    #[arg(long)]
    preview: bool,
}

fn parse_color(s: &str) -> std::result::Result<Rgba, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

/// Everything needed to render one line, decoupled from argument parsing.
#[derive(Debug, Clone, PartialEq)]
struct RenderJob {
    width: u32,
    height: u32,
    background: Rgba,
    color: Rgba,
    thickness: u32,
    line: Line,
}

impl Cli {
    /// Build the render job, or `None` when the endpoints are incomplete.
    fn job(&self) -> Option<RenderJob> {
        let &[x1, y1, x2, y2] = self.coords.as_slice() else {
            return None;
        };
        Some(RenderJob {
            width: self.width,
            height: self.height,
            background: self.background,
            color: self.color,
            thickness: self.thickness,
            line: Line::from_coords(x1, y1, x2, y2),
        })
    }
}

fn render(job: &RenderJob) -> Result<Framebuffer> {
    let mut fb = Framebuffer::new(job.width, job.height)
        .with_context(|| format!("cannot create {}x{} canvas", job.width, job.height))?;
    fb.clear(job.background);
    draw_thick_line(&mut fb, job.color, job.line.start, job.line.end, job.thickness)?;
    Ok(fb)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let Some(job) = cli.job() else {
        // Wrong endpoint count is not an error.
        Cli::command().print_help()?;
        return Ok(());
    };

    let fb = render(&job)?;

    if cli.dump {
        print!("{}", fb.dump());
    }
    if cli.preview {
        TerminalEncoder::new().print(&fb);
    }

    PngEncoder::write_to_file(&fb, &cli.output)
        .with_context(|| format!("cannot write {}", cli.output.display()))?;
    info!("wrote {:?} to {}", job.line, cli.output.display());

    Ok(())
}
