use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use hullcull::cull::cull_with_report;
use hullcull::geom2::rand::{draw_hulls, RadialCfg, VertexCount};
use hullcull::{io, CullCfg, GeomCfg};

mod provenance;

#[derive(Parser)]
#[command(name = "hullcull")]
#[command(about = "Remove convex hulls that overlap each other beyond a threshold")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Cull a hull document and write the survivors
    Cull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Relative overlap in [0, 1] above which a hull is removed
        #[arg(long)]
        threshold: f64,
        /// Parallel-segment tolerance
        #[arg(long)]
        eps: Option<f64>,
        /// Evaluate pairs on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Write a random hull document
    Generate {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long, default_value_t = 3)]
        min_vertices: usize,
        #[arg(long, default_value_t = 10)]
        max_vertices: usize,
        /// Side of the square hull centres are drawn from
        #[arg(long, default_value_t = 10.0)]
        spread: f64,
    },
    /// Print the code revision and crate version
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Cull {
            input,
            out,
            threshold,
            eps,
            parallel,
        } => cull(input, out, threshold, eps, parallel),
        Action::Generate {
            out,
            count,
            seed,
            min_vertices,
            max_vertices,
            spread,
        } => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Uniform {
                    min: min_vertices,
                    max: max_vertices,
                },
                spread,
                ..RadialCfg::default()
            };
            generate(&out, count, seed, cfg)
        }
        Action::Report => report(),
    }
}

fn cull(
    input: PathBuf,
    out: PathBuf,
    threshold: f64,
    eps: Option<f64>,
    parallel: bool,
) -> Result<()> {
    let geom = eps.map_or_else(GeomCfg::default, |eps_parallel| GeomCfg { eps_parallel });
    let cfg = CullCfg::new(threshold)?
        .with_geom(geom)
        .with_parallel(parallel);
    cfg.validate()?;
    tracing::info!(input = %input.display(), out = %out.display(), threshold, parallel, "cull");

    let hulls = io::read_path(&input).with_context(|| format!("loading {}", input.display()))?;
    let (kept, report) = cull_with_report(&hulls, cfg)?;
    tracing::info!(
        hulls = hulls.len(),
        kept = report.kept.len(),
        removed = report.removed.len(),
        overlapping_pairs = report.overlapping_pairs,
        "culled"
    );
    io::write_path(&out, &kept).with_context(|| format!("writing {}", out.display()))?;

    let record = provenance::CullRecord {
        stamp: provenance::Stamp::current(),
        input: &input,
        output: &out,
        cfg,
        hulls: hulls.len(),
        report: &report,
    };
    record.write()?;
    Ok(())
}

fn generate(out: &Path, count: usize, seed: u64, cfg: RadialCfg) -> Result<()> {
    tracing::info!(out = %out.display(), count, seed, "generate");
    let hulls = draw_hulls(cfg, seed, count);
    io::write_path(out, &hulls).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(written = hulls.len(), "generated");
    Ok(())
}

fn report() -> Result<()> {
    let stamp = provenance::Stamp::current();
    println!("{}", serde_json::to_string_pretty(&stamp)?);
    Ok(())
}
