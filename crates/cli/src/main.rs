use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use segisect::geom2::rand::{draw_segment_pair, ReplayToken, SegmentCfg};
use segisect::{compute_intersection_with, IntersectCfg, Intersection, OverlapRule, Segment};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod form;
mod render;

#[derive(Parser)]
#[command(name = "segisect")]
#[command(about = "Intersection of two 2D line segments")]
struct Cmd {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// How the overlap of collinear segments is computed
    #[arg(long, value_enum, default_value_t = Overlap::Componentwise, global = true)]
    overlap: Overlap,

    /// Debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect two segments given as X1 Y1 X2 Y2 (segment 1) X3 Y3 X4 Y4 (segment 2)
    Intersect {
        #[arg(
            num_args = 8,
            required = true,
            allow_negative_numbers = true,
            value_names = ["X1", "Y1", "X2", "Y2", "X3", "Y3", "X4", "Y4"]
        )]
        coords: Vec<String>,
    },
    /// Run the reference scenarios
    Scenarios,
    /// Intersect reproducible random segment pairs
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 5)]
        count: u64,
        /// Coordinates are drawn from [-half_extent, half_extent]
        #[arg(long, default_value_t = 4.0)]
        half_extent: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
    Plot,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Overlap {
    /// Max of starts / min of ends per coordinate (endpoints must be pre-sorted)
    Componentwise,
    /// Order endpoints along the line first
    AlongLine,
}

impl From<Overlap> for OverlapRule {
    fn from(o: Overlap) -> Self {
        match o {
            Overlap::Componentwise => OverlapRule::Componentwise,
            Overlap::AlongLine => OverlapRule::AlongLine,
        }
    }
}

const SCENARIOS: [(&str, [f64; 4], [f64; 4]); 5] = [
    ("crossing", [0.0, 0.0, 2.0, 2.0], [0.0, 2.0, 2.0, 0.0]),
    ("parallel", [0.0, 0.0, 1.0, 0.0], [0.0, 1.0, 1.0, 1.0]),
    ("collinear overlap", [0.0, 0.0, 4.0, 0.0], [2.0, 0.0, 6.0, 0.0]),
    ("touching", [0.0, 0.0, 2.0, 0.0], [2.0, 0.0, 4.0, 0.0]),
    ("collinear gap", [0.0, 0.0, 1.0, 1.0], [2.0, 2.0, 3.0, 3.0]),
];

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else if cmd.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = IntersectCfg {
        overlap: cmd.overlap.into(),
    };
    match cmd.action {
        Action::Intersect { coords } => intersect(&coords, cfg, cmd.format),
        Action::Scenarios => scenarios(cfg, cmd.format),
        Action::Sample {
            seed,
            count,
            half_extent,
        } => sample(seed, count, half_extent, cfg, cmd.format),
    }
}

fn intersect(coords: &[String], cfg: IntersectCfg, format: Format) -> Result<()> {
    let form = form::Form::from_raw(coords);
    let (segment1, segment2) = form.submit().context("invalid coordinates")?;
    tracing::debug!(?segment1, ?segment2, ?cfg, "intersect");
    let result = compute_intersection_with(segment1, segment2, cfg);
    tracing::info!(found = result.is_some(), "intersect");
    let out = match format {
        Format::Text => render::text(result),
        Format::Json => serde_json::to_string_pretty(&render::json(result))?,
        Format::Plot => {
            serde_json::to_string_pretty(&render::plot_traces(segment1, segment2, result))?
        }
    };
    println!("{out}");
    Ok(())
}

fn scenarios(cfg: IntersectCfg, format: Format) -> Result<()> {
    tracing::info!(count = SCENARIOS.len(), "scenarios");
    for (name, a, b) in SCENARIOS {
        let segment1 = Segment::from_coords(a[0], a[1], a[2], a[3]);
        let segment2 = Segment::from_coords(b[0], b[1], b[2], b[3]);
        let result = compute_intersection_with(segment1, segment2, cfg);
        print_pair(name, segment1, segment2, result, format)?;
    }
    Ok(())
}

fn sample(seed: u64, count: u64, half_extent: f64, cfg: IntersectCfg, format: Format) -> Result<()> {
    tracing::info!(seed, count, half_extent, "sample");
    let sampler = SegmentCfg {
        half_extent,
        ..SegmentCfg::default()
    };
    let mut tok = ReplayToken::new(seed, 0);
    for _ in 0..count {
        let (segment1, segment2) = draw_segment_pair(sampler, tok);
        let result = compute_intersection_with(segment1, segment2, cfg);
        let label = format!("#{}", tok.index);
        print_pair(&label, segment1, segment2, result, format)?;
        tok = tok.next();
    }
    Ok(())
}

/// One block per pair in text mode, one JSON document per line otherwise.
fn print_pair(
    label: &str,
    segment1: Segment,
    segment2: Segment,
    result: Option<Intersection>,
    format: Format,
) -> Result<()> {
    match format {
        Format::Text => {
            println!("{label}");
            println!("  segment 1: {}", render::describe_segment(segment1));
            println!("  segment 2: {}", render::describe_segment(segment2));
            for line in render::text(result).lines() {
                println!("  {line}");
            }
        }
        Format::Json => {
            let doc = serde_json::json!({
                "label": label,
                "segment1": render::segment_json(segment1),
                "segment2": render::segment_json(segment2),
                "intersection": render::json(result),
            });
            println!("{}", serde_json::to_string(&doc)?);
        }
        Format::Plot => {
            let traces = render::plot_traces(segment1, segment2, result);
            println!("{}", serde_json::to_string(&traces)?);
        }
    }
    Ok(())
}
