use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polygeom::api::flat;
use polygeom::geom2::{signed_area, sort_polygon, ClipCfg, GeomCfg, Location, Parallel};
use polygeom::Point2;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;

#[derive(Parser)]
#[command(name = "polygeom")]
#[command(about = "Point-in-polygon tests and convex clipping on JSON polygons")]
struct Cmd {
    /// Opt-in slack for boundary and half-plane tests (0 = exact)
    #[arg(long, global = true, default_value_t = 0.0)]
    eps: f64,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a point against a polygon (JSON [[x, y], ...])
    Classify {
        /// Query point as x,y
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        /// Polygon file, or - for stdin
        #[arg(long)]
        polygon: String,
        /// Count points on an edge as members
        #[arg(long)]
        boundary: bool,
    },
    /// Clip a subject polygon by a convex counter-clockwise clip polygon
    Clip {
        /// Document {"subject": ..., "clip": ...}, or - for stdin
        #[arg(long, conflicts_with_all = ["subject", "clip"], required_unless_present = "subject")]
        input: Option<String>,
        #[arg(long, requires = "clip")]
        subject: Option<String>,
        #[arg(long, requires = "subject")]
        clip: Option<String>,
        /// Angle-sort both polygons first (accepts unordered convex vertex sets)
        #[arg(long)]
        sort: bool,
        /// Drop vertices of parallel crossings instead of emitting NaN
        #[arg(long)]
        drop_degenerate: bool,
    },
    /// Bounded Voronoi regions for sites (JSON [[x, y], ...])
    Voronoi {
        /// Sites file, or - for stdin
        #[arg(long)]
        sites: String,
        /// Bounding polygon file; defaults to the site extent padded by 0.1
        #[arg(long)]
        bounds: Option<String>,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);
    let geom = geom_cfg(cmd.eps)?;
    let out = match cmd.action {
        Action::Classify {
            point,
            polygon,
            boundary,
        } => {
            let p = input::parse_point(&point)?;
            let poly = input::to_points(&input::load_polygon(&polygon)?);
            classify(p, &poly, boundary, geom)?
        }
        Action::Clip {
            input: doc,
            subject,
            clip: clip_src,
            sort,
            drop_degenerate,
        } => {
            let (subject, clip_poly) = match (doc, subject, clip_src) {
                (Some(doc), _, _) => {
                    let doc = input::load_clip_doc(&doc)?;
                    (input::to_points(&doc.subject), input::to_points(&doc.clip))
                }
                (None, Some(s), Some(c)) => (
                    input::to_points(&input::load_polygon(&s)?),
                    input::to_points(&input::load_polygon(&c)?),
                ),
                _ => anyhow::bail!("pass --input, or both --subject and --clip"),
            };
            let cfg = ClipCfg {
                geom,
                on_parallel: if drop_degenerate {
                    Parallel::Skip
                } else {
                    Parallel::Nan
                },
            };
            clip(subject, clip_poly, sort, cfg)?
        }
        Action::Voronoi { sites, bounds } => {
            let sites = input::to_points(&input::load_polygon(&sites)?);
            let bounds = bounds
                .map(|src| input::load_polygon(&src).map(|b| input::to_points(&b)))
                .transpose()?;
            voronoi(&sites, bounds.as_deref())?
        }
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Tolerances only ever loosen the exact tests.
fn geom_cfg(eps: f64) -> Result<GeomCfg> {
    if eps.is_nan() || eps < 0.0 {
        anyhow::bail!("--eps must be a non-negative number, got {eps}");
    }
    Ok(GeomCfg::with_eps(eps))
}

fn location_name(loc: Location) -> &'static str {
    match loc {
        Location::Inside => "inside",
        Location::Outside => "outside",
        Location::OnBoundary => "boundary",
    }
}

fn classify(point: Point2, polygon: &[Point2], boundary: bool, geom: GeomCfg) -> Result<Value> {
    tracing::info!(
        x = point.x,
        y = point.y,
        vertices = polygon.len(),
        boundary,
        exact = geom.is_exact(),
        "classify"
    );
    let loc = flat::classify(&[point.x, point.y], &input::flatten(polygon), boundary, &geom)
        .context("classifying point")?;
    tracing::debug!(location = location_name(loc), "classified");
    Ok(json!({
        "location": location_name(loc),
        "member": loc.is_member(),
    }))
}

fn clip(subject: Vec<Point2>, clip: Vec<Point2>, sort: bool, cfg: ClipCfg) -> Result<Value> {
    let (subject, clip) = if sort {
        (sort_polygon(&subject), sort_polygon(&clip))
    } else {
        (subject, clip)
    };
    tracing::info!(
        subject = subject.len(),
        clip = clip.len(),
        sort,
        on_parallel = ?cfg.on_parallel,
        "clip"
    );
    let pairs = flat::polygon_intersection_with(
        &input::flatten(&subject),
        &input::flatten(&clip),
        &cfg,
    )
    .context("clipping polygons")?;
    let vertices: Vec<Point2> = pairs.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    let degenerate = vertices.iter().filter(|v| v.x.is_nan() || v.y.is_nan()).count();
    if degenerate > 0 {
        tracing::warn!(degenerate, "parallel crossings produced NaN vertices");
    }
    tracing::debug!(vertices = vertices.len(), "clipped");
    Ok(json!({
        "vertices": pairs.iter().map(|&(x, y)| [x, y]).collect::<Vec<_>>(),
        "area": signed_area(&vertices),
        "empty": vertices.is_empty(),
    }))
}

fn voronoi(sites: &[Point2], bounds: Option<&[Point2]>) -> Result<Value> {
    tracing::info!(
        sites = sites.len(),
        bounds = ?bounds.map(<[Point2]>::len),
        "voronoi"
    );
    let bounds = bounds.map(input::flatten);
    let regions = flat::bounded_voronoi(&input::flatten(sites), bounds.as_deref())
        .context("building bounded voronoi regions")?;
    tracing::debug!(regions = regions.len(), "regions built");
    Ok(json!({
        "regions": regions
            .iter()
            .map(|r| r.iter().map(|&(x, y)| [x, y]).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    }))
}

fn report() -> Value {
    json!({
        "name": "polygeom",
        "version": polygeom::VERSION,
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
    })
}
