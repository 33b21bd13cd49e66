//! # World Probe
//!
//! Command-line tool to synthesize a world, print its map, and route
//! between two cells.

use std::process::ExitCode;

use deadgrid_navigation::{find_path, find_path_with_stats};
use deadgrid_procedural::{Biome, GridPos, TileKind, World, WorldConfig, WorldGenerator, WorldSeed};
use tracing::Level;

/// Sub-stream purpose for `--routes` sampling, apart from the world's own stream.
const ROUTE_SAMPLE_STREAM: u32 = 0x5A4D;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct ProbeArgs {
    config: Option<String>,
    seed: Option<u32>,
    size: Option<(usize, usize)>,
    from: Option<GridPos>,
    to: Option<GridPos>,
    routes: usize,
    verbose: bool,
    no_map: bool,
}

/// Reachability over randomly sampled open-cell pairs.
#[derive(Debug, Default, PartialEq, Eq)]
struct RouteSample {
    attempted: usize,
    reachable: usize,
    total_steps: usize,
}

fn print_usage() {
    println!("Usage: world_probe [options]");
    println!();
    println!("Options:");
    println!("  --config <file.toml>  Load world settings from a TOML file");
    println!("  --seed <n>            Override the seed");
    println!("  --size <WxH>          Override the dimensions, e.g. 80x60");
    println!("  --from <x,y>          Path start (default: a random spawn site)");
    println!("  --to <x,y>            Path target (default: a random spawn site)");
    println!("  --routes <n>          Sample n random routes and report reachability");
    println!("  --no-map              Skip the ASCII map");
    println!("  --verbose             Log generation details to stderr");
}

fn parse_pos(text: &str) -> Option<GridPos> {
    let (x, y) = text.split_once(',')?;
    Some(GridPos::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn parse_size(text: &str) -> Option<(usize, usize)> {
    let (w, h) = text.split_once(['x', 'X'])?;
    Some((w.trim().parse().ok()?, h.trim().parse().ok()?))
}

fn parse_args(args: &[String]) -> Result<ProbeArgs, String> {
    let mut parsed = ProbeArgs::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || iter.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => parsed.config = Some(value()?.clone()),
            "--seed" => {
                let raw = value()?;
                parsed.seed = Some(raw.parse().map_err(|_| format!("bad seed: {raw}"))?);
            }
            "--size" => {
                let raw = value()?;
                parsed.size = Some(parse_size(raw).ok_or_else(|| format!("bad size: {raw}"))?);
            }
            "--from" => {
                let raw = value()?;
                parsed.from = Some(parse_pos(raw).ok_or_else(|| format!("bad position: {raw}"))?);
            }
            "--to" => {
                let raw = value()?;
                parsed.to = Some(parse_pos(raw).ok_or_else(|| format!("bad position: {raw}"))?);
            }
            "--routes" => {
                let raw = value()?;
                parsed.routes = raw.parse().map_err(|_| format!("bad route count: {raw}"))?;
            }
            "--verbose" => parsed.verbose = true,
            "--no-map" => parsed.no_map = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(parsed)
}

fn build_config(args: &ProbeArgs) -> Result<WorldConfig, String> {
    let mut config = match &args.config {
        Some(path) => WorldConfig::from_toml_file(path).map_err(|e| e.to_string())?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some((width, height)) = args.size {
        config.width = width;
        config.height = height;
    }
    Ok(config)
}

/// Routes `count` pairs of open cells drawn from a stream derived from the
/// world seed. Cell draws that land on obstruction are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn sample_routes(world: &World, count: usize) -> RouteSample {
    let mut rng = WorldSeed::new(world.seed()).derive(ROUTE_SAMPLE_STREAM).stream();
    let grid = world.grid();
    let mut draw_open = || {
        (0..world.config().tile_attempts).find_map(|_| {
            let pos = GridPos::new(
                rng.next_index(grid.width()) as i32,
                rng.next_index(grid.height()) as i32,
            );
            grid.is_walkable(pos).then_some(pos)
        })
    };

    let mut sample = RouteSample::default();
    for _ in 0..count {
        let (Some(from), Some(to)) = (draw_open(), draw_open()) else {
            continue;
        };
        sample.attempted += 1;
        if let Some(path) = find_path(from, to, grid) {
            sample.reachable += 1;
            sample.total_steps += path.len();
        }
    }
    sample
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("Error: {e}");
            println!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if parsed.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match build_config(&parsed) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: Could not load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut world = match WorldGenerator::new(config).and_then(|generator| generator.generate()) {
        Ok(world) => world,
        Err(e) => {
            println!("Error: Could not synthesize world: {e}");
            return ExitCode::FAILURE;
        }
    };

    let from = parsed.from.unwrap_or_else(|| world.random_spawn_site());
    let to = parsed.to.unwrap_or_else(|| world.random_spawn_site());
    let grid = world.grid();

    println!("┌─ WORLD ────────────────────────────────────────────────────────┐");
    println!("│ Seed:        {}", world.seed());
    println!("│ Size:        {}x{}", grid.width(), grid.height());
    for biome in Biome::ALL {
        println!("│ {:<12} {}", format!("{biome}:"), grid.count_where(|t| t.biome == biome));
    }
    println!("│ Roads:       {}", grid.count_where(|t| t.kind == TileKind::Road));
    println!("│ Obstructed:  {}", grid.count_where(|t| t.obstructed));
    println!("│ Loot:        {}", grid.iter().map(|t| t.items.len()).sum::<usize>());
    println!("└────────────────────────────────────────────────────────────────┘");
    println!();

    let search = find_path_with_stats(from, to, grid);

    if !parsed.no_map {
        let path = search.path.as_deref().unwrap_or(&[]);
        print!("{}", grid.to_ascii(path));
        println!();
    }

    println!("Route {from} -> {to}");
    match &search.path {
        Some(path) => println!(
            "✓ {} steps ({} cells expanded, {} pushed)",
            path.len(),
            search.expanded,
            search.pushed
        ),
        None => println!("✗ No route ({} cells expanded)", search.expanded),
    }

    if parsed.routes > 0 {
        let sample = sample_routes(&world, parsed.routes);
        println!();
        println!("Sampled {} routes: {} reachable", sample.attempted, sample.reachable);
        if sample.reachable > 0 {
            #[allow(clippy::cast_precision_loss)]
            let mean = sample.total_steps as f64 / sample.reachable as f64;
            println!("  mean length: {mean:.1} steps");
        }
    }

    ExitCode::SUCCESS
}
