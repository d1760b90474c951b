use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use tradedeck::config::{default_instrument, default_layout, LayoutConfig};
use tradedeck::core::Workspace;
use tradedeck_core::global_instruments;

/// tradedeck - a free-form multi-panel workspace for crypto trading dashboards
#[derive(Parser, Debug, Clone)]
#[command(name = "tradedeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Re-tile every panel into a grid for the given viewport (e.g. -t=1200x600)
    #[arg(short = 't', long = "tile", value_name = "WxH", value_parser = parse_viewport)]
    tile: Option<(f64, f64)>,

    /// Inspect only; never write the layout back
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// List the known instrument symbols and exit
    #[arg(short = 'l', long = "list-symbols")]
    list_symbols: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Layout file to operate on (defaults to the user config location)
    #[arg(value_name = "LAYOUT_FILE")]
    layout_file: Option<PathBuf>,
}

/// Parse a viewport string "WIDTHxHEIGHT" into (f64, f64)
fn parse_viewport(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Expected format: WIDTHxHEIGHT (e.g. 1200x600), got: {}",
            s
        ));
    }
    let width = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid width: {}", e))?;
    let height = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid height: {}", e))?;
    Ok((width, height))
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag.
    // RUST_LOG overrides the CLI setting.
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting tradedeck v{}", env!("CARGO_PKG_VERSION"));

    if cli.list_symbols {
        list_known_symbols();
        return;
    }

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// List the known instrument symbols to stdout
fn list_known_symbols() {
    if let Ok(registry) = global_instruments().read() {
        let symbols = registry.list_symbols();
        println!("Known instruments ({}):", symbols.len());
        for symbol in symbols {
            println!("  {}", symbol);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load the layout (explicit file or the user config location)
    let mut config = match &cli.layout_file {
        Some(path) => LayoutConfig::load_from_path(path)?,
        None => LayoutConfig::load()?,
    };

    // Drop panels whose instrument no longer resolves
    let dropped = match global_instruments().read() {
        Ok(registry) => config.validate_panels(&*registry),
        Err(_) => 0,
    };
    if dropped > 0 {
        warn!("Dropped {} panel(s) with unresolvable instruments", dropped);
    }

    // Never present an empty workspace
    let panels = if config.panels.is_empty() {
        info!("No valid panels restored, substituting the default layout");
        default_layout()
    } else {
        config.panels
    };

    let mut workspace = Workspace::with_panels(panels, default_instrument());

    // Write-through persistence: every committed mutation stores the
    // layout; failures are logged and the session continues.
    if !cli.dry_run {
        let target = cli.layout_file.clone();
        workspace.set_on_change(move |panels| {
            let mut snapshot = LayoutConfig::new(panels.to_vec());
            let result = match &target {
                Some(path) => snapshot.save_to_path(path),
                None => snapshot.save(),
            };
            if let Err(e) = result {
                error!("Failed to persist layout: {}", e);
            }
        });
    }

    if let Some((width, height)) = cli.tile {
        workspace.auto_tile(width, height);
    } else if !cli.dry_run && dropped > 0 {
        // Nothing else will trigger a write; store the cleaned layout now
        let mut snapshot = LayoutConfig::new(workspace.panels().to_vec());
        let result = match &cli.layout_file {
            Some(path) => snapshot.save_to_path(path),
            None => snapshot.save(),
        };
        if let Err(e) = result {
            error!("Failed to persist layout: {}", e);
        }
    }

    print_summary(&workspace);
    Ok(())
}

/// Print a one-line-per-panel view of the workspace
fn print_summary(workspace: &Workspace) {
    let (width, height) = workspace.canvas_extent();
    println!(
        "Workspace: {} panel(s), canvas {:.0}x{:.0}",
        workspace.len(),
        width,
        height
    );

    for panel in workspace.panels() {
        let linked = if panel.is_linked() { "  [linked]" } else { "" };
        println!(
            "  {:<44} {:<22} {:<10} ({:>6.0},{:>6.0}) {:>4.0}x{:<4.0}{}",
            panel.id,
            panel.content.id(),
            panel.instrument.symbol,
            panel.geometry.x,
            panel.geometry.y,
            panel.geometry.width,
            panel.geometry.height,
            linked
        );
    }
}
