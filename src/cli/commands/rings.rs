//! Rings command implementation
//!
//! Loads a ring roster and reports its contents, so breeders can verify the
//! roster the link report will run against.

use crate::app::services::ring_registry::RingRegistry;
use crate::cli::args::{OutputFormat, RingsArgs};
use crate::Result;
use colored::Colorize;

use super::shared::{RunSummary, setup_logging};

/// Run the rings command
pub fn run_rings(args: RingsArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let registry = RingRegistry::load(&args.rings_file)?;

    match args.output_format {
        OutputFormat::Human => {
            println!("{}", "Ring Roster".bold());
            println!("  Source: {}", registry.source_path().display());
            println!("  Lines read: {}", registry.lines_read());
            println!(
                "  Valid rings: {}",
                registry.ring_count().to_string().green()
            );

            let skipped = registry.lines_read() - registry.ring_count();
            if skipped > 0 {
                println!("  Malformed entries skipped: {}", skipped.to_string().yellow());
            }

            if args.detailed {
                let mut rings: Vec<&String> = registry_rings(&registry);
                rings.sort();
                for ring in rings {
                    println!("    {}", ring);
                }
            }
        }
        OutputFormat::Json => {
            let mut rings: Vec<&String> = registry_rings(&registry);
            rings.sort();
            let report = serde_json::json!({
                "source": registry.source_path().display().to_string(),
                "lines_read": registry.lines_read(),
                "ring_count": registry.ring_count(),
                "rings": if args.detailed { Some(rings) } else { None },
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(RunSummary::default())
}

fn registry_rings(registry: &RingRegistry) -> Vec<&String> {
    registry.iter_rings().collect()
}
