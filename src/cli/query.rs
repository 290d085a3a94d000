//! Query command: print aggregated post metadata as JSON.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::archive;
use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Run the listing aggregation (no feed side effect) and print the sorted
/// post metadata.
pub async fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let include_drafts = args.drafts || config.build.include_drafts;
    let posts = archive::collect_posts(config, include_drafts).await?;

    // Skip output if no results
    if posts.is_empty() {
        return Ok(());
    }

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&posts)?
    } else {
        serde_json::to_string(&posts)?
    };

    // Output to file or stdout
    if let Some(output_path) = &args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
