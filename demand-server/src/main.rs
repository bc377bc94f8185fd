use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use demand_pipeline::candidate_pipeline::CandidatePipeline;
use demand_pipeline::catalog_loader::load_catalog_file;
use demand_pipeline::pipelines::reorder_digest::ReorderDigestPipeline;
use demand_pipeline::types::{CatalogFilters, MatrixMetrics, MatrixQuery, MatrixRow, ReorderReport};
use demand_pipeline::{annotate, metrics, reorder_report, write_matrix_csv};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DigestJson {
    generated_at: String,
    filters: FiltersJson,
    pipeline_ms: u128,
    matrix: Vec<MatrixRow>,
    metrics: MatrixMetrics,
    reorder_report: ReorderReport,
    top_shortfalls: Vec<MatrixRow>,
}

#[derive(Serialize)]
struct FiltersJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_human(
    rows: &[MatrixRow],
    summary: &MatrixMetrics,
    report: &ReorderReport,
    top: &[MatrixRow],
    load_ms: u128,
    pipeline_ms: u128,
) {
    println!();
    println!("  \u{2554}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2557}");
    println!("  \u{2551}          DEMAND MATRIX \u{2014} Warehouse Reorder Digest        \u{2551}");
    println!("  \u{255a}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{255d}");
    println!();

    println!(
        "  {} SKUs analyzed  \u{00b7}  {} critical  \u{00b7}  {} low  \u{00b7}  {} sufficient",
        summary.total_skus, summary.critical_items, summary.low_items, summary.sufficient_items
    );
    println!(
        "  {} items need reordering  \u{00b7}  Top {} surfaced",
        report.total_reorder_items,
        top.len()
    );
    println!(
        "  Capacity utilization: {:.2}%  \u{00b7}  Revenue impact: ${:.2}M",
        summary.capacity_utilization_pct, summary.revenue_impact_millions
    );
    println!();

    if top.is_empty() {
        println!("  No shortfalls detected. All stock positions healthy!");
    } else {
        println!("  {:\u{2500}<64}", "");
        for (i, row) in top.iter().enumerate() {
            let status = row
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".into());
            let urgency_icon = match row.stock_ratio {
                r if r < 0.5 => "!!",
                r if r < 0.7 => "! ",
                _ => "  ",
            };
            println!(
                "  {} {}. {:10} {:28} {:>4}/{:<6} {:10} score {:.2}",
                urgency_icon,
                i + 1,
                row.sku,
                row.product_name,
                row.current_stock,
                row.required_stock,
                status,
                row.priority_score.unwrap_or(0.0),
            );
            let action = row
                .price_action
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| "-".into());
            println!(
                "       {} \u{00b7} {} \u{00b7} price: {}",
                row.location, row.category, action
            );
            println!();
        }
        println!("  {:\u{2500}<64}", "");
    }

    println!();
    println!(
        "  \u{23f1}  CSV loaded in {}ms \u{00b7} Pipeline ran in {}ms \u{00b7} {} matrix rows",
        load_ms,
        pipeline_ms,
        rows.len()
    );
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: demand-server <catalog.csv> [--brand B] [--category C] [--location L] [--top N] [--json] [--csv PATH]");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --brand     Filter to one brand ('all' for no filter)");
        eprintln!("  --category  Filter to one category");
        eprintln!("  --location  Filter to one warehouse location");
        eprintln!("  --top       Number of top shortfalls to surface (default: 20)");
        eprintln!("  --json      Output as JSON instead of formatted text");
        eprintln!("  --csv       Also export the annotated matrix to PATH");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  demand-server fixtures/sample_catalog.csv");
        eprintln!("  demand-server fixtures/sample_catalog.csv --category Electronics --top 5 --json");
        process::exit(1);
    }

    let csv_path = &args[1];

    // Parse optional flags
    let mut filters = CatalogFilters::default();
    let mut top_k: usize = 20;
    let mut json_output = false;
    let mut csv_export: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--brand" | "--category" | "--location" | "--csv" => {
                let flag = args[i].clone();
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a value", flag);
                    process::exit(1);
                }
                let value = args[i + 1].clone();
                match flag.as_str() {
                    "--brand" => filters.brand = Some(value),
                    "--category" => filters.category = Some(value),
                    "--location" => filters.location = Some(value),
                    _ => csv_export = Some(value),
                }
                i += 2;
            }
            "--top" => {
                if i + 1 < args.len() {
                    top_k = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: --top requires a positive integer");
                        process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --top requires a number");
                    process::exit(1);
                }
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    // Load catalog data from CSV
    let load_start = Instant::now();
    let records = match load_catalog_file(csv_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading CSV: {}", e);
            process::exit(1);
        }
    };
    let load_ms = load_start.elapsed().as_millis();

    // Direct batch annotation for the full matrix and reports.
    let rows = match annotate(&records, &filters) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error annotating catalog: {}", e);
            process::exit(1);
        }
    };
    if rows.is_empty() {
        eprintln!("Error: no catalog rows match the given filters");
        process::exit(1);
    }
    let summary = metrics(&rows);
    let report = reorder_report(&rows);

    // Staged pipeline for the prioritized shortfall digest.
    let pipeline_start = Instant::now();
    let pipeline = ReorderDigestPipeline::with_catalog_and_size(records, top_k);
    let query = MatrixQuery {
        request_id: "digest-001".into(),
        filters: filters.clone(),
        result_size: top_k,
    };
    let result = pipeline.execute(query).await;
    let pipeline_ms = pipeline_start.elapsed().as_millis();

    if let Some(path) = csv_export {
        let file = match File::create(&path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error creating '{}': {}", path, e);
                process::exit(1);
            }
        };
        if let Err(e) = write_matrix_csv(file, &rows) {
            eprintln!("Error exporting CSV: {}", e);
            process::exit(1);
        }
    }

    if json_output {
        let normalized = filters.normalized();
        let digest = DigestJson {
            generated_at: Utc::now().to_rfc3339(),
            filters: FiltersJson {
                brand: normalized.brand,
                category: normalized.category,
                location: normalized.location,
            },
            pipeline_ms,
            matrix: rows,
            metrics: summary,
            reorder_report: report,
            top_shortfalls: result.selected_candidates,
        };
        match serde_json::to_string_pretty(&digest) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing digest: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(
            &rows,
            &summary,
            &report,
            &result.selected_candidates,
            load_ms,
            pipeline_ms,
        );
    }
}
