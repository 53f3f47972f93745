//! TopicMap: research document topic clustering CLI
//!
//! This is the main entrypoint that orchestrates document ingestion,
//! the clustering pipeline, console reporting, and the topic map plot.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use topicmap::{analyze, ingest, viz, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    args.validate_clusters()?;

    if args.verbose {
        println!("TopicMap - Document Topic Clustering");
        println!("====================================\n");
    }

    let start_time = Instant::now();

    // Step 1: Load documents
    if args.verbose {
        println!("Step 1: Loading documents");
        println!("  Input directory: {}", args.input);
    }

    let ingest_start = Instant::now();
    let documents = ingest::load_documents(Path::new(&args.input))?;
    let ingest_time = ingest_start.elapsed();

    println!("✓ Loaded {} documents", documents.len());
    if args.verbose {
        println!("  Loading time: {:.2}s", ingest_time.as_secs_f64());
    }

    // Step 2: Run the clustering pipeline
    if args.verbose {
        println!("\nStep 2: Clustering into {} topics", args.clusters);
        println!("  Max vocabulary: {}", args.max_vocab);
        println!("  Seed: {}", args.seed);
    }

    let pipeline_start = Instant::now();
    let analysis = analyze(&documents, &args.to_config())?;
    let pipeline_time = pipeline_start.elapsed();

    println!("✓ Documents clustered into {} topics", analysis.topics.len());
    if args.verbose {
        println!("  Analysis time: {:.2}s", pipeline_time.as_secs_f64());
    }

    // Step 3: Report topics and documents
    viz::print_topic_report(&analysis);

    // Step 4: Generate the topic map
    if args.verbose {
        println!("\nStep 3: Generating topic map");
        println!("  Output file: {}", args.output);
    }

    let viz_start = Instant::now();
    viz::create_topic_map(&analysis, &args.output, None)?;
    let viz_time = viz_start.elapsed();

    if args.verbose {
        println!("  Plotting time: {:.2}s", viz_time.as_secs_f64());
    }

    let total_time = start_time.elapsed();
    println!("\n=== Analysis Complete ===");
    println!("Total processing time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
