//! Check command implementation for Polaris CLI.
//!
//! Validates a pipeline file offline, the same way the server does.

use std::process::ExitCode;

use anyhow::Context;
use polaris_core::{GraphValidator, Pipeline, PipelineGraph};
use polaris_server::PipelineSummary;
use tokio::io::AsyncReadExt;

use crate::colors;

/// Validate the pipeline at `path` and report the verdict.
///
/// Exits with success for a DAG and status 1 for a cyclic pipeline.
pub async fn execute(path: &str, json: bool) -> anyhow::Result<ExitCode> {
    let source = read_source(path).await?;
    let pipeline: Pipeline = serde_json::from_str(&source)
        .with_context(|| format!("Invalid pipeline JSON in {}", display_name(path)))?;

    let validation = GraphValidator::validate_pipeline(&pipeline)?;
    let summary = PipelineSummary::from(validation);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(path, &pipeline, &summary)?;
    }

    Ok(if summary.is_dag {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn read_source(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut source = String::new();
        tokio::io::stdin()
            .read_to_string(&mut source)
            .await
            .context("Failed to read pipeline from stdin")?;
        Ok(source)
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {path}"))
    }
}

fn display_name(path: &str) -> &str {
    if path == "-" { "<stdin>" } else { path }
}

fn print_summary(path: &str, pipeline: &Pipeline, summary: &PipelineSummary) -> anyhow::Result<()> {
    println!(
        "\n{}Pipeline{} {}",
        colors::BOLD,
        colors::RESET,
        display_name(path)
    );
    println!("{}", "─".repeat(50));
    println!("{}  ◆ Nodes:{} {}", colors::CYAN, colors::RESET, summary.num_nodes);
    println!("{}  ◆ Edges:{} {}", colors::CYAN, colors::RESET, summary.num_edges);

    let graph = PipelineGraph::build(&pipeline.nodes, &pipeline.edges)?;

    if summary.is_dag {
        println!("{}  ◆ DAG:{} yes", colors::GREEN, colors::RESET);
        let order = graph.topological_order()?;
        if !order.is_empty() {
            println!(
                "{}  ◆ Order:{} {}",
                colors::CYAN,
                colors::RESET,
                order.join(" → ")
            );
        }
        return Ok(());
    }

    println!("{}  ◆ DAG:{} no", colors::RED, colors::RESET);

    if let Some(cycle) = graph.find_cycle() {
        println!(
            "{}  ◆ Cycle:{} {} → {}",
            colors::YELLOW,
            colors::RESET,
            cycle.join(" → "),
            cycle[0]
        );
    }

    Ok(())
}
