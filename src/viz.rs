//! Visualization of the topic map using Plotters

use plotters::prelude::*;
use plotters::style::full_palette::{BROWN, ORANGE, PINK, PURPLE, TEAL};

use crate::pipeline::Analysis;

/// Color palette for the supported topic range
const TOPIC_COLORS: [RGBColor; 10] = [
    RED, BLUE, GREEN, MAGENTA, CYAN, ORANGE, PURPLE, BROWN, PINK, TEAL,
];

fn topic_color(id: usize) -> RGBColor {
    if id < TOPIC_COLORS.len() {
        TOPIC_COLORS[id]
    } else {
        BLACK // Fallback color
    }
}

/// Create the scatter map of documents colored by topic
///
/// # Arguments
/// * `analysis` - Completed pipeline output
/// * `output_path` - Path to save the PNG plot
/// * `plot_title` - Title for the plot
pub fn create_topic_map(
    analysis: &Analysis,
    output_path: &str,
    plot_title: Option<&str>,
) -> crate::Result<()> {
    let title = plot_title.unwrap_or("Document Topic Map");

    let xs: Vec<f64> = analysis.documents.iter().map(|d| d.x).collect();
    let ys: Vec<f64> = analysis.documents.iter().map(|d| d.y).collect();

    // Calculate plot bounds with some padding
    let x_min = xs.iter().fold(f64::INFINITY, |a, &b| a.min(b)) - 0.5;
    let x_max = xs.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)) + 0.5;
    let y_min = ys.iter().fold(f64::INFINITY, |a, &b| a.min(b)) - 0.5;
    let y_max = ys.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)) + 0.5;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Component 1")
        .y_desc("Component 2")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // One series per topic so the legend lists every populated topic
    for topic in &analysis.topics {
        let color = topic_color(topic.id);
        let points: Vec<(f64, f64)> = analysis
            .documents
            .iter()
            .filter(|d| d.topic == topic.id)
            .map(|d| (d.x, d.y))
            .collect();
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 5, color.filled())),
            )?
            .label(topic.label.clone())
            .legend(move |(x, y)| Circle::new((x + 5, y), 5, color.filled()));
    }

    chart.configure_series_labels().draw()?;

    root.present()?;
    println!("Topic map saved to: {}", output_path);

    Ok(())
}

/// Print topic keywords, sizes, and the document table to the console
pub fn print_topic_report(analysis: &Analysis) {
    let total = analysis.documents.len();

    println!("\n=== Topic Keywords ===");
    for topic in &analysis.topics {
        if topic.terms.is_empty() {
            println!("{}: (no documents)", topic.label);
        } else {
            println!("{}: {}", topic.label, topic.terms.join(", "));
        }
    }

    println!("\n=== Topic Sizes ===");
    for topic in &analysis.topics {
        let size = analysis
            .documents
            .iter()
            .filter(|d| d.topic == topic.id)
            .count();
        let percentage = (size as f64 / total as f64) * 100.0;
        println!("  {}: {} documents ({:.1}%)", topic.label, size, percentage);
    }

    println!("\n=== Documents ===");
    println!("  {:<8} | {:<28} | Preview", "Topic", "Document");
    println!("  {:-<8}-|-{:-<28}-|--------", "", "");
    for record in &analysis.documents {
        println!(
            "  {:<8} | {:<28} | {}",
            record.topic_label, record.name, record.preview
        );
    }
}
