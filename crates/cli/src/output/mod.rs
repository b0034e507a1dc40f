use clap::ValueEnum;
use dns_edges_domain::Communication;
use std::collections::HashSet;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Edges ordered by their display form so repeated runs print identically.
pub fn sorted(communications: HashSet<Communication>) -> Vec<Communication> {
    let mut edges: Vec<(String, Communication)> = communications
        .into_iter()
        .map(|edge| (edge.to_string(), edge))
        .collect();
    edges.sort_by(|a, b| a.0.cmp(&b.0));
    edges.into_iter().map(|(_, edge)| edge).collect()
}

pub fn render(
    out: &mut impl Write,
    communications: HashSet<Communication>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let edges = sorted(communications);
    match format {
        OutputFormat::Text => {
            for edge in &edges {
                writeln!(out, "{}", edge)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &edges)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
