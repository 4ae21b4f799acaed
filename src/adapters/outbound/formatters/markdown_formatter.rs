use crate::application::read_models::{FailingAssetView, FailingAssetsReport, ReportMetadataView};
use crate::asset_health::services::TreeRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the summary table
const SUMMARY_TABLE_HEADER: &str = "| Asset | Latest Run | Last Materialized By | Downstream |\n";

/// Markdown table separator line for the summary table
const SUMMARY_TABLE_SEPARATOR: &str = "|-------|------------|----------------------|------------|\n";

/// MarkdownFormatter adapter for generating a Markdown failing-assets report
///
/// Renders a summary table followed by one section per failing asset with
/// its downstream tree as a nested list of links.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Escapes characters that would end a link label
    fn escape_link_text(text: &str) -> String {
        text.replace('[', "\\[").replace(']', "\\]")
    }

    /// Escapes inline Markdown syntax so a name renders literally in a heading
    fn escape_heading_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '`' | '*' | '_' | '#' | '[' | ']' | '<' | '>' | '~' | '|' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\n' | '\r' => escaped.push(' '),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn row_to_link(row: &TreeRow) -> String {
        format!("[{}]({})", Self::escape_link_text(&row.display_name), row.link)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str("# Failing assets\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {}. Checked {} of {} assets",
            metadata.tool_name,
            metadata.tool_version,
            metadata.generated_at,
            metadata.loaded_statuses,
            metadata.total_assets
        ));
        if metadata.unresolved_assets > 0 {
            output.push_str(&format!(
                "; {} returned no status",
                metadata.unresolved_assets
            ));
        }
        output.push_str(".\n\n");
    }

    fn render_summary(&self, output: &mut String, assets: &[FailingAssetView]) {
        output.push_str("## Summary\n\n");
        if assets.is_empty() {
            output.push_str("*No failing assets*\n");
            return;
        }

        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        for asset in assets {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&Self::escape_link_text(&asset.display_name)),
                asset.link,
                Self::escape_markdown_table_cell(asset.latest_run_id.as_deref().unwrap_or("N/A")),
                Self::escape_markdown_table_cell(
                    asset
                        .latest_materialization_run_id
                        .as_deref()
                        .unwrap_or("N/A")
                ),
                asset.blast_radius()
            ));
        }
        output.push('\n');
    }

    fn render_asset(&self, output: &mut String, asset: &FailingAssetView) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_heading_text(&asset.display_name)
        ));
        for row in &asset.downstream {
            output.push_str(&format!(
                "{}- {}\n",
                "  ".repeat(row.depth),
                Self::row_to_link(row)
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &FailingAssetsReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &report.metadata);
        self.render_summary(&mut output, &report.failing_assets);
        for asset in &report.failing_assets {
            self.render_asset(&mut output, asset);
        }

        Ok(output)
    }
}
