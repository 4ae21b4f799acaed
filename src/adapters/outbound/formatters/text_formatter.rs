use crate::application::read_models::{FailingAssetView, FailingAssetsReport};
use crate::asset_health::services::TreeRow;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

const INDENT: &str = "  ";
const CONNECTOR: &str = "↳ ";

/// TextFormatter adapter for terminal output
///
/// A header line with the load counts, then one block per failing asset: a
/// heading with the run ids followed by the downstream tree, indented two
/// spaces per level. The first child of each parent gets a `↳` connector in
/// place of its last indent.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Leading whitespace and connector for one tree row
    fn row_prefix(row: &TreeRow) -> String {
        if row.depth == 0 {
            return String::new();
        }
        if row.first_at_depth {
            format!("{}{}", INDENT.repeat(row.depth - 1), CONNECTOR)
        } else {
            INDENT.repeat(row.depth)
        }
    }

    fn write_asset(&self, out: &mut String, asset: &FailingAssetView) -> std::fmt::Result {
        let heading = format!("✗ {}", asset.display_name);
        let run_ids = format!(
            "(latest run: {}, last materialized by: {})",
            asset.latest_run_id.as_deref().unwrap_or("-"),
            asset.latest_materialization_run_id.as_deref().unwrap_or("-"),
        );
        if self.colored {
            writeln!(out, "{} {}", heading.red().bold(), run_ids.dimmed())?;
        } else {
            writeln!(out, "{} {}", heading, run_ids)?;
        }

        let affected = asset.blast_radius();
        writeln!(out, "  {} downstream asset(s) affected", affected)?;

        for row in &asset.downstream {
            let prefix = Self::row_prefix(row);
            if self.colored {
                writeln!(
                    out,
                    "  {}{}  {}",
                    prefix,
                    row.display_name,
                    row.link.dimmed()
                )?;
            } else {
                writeln!(out, "  {}{}  {}", prefix, row.display_name, row.link)?;
            }
        }
        writeln!(out)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &FailingAssetsReport) -> Result<String> {
        let mut out = String::new();
        let meta = &report.metadata;

        write!(
            out,
            "Checked {} of {} assets",
            meta.loaded_statuses, meta.total_assets
        )?;
        if meta.unresolved_assets > 0 {
            write!(out, ", {} returned no status", meta.unresolved_assets)?;
        }
        writeln!(out)?;
        writeln!(out)?;

        if !report.has_failing_assets() {
            if self.colored {
                writeln!(out, "{}", "No failing assets".green())?;
            } else {
                writeln!(out, "No failing assets")?;
            }
            return Ok(out);
        }

        let summary = format!("{} failing asset(s)", report.failing_count());
        if self.colored {
            writeln!(out, "{}", summary.red().bold())?;
        } else {
            writeln!(out, "{}", summary)?;
        }
        writeln!(out)?;
        for asset in &report.failing_assets {
            self.write_asset(&mut out, asset)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_fixtures::{
        empty_report, report_with_failure, row,
    };

    #[test]
    fn test_row_prefix() {
        assert_eq!(TextFormatter::row_prefix(&row("a", 0, false)), "");
        assert_eq!(TextFormatter::row_prefix(&row("b", 1, true)), "↳ ");
        assert_eq!(TextFormatter::row_prefix(&row("c", 1, false)), "  ");
        assert_eq!(TextFormatter::row_prefix(&row("d", 3, true)), "    ↳ ");
        assert_eq!(TextFormatter::row_prefix(&row("e", 3, false)), "      ");
    }

    #[test]
    fn test_text_plain_report() {
        let output = TextFormatter::new(false)
            .format(&report_with_failure())
            .unwrap();

        assert!(output.contains("✗ raw (latest run: run-2, last materialized by: run-1)"));
        assert!(output.contains("2 downstream asset(s) affected"));
        assert!(output.contains("\n  raw  /assets/raw?view=events\n"));
        assert!(output.contains("\n  ↳ clean  /assets/clean?view=events\n"));
        assert!(output.contains("\n    ↳ agg  /assets/agg?view=events\n"));
        assert!(output.starts_with("Checked 3 of 3 assets\n\n1 failing asset(s)\n"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_text_empty_report() {
        let output = TextFormatter::new(false).format(&empty_report()).unwrap();
        assert_eq!(output, "Checked 3 of 3 assets\n\nNo failing assets\n");
    }

    #[test]
    fn test_text_reports_unresolved() {
        let mut report = empty_report();
        report.metadata.unresolved_assets = 2;
        let output = TextFormatter::new(false).format(&report).unwrap();
        assert!(output.starts_with("Checked 3 of 3 assets, 2 returned no status\n"));
    }

    #[test]
    fn test_text_colored_output_has_escapes() {
        let output = TextFormatter::new(true)
            .format(&report_with_failure())
            .unwrap();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("clean"));
    }
}
