use crate::cli::ListFormat;
use crate::core::data::{ProjectRecord, ProjectView, WorkItem};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_order, format_published, format_technologies, truncate_string};
use colored::*;
use serde::Serialize;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn stack(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn link(text: &str) -> ColoredString {
        text.underline()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>12}: {}", Self::label(label), color_fn(value));
    }

    fn icon_status(icon: &str) -> ColoredString {
        if icon.is_empty() {
            Self::warning("none")
        } else {
            Self::success(&format!("{} bytes", icon.len()))
        }
    }
}

pub fn print_count(item_type: &str, count: usize) {
    if count == 0 {
        println!("{}", OutputStyle::muted(&format!("No {} found.", item_type.to_lowercase())));
    } else {
        println!(
            "{} ({} found)",
            OutputStyle::header(item_type),
            OutputStyle::info(&count.to_string())
        );
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Display formatter for the different list formats
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn format_projects(views: &[ProjectView], format: &ListFormat) -> AppResult<()> {
        if views.is_empty() {
            crate::utils::handle_empty_list("projects");
            return Ok(());
        }

        match format {
            ListFormat::Simple => {
                print_count("Projects", views.len());
                println!("{}", OutputStyle::separator());
                for view in views {
                    println!(
                        "{}  {}",
                        OutputStyle::name(&view.title),
                        OutputStyle::stack(&view.tech_stack)
                    );
                }
            }
            ListFormat::Detailed => {
                OutputStyle::print_header("Projects");
                for (i, view) in views.iter().enumerate() {
                    println!("\n{}. {}", i + 1, OutputStyle::name(&view.title));
                    OutputStyle::print_field_colored("Stack", &view.tech_stack, OutputStyle::stack);
                    OutputStyle::print_field_colored("About", &view.description, OutputStyle::content);
                    OutputStyle::print_field_colored(&view.cta_text, &view.cta_link, OutputStyle::link);
                    println!("{:>12}: {}", OutputStyle::label("Icon"), OutputStyle::icon_status(&view.icon));
                }
            }
            ListFormat::Table => {
                let rows: Vec<[String; 3]> = views
                    .iter()
                    .map(|v| [v.title.clone(), v.tech_stack.clone(), v.cta_link.clone()])
                    .collect();
                print_count("Projects", views.len());
                Self::print_table(["Title", "Stack", "Link"], &rows);
            }
            ListFormat::Json => Self::print_json(views)?,
        }

        Ok(())
    }

    /// Raw records including unpublished ones
    pub fn format_records(records: &[ProjectRecord], format: &ListFormat) -> AppResult<()> {
        if records.is_empty() {
            crate::utils::handle_empty_list("project records");
            return Ok(());
        }

        match format {
            ListFormat::Json => Self::print_json(records)?,
            ListFormat::Table => {
                let rows: Vec<[String; 3]> = records
                    .iter()
                    .map(|r| {
                        [
                            r.id.clone(),
                            format_order(r.order),
                            format_published(r.published).to_string(),
                        ]
                    })
                    .collect();
                print_count("Project records", records.len());
                Self::print_table(["ID", "Order", "Status"], &rows);
            }
            ListFormat::Simple | ListFormat::Detailed => {
                print_count("Project records", records.len());
                println!("{}", OutputStyle::separator());
                for record in records {
                    let status = format_published(record.published);
                    let status = if record.is_published() {
                        OutputStyle::success(status)
                    } else {
                        OutputStyle::muted(status)
                    };
                    println!(
                        "{:>4}  {}  {} {}",
                        format_order(record.order),
                        OutputStyle::name(&record.title),
                        OutputStyle::muted(&format!("[{}]", record.id)),
                        status
                    );
                }
            }
        }

        Ok(())
    }

    pub fn format_work(items: &[WorkItem], format: &ListFormat) -> AppResult<()> {
        if items.is_empty() {
            crate::utils::handle_empty_list("work history");
            return Ok(());
        }

        match format {
            ListFormat::Json => Self::print_json(items)?,
            ListFormat::Table => {
                let rows: Vec<[String; 3]> = items
                    .iter()
                    .map(|w| [w.title.to_string(), w.company.to_string(), w.region.to_string()])
                    .collect();
                print_count("Positions", items.len());
                Self::print_table(["Title", "Company", "Region"], &rows);
            }
            ListFormat::Simple => {
                print_count("Positions", items.len());
                println!("{}", OutputStyle::separator());
                for item in items {
                    println!(
                        "{} @ {} {}",
                        OutputStyle::name(item.title),
                        item.company,
                        OutputStyle::muted(&format!("({})", item.region))
                    );
                }
            }
            ListFormat::Detailed => {
                OutputStyle::print_header("Work History");
                for (i, item) in items.iter().enumerate() {
                    println!("\n{}. {}", i + 1, OutputStyle::name(item.title));
                    OutputStyle::print_field_colored("Company", item.company, OutputStyle::content);
                    OutputStyle::print_field_colored("Region", item.region, OutputStyle::muted);
                    OutputStyle::print_field_colored("About", item.description, OutputStyle::content);
                    OutputStyle::print_field_colored(
                        "Skills",
                        &format_technologies(item.technologies),
                        OutputStyle::stack,
                    );
                }
            }
        }

        Ok(())
    }

    pub fn print_icon_keys(keys: &[&str]) {
        if keys.is_empty() {
            crate::utils::handle_empty_list("icons");
            return;
        }

        println!("Available Icons ({})", keys.len());
        println!("====================");
        for key in keys {
            println!("  {}", key);
        }
    }

    fn print_table(headers: [&str; 3], rows: &[[String; 3]]) {
        let mut widths = headers.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        let widths = widths.map(|w| w.min(40));

        let rule = |left: &str, mid: &str, right: &str| {
            let parts: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
            format!("{}─{}─{}", left, parts.join(format!("─{}─", mid).as_str()), right)
        };

        println!("{}", rule("┌", "┬", "┐"));
        println!(
            "│ {:<w0$} │ {:<w1$} │ {:<w2$} │",
            OutputStyle::header(headers[0]),
            OutputStyle::header(headers[1]),
            OutputStyle::header(headers[2]),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
        println!("{}", rule("├", "┼", "┤"));
        for row in rows {
            println!(
                "│ {:<w0$} │ {:<w1$} │ {:<w2$} │",
                truncate_string(&row[0], widths[0]),
                truncate_string(&row[1], widths[1]),
                truncate_string(&row[2], widths[2]),
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            );
        }
        println!("{}", rule("└", "┴", "┘"));
    }

    pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Parse(format!("Failed to serialize to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
