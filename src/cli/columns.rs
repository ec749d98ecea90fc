//! sprint columns command implementation

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::order::OrderColumn;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the columns command
pub struct ColumnsOptions {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct ColumnsReport {
    columns: Vec<&'static str>,
    default_order: String,
}

pub fn run(options: ColumnsOptions) -> Result<()> {
    let config = super::load_config(options.dir.as_deref(), options.config.as_deref())?;
    let columns: Vec<&'static str> = OrderColumn::NAMED
        .into_iter()
        .filter_map(OrderColumn::name)
        .collect();

    let mut human = HumanOutput::new("Columns");
    human.push_summary("Default order", config.table.default_order.clone());
    for column in &columns {
        human.push_detail(*column);
    }
    human.push_next_step("prefix a column with '-' to reverse, e.g. --order=-Priority");

    let report = ColumnsReport {
        columns,
        default_order: config.table.default_order,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "columns",
        &report,
        Some(&human),
    )
}
