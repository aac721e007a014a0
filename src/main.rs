use clap::Parser;
use sheetkit::error::SheetResult;

#[derive(Parser)]
#[command(name = "sheetkit")]
#[command(version)]
#[command(about = "Quiet runtime scaffold for workbook-to-JSON glue scripts")]
#[command(long_about = "Sheetkit - workbook script runtime

Installs the process-wide log filter (styling noise from the workbook
writer is capped at ERROR; everything else follows RUST_LOG) and reports
the toolchain as ready. Script code builds on sheetkit::prelude.")]
struct Cli {}

fn main() -> SheetResult<()> {
    let _cli = Cli::parse();

    sheetkit::logging::init();

    tracing::info!(
        started = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "toolchain ready"
    );

    Ok(())
}
