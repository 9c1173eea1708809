use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;

use yeahyak_portal::{
    forecast::fixtures::forecast_book,
    monitoring::{
        MonitoringFilter, MonitoringReport, RegionPath, StockStatus,
        fixtures::branch_snapshots,
    },
    period::{MonthRange, YearMonth},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Monitor(args) => handle_monitor(args, cli.json)?,
        Commands::Forecast(args) => handle_forecast(args, cli.json)?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "monitor-report",
    about = "Print the HQ stock monitoring and demand forecast boards",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Branch stock rows and chart aggregates
    Monitor(MonitorArgs),
    /// Forecast rows, or one product's monthly trend
    Forecast(ForecastArgs),
}

#[derive(Args)]
struct MonitorArgs {
    /// First month, YYYY-MM
    #[arg(long, requires = "to")]
    from: Option<YearMonth>,
    /// Last month, YYYY-MM
    #[arg(long, requires = "from")]
    to: Option<YearMonth>,
    /// Region path such as 충남충북/천안
    #[arg(long)]
    region: Option<RegionPath>,
    /// SHORTAGE, NORMAL, SURPLUS or the Korean label
    #[arg(long)]
    status: Option<StockStatus>,
}

#[derive(Args)]
struct ForecastArgs {
    /// Product name fragment
    #[arg(long)]
    keyword: Option<String>,
    /// Print the monthly trend of this product instead of the table
    #[arg(long, conflicts_with = "keyword")]
    product: Option<String>,
    #[arg(long, requires = "to")]
    from: Option<YearMonth>,
    #[arg(long, requires = "from")]
    to: Option<YearMonth>,
}

fn month_range(from: Option<YearMonth>, to: Option<YearMonth>) -> Result<Option<MonthRange>> {
    match (from, to) {
        (Some(from), Some(to)) => Ok(Some(
            MonthRange::new(from, to).context("invalid month range")?,
        )),
        (None, None) => Ok(None),
        _ => bail!("--from and --to must be given together"),
    }
}

fn handle_monitor(args: MonitorArgs, json: bool) -> Result<()> {
    let filter = MonitoringFilter {
        months: month_range(args.from, args.to)?,
        region: args.region,
        status: args.status,
    };
    let report = MonitoringReport::build(&branch_snapshots(), &filter);

    if json {
        return print_json(&report);
    }

    println!("{:<4} {:<8} {:<12} {:>6}  {}", "KEY", "MONTH", "BRANCH", "ORDERS", "STATUS");
    for row in &report.rows {
        println!(
            "{:<4} {:<8} {:<12} {:>6}  {}",
            row.key,
            row.month,
            row.branch,
            row.orders,
            row.status.label()
        );
    }
    println!();
    for count in &report.status_counts {
        println!("{:<4} {}", count.status.label(), count.count);
    }
    println!(
        "branches {} / orders {} / predicted {} / recommended {}",
        report.totals.branches,
        report.totals.orders,
        report.totals.predicted,
        report.totals.recommended
    );
    Ok(())
}

fn handle_forecast(args: ForecastArgs, json: bool) -> Result<()> {
    let book = forecast_book();

    if let Some(product) = args.product {
        let range = month_range(args.from, args.to)?;
        let points = book.series(&product, range.as_ref());
        if points.is_empty() {
            bail!("no forecast for product '{product}'");
        }
        if json {
            return print_json(&points);
        }
        for point in &points {
            println!("{} {:<8} {:>6}", point.month, point.kind.label(), point.value);
        }
        return Ok(());
    }

    let rows = book.search(args.keyword.as_deref().unwrap_or_default());
    if json {
        return print_json(&rows);
    }
    for row in &rows {
        println!(
            "{:<12} expected {:>5} stock {:>5} suggested {:>5}  {}",
            row.product,
            row.expected,
            row.stock,
            row.suggested,
            row.status.label()
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
