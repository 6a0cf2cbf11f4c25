use clap::Parser;

use kontoauszug_import::app::{Portfolio, export};

#[derive(Parser)]
#[command(about = "Converts a brokerage account statement into a portfolio import CSV")]
struct Args {
    /// Text extracted from the statement document, one line per source line
    statement: String,

    /// Target CSV file
    #[arg(short, long, default_value = "portfolio_import.csv")]
    output: String,

    /// Settlement currency written to every row
    #[arg(long, default_value = "EUR")]
    currency: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let statement_path = shellexpand::tilde(&args.statement);
    let output_path = shellexpand::tilde(&args.output);

    let mut portfolio = Portfolio::new(args.currency);
    portfolio.import_statement(&statement_path)?;

    let holdings = portfolio.holdings();

    println!("Gesamt Trades gefunden: {}", portfolio.trades().len());
    println!("Verschiedene Wertpapiere: {}", portfolio.positions().len());
    println!("Noch gehaltene Positionen: {}", holdings.len());
    println!();

    export::write_holdings(&output_path, &holdings)?;

    for holding in &holdings {
        println!(
            "  {:<50} ISIN: {}  Stk: {:>12.4}  Avg: {:>8.2} {}",
            holding.name(),
            holding.isin(),
            holding.quantity(),
            holding.average_price(),
            holding.currency()
        );
    }

    println!("\nCSV gespeichert: {}", output_path);

    Ok(())
}
