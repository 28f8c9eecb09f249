use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_dashboard::cli::{
    handle_category_command, handle_dashboard_command, handle_export_command,
    handle_transaction_command, CategoryCommands, DashboardArgs, ExportArgs, TransactionCommands,
};
use finance_dashboard::config::{FinancePaths, Locale, Settings};
use finance_dashboard::logging::init_tracing;
use finance_dashboard::storage::load_or_demo;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance dashboard",
    long_about = "Summarizes income and expenses: totals, spending by category, \
                  a monthly series and the most recent transactions. Runs on the \
                  built-in sample data unless a snapshot file is given."
)]
struct Cli {
    /// Ledger snapshot file to load (read-only)
    #[arg(long, global = true, env = "FINANCE_DATA_FILE")]
    data: Option<PathBuf>,

    /// Label language for this run (pt-br or en), overriding the settings file
    #[arg(long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Export the dashboard report
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    init_tracing(&settings.log_level);

    let data_file = cli.data.or_else(|| settings.data_file.clone());
    let ledger = load_or_demo(data_file.as_deref())?;

    match cli.command {
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&ledger, &settings, &args)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(ledger, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&ledger, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&ledger, &settings, &args)?;
        }
        Some(Commands::Config { save }) => {
            println!("Finance Dashboard Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created, using defaults)" }
            );
            match &data_file {
                Some(path) => println!("Data file:        {}", path.display()),
                None => println!("Data file:        (built-in sample data)"),
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Locale:          {:?}", settings.locale);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Fallback label:  {}", settings.fallback_category_label);
            println!("  Log level:       {}", settings.log_level);

            if save {
                settings.save(&paths)?;
                println!();
                println!("Settings saved to {}", paths.settings_file().display());
            }
        }
        None => {
            handle_dashboard_command(&ledger, &settings, &DashboardArgs::default())?;
        }
    }

    Ok(())
}
