use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use stock_core::VERSION;

use crate::export::{ExportFormat, ExportTarget};

/// Stock - record goods received and customer orders, and reconcile the two
#[derive(Parser)]
#[command(name = "stock")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store database
    #[arg(short, long, global = true, env = "STOCK_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols and borders only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create the store
    Init(InitArgs),

    /// Goods received
    #[command(subcommand)]
    Inventory(InventoryCommand),

    /// Customer orders
    #[command(subcommand)]
    Orders(OrdersCommand),

    /// Per-product received, ordered and remaining quantities
    Summary(DisplayArgs),

    /// Write a ledger or the summary to a file
    Export(ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Record a receipt of stock
    Add(InventoryAddArgs),
    /// List inventory entries
    List(DisplayArgs),
    /// Remove one inventory entry
    Remove(RemoveArgs),
    /// Remove every inventory entry
    Clear(ClearArgs),
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// Record a customer order
    Add(OrderAddArgs),
    /// List orders
    List(OrderListArgs),
    /// Find orders by customer name or phone
    Search(SearchArgs),
    /// Remove one order
    Remove(RemoveArgs),
    /// Remove every order
    Clear(ClearArgs),
}

/// Display options shared by listing commands
#[derive(Args)]
pub struct DisplayArgs {
    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the store database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Timezone for entry timestamps (IANA name, or "auto")
    #[arg(long)]
    pub timezone: Option<String>,

    /// Default directory for exports
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `inventory add`
#[derive(Args)]
pub struct InventoryAddArgs {
    /// Product name
    #[arg(value_name = "PRODUCT")]
    pub product: String,

    /// Quantity received (at least 0.1)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for `orders add`
#[derive(Args)]
pub struct OrderAddArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Customer phone
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Product name
    #[arg(value_name = "PRODUCT")]
    pub product: String,

    /// Unit price
    #[arg(value_name = "PRICE", allow_hyphen_values = true)]
    pub price: String,

    /// Quantity ordered (at least 0.1)
    #[arg(value_name = "QTY", allow_hyphen_values = true)]
    pub quantity: String,
}

/// Arguments for `orders list`
#[derive(Args)]
pub struct OrderListArgs {
    /// Only orders whose product contains this text
    #[arg(long)]
    pub product: Option<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for `orders search`
#[derive(Args)]
pub struct SearchArgs {
    /// Text to find in the customer name (any case) or phone
    #[arg(value_name = "TERM", default_value = "")]
    pub term: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

/// Arguments for the `remove` subcommands
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry ID (full UUID or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear` subcommands
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, value_name = "WHAT")]
    pub target: ExportTarget,

    /// File format: csv is the spreadsheet export, text the printable report
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Destination file ("-" for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_quantity_parses_as_value() {
        let cli = Cli::try_parse_from(["stock", "inventory", "add", "Apples", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Inventory(InventoryCommand::Add(args))) => {
                assert_eq!(args.quantity, "-2");
            }
            _ => panic!("expected inventory add"),
        }
    }

    #[test]
    fn test_order_add_arguments() {
        let cli = Cli::try_parse_from([
            "stock", "orders", "add", "--name", "Ana", "Apples", "2.5", "4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Orders(OrdersCommand::Add(args))) => {
                assert_eq!(args.name, "Ana");
                assert_eq!(args.phone, "");
                assert_eq!(args.price, "2.5");
                assert_eq!(args.quantity, "4");
            }
            _ => panic!("expected orders add"),
        }
    }

    #[test]
    fn test_export_defaults_to_csv() {
        let cli = Cli::try_parse_from(["stock", "export", "summary"]).unwrap();
        match cli.command {
            Some(Commands::Export(args)) => {
                assert_eq!(args.target, ExportTarget::Summary);
                assert_eq!(args.format, ExportFormat::Csv);
                assert!(args.output.is_none());
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["stock", "summary", "--json", "--store", "/tmp/s.db"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.store.as_deref(), Some("/tmp/s.db"));
    }

    #[test]
    fn test_export_format_help_names_the_spreadsheet() {
        let mut cmd = Cli::command();
        let export = cmd.find_subcommand_mut("export").unwrap();
        let mut help = Vec::new();
        export.write_long_help(&mut help).unwrap();
        let help = String::from_utf8(help).unwrap();

        assert!(help.contains("csv is the spreadsheet export"));
        assert!(help.contains("Spreadsheet (comma-separated"));
    }
}
