use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "billing-country-rule")]
#[command(about = "\"Billing country is\" discount requirement rule")]
pub struct CliArgs {
    /// Path to the TOML plugin configuration
    #[arg(short, long, default_value = "billing-country.toml", global = true)]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate the requirement for one customer
    Check {
        #[arg(long)]
        discount_requirement_id: i32,

        /// Billing country of the customer; omit for a customer without one
        #[arg(long)]
        country_id: Option<i32>,

        /// Evaluate a customer that has no billing address
        #[arg(long, conflicts_with = "country_id")]
        no_billing_address: bool,

        /// Evaluate an anonymous request with no customer
        #[arg(long, conflicts_with_all = ["country_id", "no_billing_address"])]
        no_customer: bool,
    },
    /// Print the configuration page URL
    Url {
        #[arg(long)]
        discount_id: i32,

        #[arg(long)]
        discount_requirement_id: Option<i32>,
    },
    /// Store the required billing country for a requirement
    Configure {
        #[arg(long)]
        discount_requirement_id: i32,

        /// `0` clears the requirement
        #[arg(long)]
        country_id: i32,
    },
    /// Show the locale resources added on install
    Install,
    /// Show the locale resources removed on uninstall
    Uninstall,
    /// Show the routes the plugin registers
    Routes,
    /// Show the plugin descriptor
    Info,
}
