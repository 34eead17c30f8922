use anyhow::Context;
use clap::Parser;
use discount_rules_billing_country::core::rule::locale_resources;
use discount_rules_billing_country::core::{Address, Customer, DiscountRequirementValidationRequest};
use discount_rules_billing_country::utils::{logger, validation::Validate};
use discount_rules_billing_country::{
    BillingCountryRule, CliArgs, Command, DiscountRequirementRule, InMemoryLocaleStore,
    PluginConfig, PluginLifecycle, RouteProvider, RouteTable, RuleError,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = load_config(&args.config)?;
    let level = if args.verbose { "debug" } else { config.log_level() };
    if config.json_logging() {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report(&e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, config) {
        tracing::error!("❌ Command failed: {}", e);
        report(&e);
        std::process::exit(2);
    }

    Ok(())
}

/// A missing config file is an empty configuration, so `url` and `info` work without one.
fn load_config(path: &str) -> anyhow::Result<PluginConfig> {
    if !Path::new(path).exists() {
        return Ok(PluginConfig::new("billing-country"));
    }
    PluginConfig::from_file(path).with_context(|| format!("Failed to load config file '{}'", path))
}

fn report(e: &RuleError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn run(args: &CliArgs, mut config: PluginConfig) -> Result<(), RuleError> {
    let settings = config.setting_store();
    let rule = BillingCountryRule::new(settings, InMemoryLocaleStore::new());

    match &args.command {
        Command::Check {
            discount_requirement_id,
            country_id,
            no_billing_address,
            no_customer,
        } => {
            let customer = if *no_customer {
                None
            } else if *no_billing_address {
                Some(Customer::default())
            } else {
                Some(Customer {
                    billing_address: Some(Address {
                        country_id: *country_id,
                    }),
                })
            };
            let request = DiscountRequirementValidationRequest::new(*discount_requirement_id, customer);
            let result = rule.check_requirement(Some(&request))?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Url {
            discount_id,
            discount_requirement_id,
        } => {
            println!("{}", rule.configuration_url(*discount_id, *discount_requirement_id));
        }
        Command::Configure {
            discount_requirement_id,
            country_id,
        } => {
            rule.configure_requirement(*discount_requirement_id, *country_id)?;
            config.absorb_settings(rule.settings())?;
            config.to_file(&args.config)?;
            tracing::info!("📁 Saved configuration to {}", args.config);
        }
        Command::Install => {
            rule.install()?;
            println!("{}", serde_json::to_string_pretty(&rule.localization().resources()?)?);
        }
        Command::Uninstall => {
            rule.uninstall()?;
            let keys: Vec<String> = locale_resources().into_iter().map(|r| r.key).collect();
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        Command::Routes => {
            let mut table = RouteTable::new();
            RouteProvider::new().register_routes(&mut table)?;
            println!("{}", serde_json::to_string_pretty(table.routes())?);
        }
        Command::Info => {
            println!("{}", serde_json::to_string_pretty(&rule.descriptor())?);
        }
    }

    Ok(())
}
