use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sheetgen::catalog::{enumerate_combinations, generate_products, plan_scale};
use sheetgen::utils::unix_millis;
use sheetgen::{Catalog, DEFAULT_LIST_LIMIT, GeneratorConfig, ProductWorkflows, admin, logging};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log level (overrides config and SHEETGEN_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the option space and a generation plan
    Report {
        #[arg(short, long)]
        products: Option<usize>,
        #[arg(short, long)]
        variants: Option<usize>,
    },
    /// Generate products and store them in the catalog
    Generate {
        #[arg(short, long)]
        products: Option<usize>,
        #[arg(short, long)]
        variants: Option<usize>,
        /// Handle salt; defaults to the current unix time in seconds
        #[arg(short, long)]
        salt: Option<u64>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        db: Option<PathBuf>,
        /// Print the products as JSON instead of storing them
        #[arg(long)]
        json: bool,
    },
    /// List stored products
    List {
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },
    /// Serve the admin trigger routes
    Serve {
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(short, long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = GeneratorConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    logging::init_logger(&config.log_level, config.log_format)?;

    match cli.command {
        Commands::Report { products, variants } => {
            let options = &config.generate;
            let plan = plan_scale(
                products.unwrap_or(options.num_products),
                variants.unwrap_or(options.variants_per_product),
                options.currencies.len(),
            );
            println!("{}", enumerate_combinations());
            println!();
            println!("{}", plan);
        }
        Commands::Generate { products, variants, salt, seed, db, json } => {
            let mut options = config.generate.clone();
            if let Some(n) = products {
                options.num_products = n;
            }
            if let Some(n) = variants {
                options.variants_per_product = n;
            }
            options.handle_salt = match salt {
                Some(s) => s,
                None if options.handle_salt != 0 => options.handle_salt,
                None => (unix_millis() / 1000) as u64,
            };

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let generated = generate_products(
                &mut rng,
                &options,
                &config.categories,
                &config.shipping_profile,
                &config.sales_channels,
            )?;

            if json {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                serde_json::to_writer_pretty(&mut out, &generated)?;
                writeln!(out)?;
            } else {
                let path = db.unwrap_or(config.database);
                let workflows = Mutex::new(
                    Catalog::create(&path)
                        .with_context(|| format!("opening catalog {}", path.display()))?,
                );
                let ids = workflows.create_products(&generated)?;
                println!(
                    "Stored {} products ({} variants each) in {}",
                    ids.len(),
                    options.variants_per_product.min(enumerate_combinations().total_combinations),
                    path.display()
                );
            }
        }
        Commands::List { db, limit } => {
            let path = db.unwrap_or(config.database);
            let catalog = Catalog::open(&path)
                .with_context(|| format!("opening catalog {}", path.display()))?;
            println!("{} products stored", catalog.product_count()?);
            for product in catalog.list_products(limit)? {
                println!(
                    "{}  {:<40} {:>6} variants  {}",
                    product.id, product.title, product.variant_count, product.handle
                );
            }
        }
        Commands::Serve { db, addr } => {
            let path = db.unwrap_or(config.database);
            let addr = addr.unwrap_or(config.listen_addr);
            let catalog = Catalog::create(&path)
                .with_context(|| format!("opening catalog {}", path.display()))?;
            let workflows: Arc<dyn ProductWorkflows> = Arc::new(Mutex::new(catalog));
            admin::serve(&addr, workflows).await?;
        }
    }

    Ok(())
}
