mod browse;
mod render;

use clap::{Args, Parser, Subcommand};
use shopdir_client::{Directory, LoadError, ShopClient};
use shopdir_core::{map_pins, FilterChoice, SortKey, ViewCriteria};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopdir")]
#[command(about = "Browse the ULTRAMAN card game US shop directory")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List shops matching the filters.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the shown-shop total and per-region counts.
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show the selectable region and state values.
    Options,
    /// Resolve map coordinates for the matching shops.
    Pins {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Interactive session reading filter commands from stdin.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
struct FilterArgs {
    /// Free-text search over name, state and address.
    #[arg(long, short = 'q', default_value = "")]
    query: String,
    /// Region to restrict to, or "all".
    #[arg(long, default_value = "all")]
    region: String,
    /// State to restrict to, or "all".
    #[arg(long, default_value = "all")]
    state: String,
    /// One of name, state, region, recent. Unknown keys sort by name.
    #[arg(long, default_value = "name")]
    sort: String,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            query: String::new(),
            region: "all".to_owned(),
            state: "all".to_owned(),
            sort: SortKey::Name.to_string(),
        }
    }
}

impl FilterArgs {
    fn to_criteria(&self) -> ViewCriteria {
        ViewCriteria {
            query: self.query.clone(),
            region: FilterChoice::from_value(&self.region),
            state: FilterChoice::from_value(&self.state),
            sort: SortKey::parse(&self.sort),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shopdir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, api_url = %config.api_url, "starting shopdir");

    let client = ShopClient::from_config(&config)?;
    for (attempt, source) in client.sources().iter().enumerate() {
        tracing::debug!(
            attempt = attempt + 1,
            source = %source.name,
            url = %source.url,
            "shop source"
        );
    }
    let directory = Directory::new(client);

    let command = cli.command.unwrap_or(Commands::List {
        filters: FilterArgs::default(),
    });

    match command {
        Commands::Browse => browse::run_browse(&directory, cli.json).await,
        Commands::List { filters } => {
            load_or_report(&directory).await?;
            let view = directory.view(&filters.to_criteria());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view.shops)?);
            } else {
                print!("{}", render::render_list(&view.shops));
                println!("{}", render::render_status(view.summary.total));
            }
            Ok(())
        }
        Commands::Stats { filters } => {
            load_or_report(&directory).await?;
            let view = directory.view(&filters.to_criteria());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view.summary)?);
            } else {
                print!("{}", render::render_summary(&view.summary));
            }
            Ok(())
        }
        Commands::Options => {
            load_or_report(&directory).await?;
            let options = directory.options();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print!("{}", render::render_options(&options));
            }
            Ok(())
        }
        Commands::Pins { filters } => {
            load_or_report(&directory).await?;
            let view = directory.view(&filters.to_criteria());
            let pins = map_pins(&view.shops);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pins)?);
            } else {
                print!("{}", render::render_pins(&pins));
            }
            Ok(())
        }
    }
}

/// Loads the directory for a one-shot command, telling the user how to
/// recover when every source failed.
async fn load_or_report(directory: &Directory) -> Result<(), LoadError> {
    match directory.reload().await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{}", render::LOAD_FAILED_MESSAGE);
            Err(e)
        }
    }
}
