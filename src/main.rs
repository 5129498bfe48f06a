mod db;
mod extract;
mod fetch;
mod format;
mod pipeline;

use clap::{Parser, Subcommand};

const DB_PATH: &str = "contacts.db";

#[derive(Parser)]
#[command(name = "contact_scraper", about = "Faculty directory contact scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the directory page, show the contact table, store new contacts
    Fetch {
        /// Directory page URL
        #[arg(default_value = fetch::DEFAULT_URL)]
        url: String,
        /// Custom user-agent header
        #[arg(long)]
        user_agent: Option<String>,
    },
    /// Show stored contacts
    List {
        /// Max rows to display
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show store statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url, user_agent } => {
            let conn = db::connect(DB_PATH)?;
            db::init_schema(&conn)?;
            let client = fetch::client()?;
            let ua = user_agent.as_deref().unwrap_or(fetch::DEFAULT_USER_AGENT);

            match pipeline::run_cycle(&client, &conn, &url, ua).await {
                Ok(report) => {
                    println!("{}\n", report.table);
                    println!(
                        "{} contacts ({} new, {} already stored)",
                        report.total,
                        report.inserted,
                        report.total - report.inserted
                    );
                }
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::List { limit } => {
            let conn = db::connect(DB_PATH)?;
            db::init_schema(&conn)?;
            let contacts = db::fetch_contacts(&conn, limit)?;
            if contacts.is_empty() {
                println!("No stored contacts. Run 'fetch' first.");
                return Ok(());
            }
            println!("{}", format::render_table(&contacts));
            println!("\n{} contacts", contacts.len());
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect(DB_PATH)?;
            db::init_schema(&conn)?;
            println!("Stored contacts: {}", db::count_contacts(&conn)?);
            Ok(())
        }
    }
}
