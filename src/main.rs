// Main entry point
use clap::Parser;
use colored::Colorize;
use faq_rust::application::{query, save};
use faq_rust::domain::model::{Faq, FaqUpdate, Language, NewFaq};
use faq_rust::infrastructure::config::{self, load_config, Logging};
use faq_rust::infrastructure::storage::db::init_database;
use faq_rust::interfaces::cli::{AddArgs, Cli, Command, UpdateArgs};
use faq_rust::interfaces::http;
use faq_rust::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::GenerateConfig = cli.command {
        config::generate_config_sample()?;
        return Ok(());
    }

    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Setup database path (from config or default)
    let db_path = config::get_database_path(&config);
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_conn = init_database(&db_path).await?;
    let state = AppState::new(db_conn, config.clone())?;

    match cli.command {
        Command::Serve { bind, port } => {
            let bind = bind.unwrap_or_else(|| config.server.bind_addr.clone());
            let port = port.unwrap_or(config.server.port);
            http::serve(state, &bind, port).await?;
        }
        Command::Add(args) => add(&state, args).await?,
        Command::Update(args) => update(&state, args).await?,
        Command::List { lang, json } => list(&state, lang.as_deref(), json).await?,
        Command::Show { id, lang } => match query::get_faq(&state, id, lang.as_deref()).await? {
            Some(item) => println!("{}", serde_json::to_string_pretty(&item)?),
            None => {
                eprintln!("{}", format!("FAQ {} not found", id).red());
                std::process::exit(1);
            }
        },
        Command::Status => print_status(&state, &db_path).await?,
        Command::GenerateConfig => {}
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn add(state: &AppState, args: AddArgs) -> anyhow::Result<()> {
    let draft = NewFaq {
        question: args.question,
        answer: args.answer,
        question_hi: args.hi,
        question_bn: args.bn,
    };
    let faq = save::create_faq(state, draft).await?;
    println!("{} {}", "Created".green(), faq.id);
    print_faq(&faq);
    Ok(())
}

async fn update(state: &AppState, args: UpdateArgs) -> anyhow::Result<()> {
    let changes = FaqUpdate {
        question: args.question,
        answer: args.answer,
        question_hi: args.hi,
        question_bn: args.bn,
        retranslate: args.retranslate,
    };
    let faq = save::update_faq(state, args.id, changes).await?;
    println!("{} {}", "Updated".green(), faq.id);
    print_faq(&faq);
    Ok(())
}

async fn list(state: &AppState, lang: Option<&str>, json: bool) -> anyhow::Result<()> {
    if let Some(lang) = lang {
        match query::list_faqs(state, Some(lang)).await? {
            Some(items) if json => println!("{}", serde_json::to_string_pretty(&items)?),
            Some(items) => {
                for item in items {
                    println!("{:>4}  {}", item.id.to_string().cyan(), item.question);
                }
            }
            None => eprintln!("{}", "No FAQs found.".yellow()),
        }
        return Ok(());
    }

    let faqs = state.repo.list().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&faqs)?);
    } else if faqs.is_empty() {
        eprintln!("{}", "No FAQs found.".yellow());
    } else {
        for faq in &faqs {
            print_faq(faq);
        }
    }
    Ok(())
}

fn print_faq(faq: &Faq) {
    use faq_rust::domain::model::Translatable;

    println!("{:>4}  {}", faq.id.to_string().cyan(), faq.question.bold());
    for language in Language::ALL {
        let variant = faq.variant(language).unwrap_or("-");
        println!("      {}  {}", language.code().dimmed(), variant);
    }
}

async fn print_status(state: &AppState, db_path: &std::path::Path) -> anyhow::Result<()> {
    println!("{}", "faq Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let count = state.repo.count().await?;
    println!("Database: {} ({} records)", db_path.display(), count);
    println!("Memory Cache: {} entries", state.cache.len());
    println!(
        "Config: {}",
        config::get_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!(
        "Translator: {} (timeout {}s)",
        state.translator.name(),
        state.config.translation.timeout_secs
    );
    println!("Cache TTL: {}s", state.config.cache.ttl_secs);

    Ok(())
}
