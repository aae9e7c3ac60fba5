use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "faq")]
#[command(about = "Multilingual FAQ service: translate on write, cache on read.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create a FAQ, translating any variant not supplied
    Add(AddArgs),

    /// Edit a FAQ
    Update(UpdateArgs),

    /// List every FAQ with its stored variants
    List {
        /// Resolve questions in this language instead
        #[arg(short, long)]
        lang: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one FAQ
    Show {
        id: i64,

        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Generate config sample
    GenerateConfig,

    /// Show status
    Status,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub question: String,

    #[arg(short, long, default_value = "")]
    pub answer: String,

    /// Hindi question (skips translating it)
    #[arg(long)]
    pub hi: Option<String>,

    /// Bengali question (skips translating it)
    #[arg(long)]
    pub bn: Option<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: i64,

    #[arg(short, long)]
    pub question: Option<String>,

    #[arg(short, long)]
    pub answer: Option<String>,

    #[arg(long)]
    pub hi: Option<String>,

    #[arg(long)]
    pub bn: Option<String>,

    /// Translate the variants again from the (new) question
    #[arg(long)]
    pub retranslate: bool,
}
