use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "recase")]
#[command(about = "Convert free-form text between casing conventions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Convert {
        text: String,

        #[arg(short, long, default_value = "kebab")]
        style: String,

        #[arg(long)]
        json_input: bool,

        #[arg(short, long, default_value = "text")]
        format: String,
    },

    Styles,

    Demo,

    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            text,
            style,
            json_input,
            format,
        } => {
            commands::convert::execute(text, style, json_input, format)?;
        }
        Commands::Styles => {
            commands::styles::execute()?;
        }
        Commands::Demo => {
            commands::demo::execute()?;
        }
        Commands::Version => {
            println!("recase {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
