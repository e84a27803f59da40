use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use stockprompt::app::App;
use stockprompt::options::{
    Audio, Background, GenerationOptions, GenerationType, PromptCount, Style,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "stockprompt")]
#[command(about = "Generate microstock prompts for AI video and image tools")]
struct CliArgs {
    /// The idea to expand, e.g. "a cute robot waving".
    #[arg(value_name = "IDEA")]
    idea: String,

    /// What the prompts will drive.
    #[arg(long = "type", value_enum, default_value_t = GenerationType::Video)]
    generation_type: GenerationType,

    #[arg(long, value_enum, default_value_t = Background::Detailed)]
    background: Background,

    #[arg(long, value_enum, default_value_t = Style::Auto)]
    style: Style,

    /// Audio handling; only meaningful with `--type video`.
    #[arg(long, value_enum, default_value_t = Audio::NoAudio)]
    audio: Audio,

    /// Number of prompts to request (clamped to 1-20).
    #[arg(long, short = 'n', default_value = "3", value_parser = parse_count_arg)]
    count: PromptCount,

    /// Directory to save <type>-prompts.txt in.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

fn parse_count_arg(input: &str) -> std::result::Result<PromptCount, String> {
    let count: u32 = input
        .parse()
        .map_err(|_| format!("Invalid count '{}'. Expected a number.", input))?;
    Ok(PromptCount::new(count))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockprompt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let options = GenerationOptions {
        idea: args.idea,
        generation_type: args.generation_type,
        background: args.background,
        style: args.style,
        audio: args.audio,
        count: args.count,
    };

    match App::new() {
        Ok(app) => match app.run(&options, args.out.as_deref()).await {
            Ok(prompts) => {
                print_prompts(&prompts);
                Ok(())
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_prompts(prompts: &[String]) {
    for (index, prompt) in prompts.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}. {}", index + 1, prompt);
    }
}
