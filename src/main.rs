mod commands;

use clap::{Parser, Subcommand};
use lingo_core::{config, traits::LocaleSource};
use lingo_i18n::{FixedLocales, SystemLocales};
use lingo_telemetry::Telemetry;

use commands::CategoryKind;

#[derive(Parser)]
#[command(
    name = "lingo",
    version,
    about = "Lingo: localization, layout direction, and privacy-safe telemetry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "lingo.toml", env = "LINGO_CONFIG")]
    config: String,

    /// Language setting code (1 = device, 2 = Hebrew, 3 = Arabic, 4 = English).
    #[arg(short, long, global = true)]
    setting: Option<i64>,

    /// Device locale to use instead of the system list (repeatable, in order).
    #[arg(short, long = "locale", global = true)]
    locales: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved language and direction tokens.
    Resolve,
    /// Translate a key, substituting {1}, {2}, ... with the given arguments.
    Translate {
        key: String,
        args: Vec<String>,
    },
    /// List keys missing from each language.
    Missing,
    /// Print the privacy-safe bucket for a value.
    Categorize {
        #[arg(value_enum)]
        kind: CategoryKind,
        value: String,
    },
    /// Report an analytic event (params as key=value).
    Event {
        name: String,
        params: Vec<String>,
    },
    /// Submit user feedback.
    Feedback {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        email: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.lingo.log_level)),
        )
        .init();

    let locales: Box<dyn LocaleSource> = if cli.locales.is_empty() {
        Box::new(SystemLocales)
    } else {
        Box::new(FixedLocales(cli.locales.clone()))
    };
    let setting = cli.setting.or(cfg.language.setting);
    let localizer = lingo_i18n::global();
    commands::setup_localizer(localizer, &cfg.language, setting, locales.as_ref())?;

    match cli.command {
        Commands::Resolve => {
            let report = commands::resolve_report(localizer);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Translate { key, args } => {
            println!("{}", commands::translate(localizer, &key, &args));
        }
        Commands::Missing => {
            let report = lingo_i18n::MissingReport::build(&localizer.catalog());
            print!("{}", report.render());
        }
        Commands::Categorize { kind, value } => {
            println!("{}", commands::categorize(kind, &value)?);
        }
        Commands::Event { name, params } => {
            let params = commands::parse_params(&params)?;
            let telemetry = Telemetry::from_config(&cfg.telemetry)?;
            if !telemetry.analytics().is_enabled() {
                anyhow::bail!(
                    "analytics is not configured. Set telemetry.enabled and \
                     telemetry.analytics_endpoint in {}.",
                    cli.config
                );
            }
            let wait = cfg.telemetry.timeout_secs;
            let startup = telemetry.start(commands::startup_params(localizer));
            commands::send_event(telemetry.analytics(), &name, params, wait).await;
            commands::wait_for(startup, wait).await;
            println!("event '{name}' sent");
        }
        Commands::Feedback { title, body, email } => {
            let telemetry = Telemetry::from_config(&cfg.telemetry)?;
            let Some(sink) = telemetry.feedback() else {
                anyhow::bail!(
                    "feedback is not configured. Set telemetry.enabled and \
                     telemetry.project_id in {}.",
                    cli.config
                );
            };
            let message = commands::submit_feedback(
                localizer,
                sink.as_ref(),
                &cfg.lingo.app_name,
                &title,
                &body,
                email.as_deref(),
            )
            .await?;
            println!("{message}");
        }
    }

    Ok(())
}
