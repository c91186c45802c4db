use clap::Parser;
use edu_dashboard::adapters::export::export_records_csv;
use edu_dashboard::adapters::{JsonSink, TerminalSink};
use edu_dashboard::config::{Command, OutputFormat};
use edu_dashboard::core::aggregate::quantity_map;
use edu_dashboard::core::dashboard::render_view;
use edu_dashboard::core::CatalogProvider;
use edu_dashboard::host::parse_quantity_arg;
use edu_dashboard::utils::error::ErrorSeverity;
use edu_dashboard::utils::{logger, validation::Validate};
use edu_dashboard::{aggregate, ChangeEvent, CliConfig, Dashboard, DashboardError, Session};
use std::io::{BufRead, BufReader, Read};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting edu-dashboard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), DashboardError> {
    let dashboard_config = config.load_dashboard_config()?;
    dashboard_config.validate()?;
    tracing::info!(
        "✅ Configuration loaded: {} catalog items",
        dashboard_config.catalog().len()
    );

    let dashboard = Dashboard::from_provider(&dashboard_config);
    let mut session = Session::new(dashboard, dashboard_config.slider_default());

    match &config.command {
        Command::Slider { value } => {
            let events = vec![ChangeEvent::Slider { value: *value }];
            render_events(config.format, &mut session, events)
        }
        Command::Fruits { quantities } => {
            let events = quantity_events(quantities)?;
            render_events(config.format, &mut session, events)
        }
        Command::Words { text } => {
            let value = match text {
                Some(text) => text.clone(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            render_events(config.format, &mut session, vec![ChangeEvent::Text { value }])
        }
        Command::Session { file } => {
            let reader: Box<dyn BufRead> = match file {
                Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
                None => Box::new(BufReader::new(std::io::stdin())),
            };
            let stdout = std::io::stdout();
            match config.format {
                OutputFormat::Text => {
                    let mut sink = TerminalSink::new(stdout.lock());
                    session.replay(reader, &mut sink)?;
                }
                OutputFormat::Json => {
                    let mut sink = JsonSink::new(stdout.lock());
                    session.replay(reader, &mut sink)?;
                }
            }
            Ok(())
        }
        Command::Export { quantities, output } => {
            for event in quantity_events(quantities)? {
                session.apply(event)?;
            }
            let catalog = dashboard_config.catalog();
            let entries = session.state().entries(catalog);
            let records = aggregate(catalog, &quantity_map(&entries));
            if records.is_empty() {
                tracing::warn!("💡 No chartable quantities, exported file has no rows");
            }
            export_records_csv(&records, output)?;
            tracing::info!("📁 Exported {} records to {}", records.len(), output.display());
            println!("📁 Output saved to: {}", output.display());
            Ok(())
        }
    }
}

fn quantity_events(args: &[String]) -> Result<Vec<ChangeEvent>, DashboardError> {
    args.iter()
        .map(|arg| {
            let (item, value) = parse_quantity_arg(arg)?;
            Ok(ChangeEvent::Quantity { item, value })
        })
        .collect()
}

/// Applies every event, then renders the resulting page once.
fn render_events(
    format: OutputFormat,
    session: &mut Session,
    events: Vec<ChangeEvent>,
) -> Result<(), DashboardError> {
    for event in events {
        session.apply(event)?;
    }

    let view = session.view();
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Text => {
            println!("{}", view.title);
            let mut sink = TerminalSink::new(stdout.lock()).with_footer();
            render_view(&view, &mut sink)
        }
        OutputFormat::Json => {
            let mut sink = JsonSink::new(stdout.lock());
            render_view(&view, &mut sink)
        }
    }
}
