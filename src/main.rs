use clap::Parser;
use terminal_clock::utils::logger;
use terminal_clock::{CliConfig, CtrlC, Session, SystemClock, TerminalSink};
use tokio::io::BufReader;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting terminal-clock");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 解析並驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let state = settings.initial_state(&SystemClock);
        let sink = TerminalSink::stdout(settings.title.clone(), settings.alarm_message.clone())
            .with_clear_screen(settings.clear_screen);
        let input = BufReader::new(tokio::io::stdin());

        let mut session = Session::new(state, &settings, input, std::io::stdout(), sink, CtrlC);
        session.run().await
    });

    // A pending stdin read would otherwise keep the runtime alive until Enter is pressed.
    runtime.shutdown_background();

    if let Err(e) = result {
        tracing::error!("❌ Clock session failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    Ok(())
}
