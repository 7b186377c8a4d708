use anyhow::Context;
use clap::Parser;
use domain_checker::utils::logger;
use domain_checker::{
    AvailabilityQueryService, CheckerError, CliConfig, GeminiClient, OutputMode, SearchSession,
    SearchState,
};
use std::io::{IsTerminal, Write};

fn exit_with_config_error(e: CheckerError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // API_KEY 只在啟動時讀一次
    let (settings, output) = match config.load_settings(std::env::var("API_KEY").ok()) {
        Ok(loaded) => loaded,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            exit_with_config_error(e)
        }
    };

    // 日誌格式跟著輸出模式走（含設定檔的 [output] json）
    logger::init_logger(output, config.verbose);
    tracing::info!("Starting domain-checker");
    tracing::debug!("Model settings: {:?}", settings);

    let service = AvailabilityQueryService::new(GeminiClient::new(settings));
    let spinner = output == OutputMode::Cards && std::io::stderr().is_terminal();
    let mut session = SearchSession::new(service, output).with_spinner(spinner);

    let mut stdout = std::io::stdout();

    let Some(domain) = config.domain.as_deref() else {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session
            .run_interactive(stdin, &mut stdout)
            .await
            .context("interactive session failed")?;
        return Ok(());
    };

    if !session.submit(domain).await {
        eprintln!("❌ Please enter a domain name, e.g. myawesomewebsite.com");
        std::process::exit(1);
    }

    if let Some(text) = session.render().context("failed to render result")? {
        writeln!(stdout, "{}", text)?;
    }

    if matches!(session.state(), SearchState::Error(_)) {
        std::process::exit(2);
    }

    Ok(())
}
