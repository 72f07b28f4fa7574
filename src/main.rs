use anyhow::Context;
use clap::Parser;
use portfolio_page::config::Command;
use portfolio_page::core::form::ContactForm;
use portfolio_page::core::ContentProvider;
use portfolio_page::utils::{logger, validation::Validate};
use portfolio_page::{
    server, CliConfig, HttpAnimationSource, LocalAssets, PageEngine, PageError, PageRenderer,
    RenderOptions, SiteConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match &cli.command {
        Command::Serve { log_json: true, .. } => logger::init_json_logger(cli.verbose),
        _ => logger::init_cli_logger(cli.verbose),
    }

    tracing::info!("📁 Loading content from: {}", cli.config);

    let mut config = match SiteConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let timeout = config.request_timeout();
    let animations = HttpAnimationSource::new(timeout).unwrap_or_else(|e| fail(&e));
    let assets = LocalAssets::new(config.base_dir.clone());

    match cli.command.clone() {
        Command::Render { output, tab, today } => {
            let renderer = PageRenderer::new(config.style.clone());
            let engine = PageEngine::new(assets, animations, renderer);
            let options = RenderOptions {
                selected_tab: tab,
                today,
            };
            let rendered = engine.render(&config, &options).await;
            tokio::fs::write(&output, rendered.html.as_bytes())
                .await
                .with_context(|| format!("writing {}", output))?;
            tracing::info!("✅ Page written to {}", output);
            println!("✅ Page written to {}", output);
        }
        Command::Serve { host, port, .. } => {
            // 命令列覆蓋設定
            let server_config = config.server.get_or_insert_with(Default::default);
            if host.is_some() {
                server_config.host = host;
            }
            if port.is_some() {
                server_config.port = port;
            }
            let addr = config.server_addr().unwrap_or_else(|e| fail(&e));

            let renderer = PageRenderer::new(config.style.clone());
            let engine = Arc::new(PageEngine::new(assets, animations, renderer));
            let router = server::build_router(engine, Arc::new(config));
            if let Err(e) = server::serve(addr, router).await {
                fail(&e);
            }
        }
        Command::Check => {
            let renderer = PageRenderer::new(config.style.clone());
            let engine = PageEngine::new(assets, animations, renderer);
            let resources = engine.gather(&config).await;
            let refs = config.assets();

            println!("✅ {} is valid", cli.config);
            println!(
                "   {} project(s), {} experience entries",
                config.projects().len(),
                config.experience().len()
            );
            report(
                "profile image",
                refs.profile_image.as_deref(),
                resources.profile_image.is_some(),
            );
            report("resume", refs.resume.as_deref(), resources.resume.is_some());
            println!(
                "   animations: {}/{} available",
                resources.animations.len(),
                config.animations().len()
            );
            let form = ContactForm::from_settings(config.contact());
            let fields: Vec<&str> = form.fields().iter().map(|f| f.name).collect();
            println!(
                "   contact form: {} {} [{}]",
                form.method(),
                form.action,
                fields.join(", ")
            );
        }
    }

    Ok(())
}

fn report(label: &str, path: Option<&str>, available: bool) {
    match (path, available) {
        (None, _) => println!("   {}: not configured (placeholder)", label),
        (Some(path), true) => println!("   {}: {}", label, path),
        (Some(path), false) => println!("   {}: {} missing (placeholder)", label, path),
    }
}

fn fail(e: &PageError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
