use ai4u_catalog::config::cli::{Command, ListArgs};
use ai4u_catalog::utils::{logger, validation::Validate};
use ai4u_catalog::{
    Catalog, CatalogError, CatalogStore, ChatClient, CliConfig, FilePreferenceStore,
    HttpImageLoader, ImageMapping, ImagePreloader, Language, LanguagePreference, PreloadPlan,
    ReplySource, Service, TomlConfig,
};
use clap::Parser;
use url::Url;

const THUMBNAIL_WIDTH: u32 = 640;
const PREFERRED_FORMATS: &[&str] = &["avif", "webp"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let config = match cli.load_toml() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.log_json || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_with_level(cli.verbose, config.log_level());
    }

    tracing::info!("Starting ai4u-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &TomlConfig) -> Result<(), CatalogError> {
    let mut store = CatalogStore::new(Catalog::builtin()?);

    match &cli.command {
        Command::List(args) => list(&mut store, args)?,
        Command::Show { id } => {
            let service = store
                .service_by_id(id)
                .ok_or_else(|| CatalogError::ServiceNotFound { id: id.clone() })?;
            print_details(service);

            let related = ai4u_catalog::core::views::related(store.catalog(), service, 3);
            if !related.is_empty() {
                println!();
                println!("🔗 Related:");
                for service in &related {
                    println!("  • {} ({})", service.title, service.id);
                }
            }
        }
        Command::Categories => {
            for category in store.categories() {
                println!("{:<14} {}", category.as_str(), category.label());
            }
        }
        Command::Tags => {
            for tag in store.tags() {
                println!("{}", tag);
            }
        }
        Command::Stats => {
            let stats = store.stats();
            println!("📊 Catalog Statistics:");
            println!("  Total:    {}", stats.total);
            println!("  Active:   {}", stats.active);
            println!("  Featured: {}", stats.featured);
            println!();
            println!("  By category:");
            for (category, count) in &stats.by_category {
                println!("    {:<14} {}", category.as_str(), count);
            }
            println!("  By super category:");
            for (super_category, count) in &stats.by_super_category {
                println!("    {:<14} {}", super_category.as_str(), count);
            }
        }
        Command::Chat { message } => {
            let client = ChatClient::new(config.chat_settings()?)?;
            match client.send(message).await {
                Some(reply) => {
                    if reply.source == ReplySource::Fallback {
                        tracing::info!("💬 Webhook unavailable, showing fallback reply");
                    }
                    println!("🤖 {}", reply.message);
                }
                None => println!("💡 Nothing to send: the message is empty"),
            }
        }
        Command::Preload { base_url } => preload(&store, config, base_url.as_deref()).await?,
        Command::Lang { value } => {
            let path = cli.preferences_path(config);
            let mut preference = LanguagePreference::load(FilePreferenceStore::new(path)).await;

            match value.as_deref() {
                None => {}
                Some("toggle") => {
                    preference.toggle().await?;
                }
                Some(code) => {
                    let language = code.parse::<Language>().map_err(|reason| {
                        CatalogError::InvalidConfigValueError {
                            field: "lang".to_string(),
                            value: code.to_string(),
                            reason,
                        }
                    })?;
                    preference.set(language).await?;
                }
            }

            println!("🌐 Language: {}", preference.current());
        }
    }

    Ok(())
}

fn list(store: &mut CatalogStore, args: &ListArgs) -> Result<(), CatalogError> {
    for action in args.to_actions() {
        store.dispatch(action);
    }

    let mut services = store.filtered_services();
    if let Some(super_category) = args.super_category {
        services.retain(|service| service.super_category == super_category);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    if services.is_empty() {
        println!("No services match the current filters");
        return Ok(());
    }

    for service in &services {
        let star = if service.featured { "⭐" } else { "  " };
        println!(
            "{} {:<26} {:<13} p{} [{}] {}",
            star,
            service.id,
            service.category.as_str(),
            service.priority,
            service.status,
            service.title
        );
    }
    println!();
    println!("{} of {} services", services.len(), store.catalog().len());

    Ok(())
}

fn print_details(service: &Service) {
    println!("📋 {} ({})", service.title, service.id);
    println!("  {}", service.subtitle);
    println!();
    println!("  {}", service.description);
    println!();
    println!("  Category:       {} / {}", service.category.label(), service.super_category);
    println!("  Status:         {}", service.status);
    println!("  Priority:       {}", service.priority);
    println!("  Delivery time:  {}", service.delivery_time);
    println!("  Tags:           {}", service.tags.join(", "));
    println!("  Benefits:");
    for benefit in &service.benefits {
        println!("    ✅ {}", benefit);
    }
}

async fn preload(
    store: &CatalogStore,
    config: &TomlConfig,
    base_url: Option<&str>,
) -> Result<(), CatalogError> {
    let base_url = base_url.unwrap_or(&config.site.base_url);
    let base = Url::parse(base_url).map_err(|e| CatalogError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let mut plan = if config.include_catalog_images() {
        PreloadPlan::from_services(store.catalog())
    } else {
        PreloadPlan::default()
    };
    plan.extend(config.preload_plan());

    if let Some(source) = config.image_mapping_source() {
        let mapping = ImageMapping::load_or_empty(&reqwest::Client::new(), source).await;
        let resolve = |urls: &mut Vec<String>| {
            for url in urls.iter_mut() {
                let best = mapping
                    .best_source(url.as_str(), THUMBNAIL_WIDTH, PREFERRED_FORMATS)
                    .to_string();
                *url = best;
            }
        };
        resolve(&mut plan.critical);
        resolve(&mut plan.important);
        resolve(&mut plan.background);
    }

    tracing::info!("🖼️ Preloading {} images from {}", plan.total(), base);
    let loader = HttpImageLoader::new(Some(base), config.image_timeout())?;
    let preloader = ImagePreloader::new(loader);
    let mut handle = preloader.spawn(plan);

    let mut progress = handle.subscribe();
    let mut last_phase = None;
    loop {
        let current = progress.borrow_and_update().clone();
        if last_phase != Some(current.phase) {
            last_phase = Some(current.phase);
            println!("⏳ Phase: {:?} ({} images)", current.phase, current.total);
        }
        if current.phase.is_finished() || progress.changed().await.is_err() {
            break;
        }
    }

    let final_progress = handle.wait_for(ai4u_catalog::PreloadPhase::Complete).await;
    let report = handle.join().await?;
    println!(
        "✅ Preload finished: {} loaded, {} failed ({:?})",
        report.loaded,
        report.failed.len(),
        final_progress.phase
    );
    for url in &report.failed {
        println!("  ⚠️ {}", url);
    }

    Ok(())
}
