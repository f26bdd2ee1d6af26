//! docanalysis — configuration resolver entry point.
//!
//! Startup sequence:
//!   1. Parse CLI flags
//!   2. Snapshot the environment (process env over `data/.env`)
//!   3. Init logger (CLI `-v` flags > RUST_LOG > LOG_LEVEL)
//!   4. Resolve configuration
//!   5. Log the redacted summary, print status and exit

use docanalysis::bootstrap::cli;
use docanalysis::config::{self, EnvFile, EnvFileStatus, EnvInput, ResolvedConfig, Secret, keys};
use docanalysis::error::AppError;
use docanalysis::logger;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = cli::parse_env_args();
    if args.help {
        cli::print_usage("docanalysis", "Resolve and report the document-analysis startup configuration.");
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let env = EnvInput::load(&cwd);

    let (log_level, force_cli_level) = logger::select_level(args.log_level, env.input.get(keys::LOG_LEVEL));
    logger::init(log_level, force_cli_level)?;

    env.log_status();

    let config = config::resolve(&env.input);
    config::log_summary(&config);

    print_startup_summary(&config, &env.env_file);
    Ok(())
}

fn print_startup_summary(config: &ResolvedConfig, env_file: &EnvFile) {
    let fit = |text: String| -> String {
        const WIDTH: usize = 58;
        let char_count = text.chars().count();
        if char_count >= WIDTH {
            let mut out = text.chars().take(WIDTH - 1).collect::<String>();
            out.push('…');
            out
        } else {
            format!("{text:<WIDTH$}")
        }
    };
    let or_unset = |value: &str| {
        if value.is_empty() { "(unset)".to_string() } else { value.to_string() }
    };
    let secret = |value: &Secret| or_unset(value.masked());

    let env_file_line = match &env_file.status {
        EnvFileStatus::Loaded { entries, .. } => format!("{} ({entries} entries)", env_file.path.display()),
        EnvFileStatus::Missing => format!("{} (missing)", env_file.path.display()),
        EnvFileStatus::Unreadable(_) => format!("{} (unreadable)", env_file.path.display()),
    };

    let provider_lines = vec![
        format!(
            "paperless: url={} token={}",
            or_unset(&config.paperless.api_url),
            secret(&config.paperless.api_token)
        ),
        format!("openai: key={}", secret(&config.openai.api_key)),
        format!("ollama: url={} model={}", config.ollama.api_url, config.ollama.model),
        format!(
            "custom: url={} model={} key={}",
            or_unset(&config.custom.api_url),
            or_unset(&config.custom.model),
            secret(&config.custom.api_key)
        ),
        format!(
            "azure: endpoint={} deployment={} version={}",
            or_unset(&config.azure.endpoint),
            or_unset(&config.azure.deployment_name),
            config.azure.api_version
        ),
    ];

    let l = &config.limit_functions;
    let limit_lines = vec![
        format!("tagging={} correspondents={}", l.activate_tagging, l.activate_correspondents),
        format!("document_type={} title={}", l.activate_document_type, l.activate_title),
        format!("custom_fields={}", l.activate_custom_fields),
    ];

    let p = &config.processing;
    let processing_lines = vec![
        format!("scan_interval={}", config.scan_interval),
        format!("disable_automatic={}", p.disable_automatic_processing),
        format!("predefined_mode={}", or_unset(&p.predefined_mode)),
        format!("ai_processed_tag={} ({})", p.add_ai_processed_tag, p.ai_processed_tag_name),
    ];

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ 📄 Document Analysis Configuration                           ║");
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ 🏷️  Version: {:<48}║", config.version);
    println!("║ 🧠 Provider: {:<48}║", config.ai_provider);
    println!("║   {}║", fit(format!("env: {env_file_line}")));
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ 🔌 Providers                                                 ║");
    for line in provider_lines {
        println!("║   {}║", fit(line));
    }
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ 🚦 Limit functions                                           ║");
    for line in limit_lines {
        println!("║   {}║", fit(line));
    }
    println!("╟──────────────────────────────────────────────────────────────╢");
    println!("║ ⚙️  Processing                                               ║");
    for line in processing_lines {
        println!("║   {}║", fit(line));
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
}
