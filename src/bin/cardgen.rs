use std::path::PathBuf;

use clap::Parser;

use cardgen::{RunOptions, run};

#[derive(Parser, Debug)]
#[command(name = "cardgen", version, about = "Generate member cards from a YAML roster")]
struct Cli {
    /// YAML roster file.
    #[arg(long, default_value = "./config.yaml")]
    config: PathBuf,

    /// Assets root directory (avatars/, clubs/, grades/, icons/, frame/).
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// TrueType font used for member names.
    #[arg(long, default_value = "assets/font/mplus-1p-light.ttf")]
    font: PathBuf,

    /// Output directory for generated cards.
    #[arg(long, default_value = "build/cards")]
    out: PathBuf,

    /// Stop at the first member whose card fails.
    #[arg(long, default_value_t = false)]
    stop_on_error: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let summary = run(&RunOptions {
        config_path: cli.config,
        assets_root: cli.assets,
        font_path: cli.font,
        out_dir: cli.out,
        stop_on_error: cli.stop_on_error,
    })?;

    if summary.failed > 0 {
        eprintln!(
            "{} card(s) failed, {} generated",
            summary.failed, summary.generated
        );
    }
    Ok(())
}
