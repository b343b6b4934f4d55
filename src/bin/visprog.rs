use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use visprog::{Console, ImageFormat, RenderConfig, sales, studio};

#[derive(Parser, Debug)]
#[command(
    name = "visprog",
    version,
    about = "Enter data at the prompt and render line, bar & pie charts"
)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven line plot / bar graph / pie chart builder (default).
    Studio,
    /// Quarterly sales entry with summary, grouped bar and distribution pie.
    Sales(SalesArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Svg,
    Png,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Directory charts are written to.
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,
    /// Image format of rendered charts.
    #[arg(long, global = true, value_enum, default_value_t = OutFormat::Svg)]
    format: OutFormat,
    /// Width of each chart (default 1000).
    #[arg(long, global = true, default_value_t = 1000)]
    width: u32,
    /// Height of each chart (default 600).
    #[arg(long, global = true, default_value_t = 600)]
    height: u32,
    /// Locale for number formatting (e.g., en, de, fr).
    #[arg(long, global = true, default_value = "en")]
    locale: String,
    /// TrueType font used for chart text (searched in common locations if omitted).
    #[arg(long, global = true)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SalesArgs {
    /// Print the summary as JSON instead of a text block.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl RenderArgs {
    fn into_config(self) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.out_dir = self.out_dir;
        config.format = match self.format {
            OutFormat::Svg => ImageFormat::Svg,
            OutFormat::Png => ImageFormat::Png,
        };
        config.width = self.width;
        config.height = self.height;
        config.locale = self.locale;
        config.font = self.font;
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = cli.render.into_config();
    let mut console = Console::stdio();
    log::debug!("render settings: {config:?}");

    match cli.cmd.unwrap_or(Command::Studio) {
        Command::Studio => studio::run(&mut console, &mut config),
        Command::Sales(args) => sales::run(&mut console, &mut config, args.json).map(|_| ()),
    }
}
