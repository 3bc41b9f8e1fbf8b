use crate::config::{validate_settings, DefaultConfig};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "demo-app")]
#[command(about = "Prints a banner, the current time, a processed item list and a sum")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,

    /// Accepted and ignored.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub ignored: Vec<String>,

    #[arg(skip)]
    settings: DefaultConfig,
}

impl CliConfig {
    /// Parses process arguments. Anything clap rejects falls back to defaults,
    /// so no argument can keep the run from happening.
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args_os())
    }

    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Ignoring unparsable arguments: {:?}", e.kind());
                Self::default()
            }
        }
    }
}

impl ConfigProvider for CliConfig {
    fn version(&self) -> &str {
        self.settings.version()
    }

    fn items(&self) -> &[&'static str] {
        self.settings.items()
    }

    fn min_item_length(&self) -> usize {
        self.settings.min_item_length()
    }

    fn operands(&self) -> (i32, i32) {
        self.settings.operands()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
