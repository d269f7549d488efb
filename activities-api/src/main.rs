use std::path::PathBuf;

use activities_api::{ServerSettings, SeedSource, built_info};
use clap::Parser;

#[derive(Parser)]
#[command(name = "activities-api")]
#[command(about = "Serves the Mergington High School activity signup API")]
#[command(version)]
struct Cli {
    /// TOML roster to start from instead of the built-in activities
    /// (overrides ACTIVITIES_SEED_FILE)
    #[arg(long, value_name = "PATH")]
    seed_file: Option<PathBuf>,

    /// Directory served under /static (overrides ACTIVITIES_STATIC_DIR)
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,

    /// Print build metadata and exit
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version_info: bool,
}

impl Cli {
    fn settings(self) -> ServerSettings {
        let mut settings = ServerSettings::from_env();
        if let Some(path) = self.seed_file {
            settings.seed = SeedSource::File(path);
        }
        if let Some(dir) = self.static_dir {
            settings.static_dir = dir;
        }
        settings
    }
}

fn print_version_info() {
    println!("activities-api {}", built_info::PKG_VERSION);
    println!("Built: {}", built_info::BUILT_TIME_UTC);
    println!("Target: {}", built_info::TARGET);
    if let Some(commit) = built_info::GIT_COMMIT_HASH {
        println!("Git commit: {}", commit);
    }
}

#[rocket::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.version_info {
        print_version_info();
        return;
    }

    // Ignition failures (e.g. a bad seed file) are logged by Rocket itself;
    // only the exit status is left to set here.
    if let Err(e) = activities_api::rocket_with(cli.settings()).launch().await {
        rocket::error!("activities-api stopped: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "activities-api",
            "--seed-file",
            "roster.toml",
            "--static-dir",
            "web",
        ])
        .expect("valid arguments");

        let settings = cli.settings();
        assert_eq!(settings.seed, SeedSource::File(PathBuf::from("roster.toml")));
        assert_eq!(settings.static_dir, PathBuf::from("web"));
    }

    #[test]
    fn test_version_info_flag() {
        let cli = Cli::try_parse_from(["activities-api", "--version-info"]).expect("valid arguments");
        assert!(cli.version_info);
        assert!(cli.seed_file.is_none());
    }
}
