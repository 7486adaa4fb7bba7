//! trailhead - Outdoor Adventures storefront shell

use anyhow::Result;
use clap::{Parser, Subcommand};

use trailhead_core::{Activity, CategoryKey, CategoryStyle, ThemeTokens};

#[derive(Parser)]
#[command(
    name = "trailhead",
    version,
    about = "Outdoor Adventures storefront shell",
    long_about = "Development server and theme tooling for the Outdoor Adventures\n\
                  storefront frontend.\n\
                  \n\
                  The `serve` command hosts the compiled Leptos bundle together with a\n\
                  read-only fixture API, so the SPA runs without the CMS backend. In\n\
                  production the same /api paths are reverse-proxied to the real CMS.\n\
                  \n\
                  Examples:\n\
                    trailhead serve                  # Serve SPA + fixture API on :3000\n\
                    trailhead serve --port 8080      # Custom port\n\
                    trailhead theme '#F59E0B'        # Print derived theme tokens\n\
                    trailhead categories             # List the activity allow-list\n\
                  \n\
                  Environment Variables:\n\
                    TRAILHEAD_PORT                   # Default port for serve"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the SPA and the dev fixture API (default)
    Serve {
        /// Port for the web server
        #[arg(long, default_value = "3000", env = "TRAILHEAD_PORT")]
        port: u16,
    },
    /// Print the theme tokens derived from a primary color
    Theme {
        /// 6-digit hex color, e.g. '#F59E0B'
        hex: String,
    },
    /// List the activity category allow-list
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailhead=info,trailhead_web=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.mode.unwrap_or_else(default_mode) {
        Mode::Serve { port } => {
            tracing::info!(port, "starting dev server");
            trailhead_web::run(port).await?;
        }
        Mode::Theme { hex } => {
            print_theme(&hex);
        }
        Mode::Categories => {
            for activity in Activity::ALL {
                println!("{:10} /{}", activity.label(), activity.as_str());
            }
        }
    }

    Ok(())
}

/// Mode for a bare `trailhead` invocation: serve, with the same
/// `TRAILHEAD_PORT` override the explicit subcommand honours.
fn default_mode() -> Mode {
    let port = std::env::var("TRAILHEAD_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);
    Mode::Serve { port }
}

/// Print the custom properties a primary color resolves to, the same way
/// the frontend would apply them. Handy when debugging admin-picked colors.
fn print_theme(hex: &str) {
    let style = CategoryStyle {
        primary_color_hex: hex.to_string(),
        ..CategoryStyle::fallback(CategoryKey::Default)
    };
    let tokens = ThemeTokens::from_style(&style);

    if tokens.primary_hex != hex {
        eprintln!("'{hex}' is not a 6-digit hex color; showing defaults");
    }

    for (name, value) in tokens.custom_properties() {
        println!("{name}: {value};");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_honours_port_env() {
        std::env::set_var("TRAILHEAD_PORT", "4123");
        let Mode::Serve { port } = default_mode() else {
            panic!("bare invocation should serve");
        };
        assert_eq!(port, 4123);

        std::env::remove_var("TRAILHEAD_PORT");
        let Mode::Serve { port } = default_mode() else {
            panic!("bare invocation should serve");
        };
        assert_eq!(port, 3000);
    }
}
