//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments.

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use super::{interactive, output};
use crate::config::{LayoutConfig, Prompter, configure_advanced};
use crate::constants::APP_VERSION;
use crate::error::SpyError;
use crate::pipeline::{self, GenerateOptions};
use crate::platform::{ScreenSize, SystemPlatform, path};
use crate::wallpaper;

/// Spy - Machine identity wallpaper generator.
///
/// Renders the computer's hostname onto a calibration wallpaper (grid,
/// aspect ratio circle and border) sized to the primary screen, saves it
/// as a bitmap and sets it as the desktop background.
#[derive(Parser, Debug)]
#[command(name = "spy")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Generate the wallpaper and set it as the desktop background.
    ///
    /// Runs without the mode menu: defaults are used unless --advanced is
    /// given, in which case the configuration wizard runs first.
    #[command(
        verbatim_doc_comment,
        after_long_help = r#"Examples:
  spy generate                                  # Default layout, detected resolution
  spy generate --advanced                       # Customize colors and features first
  spy generate --width 3840 --height 2160       # Render for a specific resolution
  spy generate --hostname BUILD-07 --no-apply   # Preview only, do not change the desktop
  spy generate --output ~/Pictures/spy.bmp      # Save somewhere else"#
    )]
    Generate(GenerateArgs),

    /// Write the application icon files.
    ///
    /// Writes spy_icon.png (256x256 preview) and spy_icon.ico (16 to 256px)
    /// into the given directory.
    Icon {
        /// Directory to write the icon files into.
        #[arg(long, short, value_name = "DIR", default_value = ".")]
        output: String,
    },

    /// Print the default layout configuration as JSON.
    Config,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    ///
    /// Usage:
    ///   eval "$(spy completions --shell zsh)"
    ///   spy completions --shell bash > ~/.local/share/bash-completion/completions/spy
    ///   spy completions --shell fish > ~/.config/fish/completions/spy.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

/// Arguments of the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Run the configuration wizard before generating.
    #[arg(long, short)]
    pub advanced: bool,

    /// Draw this hostname instead of the machine's.
    #[arg(long, value_name = "NAME")]
    pub hostname: Option<String>,

    /// Canvas width in pixels. Requires --height.
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Canvas height in pixels. Requires --width.
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Where to save the bitmap. Defaults to the app-data directory.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,

    /// Save the wallpaper without setting it as the desktop background.
    #[arg(long)]
    pub no_apply: bool,
}

impl GenerateArgs {
    /// Returns the requested canvas size, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if only one of `--width` and `--height` was given.
    pub fn screen_size(&self) -> Result<Option<ScreenSize>, SpyError> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Ok(Some(ScreenSize::new(width, height))),
            (None, None) => Ok(None),
            _ => Err(SpyError::InvalidArguments(
                "--width and --height must be given together".to_string(),
            )),
        }
    }

    /// Returns the expanded output path, if any.
    #[must_use]
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_deref().map(path::expand).filter(|p| !p.as_os_str().is_empty())
    }

    /// Builds pipeline options around `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size arguments are inconsistent.
    pub fn to_options(&self, config: LayoutConfig) -> Result<GenerateOptions, SpyError> {
        Ok(GenerateOptions {
            config,
            hostname: self.hostname.clone(),
            size: self.screen_size()?,
            output: self.output_path(),
            apply: !self.no_apply,
        })
    }
}

impl Cli {
    /// Executes the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), SpyError> {
        match &self.command {
            None => interactive::run(false),
            Some(Commands::Generate(args)) => Self::execute_generate(args),
            Some(Commands::Icon { output: dir }) => Self::execute_icon(dir),
            Some(Commands::Config) => {
                let value = serde_json::to_value(LayoutConfig::DEFAULT)?;
                output::print_highlighted_json(&value);
                Ok(())
            }
            Some(Commands::Completions { shell }) => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Prints shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "spy", &mut io::stdout());
    }

    fn execute_generate(args: &GenerateArgs) -> Result<(), SpyError> {
        // Reject bad size arguments before asking any questions
        args.screen_size()?;

        let config = if args.advanced {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
            configure_advanced(&mut prompter)?
        } else {
            LayoutConfig::DEFAULT
        };

        let options = args.to_options(config)?;
        let report = pipeline::generate(&SystemPlatform, &options, &mut io::stdout().lock())?;
        output::print_summary(&report);
        Ok(())
    }

    fn execute_icon(dir: &str) -> Result<(), SpyError> {
        let dir = path::expand(dir);
        let dir = if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir };

        let files = wallpaper::write_icons(&dir)?;
        println!("Created {}", files.png.display());
        println!("Created {}", files.ico.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spy").chain(args.iter().copied())).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        let mut all = vec!["generate"];
        all.extend_from_slice(args);
        match parse(&all).command {
            Some(Commands::Generate(args)) => args,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbose_is_counted_globally() {
        let cli = parse(&["generate", "-vv"]);
        assert_eq!(cli.verbose, 2);
        let cli = parse(&["-v", "config"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_generate_defaults() {
        let args = generate_args(&[]);
        assert!(!args.advanced);
        assert!(!args.no_apply);
        assert_eq!(args.screen_size().unwrap(), None);
        assert_eq!(args.output_path(), None);

        let options = args.to_options(LayoutConfig::DEFAULT).unwrap();
        assert!(options.apply);
        assert!(options.hostname.is_none());
    }

    #[test]
    fn test_generate_size_pair() {
        let args = generate_args(&["--width", "2560", "--height", "1440"]);
        assert_eq!(args.screen_size().unwrap(), Some(ScreenSize::new(2560, 1440)));
    }

    #[test]
    fn test_generate_lone_width_is_rejected() {
        let args = generate_args(&["--width", "2560"]);
        let err = args.screen_size().unwrap_err();
        assert!(matches!(err, SpyError::InvalidArguments(_)));
        assert!(err.to_string().contains("--height"));
    }

    #[test]
    fn test_generate_zero_width_is_a_parse_error() {
        let result = Cli::try_parse_from(["spy", "generate", "--width", "0", "--height", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_flags() {
        let args = generate_args(&["--advanced", "--hostname", "BUILD-07", "--no-apply", "-o", "/tmp/w.bmp"]);
        assert!(args.advanced);
        assert_eq!(args.hostname.as_deref(), Some("BUILD-07"));

        let options = args.to_options(LayoutConfig::DEFAULT).unwrap();
        assert!(!options.apply);
        assert_eq!(options.output, Some(PathBuf::from("/tmp/w.bmp")));
    }

    #[test]
    fn test_generate_output_expands_tilde() {
        let args = generate_args(&["--output", "~/spy.bmp"]);
        let output = args.output_path().unwrap();
        assert!(!output.to_string_lossy().starts_with('~'));
        assert!(output.ends_with("spy.bmp"));
    }

    #[test]
    fn test_icon_default_directory() {
        match parse(&["icon"]).command {
            Some(Commands::Icon { output }) => assert_eq!(output, "."),
            other => panic!("expected icon, got {other:?}"),
        }
    }

    #[test]
    fn test_completions_shell() {
        assert!(matches!(
            parse(&["completions", "--shell", "zsh"]).command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }
}
