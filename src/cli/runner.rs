use crate::{
    cli::{Cli, Commands, CopyArgs},
    constants::{assets, BIN_NAME},
    error::Result,
    registry::{TemplateKind, TEMPLATES},
    store::AssetSource,
};
use clap::CommandFactory;
use std::io::Write;
use std::path::PathBuf;

/// Executes one parsed command against an asset store.
pub struct Runner<S, W> {
    store: S,
    out: W,
    work_dir: PathBuf,
}

impl<S: AssetSource, W: Write> Runner<S, W> {
    /// Creates a runner that writes to `out` and copies into the current
    /// directory.
    pub fn new(store: S, out: W) -> Self {
        Self { store, out, work_dir: PathBuf::from(".") }
    }

    /// Sets the directory `copy` writes into.
    pub fn with_work_dir<P: Into<PathBuf>>(mut self, work_dir: P) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Runs `command`; `None` prints the usage text.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        log::debug!("Using assets from {}", self.store.root().display());
        match command {
            None | Some(Commands::Help(_)) => self.print_help(),
            Some(Commands::Guide(_)) => self.print_asset(assets::GUIDE),
            Some(Commands::Readme(_)) => self.print_asset(assets::README),
            Some(Commands::Eula(_)) => self.print_template(TemplateKind::Eula),
            Some(Commands::Licenses(_)) => self.print_template(TemplateKind::Licenses),
            Some(Commands::Attribution(_)) => {
                self.print_template(TemplateKind::Attribution)
            }
            Some(Commands::List(args)) if args.json => self.print_list_json(),
            Some(Commands::List(_)) => self.print_list(),
            Some(Commands::Copy(args)) => self.copy(args),
        }
    }

    fn print_help(&mut self) -> Result<()> {
        let help = Cli::command().render_help();
        writeln!(self.out, "{help}")?;
        Ok(())
    }

    fn print_asset(&mut self, asset_path: &str) -> Result<()> {
        let content = self.store.read_asset(asset_path)?;
        writeln!(self.out, "{content}")?;
        Ok(())
    }

    fn print_template(&mut self, kind: TemplateKind) -> Result<()> {
        self.print_asset(kind.asset_path())
    }

    fn print_list(&mut self) -> Result<()> {
        writeln!(self.out, "Available Templates:")?;
        writeln!(self.out)?;
        for (i, entry) in TEMPLATES.iter().enumerate() {
            writeln!(self.out, "{}. {:<18}- {}", i + 1, entry.name, entry.description)?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Use \"{BIN_NAME} copy <template>\" to copy a template to your current directory."
        )?;
        Ok(())
    }

    fn print_list_json(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(TEMPLATES)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    fn copy(&mut self, args: CopyArgs) -> Result<()> {
        let kind: TemplateKind = args.template.parse()?;
        let destination = self.work_dir.join(kind.file_name());
        self.store.copy_template(kind.as_str(), &destination)?;
        writeln!(self.out, "✓ Copied {} to current directory", kind.file_name())?;
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run<S: AssetSource, W: Write>(
    command: Option<Commands>,
    store: S,
    out: W,
) -> Result<()> {
    Runner::new(store, out).run(command)
}
