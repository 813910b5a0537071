use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// Exits the process with status 2 if the arguments are invalid.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let xx = Args::parse();
    if let Err(e) = xx.validate() {
        eprintln!("Error: {e}");
        std::process::exit(2);
    }
    CleanArgs::new(xx)
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if an argument combination clap cannot check on its own is invalid
    pub fn validate(&self) -> Result<(), String> {
        validation::check_timeout(self.upstream_timeout_secs)?;
        if self.workers == Some(0) {
            return Err("workers must be at least 1.".to_string());
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        if !validation::static_dir_exists(&args.static_dir) {
            log::warn!(
                "static directory '{}' not found, /static will return 404",
                args.static_dir
            );
        }
        CleanArgs {
            bind: args.bind,
            upstream_base_url: args.upstream_base_url,
            upstream_timeout_secs: args.upstream_timeout_secs,
            static_dir: args.static_dir,
            workers: args.workers,
        }
    }
}
