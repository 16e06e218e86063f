use std::path::PathBuf;

/// Runtime settings, resolved once at startup from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server listens on.
    pub bind: String,
    /// Store file; `None` keeps the sheet in memory only.
    pub data_file: Option<PathBuf>,
    /// Directory of `.hbs` page and fragment templates.
    pub templates_dir: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Sheet name shown on the page.
    pub sheet_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: "127.0.0.1:3000".to_string(),
            data_file: Some(PathBuf::from("sheet.bin.gz")),
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            sheet_name: "Data".to_string(),
        }
    }
}

impl Config {
    /// Parses flags, falling back to defaults for anything not given.
    /// Unknown flags are ignored rather than fatal.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--bind" => {
                    if let Some(value) = args.next() {
                        config.bind = value;
                    }
                }
                "--data" => {
                    if let Some(value) = args.next() {
                        config.data_file = Some(PathBuf::from(value));
                    }
                }
                "--ephemeral" => config.data_file = None,
                "--templates" => {
                    if let Some(value) = args.next() {
                        config.templates_dir = PathBuf::from(value);
                    }
                }
                "--static" => {
                    if let Some(value) = args.next() {
                        config.static_dir = PathBuf::from(value);
                    }
                }
                "--sheet-name" => {
                    if let Some(value) = args.next() {
                        config.sheet_name = value;
                    }
                }
                other => log::warn!("ignoring unknown argument: {}", other),
            }
        }

        config
    }
}
