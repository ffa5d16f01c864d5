use crate::catalog::FuelFilter;
use crate::errors::LoadError;
use clap::{App, Arg, ArgMatches};
use std::fs;
use std::path::{Path, PathBuf};

pub struct Args {
    pub input_file: PathBuf,
    pub fuel_type: FuelFilter,
    pub list_types: bool,
}

impl Args {
    pub fn parse() -> Self {
        Self::from_matches(&Self::app().get_matches())
    }

    fn app() -> App<'static, 'static> {
        App::new("refuel-report")
            .version("0.1.0")
            .about("Monthly refueling cost report per fuel type")
            .arg(
                Arg::with_name("input_file")
                    .takes_value(true)
                    .required(true)
                    .help("path of the refueling file to read from"),
            )
            .arg(
                Arg::with_name("fuel_type")
                    .short("t")
                    .long("fuel-type")
                    .takes_value(true)
                    .default_value("all")
                    .help("fuel type to report on, \"all\" combines every type"),
            )
            .arg(
                Arg::with_name("list_types")
                    .short("l")
                    .long("list-types")
                    .help("print the fuel types found in the input and exit"),
            )
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let fuel_type = matches.value_of("fuel_type").unwrap_or_default();

        Self {
            input_file: PathBuf::from(matches.value_of("input_file").unwrap_or_default()),
            fuel_type: fuel_type.parse().unwrap_or(FuelFilter::All),
            list_types: matches.is_present("list_types"),
        }
    }

    /// Reads the whole input file, checking first that the path names an
    /// existing file.
    pub fn load_input_text(&self) -> Result<String, LoadError> {
        load_input_text(&self.input_file)
    }
}

pub fn load_input_text(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::EmptyPath);
    }

    if !path.is_file() {
        return Err(LoadError::NotAFile(path.to_path_buf()));
    }

    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
