use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_show_tree_argument(command);
        Self::register_verify_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn register_verify_argument(command: Command) -> Command {
        command.arg(Self::create_verify_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the text file to encode")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path the encoded bit string is written to")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: -t --show_tree "Print the constructed code tree")
    }

    fn create_verify_argument() -> Arg {
        arg!(verify: -c --verify "Decode the encoded bit string again and compare it against the input")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            show_tree: Self::extract_show_tree_argument(matches),
            verify: Self::extract_verify_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }

    fn extract_verify_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("verify")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
