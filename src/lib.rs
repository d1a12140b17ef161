use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{CodeTable, FrequencyTable, HuffmanTree};

mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    show_tree: bool,
    verify: bool,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_str().unwrap().to_owned(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.to_str().unwrap().to_owned(), e)
        })
}

fn read_message(file: &mut File) -> Result<String> {
    let mut message = String::new();
    file.read_to_string(&mut message)
        .map_err(Error::FailedToReadInputFile)?;
    Ok(message)
}

pub fn encode_text_file(arguments: &Arguments) -> Result<()> {
    let mut input_file = open_input_file(&arguments.input_file)?;
    let message = read_message(&mut input_file)?;
    let symbols: Vec<char> = message.chars().collect();

    let frequencies = FrequencyTable::from_symbols(symbols.iter().copied());
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);
    log::info!(
        "built a code table with {} entries for {} input symbols",
        codes.len(),
        symbols.len()
    );
    log::debug!("code table:\n{}", codes);
    if arguments.show_tree {
        println!("{}", tree);
    }

    let bits = codes.encode(&symbols)?;
    log::info!("encoded {} symbols into {} bits", symbols.len(), bits.len());

    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = BufWriter::new(&output_file);
    writer
        .write_all(bits.as_bytes())
        .map_err(Error::FailedToWriteOutputFile)?;
    writer.flush().map_err(Error::FailedToWriteOutputFile)?;

    if arguments.verify {
        let decoded = tree.decode(&bits)?;
        if decoded != symbols {
            return Err(Error::VerificationFailed);
        }
        log::info!("decoded bit string matches the input");
    }
    Ok(())
}
