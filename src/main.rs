use std::env::args_os;

use huffman_codec::{encode_text_file, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match encode_text_file(&arguments) {
        Ok(_) => println!("Encoding successful"),
        Err(e) => eprintln!("Encoding failed because of: {}", e),
    }
}
