use std::fmt::Debug;
use std::hash::Hash;

use super::code::CodeTable;
use super::BitString;
use crate::error::Error;
use crate::Result;

impl<S: Eq + Hash + Debug> CodeTable<S> {
    /// Concatenates the code of every symbol in input order. The output
    /// length is the sum of the code lengths of the inputs.
    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        let mut bits = BitString::new();
        for symbol in symbols {
            let code = self
                .code(symbol)
                .ok_or_else(|| Error::SymbolNotInTable(format!("{:?}", symbol)))?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::huffman::code::CodeTable;
    use crate::huffman::frequency::FrequencyTable;
    use crate::huffman::tree::HuffmanTree;

    fn build_code_table(message: &str) -> CodeTable<char> {
        let frequencies = FrequencyTable::from_symbols(message.chars());
        let tree = HuffmanTree::build(&frequencies).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_encode_concatenates_codes_in_input_order() {
        let codes = build_code_table("aabbbbcccccccc");
        let bits = codes.encode(&['c', 'a', 'b']).unwrap();
        let expected = format!(
            "{}{}{}",
            codes.code(&'c').unwrap(),
            codes.code(&'a').unwrap(),
            codes.code(&'b').unwrap()
        );
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_encoded_length_is_sum_of_code_lengths() {
        let message = "huffman algorithm";
        let codes = build_code_table(message);
        let symbols: Vec<char> = message.chars().collect();
        let bits = codes.encode(&symbols).unwrap();
        let expected_length: usize = symbols
            .iter()
            .map(|symbol| codes.code(symbol).unwrap().len())
            .sum();
        assert_eq!(bits.len(), expected_length);
    }

    #[test]
    fn test_encoding_an_unknown_symbol_fails() {
        let codes = build_code_table("abc");
        match codes.encode(&['a', 'z']) {
            Err(Error::SymbolNotInTable(symbol)) => assert_eq!(symbol, "'z'"),
            _ => panic!("Unknown symbol was encoded"),
        }
    }

    #[test]
    fn test_single_symbol_alphabet_encodes_one_bit_per_occurrence() {
        let codes = build_code_table("aaa");
        let bits = codes.encode(&['a', 'a', 'a']).unwrap();
        assert_eq!(bits, "000");
    }
}
