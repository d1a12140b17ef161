use super::tree::{HuffmanTree, Node};
use crate::error::Error;
use crate::Result;

impl<S: Clone> HuffmanTree<S> {
    /// Walks the tree bit by bit: '0' descends left, '1' descends right;
    /// reaching a leaf emits its symbol and resets the cursor to the root.
    /// Because the codes are prefix-free no backtracking is required.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        if let Node::Leaf { symbol, .. } = self.root() {
            return decode_against_single_leaf(symbol, bits);
        }

        let mut symbols = Vec::new();
        let mut cursor = self.root();
        let mut mid_code = false;
        for bit in bits.chars() {
            let next = match (cursor, bit) {
                (Node::Internal { left, .. }, '0') => left.as_ref(),
                (Node::Internal { right, .. }, '1') => right.as_ref(),
                (_, other) => return Err(Error::InvalidBit(other)),
            };
            match next {
                Node::Leaf { symbol, .. } => {
                    symbols.push(symbol.clone());
                    cursor = self.root();
                    mid_code = false;
                }
                Node::Internal { .. } => {
                    cursor = next;
                    mid_code = true;
                }
            }
        }
        if mid_code {
            return Err(Error::TruncatedCode);
        }
        Ok(symbols)
    }
}

// The placeholder code of a lone leaf is "0", so a '0' emits the symbol and
// a '1' matches no code at all.
fn decode_against_single_leaf<S: Clone>(symbol: &S, bits: &str) -> Result<Vec<S>> {
    let mut symbols = Vec::new();
    for bit in bits.chars() {
        match bit {
            '0' => symbols.push(symbol.clone()),
            '1' => return Err(Error::DecodeFromSingleLeafTree),
            other => return Err(Error::InvalidBit(other)),
        }
    }
    Ok(symbols)
}
