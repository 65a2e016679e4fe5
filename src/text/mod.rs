/*!
 * Text analysis primitives.
 *
 * - `script`: Unicode script classification
 * - `tokenizer`: lossless word/symbol/whitespace tokenization
 * - `segmenter`: compound-term splitting
 * - `casing`: case transfer between source and target terms
 */

pub mod casing;
pub mod script;
pub mod segmenter;
pub mod tokenizer;

pub use casing::match_case;
pub use script::{Script, classify, classify_char};
pub use segmenter::{CompoundSegmenter, TermLookup};
pub use tokenizer::{Token, TokenKind, tokenize};
