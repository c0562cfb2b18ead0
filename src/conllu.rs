// CoNLL-U annotation format https://universaldependencies.org/format.html
// (10 tab-separated columns per token line, "#" comments, blank line between
// sentences)
//
// Lines outside the expected shapes are tolerated, never fatal:
// - a line with fewer than 10 columns is not a token line and passes through
//   untouched
// - annotation segments without "=" are skipped
// - when an annotation key repeats, the last occurrence wins

pub mod corrector;
pub mod parser;
