use crate::conllu::parser::{parse_line, ConlluLine, TEXT_COMMENT_PREFIX};

// Correction pass over one document.
//
// Token lines carrying a non-empty CorrectForm annotation get their form
// column replaced; every "# text = " comment is rebuilt from the final forms
// of the sentence it introduces. Everything else passes through verbatim.
//
// Single linear pass. The text comment cannot be rebuilt before its token
// lines are seen, so its slot in the output is remembered and patched when
// the sentence block ends (blank line, a comment after the token run has
// begun, the next text comment, or end of document).
pub fn correct_document(lines: &[&str]) -> Vec<String> {
    let mut output: Vec<String> = Vec::with_capacity(lines.len());

    // Slot in `output` of the text comment awaiting its rebuilt payload.
    let mut pending_text: Option<usize> = None;
    // Final forms of the current sentence, in token order.
    let mut forms: Vec<String> = Vec::new();
    let mut token_run_started = false;

    for &line in lines {
        match parse_line(line) {
            ConlluLine::Token(token) => {
                let form = token.final_form().to_string();
                output.push(token.line_with_form(&form));
                forms.push(form);
                token_run_started = true;
            }

            ConlluLine::TextComment { .. } => {
                patch_text_comment(&mut output, &mut pending_text, &forms);
                forms.clear();
                token_run_started = false;

                pending_text = Some(output.len());
                output.push(line.to_string());
            }

            ConlluLine::Blank => {
                patch_text_comment(&mut output, &mut pending_text, &forms);
                forms.clear();
                token_run_started = false;

                output.push(line.to_string());
            }

            ConlluLine::Comment(_) => {
                // A comment between the text comment and its first token does
                // not end the block.
                if token_run_started {
                    patch_text_comment(&mut output, &mut pending_text, &forms);
                }
                output.push(line.to_string());
            }

            ConlluLine::Other(_) => {
                output.push(line.to_string());
            }
        }
    }

    patch_text_comment(&mut output, &mut pending_text, &forms);

    output
}

fn patch_text_comment(output: &mut [String], pending: &mut Option<usize>, forms: &[String]) {
    if let Some(index) = pending.take() {
        output[index] = format!("{}{}", TEXT_COMMENT_PREFIX, forms.join(" "));
    }
}
