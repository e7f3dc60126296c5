//! Renders user input into the fixed Yes/No instruction template.

/// Unicode whitespace plus the information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Removes quote characters, collapses whitespace runs to one space and trims.
pub fn clean_text(text: &str) -> String {
    text.split(is_separator)
        .map(|word| word.replace(['"', '\''], ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn build_prompt(context: &str, question: &str) -> String {
    let context = clean_text(context);
    let question = clean_text(question);

    format!(
        "Given the following context, please answer the question with ONLY 'Yes' or 'No'. \
         Do not provide any explanation.\n\n\
         Context: {context}\n\n\
         Question: {question}\n\n\
         Answer (Yes/No):"
    )
}
