use scat_core::InstrumentKind;

/// `{LABEL}_{athlete}_{date}.pdf`, with `Assessment` and `Draft` standing
/// in for a blank name or date. Characters that are unsafe in file names
/// become `-`.
pub fn export_filename(kind: InstrumentKind, athlete_name: &str, date_of_examination: &str) -> String {
    let athlete = or_placeholder(athlete_name, "Assessment");
    let date = or_placeholder(date_of_examination, "Draft");
    format!("{}_{}_{}.pdf", kind.label(), sanitize(athlete), sanitize(date))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { placeholder } else { trimmed }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect()
}
