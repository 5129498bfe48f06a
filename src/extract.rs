use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::db::Contact;

// The directory page has a fixed markup shape; each field is located by its
// own structural pattern and captured verbatim (no entity decoding).
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="member_name"><a href="[^"]+">([^<]+)</a>"#).unwrap()
});
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<div class="member_info_title"><i class="fas fa-briefcase"></i>職稱</div>\s*<div class="member_info_content">([^<]+)</div>"#,
    )
    .unwrap()
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="member_info_content"><a href="mailto://([^"]+)">"#).unwrap()
});

/// The three field sequences in document order, before recomposition.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldLists {
    pub names: Vec<String>,
    pub titles: Vec<String>,
    pub emails: Vec<String>,
}

/// Extracted field counts disagree, meaning the page layout no longer
/// matches the expected shape. Zipping anyway would silently misalign
/// name/title/email, so assembly refuses instead.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field counts differ: {names} names, {titles} titles, {emails} emails")]
pub struct FieldCountMismatch {
    pub names: usize,
    pub titles: usize,
    pub emails: usize,
}

pub fn extract_fields(markup: &str) -> FieldLists {
    let capture_all = |re: &Regex| -> Vec<String> {
        re.captures_iter(markup).map(|c| c[1].to_string()).collect()
    };

    FieldLists {
        names: capture_all(&NAME_RE),
        titles: capture_all(&TITLE_RE),
        emails: capture_all(&EMAIL_RE),
    }
}

/// Zip the field lists positionally into contact records. Fails fast if the
/// lists disagree in length; nothing from the cycle should be displayed or
/// persisted in that case.
pub fn assemble(lists: FieldLists) -> Result<Vec<Contact>, FieldCountMismatch> {
    let FieldLists { names, titles, emails } = lists;

    if names.len() != titles.len() || names.len() != emails.len() {
        return Err(FieldCountMismatch {
            names: names.len(),
            titles: titles.len(),
            emails: emails.len(),
        });
    }

    let contacts = names
        .into_iter()
        .zip(titles)
        .zip(emails)
        .map(|((name, title), email)| Contact { name, title, email })
        .collect();

    Ok(contacts)
}

// ── Tests ──
