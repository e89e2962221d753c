//! HTML pages for the three-step audit flow
//!
//! Entry form, question list, result. All dynamic text is escaped.

use std::fmt::Write;

use crate::core::scorer::QuestionSet;
use crate::models::types::AuditResult;
use crate::utils::constants::{APP_NAME, FIELD_STORE_NAME, NO_ANSWER, YES_ANSWER};

/// Escape text for HTML element and attribute context
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="tr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {app}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        app = escape_html(APP_NAME),
        body = body,
    )
}

/// Step 1: ask for the store name
pub fn index_page() -> String {
    let body = format!(
        r#"<h1>Mağaza Denetimi</h1>
<form method="post" action="/audit">
  <label for="{field}">Mağaza adı</label>
  <input type="text" id="{field}" name="{field}" required>
  <button type="submit">Denetime Başla</button>
</form>"#,
        field = FIELD_STORE_NAME,
    );
    layout("Mağaza Denetimi", &body)
}

/// Step 2: the question list for a named store
pub fn audit_page(store_name: &str, questions: &QuestionSet) -> String {
    let store = escape_html(store_name);
    let mut items = String::new();

    for question in questions.questions() {
        let id = escape_html(&question.id);
        // Writing to a String cannot fail
        let _ = write!(
            items,
            r#"  <fieldset>
    <legend>{text} <small>({points} puan)</small></legend>
    <label><input type="radio" name="{id}" value="{yes}"> Evet</label>
    <label><input type="radio" name="{id}" value="{no}"> Hayır</label>
  </fieldset>
"#,
            text = escape_html(&question.text),
            points = question.points,
            id = id,
            yes = YES_ANSWER,
            no = NO_ANSWER,
        );
    }

    let body = format!(
        r#"<h1>{store} Denetimi</h1>
<form method="post" action="/submit">
  <input type="hidden" name="{field}" value="{store}">
{items}  <button type="submit">Denetimi Bitir</button>
</form>"#,
        store = store,
        field = FIELD_STORE_NAME,
        items = items,
    );
    layout("Denetim Soruları", &body)
}

/// Step 3: score and per-question breakdown
pub fn result_page(result: &AuditResult) -> String {
    let mut rows = String::new();

    for item in &result.breakdown.items {
        let _ = writeln!(
            rows,
            "    <tr><td>{}</td><td>{}</td><td>{}/{}</td></tr>",
            escape_html(&item.text),
            if item.answered_yes { "Evet" } else { "Hayır" },
            item.earned,
            item.points,
        );
    }

    let body = format!(
        r#"<h1>Denetim Sonucu</h1>
<p>Mağaza: <strong id="store-name">{store}</strong></p>
<p>Puan: <strong id="score">{score}</strong> / 100</p>
<table>
  <thead><tr><th>Soru</th><th>Cevap</th><th>Puan</th></tr></thead>
  <tbody>
{rows}  </tbody>
  <tfoot><tr><td colspan="2">Toplam</td><td>{earned}/{max}</td></tr></tfoot>
</table>
<p><a href="/">Yeni denetim</a></p>"#,
        store = escape_html(&result.store_name),
        score = result.score,
        rows = rows,
        earned = result.breakdown.earned_points,
        max = result.breakdown.max_score,
    );
    layout("Denetim Sonucu", &body)
}
