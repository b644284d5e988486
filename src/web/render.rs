//! Server-side HTML rendering for the comparison views.
//!
//! Pages are assembled from small fragment builders; everything dynamic is
//! escaped. The shared shell carries the tab navigation between the four
//! views.

use crate::core::types::Corpus;
use crate::core::verse::{ChapterComparison, VersePair};

/// The four navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Converter,
    Chapter,
    Book,
    Links,
}

const TABS: &[(Tab, &str, &str)] = &[
    (Tab::Converter, "/", "Verse Converter"),
    (Tab::Chapter, "/chapter", "Chapter Explorer"),
    (Tab::Book, "/book", "Full Book Comparator"),
    (Tab::Links, "/links", "Useful Links"),
];

/// Escape text for inclusion in HTML
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body fragment in the shared page shell
#[must_use]
pub fn page(title: &str, active: Tab, body: &str) -> String {
    let mut nav = String::new();
    for (tab, href, label) in TABS {
        let class = if *tab == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!("<a href=\"{href}\"{class}>{label}</a>\n"));
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - Scripture Comparison</title>\n\
         <link rel=\"stylesheet\" href=\"/static/css/styles.css\">\n</head>\n<body>\n\
         <header>\n<h1>LDS / RLDS Scripture Comparison</h1>\n<nav>\n{nav}</nav>\n</header>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// A corrective or informational banner
#[must_use]
pub fn message(kind: &str, text: &str) -> String {
    format!(
        "<p class=\"message {kind}\">{}</p>\n",
        escape(text)
    )
}

/// The verse converter input form, prefilled with the previous query
#[must_use]
pub fn converter_form(reference: &str, source: Corpus) -> String {
    let mut radios = String::new();
    for corpus in [Corpus::Lds, Corpus::Rlds] {
        let value = corpus.short_name().to_lowercase();
        let checked = if corpus == source { " checked" } else { "" };
        radios.push_str(&format!(
            "<label><input type=\"radio\" name=\"source\" value=\"{value}\"{checked}> {corpus}</label>\n"
        ));
    }

    format!(
        "<form method=\"get\" action=\"/convert\" class=\"converter\">\n\
         <label for=\"reference\">Scripture reference</label>\n\
         <input id=\"reference\" name=\"reference\" value=\"{}\" \
         placeholder=\"e.g. 1 Nephi 3:7 or Genesis 1:1\">\n\
         <fieldset><legend>Source canon</legend>\n{radios}</fieldset>\n\
         <button type=\"submit\">Convert</button>\n</form>\n",
        escape(reference),
    )
}

/// Render verse pairs as a two-column comparison table.
///
/// A source verse with several counterparts gets one merged cell listing
/// them all; a verse with none gets an explicit empty-state marker.
#[must_use]
pub fn verse_pairs(pairs: &[VersePair], source: Corpus) -> String {
    let target = source.other();
    let mut out = format!(
        "<table class=\"comparison\">\n<thead><tr><th>{source}</th><th>{target}</th></tr></thead>\n<tbody>\n"
    );

    for pair in pairs {
        out.push_str("<tr><td>");
        out.push_str(&format!(
            "<b>{}</b> {}",
            escape(&pair.source.to_string()),
            escape(&pair.source.text)
        ));
        out.push_str("</td><td>");
        if pair.targets.is_empty() {
            out.push_str("<i class=\"empty\">no direct counterpart</i>");
        } else {
            for (i, verse) in pair.targets.iter().enumerate() {
                if i > 0 {
                    out.push_str("<br>");
                }
                out.push_str(&format!(
                    "<b>{}</b> {}",
                    escape(&verse.to_string()),
                    escape(&verse.text)
                ));
            }
        }
        out.push_str("</td></tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

/// Render one chapter as a dual-pane reader.
///
/// The target pane inserts a heading whenever the target (book, chapter)
/// changes, since one source chapter can map into several target chapters.
#[must_use]
pub fn chapter_panes(chapter: &ChapterComparison) -> String {
    let mut source_pane = format!(
        "<section class=\"pane\">\n<h3>{}: {} {}</h3>\n",
        chapter.corpus,
        escape(&chapter.book),
        chapter.chapter
    );
    let mut target_pane = format!(
        "<section class=\"pane\">\n<h3>{} (Cross-References)</h3>\n",
        chapter.corpus.other()
    );

    let mut last_target_heading: Option<String> = None;
    for pair in &chapter.pairs {
        source_pane.push_str(&format!(
            "<p><b>{}</b> {}</p>\n",
            pair.source.verse,
            escape(&pair.source.text)
        ));

        if pair.targets.is_empty() {
            target_pane.push_str(&format!(
                "<p class=\"empty\"><b>{}</b> <i>no direct counterpart</i></p>\n",
                pair.source.verse
            ));
            continue;
        }
        for verse in &pair.targets {
            let heading = format!("{} {}", verse.book, verse.chapter);
            if last_target_heading.as_deref() != Some(&heading) {
                if last_target_heading.is_some() {
                    target_pane.push_str("<hr>\n");
                }
                target_pane.push_str(&format!("<h4>{}</h4>\n", escape(&heading)));
                last_target_heading = Some(heading);
            }
            target_pane.push_str(&format!(
                "<p><b>{}</b> {}</p>\n",
                verse.verse,
                escape(&verse.text)
            ));
        }
    }

    source_pane.push_str("</section>\n");
    target_pane.push_str("</section>\n");
    format!("<div class=\"panes\">\n{source_pane}{target_pane}</div>\n")
}

/// A `<select>` that submits its form on change
#[must_use]
pub fn select(name: &str, label: &str, options: &[(String, String)], selected: Option<&str>) -> String {
    let mut out = format!(
        "<label>{label}\n<select name=\"{name}\" onchange=\"this.form.submit()\">\n\
         <option value=\"\">--</option>\n",
        label = escape(label),
    );
    for (value, text) in options {
        let sel = if selected == Some(value.as_str()) {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{}\"{sel}>{}</option>\n",
            escape(value),
            escape(text)
        ));
    }
    out.push_str("</select>\n</label>\n");
    out
}
