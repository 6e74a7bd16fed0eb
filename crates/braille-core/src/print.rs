//! Printable HTML sheet for a single translation.

use std::fmt::Write;

use crate::direction::Direction;

#[derive(Debug, Clone)]
pub struct PrintSheet<'a> {
    pub title: &'a str,
    pub direction: Direction,
    pub input: &'a str,
    pub output: &'a str,
    /// Path or data URI of an image shown under the text.
    pub image: Option<&'a str>,
}

const STYLE: &str = "body { font-family: Arial, sans-serif; line-height: 1.6; color: #1e3a8a; }
      h1 { color: #3b82f6; }
      .container { margin: 20px; }
      .text-block { margin-bottom: 20px; }
      .text-block p { white-space: pre-wrap; font-size: 1.4em; }
      img { max-width: 100%; height: auto; }";

pub fn render_print_document(sheet: &PrintSheet<'_>) -> String {
    let title = escape_html(sheet.title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "  <title>{title}</title>");
    let _ = writeln!(html, "  <style>\n      {STYLE}\n  </style>");
    html.push_str("</head>\n<body>\n  <div class=\"container\">\n");
    let _ = writeln!(html, "    <h1>{title}</h1>");
    push_block(
        &mut html,
        &format!("Texto Original ({}):", sheet.direction.source_label()),
        sheet.input,
    );
    push_block(
        &mut html,
        &format!("Traducción ({}):", sheet.direction.target_label()),
        sheet.output,
    );
    if let Some(src) = sheet.image {
        let _ = writeln!(
            html,
            "    <img src=\"{}\" alt=\"Imagen subida o capturada\">",
            escape_html(src)
        );
    }
    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn push_block(html: &mut String, heading: &str, text: &str) {
    html.push_str("    <div class=\"text-block\">\n");
    let _ = writeln!(html, "      <h2>{}</h2>", escape_html(heading));
    let _ = writeln!(html, "      <p>{}</p>", escape_html(text));
    html.push_str("    </div>\n");
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet<'a>(direction: Direction, input: &'a str, output: &'a str) -> PrintSheet<'a> {
        PrintSheet {
            title: "Traducción de Braille",
            direction,
            input,
            output,
            image: None,
        }
    }

    #[test]
    fn headings_follow_direction() {
        let html = render_print_document(&sheet(Direction::SpanishToBraille, "casa", "⠉⠁⠎⠁"));
        assert!(html.contains("<h2>Texto Original (Español):</h2>"));
        assert!(html.contains("<h2>Traducción (Braille):</h2>"));
        assert!(html.contains("<p>⠉⠁⠎⠁</p>"));

        let html = render_print_document(&sheet(Direction::BrailleToSpanish, "⠉⠁⠎⠁", "casa"));
        assert!(html.contains("<h2>Texto Original (Braille):</h2>"));
        assert!(html.contains("<h2>Traducción (Español):</h2>"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_print_document(&sheet(
            Direction::SpanishToBraille,
            "<script>alert('x')</script>",
            "a & b",
        ));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn image_is_optional() {
        let mut s = sheet(Direction::SpanishToBraille, "a", "⠁");
        assert!(!render_print_document(&s).contains("<img"));
        s.image = Some("foto \"1\".jpg");
        let html = render_print_document(&s);
        assert!(html.contains("<img src=\"foto &quot;1&quot;.jpg\""));
    }

    #[test]
    fn title_in_head_and_body() {
        let html = render_print_document(&sheet(Direction::SpanishToBraille, "", ""));
        assert!(html.contains("<title>Traducción de Braille</title>"));
        assert!(html.contains("<h1>Traducción de Braille</h1>"));
    }
}
