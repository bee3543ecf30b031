//! Shared page rendering helpers
//!
//! Renderers build an HTML body and hand it to [`shell`], which wraps it in
//! a self-contained A4 page with the computed document title. Opening the
//! file in a browser and printing it is how the PDF gets made; nothing here
//! drives the print dialog.

/// Escape text for safe embedding in HTML
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

/// The value itself, or a literal placeholder when it is blank
///
/// Keeps a partially filled form rendering coherently: an empty recipient
/// shows as "[Name]" rather than a hole in the layout.
pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Join the non-blank parts with a separator, e.g. "address • contact"
pub fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

/// Wrap a rendered document body in a print-ready A4 page
pub fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  @page {{ size: A4; margin: 18mm; }}
  body {{ font-family: Georgia, "Times New Roman", serif; color: #1a1a1a; margin: 0; }}
  .a4 {{ max-width: 174mm; margin: 0 auto; padding: 24px 0; line-height: 1.7; }}
  h1 {{ font-size: 1.25rem; margin: 0; }}
  h2 {{ font-size: 1.05rem; text-transform: uppercase; letter-spacing: 0.08em; margin: 0; }}
  .center {{ text-align: center; }}
  .muted {{ color: #666; font-size: 0.85rem; }}
  .strong {{ font-weight: 600; }}
  .columns {{ display: flex; justify-content: space-between; gap: 24px; margin-top: 40px; }}
  .columns .right {{ text-align: right; }}
  .signature {{ margin-top: 48px; font-weight: 600; }}
  .terms {{ white-space: pre-wrap; }}
  table {{ width: 100%; border-collapse: collapse; font-size: 0.9rem; }}
  th, td {{ padding: 6px 0; border-bottom: 1px solid #ddd; }}
  th {{ text-align: left; }}
  .amount {{ text-align: right; }}
  .deduction {{ color: #a12626; font-weight: 600; }}
  footer {{ margin-top: 48px; padding-top: 12px; border-top: 1px solid #ddd; }}
</style>
</head>
<body>
<article class="a4">
{body}
</article>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}
