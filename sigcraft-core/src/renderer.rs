//! Signature renderer: [`ContactRecord`] → table-based, inline-styled HTML.
//!
//! The output targets webmail rich-text paste surfaces, which discard `<style>`
//! blocks and `class` attributes and often honor nothing but table layout. It is
//! therefore built from `table`/`tbody`/`tr`/`td` with inline `style` attributes only.
//!
//! Markup is emitted in canonical form (explicit `<tbody>`, no inter-tag whitespace,
//! void elements without a trailing slash) so that the sanitizer passes it through
//! byte for byte.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::{LOGO_HEIGHT, LOGO_WIDTH};
use crate::normalize::{normalize, DisplayLink, DisplayLogo, NormalizedRecord};
use crate::record::ContactRecord;

const OUTER_TABLE_STYLE: &str = "font-family: Arial, sans-serif; border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; width: 100%; max-width: 500px;";
const INNER_TABLE_STYLE: &str = "border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; width: 100%;";
const LOGO_CELL_STYLE: &str = "vertical-align: top; padding-right: 20px; width: 87px;";
const CONTENT_CELL_STYLE: &str = "vertical-align: top;";
const NAME_STYLE: &str = "font-family: Arial, sans-serif; font-size: 18px; font-weight: bold; color: #1f2937; margin: 0; line-height: 1.2;";
const TITLE_STYLE: &str = "font-family: Arial, sans-serif; font-size: 16px; color: #6b7280; margin: 2px 0 0 0; line-height: 1.2;";
const COMPANY_STYLE: &str = "font-family: Arial, sans-serif; font-size: 16px; color: #374151; margin: 2px 0 0 0; line-height: 1.2;";
const EMAIL_HINT_STYLE: &str = "font-family: Arial, sans-serif; font-size: 14px; color: #9ca3af; margin: 2px 0 0 0; line-height: 1.2;";
const ROW_CELL_STYLE: &str = "padding: 2px 0; font-family: Arial, sans-serif; font-size: 14px; color: #374151; line-height: 1.2;";
const LABEL_STYLE: &str = "font-weight: bold;";
const LINK_STYLE: &str = "color: #2563eb; text-decoration: none;";
const LOGO_IMG_STYLE: &str = "width: 87px; height: 113px; display: block; line-height: 100%; outline: none; text-decoration: none; border: 0;";
const LOGO_PLACEHOLDER_STYLE: &str = "width: 87px; height: 113px; background-color: #f3f4f6; border: 2px dashed #d1d5db; display: table-cell; vertical-align: middle; text-align: center; color: #9ca3af; font-size: 10px; font-family: Arial, sans-serif;";

/// Renders `record` as a self-contained signature fragment.
///
/// Pure: equal records produce byte-identical output. Never fails; missing data
/// degrades to placeholders.
pub fn render(record: &ContactRecord) -> String {
    let normalized = normalize(record);
    let html = render_normalized(&normalized);
    debug!("Rendered signature: {} bytes.", html.len());
    html
}

fn render_normalized(n: &NormalizedRecord) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(&open_table(OUTER_TABLE_STYLE));
    html.push_str("<tr>");
    html.push_str(&format!(
        r#"<td width="{}" style="{}">{}</td>"#,
        LOGO_WIDTH,
        LOGO_CELL_STYLE,
        logo_cell(n.logo.as_ref())
    ));
    html.push_str(&format!(r#"<td style="{}">"#, CONTENT_CELL_STYLE));
    html.push_str(&open_table(INNER_TABLE_STYLE));
    html.push_str(&identity_row(n));

    let rows = contact_rows(n);
    if !rows.is_empty() {
        html.push_str(r#"<tr><td style="padding: 8px 0 0 0;">"#);
        html.push_str(&open_table(INNER_TABLE_STYLE));
        for row in &rows {
            html.push_str(row);
        }
        html.push_str(CLOSE_TABLE);
        html.push_str("</td></tr>");
    }

    html.push_str(CLOSE_TABLE);
    html.push_str("</td></tr>");
    html.push_str(CLOSE_TABLE);
    html
}

const CLOSE_TABLE: &str = "</tbody></table>";

fn open_table(style: &str) -> String {
    format!(
        r#"<table cellspacing="0" cellpadding="0" border="0" style="{}"><tbody>"#,
        style
    )
}

/// The 87×113 logo box. Always the same footprint, with or without a logo.
fn logo_cell(logo: Option<&DisplayLogo>) -> String {
    match logo {
        Some(logo) => format!(
            r#"<img src="{}" alt="Company Logo" width="{}" height="{}" style="{}{}">"#,
            logo.src,
            LOGO_WIDTH,
            LOGO_HEIGHT,
            LOGO_IMG_STYLE,
            if logo.animated { " animation: none;" } else { "" }
        ),
        None => format!(
            r#"<div style="{}">Logo<br>{}×{}</div>"#,
            LOGO_PLACEHOLDER_STYLE, LOGO_WIDTH, LOGO_HEIGHT
        ),
    }
}

fn identity_row(n: &NormalizedRecord) -> String {
    let mut cell = format!(
        r#"<div style="{}">{}</div><div style="{}">{}</div><div style="{}">{}</div>"#,
        NAME_STYLE, n.full_name, TITLE_STYLE, n.job_title, COMPANY_STYLE, n.company_name
    );
    if let Some(hint) = &n.email_placeholder {
        cell.push_str(&format!(r#"<div style="{}">{}</div>"#, EMAIL_HINT_STYLE, hint));
    }
    format!(r#"<tr><td style="padding: 0 0 8px 0;">{}</td></tr>"#, cell)
}

/// Optional rows in fixed order; a row exists only for a non-empty field.
fn contact_rows(n: &NormalizedRecord) -> Vec<String> {
    let mut rows = Vec::new();

    if let Some(email) = &n.email {
        rows.push(row("Email:", &link(email)));
    }
    if let Some(phone) = &n.phone {
        rows.push(row("Phone:", phone));
    }
    if let Some(website) = &n.website {
        rows.push(row("Website:", &link(website)));
    }
    if let Some(address) = &n.address {
        rows.push(row("Address:", address));
    }
    for (network, profile) in &n.socials {
        rows.push(row(&format!("{}:", network.label()), &link(profile)));
    }

    rows
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="{}"><strong style="{}">{}</strong> {}</td></tr>"#,
        ROW_CELL_STYLE, LABEL_STYLE, label, value
    )
}

fn link(display: &DisplayLink) -> String {
    match &display.href {
        Some(href) => format!(r#"<a href="{}" style="{}">{}</a>"#, href, LINK_STYLE, display.text),
        None => display.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitizer::sanitize;

    fn alex() -> ContactRecord {
        ContactRecord {
            full_name: "Alex Johnson".into(),
            job_title: "Senior Marketing Manager".into(),
            company_name: "TechCorp Solutions".into(),
            email: "alex.johnson@techcorp.com".into(),
            phone_number: "+1 (555) 123-4567".into(),
            website: "https://www.techcorp.com".into(),
            address: "123 Business Ave\nNew York, NY 10001".into(),
            logo_url: "https://cdn.techcorp.com/logo.png".into(),
            ..Default::default()
        }
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render(&alex()), render(&alex()));
    }

    #[test]
    fn full_record_contains_every_row_in_order() {
        let html = render(&alex());
        let email = html.find("Email:").unwrap();
        let phone = html.find("Phone:").unwrap();
        let website = html.find("Website:").unwrap();
        let address = html.find("Address:").unwrap();
        assert!(email < phone && phone < website && website < address);
        assert!(html.contains(r#"<a href="mailto:alex.johnson@techcorp.com""#));
        assert!(html.contains("123 Business Ave<br>New York, NY 10001"));
        assert!(html.contains(r#"<img src="https://cdn.techcorp.com/logo.png""#));
    }

    #[test]
    fn phone_only_record_has_only_phone_row() {
        let record = ContactRecord {
            full_name: "A".into(),
            job_title: "B".into(),
            company_name: "C".into(),
            phone_number: "555".into(),
            ..Default::default()
        };
        let html = render(&record);
        assert!(html.contains("Phone:</strong> 555"));
        assert!(!html.contains("Email:"));
        assert!(!html.contains("Website:"));
        assert!(!html.contains("Address:"));
        assert!(html.contains("Logo<br>87×113"));
        assert_eq!(html.matches("<tr>").count(), 4);
    }

    #[test]
    fn empty_record_renders_placeholders() {
        let html = render(&ContactRecord::default());
        for placeholder in ["[Full Name]", "[Job Title]", "[Company Name]", "[Email]"] {
            assert!(html.contains(placeholder), "missing {}", placeholder);
        }
        assert!(html.contains("border: 2px dashed #d1d5db;"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<strong"));
    }

    #[test]
    fn website_target_is_normalized_but_text_is_not() {
        let record = ContactRecord {
            website: "example.com".into(),
            ..Default::default()
        };
        let html = render(&record);
        assert!(html.contains(r#"<a href="https://example.com" style="color: #2563eb; text-decoration: none;">example.com</a>"#));
    }

    #[test]
    fn logo_and_placeholder_reserve_same_box() {
        let with_logo = render(&alex());
        let without = render(&ContactRecord { logo_url: String::new(), ..alex() });
        for html in [&with_logo, &without] {
            assert!(html.contains("width: 87px; height: 113px;"));
            assert!(html.contains(r#"<td width="87" style="vertical-align: top; padding-right: 20px; width: 87px;">"#));
        }
    }

    #[test]
    fn gif_logo_disables_animation() {
        let html = render(&ContactRecord {
            logo_url: "https://cdn.example.com/logo.gif".into(),
            ..Default::default()
        });
        assert!(html.contains("border: 0; animation: none;\">"));
    }

    #[test]
    fn no_stylesheets_classes_or_flexbox() {
        let html = render(&alex());
        assert!(!html.contains("<style"));
        assert!(!html.contains("class="));
        assert!(!html.contains("flex"));
        assert!(!html.contains("grid"));
    }

    #[test]
    fn renderer_output_is_sanitizer_clean() {
        let html = render(&alex());
        assert_eq!(sanitize(&html), html);
        let empty = render(&ContactRecord::default());
        assert_eq!(sanitize(&empty), empty);
    }

    #[test]
    fn hostile_values_are_escaped_and_still_clean() {
        let record = ContactRecord {
            full_name: "<script>alert(1)</script>".into(),
            job_title: "Tom & \"Jerry\"".into(),
            email: "x\"onmouseover=\"alert(1)@evil.com".into(),
            website: "javascript:alert(1)".into(),
            address: "line1\r\nline2\0".into(),
            logo_url: "https://x.test/a.png\" onerror=\"alert(1)".into(),
            ..Default::default()
        };
        let html = render(&record);
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("onerror=\""));
        assert_eq!(sanitize(&html), html);
    }
}
