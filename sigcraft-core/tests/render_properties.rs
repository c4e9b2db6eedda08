// sigcraft-core/tests/render_properties.rs
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use sigcraft_core::{render, sanitize, ContactRecord, PresetCatalog, ALLOWED_ATTRIBUTES, ALLOWED_TAGS};

// The serializer always double-quotes attribute values and escapes `"` inside them.
static ATTRIBUTE_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"="[^"]*""#).unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(/?)([^\s/>]+)([^>]*)>").unwrap());
static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s([^\s=/>]+)").unwrap());

fn hostile_corpus() -> Vec<&'static str> {
    vec![
        r#"<div onclick="steal()">hi<script>alert(1)</script></div>"#,
        r#"<table><tr><td data-x="1" style="color: red">a</td></tr></table>"#,
        r#"<a href="javascript:alert(1)">x</a><img src=x onerror=alert(1)>"#,
        r#"<p>unclosed <b>bold <i>both</p> tail"#,
        r#"<form action="/x"><input name="q"></form><iframe src="//evil"></iframe>"#,
        r#"<!-- note --><span style="background: url(javascript:x)">s</span>"#,
        r#"<a href=x><table><a href=y>z</a></table></a>"#,
        r#"<table><tr><td>a</td></tr><caption>c</caption></table>"#,
        r#"<svg onload="x()"><a href="javascript:x">s</a><p>out</p></svg>"#,
        r#"<math><mi><b onmouseover="y()">m</b></mi></math>"#,
        r#"<svg><style><img src=x onerror=alert(1)></style></svg>"#,
        r#"<span title="<script>" style="a<b">t</span><object data="x"></object>"#,
    ]
}

fn assert_only_allowed_markup(html: &str) {
    let without_values = ATTRIBUTE_VALUE.replace_all(html, "=\"\"");
    for tag in TAG.captures_iter(&without_values) {
        let name = tag[2].to_ascii_lowercase();
        assert!(ALLOWED_TAGS.contains(&name.as_str()), "tag <{}> in {}", name, html);
        for attr in ATTRIBUTE_NAME.captures_iter(&tag[3]) {
            let attr = attr[1].to_ascii_lowercase();
            assert!(ALLOWED_ATTRIBUTES.contains(&attr.as_str()), "attribute {} in {}", attr, html);
            assert!(!attr.starts_with("on"), "event handler {} in {}", attr, html);
        }
    }
}

fn varied_records() -> Vec<ContactRecord> {
    let base = ContactRecord {
        full_name: "Sarah Williams".into(),
        job_title: "Chief Executive Officer".into(),
        company_name: "Global Innovations Inc.".into(),
        email: "sarah.williams@globalinnovations.com".into(),
        phone_number: "+1 (555) 987-6543".into(),
        website: "globalinnovations.com".into(),
        address: "456 Executive Blvd\nSan Francisco, CA 94105".into(),
        logo_url: "https://cdn.example.com/brand/logo.webp".into(),
        linkedin_url: "https://www.linkedin.com/in/sarah".into(),
        twitter_url: "https://twitter.com/sarah".into(),
        ..Default::default()
    };

    vec![
        ContactRecord::default(),
        base.clone(),
        ContactRecord { logo_url: "https://cdn.example.com/spin.GIF".into(), ..base.clone() },
        ContactRecord { website: "http://old.example.org/a?b=1&c=2".into(), ..base.clone() },
        ContactRecord { email: String::new(), website: String::new(), ..base.clone() },
        ContactRecord {
            full_name: "Zoë <O'Neil> & \"Partners\"".into(),
            address: "  \n\n Floor 3 \r\n Tower B\t".into(),
            ..base.clone()
        },
        ContactRecord {
            website: "javascript:alert(document.cookie)".into(),
            logo_url: "data:image/png;base64,AAAA".into(),
            facebook_url: "vbscript:msgbox".into(),
            ..base.clone()
        },
        ContactRecord {
            email: "a\"b<c>@x.test".into(),
            instagram_url: "https://instagram.com/<script>".into(),
            ..base
        },
    ]
}

#[test]
fn render_is_pure() {
    for record in varied_records() {
        assert_eq!(render(&record), render(&record.clone()));
    }
}

#[test]
fn sanitizer_passes_rendered_output_through_unchanged() {
    for record in varied_records() {
        let html = render(&record);
        assert_eq!(sanitize(&html), html, "sanitizer changed render of {:?}", record);
    }
}

#[test]
fn presets_render_sanitizer_clean() -> Result<()> {
    let catalog = PresetCatalog::load_default()?;
    for preset in catalog.all() {
        let html = render(&preset.data);
        assert_eq!(sanitize(&html), html, "preset {}", preset.id);
    }
    Ok(())
}

#[test]
fn sanitize_is_idempotent_on_hostile_input() {
    for input in hostile_corpus() {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "not idempotent for {}", input);
        assert!(!once.to_ascii_lowercase().contains("javascript:"), "{}", once);
    }
}

#[test]
fn sanitized_output_uses_only_allowed_tags_and_attributes() {
    for input in hostile_corpus() {
        assert_only_allowed_markup(&sanitize(input));
    }
    for record in varied_records() {
        assert_only_allowed_markup(&sanitize(&render(&record)));
    }
}

#[test]
fn phone_only_record_has_single_contact_row() {
    let html = render(&ContactRecord {
        full_name: "Pat".into(),
        job_title: "Ops".into(),
        company_name: "Acme".into(),
        phone_number: "555-0100".into(),
        ..Default::default()
    });
    assert_eq!(html.matches("<strong").count(), 1);
    assert!(html.contains("Phone:</strong> 555-0100"));
    assert!(html.contains("border: 2px dashed #d1d5db;"));
}

#[test]
fn website_without_scheme_gets_https_target() {
    let html = render(&ContactRecord {
        website: "example.com".into(),
        ..Default::default()
    });
    assert!(html.contains(r#"href="https://example.com""#));
    assert!(html.contains(">example.com</a>"));
}

#[test]
fn disallowed_targets_render_as_text() {
    let html = render(&ContactRecord {
        website: "javascript:alert(1)".into(),
        ..Default::default()
    });
    assert!(!html.contains("href=\"javascript"));
    assert!(html.contains("Website:</strong> javascript:alert(1)"));
}
