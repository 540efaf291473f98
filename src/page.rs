// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Standalone page assembly.
//!
//! Rendered containers are fragments meant to be embedded in a larger
//! document. `standalone` wraps them into a minimal complete page, adding
//! the companion script when the output is compact.

use crate::html::{escape_text, to_html, Node};

const HEAD_EXTRAS: &[&str] = &[
    r#"<meta charset="utf-8">"#,
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
];

/// Wrap `containers` in an HTML page titled `title`.
pub fn standalone(title: &str, containers: &[Node], script: Option<&str>) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
    for extra in HEAD_EXTRAS {
        page.push_str(extra);
        page.push('\n');
    }
    page.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    if let Some(script) = script {
        page.push_str(script);
        page.push('\n');
    }
    page.push_str("</head>\n<body>\n");
    page.push_str(&to_html(containers));
    page.push_str("\n</body>\n</html>\n");
    page
}
