use chrono::NaiveDate;

/// Boilerplate for a freshly created post.
///
/// The header block is written so that it decodes back to the given title
/// and date, `draft: false` and no tags.
pub fn render_template(title: &str, date: NaiveDate) -> String {
    format!(
        r#"---
title: "{title}"
date: {iso}
draft: false
tags: []
---

# {title}

Write your blog content here...

## Section 1

Your content...

## Section 2

More content...

---

*Published on {long}*
"#,
        title = title,
        iso = date.format("%Y-%m-%d"),
        long = date.format("%B %-d, %Y"),
    )
}
