//! Assembly of segmented nodes into one cross-linked document.
//!
//! The document is a single self-contained HTML page: a table of contents
//! followed by one section per node, in script order. Each section anchors
//! itself by the node's slug and links every option to its computed target
//! slug, whether or not that target was ever written.

use crate::{
    address::{option_targets, slug, SlugTable},
    consts::TOC_TITLE_WIDTH,
    node::Node,
};

use log::debug;

/// Render all nodes as one cross-linked HTML document.
pub fn render_document(nodes: &[Node], title: &str) -> String {
    let slugs = SlugTable::from_nodes(nodes);

    let toc = nodes
        .iter()
        .map(|node| render_toc_entry(node, &slugs))
        .collect::<Vec<_>>()
        .join("\n      ");

    let sections = nodes
        .iter()
        .map(|node| render_section(node, &slugs))
        .collect::<Vec<_>>()
        .join("\n");

    debug!("rendered document with {} nodes", nodes.len());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    :root {{ font-size: 18px; }}
    body {{ font-family: Georgia, serif; max-width: 52rem; margin: 0 auto; padding: 1.5rem; color: #1a1a1a; line-height: 1.6; background: #fafaf9; }}
    h1 {{ font-size: 1.5rem; margin-bottom: 0.5rem; }}
    .toc {{ background: #fff; padding: 1rem 1.5rem; border-radius: 8px; margin-bottom: 2rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }}
    .toc ul {{ list-style: none; padding-left: 0; }}
    .toc li {{ margin: 0.4rem 0; }}
    .toc a {{ color: #2563eb; text-decoration: none; }}
    .toc a:hover {{ text-decoration: underline; }}
    .node {{ background: #fff; padding: 1.5rem 2rem; margin-bottom: 2rem; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,.08); border-left: 4px solid #3b82f6; }}
    .node-title {{ font-size: 1.1rem; color: #1e40af; margin-top: 0; margin-bottom: 1rem; }}
    .node-body {{ white-space: pre-wrap; }}
    .choices {{ margin-top: 1.5rem; padding-top: 1rem; border-top: 1px solid #e5e7eb; }}
    .choices-title {{ font-weight: 600; margin-bottom: 0.5rem; }}
    .choices-list {{ list-style: none; padding-left: 0; }}
    .choices-list li {{ margin: 0.5rem 0; }}
    .choices-list a {{ color: #059669; text-decoration: none; }}
    .choices-list a:hover {{ text-decoration: underline; }}
    @media print {{ .toc {{ break-after: avoid; }} .node {{ break-inside: avoid; }} }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <p>Each block is one node with its full text. Follow a choice through the links at the end of the block.</p>
  <nav class="toc">
    <h2>Table of contents</h2>
    <ul>
      {toc}
    </ul>
  </nav>
{sections}
</body>
</html>
"#,
        title = escape_text(title),
        toc = toc,
        sections = sections,
    )
}

/// Render one table-of-contents entry linking to the node's section.
fn render_toc_entry(node: &Node, slugs: &SlugTable) -> String {
    format!(
        r##"<li><a href="#{}">{}</a></li>"##,
        slugs.resolve(&node.id),
        escape_text(&truncate_title(&node.title)),
    )
}

/// Render one node as a section with its anchor, body and choice links.
fn render_section(node: &Node, slugs: &SlugTable) -> String {
    let body = escape_text(&node.body.join("\n\n"));

    format!(
        r#"  <section id="{anchor}" class="node">
    <h2 class="node-title">{title}</h2>
    <div class="node-body">{body}</div>
{choices}  </section>
"#,
        anchor = slugs.resolve(&node.id),
        title = escape_text(&node.title),
        body = body,
        choices = render_choice_block(node, slugs),
    )
}

/// Render the choice list of a node, linking each option to the slug of
/// its computed target. Nodes without options get no block at all.
fn render_choice_block(node: &Node, slugs: &SlugTable) -> String {
    if node.options.is_empty() {
        return String::new();
    }

    let targets = option_targets(&node.id, node.options.len());

    let items = node
        .options
        .iter()
        .zip(&targets)
        .map(|(text, target)| {
            format!(
                r##"        <li><a href="#{}">→ {}</a></li>"##,
                slugs.resolve(target),
                escape_text(text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"    <div class="choices">
      <p class="choices-title">Follow a choice:</p>
      <ul class="choices-list">
{}
      </ul>
    </div>
"#,
        items
    )
}

/// Shorten a title for the table of contents, marking the cut with an
/// ellipsis. Counts characters, not bytes.
fn truncate_title(title: &str) -> String {
    if title.chars().count() > TOC_TITLE_WIDTH {
        let mut truncated: String = title.chars().take(TOC_TITLE_WIDTH).collect();
        truncated.push('…');
        truncated
    } else {
        title.to_string()
    }
}

/// Escape text content for inclusion in markup.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }

    escaped
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn node_with_options(id: &str, options: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            title: format!("Node {}", id),
            body: vec!["Body text.".to_string()],
            options: options.iter().map(|text| text.to_string()).collect(),
        }
    }

    #[test]
    fn sections_are_anchored_by_the_node_slug() {
        let document = render_document(&[node_with_options("1-2", &[])], "Scheme");

        assert!(document.contains(r#"<section id="1-2" class="node">"#));
    }

    #[test]
    fn option_links_point_at_computed_target_slugs() {
        let document =
            render_document(&[node_with_options("scene-1", &["Stand up (decisively)"])], "Scheme");

        assert!(document.contains(r##"href="#scene-1-1""##));
        assert!(document.contains("→ Stand up (decisively)"));
    }

    #[test]
    fn dangling_targets_are_linked_without_complaint() {
        let document = render_document(&[node_with_options("3", &["Leave (quietly)"])], "Scheme");

        // No node `3.1` exists; the link is emitted anyway.
        assert!(document.contains(r##"href="#3-1""##));
    }

    #[test]
    fn nodes_without_options_get_no_choice_block() {
        let document = render_document(&[node_with_options("1", &[])], "Scheme");

        assert!(!document.contains("choices-list"));
    }

    #[test]
    fn sections_appear_in_script_order() {
        let nodes = &[
            node_with_options("scene-2", &[]),
            node_with_options("1", &[]),
            node_with_options("scene-1", &[]),
        ];

        let document = render_document(nodes, "Scheme");

        let first = document.find(r#"id="scene-2""#).unwrap();
        let second = document.find(r#"id="1""#).unwrap();
        let third = document.find(r#"id="scene-1""#).unwrap();

        assert!(first < second && second < third);
    }

    #[test]
    fn body_lines_are_joined_by_blank_lines() {
        let mut node = node_with_options("1", &[]);
        node.body = vec!["First.".to_string(), "Second.".to_string()];

        let document = render_document(&[node], "Scheme");

        assert!(document.contains("First.\n\nSecond."));
    }

    #[test]
    fn markup_in_text_is_escaped() {
        let mut node = node_with_options("1", &[]);
        node.title = "Node <1> & \"friends\"".to_string();
        node.body = vec!["a < b > c".to_string()];

        let document = render_document(&[node], "Scheme");

        assert!(document.contains("Node &lt;1&gt; &amp; &quot;friends&quot;"));
        assert!(document.contains("a &lt; b &gt; c"));
        assert!(!document.contains("<1>"));
    }

    #[test]
    fn long_titles_are_truncated_in_the_table_of_contents_only() {
        let mut node = node_with_options("1", &[]);
        node.title = "x".repeat(100);

        let document = render_document(&[node], "Scheme");

        assert!(document.contains(&format!("{}…", "x".repeat(80))));
        assert!(document.contains(&"x".repeat(100)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let title = "ё".repeat(81);

        assert_eq!(truncate_title(&title), format!("{}…", "ё".repeat(80)));
    }
}
