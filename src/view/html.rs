//! Static HTML rendering of a scene.
//!
//! A deterministic scaffold for the CLI and tests. Embeddings that want
//! live behavior wire their own host and apply scenes themselves; this
//! page only captures one moment.

use crate::view::scene::Scene;

const PAGE_CSS: &str = "\
.scrolly-wrapper { position: relative; min-height: 100vh; }
.animation-container { position: relative; min-height: 100vh; }
.animation-surface { position: fixed; left: 50%; top: 50%; transform: translate(-50%, -50%); z-index: 1; }
.placeholder { width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; border: 2px dashed #ccc; border-radius: 8px; color: #666; }
.scroll-trigger { position: relative; width: 100%; min-height: 100vh; z-index: 10; }
.blurb { max-width: 660px; width: 100%; padding: 40px; position: absolute; left: 50%; transform: translate(-50%, 0); z-index: 100; background: rgba(255, 255, 255, 0.95); border-radius: 8px; }
";

fn escape_text(text: &str) -> String {
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

/// Render a scene as a standalone HTML page.
///
/// Blurb markup is inserted as-is; it is already HTML from the markup
/// renderer. Everything else is escaped.
pub fn render_page(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>scrolly</title>\n<style>\n");
    out.push_str(PAGE_CSS);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"scrolly-wrapper\">\n");
    out.push_str(&format!(
        "<div id=\"visually-hidden\">{}</div>\n",
        escape_text(&scene.aria_description)
    ));
    out.push_str("<div class=\"animation-container\" aria-hidden=\"true\">\n");

    let surface = &scene.surface;
    let surface_class = if surface.completed {
        "animation-surface completed"
    } else {
        "animation-surface"
    };
    out.push_str(&format!(
        "<div class=\"{}\" style=\"width:{}px;height:{}px\">\n",
        surface_class, surface.width, surface.height
    ));
    if surface.has_animation {
        out.push_str("<div id=\"animation-mount\"></div>\n");
    } else {
        out.push_str("<div class=\"placeholder\">Animation placeholder</div>\n");
    }
    out.push_str("</div>\n");

    if let Some(trigger) = &scene.trigger {
        let transition = if trigger.settling {
            "height 0.8s ease-out"
        } else {
            "none"
        };
        out.push_str(&format!(
            "<div class=\"scroll-trigger\" style=\"height:{}px;transition:{}\">\n",
            trigger.height, transition
        ));
        for blurb in &trigger.blurbs {
            out.push_str(&format!(
                "<section class=\"blurb\" style=\"top:{}px\">\n{}</section>\n",
                blurb.top, blurb.markup
            ));
        }
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}
