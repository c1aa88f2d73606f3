//! Static HTML pages for the story catalogue.

use crate::config::Config;
use crate::stories::{Alerts, Story, StoryEntry};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use ui_kit::{Element, Node};

/// Contents of `stories.json`.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub stories: Vec<StoryEntry>,
}

fn document(config: &Config, title: &str, body: Element) -> String {
    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").child(Node::text(title)));
    if let Some(href) = &config.stylesheet {
        head = head.child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", href.as_str()),
        );
    }

    let html = Element::new("html").attr("lang", "en").child(head).child(body);
    format!("<!doctype html>\n{}\n", html.to_html())
}

/// Page showing a single story.
pub fn story_page(config: &Config, story: &Story) -> String {
    let button = story.button(&Alerts::default()).render();
    let body = Element::new("body").child(
        Element::new("div")
            .class(config.layout.classes())
            .attr("id", "storybook-root")
            .child(button),
    );
    document(config, &format!("{} / Button / {}", config.title, story.name), body)
}

/// Index linking every story page.
pub fn index_page(config: &Config, stories: &[Story]) -> String {
    let items = stories.iter().map(|story| {
        Node::Element(
            Element::new("li").child(
                Element::new("a")
                    .attr("href", format!("{}.html", story.id()))
                    .child(Node::text(story.name)),
            ),
        )
    });

    let body = Element::new("body")
        .class("p-4")
        .child(Element::new("h1").child(Node::text(format!("{} / Button", config.title))))
        .child(Element::new("ul").children(items));
    document(config, &config.title, body)
}

/// Write every story page, the index and the manifest into `out_dir`.
///
/// Returns the number of story pages written.
pub fn build(config: &Config, stories: &[Story], out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for story in stories {
        let path = out_dir.join(format!("{}.html", story.id()));
        fs::write(&path, story_page(config, story))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
    }

    let index = out_dir.join("index.html");
    fs::write(&index, index_page(config, stories))
        .with_context(|| format!("Failed to write {}", index.display()))?;

    let manifest = Manifest {
        title: config.title.clone(),
        generated_at: Utc::now(),
        stories: stories.iter().map(Story::entry).collect(),
    };
    let manifest_path = out_dir.join("stories.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    tracing::info!("Built {} stories into {}", stories.len(), out_dir.display());
    Ok(stories.len())
}
