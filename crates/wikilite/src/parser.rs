/// Loader for markdown article directories.
///
/// Each `*.md` file is one article:
/// - Title: the first `# Title` line
/// - Sections: `## Heading` lines, each running until the next `##` or EOF
/// - Text between the title and the first `##` becomes an "Introduction" section
/// - Heading lines inside fenced code blocks (```` ``` ```` or `~~~`) are section text
///
/// The article id is the slugified file stem. Files are loaded in file-name order.
use std::path::Path;

use regex::Regex;
use tracing::{info, warn};

use crate::error::AppError;
use wikilite_core::model::{Article, Section};

const LEAD_HEADING: &str = "Introduction";

pub fn parse_articles_dir(dir: &Path) -> Result<Vec<Article>, AppError> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| AppError::Config(format!("failed to read {}: {e}", dir.display())))?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    let mut articles = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let id = slugify(&stem);
        if id.is_empty() {
            warn!(file = %path.display(), "file name yields an empty article id, skipping");
            continue;
        }

        let parsed = parse_article(&id, &content).map_err(|e| match e {
            AppError::Parse { line, message } => AppError::Parse {
                line,
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })?;

        match parsed {
            Some(article) => articles.push(article),
            None => warn!(file = %path.display(), "no title or no sections, skipping"),
        }
    }

    info!(dir = %dir.display(), articles = articles.len(), "loaded markdown articles");
    Ok(articles)
}

/// Parse one markdown document. Returns `Ok(None)` when it has no title or no sections.
pub fn parse_article(id: &str, content: &str) -> Result<Option<Article>, AppError> {
    let title_re = Regex::new(r"^#\s+(.+?)\s*$").expect("valid regex");
    let section_re = Regex::new(r"^##\s+(.+?)\s*$").expect("valid regex");

    let mut title: Option<String> = None;
    let mut sections: Vec<Section> = Vec::new();
    let mut heading: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();
    let mut in_fence = false;

    for (idx, line) in content.lines().enumerate() {
        let fence = is_fence(line);
        if in_fence || fence {
            if fence {
                in_fence = !in_fence;
            }
            if title.is_some() {
                body.push(line);
            }
            continue;
        }

        if let Some(caps) = section_re.captures(line) {
            if title.is_none() {
                return Err(AppError::Parse {
                    line: idx + 1,
                    message: "section heading before article title".to_string(),
                });
            }
            flush(&mut sections, heading.take(), &body);
            heading = Some(caps[1].to_string());
            body.clear();
            continue;
        }

        if let Some(caps) = title_re.captures(line) {
            if title.is_some() {
                return Err(AppError::Parse {
                    line: idx + 1,
                    message: "more than one article title".to_string(),
                });
            }
            title = Some(caps[1].to_string());
            continue;
        }

        if title.is_some() {
            body.push(line);
        }
    }

    flush(&mut sections, heading.take(), &body);

    let Some(title) = title else {
        return Ok(None);
    };
    if sections.is_empty() {
        return Ok(None);
    }
    Ok(Some(Article::new(id, title, sections)))
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

fn flush(sections: &mut Vec<Section>, heading: Option<String>, body: &[&str]) {
    let content = body.join("\n").trim().to_string();
    match heading {
        Some(heading) => sections.push(Section::new(heading, content)),
        None if !content.is_empty() => sections.push(Section::new(LEAD_HEADING, content)),
        None => {}
    }
}

fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_dash = false;
    for ch in s.chars() {
        let lc = ch.to_ascii_lowercase();
        if lc.is_ascii_alphanumeric() {
            out.push(lc);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}
