use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvError {
    #[error("project #{index} has no title")]
    MissingTitle { index: usize },
    #[error("project \"{project}\" has an empty tag")]
    EmptyTag { project: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(alias = "title")]
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(alias = "title")]
    pub position: String,
    pub company: String,
    #[serde(alias = "year")]
    pub period: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    /// May contain inline `[text](url)` links.
    pub description: String,
    pub link: Option<String>,
    pub tags: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    #[must_use]
    pub fn description_segments(&self) -> Vec<Segment> {
        link_segments(&self.description)
    }

    /// Description with links flattened to `text (url)`.
    #[must_use]
    pub fn plain_description(&self) -> String {
        self.description_segments()
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => text,
                Segment::Link { text, url } => format!("{text} ({url})"),
            })
            .collect()
    }
}

/// CV content. Every collection may be absent in the source and is then empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvData {
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

impl CvData {
    pub fn validate(&self) -> Result<(), CvError> {
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CvError::MissingTitle { index: index + 1 });
            }
            if project.tags.iter().any(|t| t.trim().is_empty()) {
                return Err(CvError::EmptyTag {
                    project: project.title.clone(),
                });
            }
        }
        Ok(())
    }

    /// True when education, experience and skills are all empty.
    #[must_use]
    pub fn has_no_resume(&self) -> bool {
        self.education.is_empty() && self.experience.is_empty() && self.skills.is_empty()
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self {
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            projects: vec![
                Project {
                    title: "Reldus".to_string(),
                    description: "Developed a chess engine in Swift that leverages an AI decision tree with alpha-beta pruning to predict optimal moves. \
                                  The engine communicates using the standard [UCI protocol](https://www.chessprogramming.org/UCI) and supports advanced chess rules including castling, en passant, threefold repetition, and pawn promotion."
                        .to_string(),
                    link: Some("https://github.com/Intron014/Reldus".to_string()),
                    tags: vec!["Swift".into(), "Machine Learning".into(), "Chess".into()],
                },
                Project {
                    title: "Gasoprice".to_string(),
                    description: "Built a PWA that fetches real-time gas prices for all Spanish gas stations and then displays the closest ones to the user, \
                                  allowing for fine-grained filtering by fuel type, brand and prices. It also allows users to see a map view of the stations."
                        .to_string(),
                    link: Some("https://gasoprice.com".to_string()),
                    tags: vec!["PWA".into(), "Flask".into(), "Python".into(), "API".into()],
                },
                Project {
                    title: "API".to_string(),
                    description: "Developed using the [Vapor](https://vapor.codes/) framework an API to replace my old inefficient Flask API, with various endpoints \
                                  such as: Retrieving bus times, fetching my favorite stations, grabbing the song I am currently listening to and a few other more \
                                  (such as serving the .js used to display this very list)"
                        .to_string(),
                    link: Some("https://api.intron014.com".to_string()),
                    tags: vec!["Swift".into(), "API".into(), "Vapor".into()],
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link { text: String, url: String },
}

/// Splits inline markdown into plain text runs and links. Other inline
/// markup is reduced to its text.
#[must_use]
pub fn link_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut link: Option<(String, String)> = None;

    for event in Parser::new(input) {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                if !text.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                link = Some((dest_url.to_string(), String::new()));
            }
            Event::End(TagEnd::Link) => {
                if let Some((url, label)) = link.take() {
                    segments.push(Segment::Link { text: label, url });
                }
            }
            Event::Text(t) | Event::Code(t) | Event::InlineHtml(t) | Event::Html(t) => {
                match &mut link {
                    Some((_, label)) => label.push_str(&t),
                    None => text.push_str(&t),
                }
            }
            Event::SoftBreak | Event::HardBreak => match &mut link {
                Some((_, label)) => label.push(' '),
                None => text.push(' '),
            },
            Event::End(TagEnd::Paragraph) => {
                if !text.is_empty() {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    let text = text.trim_end();
    if !text.is_empty() {
        segments.push(Segment::Text(text.to_string()));
    }
    segments
}
