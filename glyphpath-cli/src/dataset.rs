//! Chat-style training records from exported artifacts.
//!
//! Each record pairs a thumbnail with a four-turn conversation: the user
//! asks what the image shows, the assistant names the style and the
//! character, the user asks for SVG, the assistant answers with the SVG
//! document.

use std::fs;
use std::io;
use std::path::Path;

use glyphpath_core::artifact_path;
use log::{debug, warn};
use serde::Serialize;

const IMAGE_QUESTION: &str = "<image>这个图片上是什么风格的字体，并且请你识别是什么字？";
const SVG_REQUEST: &str = "我需要这张图片上字体的SVG代码，请你生成。";

fn identification(font_name: &str, ch: char) -> String {
    format!("这个字是{font_name}风格的，它是'{ch}'字")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub content: String,
    pub role: Role,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub messages: Vec<Message>,
    pub images: Vec<String>,
}

/// Names of the font directories under `outdir`, sorted.
///
/// # Errors
///
/// Returns the I/O error if `outdir` cannot be listed.
pub fn font_dirs(outdir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(outdir)?.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("skipping non UTF-8 directory {}", name.to_string_lossy()),
        }
    }
    names.sort();
    Ok(names)
}

fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// One record per (character, font) for which both the SVG and the JPG
/// artifact exist, characters in `chars` order, fonts sorted by name.
///
/// # Errors
///
/// Returns the I/O error if `outdir` cannot be listed.
pub fn build_dataset(outdir: &Path, chars: &[char]) -> io::Result<Vec<Record>> {
    let fonts = font_dirs(outdir)?;
    let mut records = Vec::new();
    for &ch in chars {
        for font in &fonts {
            let svg_path = outdir.join(artifact_path(font, "svg", ch));
            let jpg_path = outdir.join(artifact_path(font, "jpg", ch));
            if !svg_path.is_file() || !jpg_path.is_file() {
                debug!("{font}: no artifact pair for {ch:?}");
                continue;
            }
            let svg = match fs::read_to_string(&svg_path) {
                Ok(s) => s,
                Err(e) => {
                    warn!("{}: {e}", svg_path.display());
                    continue;
                }
            };
            records.push(Record {
                messages: vec![
                    Message::new(Role::User, IMAGE_QUESTION),
                    Message::new(Role::Assistant, identification(font, ch)),
                    Message::new(Role::User, SVG_REQUEST),
                    Message::new(Role::Assistant, svg),
                ],
                images: vec![slash_path(&jpg_path)],
            });
        }
    }
    Ok(records)
}

/// Write records as pretty-printed UTF-8 JSON.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written.
pub fn write_dataset(records: &[Record], path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    fs::write(path, json)
}
