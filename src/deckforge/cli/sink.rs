use colored::*;
use deckforge::clipboard::copy_to_clipboard;
use deckforge::commands::ExportPayload;
use std::fs;
use std::path::{Path, PathBuf};

pub enum SinkTarget {
    Clipboard,
    File(PathBuf),
}

/// Hand generated content to its sink. A sink failure never loses the
/// export: the content is printed for manual copy instead.
pub fn deliver(payload: &ExportPayload, target: SinkTarget) {
    match target {
        SinkTarget::Clipboard => match copy_to_clipboard(&payload.content) {
            Ok(()) => {
                println!(
                    "{}",
                    format!("{} copied to clipboard", capitalize(&payload.label)).green()
                );
            }
            Err(err) => {
                eprintln!("{}", format!("{}; content follows:", err).yellow());
                println!("{}", payload.content);
            }
        },
        SinkTarget::File(path) => match write_file(&path, &payload.content) {
            Ok(()) => {
                println!(
                    "{}",
                    format!("{} written to {}", capitalize(&payload.label), path.display())
                        .green()
                );
            }
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Failed to write {}: {}; content follows:", path.display(), err)
                        .yellow()
                );
                println!("{}", payload.content);
            }
        },
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
