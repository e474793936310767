//! Preview document composition
//!
//! Docking at an island with a deployed project opens a synthesized HTML
//! document in the host's frame. HTML main files pass through untouched;
//! JavaScript is embedded in a script tag with its terminator escaped;
//! everything else is rendered as escaped, formatted text. Uploaded code
//! is never executed outside the explicit HTML/script paths.

use std::fmt;

use super::classify::Project;
use super::files::UploadedFile;
use crate::sim::Island;

/// Why a launch request produced a notice instead of a document.
/// Informational, never a fault; nothing is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    /// The island has no project deployed yet
    NothingDeployed,
    /// Classification found no usable main file
    NoMainFile,
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::NothingDeployed => {
                write!(f, "No project deployed to this island yet. Upload a project first!")
            }
            LaunchError::NoMainFile => write!(f, "No runnable file detected!"),
        }
    }
}

/// Escape text for inert display inside HTML
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Neutralize any case variant of `</script` so embedded source cannot
/// break out of its script tag
fn escape_script_end(source: &str) -> String {
    const NEEDLE: &[u8] = b"</script";
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    loop {
        let pos = rest
            .as_bytes()
            .windows(NEEDLE.len())
            .position(|w| w.eq_ignore_ascii_case(NEEDLE));
        match pos {
            // '<' is ASCII, so the match offset is always a char boundary
            Some(pos) => {
                out.push_str(&rest[..pos]);
                out.push_str("<\\/script");
                rest = &rest[pos + NEEDLE.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Compose the preview document for a classified project
pub fn compose_preview(
    island_name: &str,
    files: &[UploadedFile],
    project: &Project,
) -> Result<String, LaunchError> {
    let main_idx = project.main_file.ok_or(LaunchError::NoMainFile)?;
    let main = files.get(main_idx).ok_or(LaunchError::NoMainFile)?;
    let title = escape_html(island_name);

    if main.name.ends_with(".html") || main.name.ends_with(".htm") {
        return Ok(main.content.clone());
    }

    if main.name.ends_with(".js") {
        return Ok(format!(
            "<!DOCTYPE html>\n<html><head><title>{title}</title></head>\n<body>\n<script>{}</script>\n</body></html>",
            escape_script_end(&main.content)
        ));
    }

    // Everything else is shown, not run
    let total_bytes: u64 = files.iter().map(|f| f.size).sum();
    Ok(format!(
        r#"<!DOCTYPE html>
<html><head><title>{title}</title>
<style>
body {{ font-family: monospace; margin: 20px; background: #1e1e1e; color: #fff; }}
.header {{ background: #333; padding: 20px; border-radius: 10px; margin-bottom: 20px; }}
.code {{ background: #2d2d2d; padding: 20px; border-radius: 10px; white-space: pre-wrap; }}
.stats {{ display: flex; gap: 20px; margin: 20px 0; }}
.stat {{ background: #444; padding: 15px; border-radius: 5px; text-align: center; }}
</style>
</head><body>
<div class="header">
<h1>{title}</h1>
<h2>{kind}</h2>
</div>
<div class="stats">
<div class="stat"><strong>{count}</strong><br>Files</div>
<div class="stat"><strong>{size:.1}MB</strong><br>Size</div>
<div class="stat"><strong>{confidence}%</strong><br>Confidence</div>
</div>
<h3>Main File: {main_name}</h3>
<div class="code">{body}</div>
</body></html>"#,
        kind = project.kind.label(),
        count = files.len(),
        size = total_bytes as f64 / 1024.0 / 1024.0,
        confidence = project.confidence,
        main_name = escape_html(&main.name),
        body = escape_html(&main.content),
    ))
}

/// Launch the project docked at an island, if there is one
pub fn launch_island(island: &Island) -> Result<String, LaunchError> {
    let deployment = island
        .deployment
        .as_ref()
        .ok_or(LaunchError::NothingDeployed)?;
    compose_preview(&island.name, &deployment.files, &deployment.project)
}
