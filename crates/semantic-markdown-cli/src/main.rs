use anyhow::{Context, Result};
use log::{debug, info};
use semantic_markdown_config::{Config, MarkdownFiles};
use semantic_markdown_engine::{
    Markdown, SemanticClasses, SemanticMarkdown, Settings, Stylesheet, io,
    render::standalone_page,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "[--standalone] <markdown-file-or-folder>";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    standalone: bool,
    path: PathBuf,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut standalone = false;
    let mut path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--standalone" => standalone = true,
            _ if path.is_none() && !arg.starts_with("--") => path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        standalone,
        path: path?,
    })
}

/// How each rendered file is written out.
struct PageOptions {
    standalone: bool,
    /// Linked stylesheet; `None` embeds the built-in styles.
    stylesheet: Option<String>,
}

impl PageOptions {
    fn new(standalone: bool, config: &Config) -> Self {
        Self {
            standalone,
            stylesheet: config
                .stylesheet
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
        }
    }

    fn render(&self, md: &Markdown, title: &str, source: &str) -> String {
        let body = md.render(source);
        if !self.standalone {
            return body;
        }
        let stylesheet = self
            .stylesheet
            .as_deref()
            .map_or_else(Stylesheet::default, Stylesheet::Linked);
        standalone_page(title, &body, stylesheet)
    }
}

fn build_markdown(config: &Config) -> Result<Markdown> {
    let settings = Settings {
        classes: SemanticClasses {
            container: config.classes.container.clone(),
            header: config.classes.header.clone(),
        },
        auto_close_tags: config.editor.auto_close_tags,
        split_on_enter: config.editor.split_on_enter,
        interrupt_paragraph: config.render.interrupt_paragraph,
    };
    let mut md = SemanticMarkdown::new(settings)
        .markdown()
        .context("Failed to register semantic blocks")?;
    md.options.max_nesting = config.render.max_nesting;
    md.render_options.source_line_attrs = config.render.source_line_attrs;
    Ok(md)
}

fn render_file(md: &Markdown, path: &Path, page: &PageOptions) -> Result<String> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string());
    Ok(page.render(md, &title, &source))
}

/// Renders every Markdown file under `root` to a sibling `.html` file.
/// Returns the number of files written.
fn render_directory(
    md: &Markdown,
    root: &Path,
    markdown_files: &MarkdownFiles,
    page: &PageOptions,
) -> Result<usize> {
    let patterns = markdown_files
        .patterns()
        .context("Invalid markdown_files pattern")?;
    let files = io::scan_markdown_files(root, |path| MarkdownFiles::matches(&patterns, path))
        .with_context(|| format!("Failed to scan '{}'", root.display()))?;

    for file in &files {
        let source = io::read_file(file.relative_path(), root)?;
        let html = page.render(md, file.title(), &source);
        let html_path = file.html_path();
        io::write_file(&html_path, root, &html)
            .with_context(|| format!("Failed to write '{html_path}'"))?;
        debug!("{} -> {html_path}", file.relative_path());
    }
    Ok(files.len())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(args_parsed) = parse_args(&args) else {
        let program = args.first().map_or("semantic-markdown-cli", String::as_str);
        eprintln!("Usage: {program} {USAGE}");
        process::exit(1);
    };

    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?;
    let md = build_markdown(&config)?;
    let page = PageOptions::new(args_parsed.standalone, &config);

    if args_parsed.path.is_dir() {
        let count = render_directory(&md, &args_parsed.path, &config.markdown_files, &page)?;
        info!(
            "rendered {count} file(s) under {}",
            args_parsed.path.display()
        );
    } else {
        print!("{}", render_file(&md, &args_parsed.path, &page)?);
    }
    Ok(())
}
