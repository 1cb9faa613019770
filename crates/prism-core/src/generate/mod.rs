//! Generate source files from `*.prism` templates
//!
//! Every template under the templates directory is rendered against the
//! project and written to the output directory under the same relative path,
//! minus the `.prism` suffix (`Colors.swift.prism` becomes `Colors.swift`).

use crate::config::Configuration;
use crate::project::Project;
use crate::template::TemplateParser;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Extension marking template files
pub const TEMPLATE_EXTENSION: &str = "prism";

/// A rendered template, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub template: PathBuf,
    pub output: PathBuf,
    pub content: String,
}

/// Find all templates under `dir`, sorted by path
pub fn discover_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Templates directory not found: {}", dir.display());
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry =
            entry.with_context(|| format!("Failed to read templates in {}", dir.display()))?;
        let is_template = entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION);
        if is_template {
            templates.push(entry.into_path());
        }
    }

    if templates.is_empty() {
        anyhow::bail!("No templates found in {}", dir.display());
    }

    templates.sort();
    Ok(templates)
}

/// Where a template's output goes: its path relative to `templates_dir`,
/// without the template extension, under `output_dir`
pub fn output_path_for(template: &Path, templates_dir: &Path, output_dir: &Path) -> PathBuf {
    let relative = template.strip_prefix(templates_dir).unwrap_or(template);
    output_dir.join(relative.with_extension(""))
}

/// Render every template. Fails on the first template that does not render.
pub fn render_templates(
    project: &Project,
    configuration: &Configuration,
    templates_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<GeneratedFile>> {
    let parser = TemplateParser::new(project, configuration);

    discover_templates(templates_dir)?
        .into_iter()
        .map(|template| -> Result<GeneratedFile> {
            let source = std::fs::read_to_string(&template)
                .with_context(|| format!("Failed to read {}", template.display()))?;
            let content = parser
                .parse(&source)
                .with_context(|| format!("Failed to render {}", template.display()))?;
            tracing::debug!(template = %template.display(), "rendered template");

            Ok(GeneratedFile {
                output: output_path_for(&template, templates_dir, output_dir),
                template,
                content,
            })
        })
        .collect()
}

/// Render all templates, then write them. Nothing is written if any template fails.
pub async fn generate(
    project: &Project,
    configuration: &Configuration,
    templates_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<GeneratedFile>> {
    let files = render_templates(project, configuration, templates_dir, output_dir)?;

    for file in &files {
        if let Some(parent) = file.output.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file.output, &file.content)
            .await
            .with_context(|| format!("Failed to write file: {}", file.output.display()))?;
        tracing::info!(output = %file.output.display(), "generated file");
    }

    Ok(files)
}

/// Print the list of generated files
pub fn print_summary(project: &Project, files: &[GeneratedFile]) {
    println!(
        "{}",
        format!("Generated files for '{}'", project.name)
            .cyan()
            .bold()
    );
    println!();

    for file in files {
        println!(
            "  {} {} {}",
            "->".blue(),
            file.output.display(),
            format!("({})", file.template.display()).dimmed()
        );
    }

    println!();
    println!("{} {} file(s)", "Generated".green().bold(), files.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fake_project;
    use std::fs as std_fs;

    fn write(path: &Path, content: &str) {
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, content).unwrap();
    }

    #[test]
    fn test_output_path_strips_extension() {
        let output = output_path_for(
            Path::new("templates/ios/Colors.swift.prism"),
            Path::new("templates"),
            Path::new("out"),
        );
        assert_eq!(output, PathBuf::from("out/ios/Colors.swift"));
    }

    #[test]
    fn test_discover_only_templates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("b.swift.prism"), "");
        write(&dir.path().join("a.kt.prism"), "");
        write(&dir.path().join("nested/c.xml.prism"), "");
        write(&dir.path().join("config.yml"), "");
        write(&dir.path().join("notes.prism.bak"), "");

        let templates = discover_templates(dir.path()).unwrap();
        let names: Vec<_> = templates
            .iter()
            .map(|t| t.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.kt.prism"),
                PathBuf::from("b.swift.prism"),
                PathBuf::from("nested/c.xml.prism"),
            ]
        );
    }

    #[test]
    fn test_discover_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_templates(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No templates found"));
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_templates(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_bundled_templates_render() {
        let templates_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");
        let files = render_templates(
            &fake_project(),
            &Configuration::default(),
            &templates_dir,
            Path::new("out"),
        )
        .unwrap();

        let outputs: Vec<_> = files.iter().map(|f| f.output.clone()).collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("out/android/colors.xml"),
                PathBuf::from("out/android/text_styles.xml"),
                PathBuf::from("out/ios/Colors.swift"),
                PathBuf::from("out/ios/TextStyles.swift"),
            ]
        );
        assert!(files[0]
            .content
            .contains(r#"<color name="clear_reddish">#CCDF6369</color>"#));
        assert!(files[1]
            .content
            .contains("<item name=\"android:fontFamily\">roboto_bold</item>"));
        assert!(files[3].content.contains(
            r#"static let body = TextStyle(font: UIFont(name: "Roboto-Regular", size: 14.5)!, color: .clearReddish)"#
        ));
    }

    #[tokio::test]
    async fn test_generate_writes_rendered_files() {
        let templates = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(
            &templates.path().join("Colors.swift.prism"),
            "enum Colors {\n    {{% FOR color %}}\n    case {{%color.identity.camelcase%}}\n    {{% END color %}}\n}\n",
        );

        let files = generate(
            &fake_project(),
            &Configuration::default(),
            templates.path(),
            output.path(),
        )
        .await
        .unwrap();

        assert_eq!(files.len(), 1);
        let written = std_fs::read_to_string(output.path().join("Colors.swift")).unwrap();
        assert_eq!(
            written,
            "enum Colors {\n    case clearReddish\n    case blueSky\n}\n"
        );
    }

    #[tokio::test]
    async fn test_generate_writes_nothing_on_failure() {
        let templates = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        write(&templates.path().join("a.txt.prism"), "plain");
        write(&templates.path().join("b.txt.prism"), "{{% FOR color %}}");

        let err = generate(
            &fake_project(),
            &Configuration::default(),
            templates.path(),
            output.path(),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("b.txt.prism"));
        assert!(format!("{:#}", err).contains("Detected FOR loop 'color' with no closing END"));
        assert!(!output.path().join("a.txt").exists());
    }
}
