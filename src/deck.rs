use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

/// One immutable slide record: what gets drawn at a given navigator position.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub content: String,
    pub image: PathBuf,
}

/// The fixed, ordered slide sequence. Built once at startup, never mutated.
///
/// Emptiness is rejected here rather than handled downstream: a slider with
/// zero slides has nothing sensible to render, so startup fails fast.
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> anyhow::Result<Self> {
        if slides.is_empty() {
            bail!("a deck needs at least one slide");
        }
        Ok(Self { slides })
    }

    /// The built-in three-step tutorial deck.
    pub fn tutorial() -> Self {
        let slides = vec![
            Slide {
                title: "Step 1: Development".to_string(),
                content: "Start building your first component step by step.".to_string(),
                image: PathBuf::from("assets/development.jpg"),
            },
            Slide {
                title: "Step 2: Testing".to_string(),
                content: "Test your implementation and debug any issues.".to_string(),
                image: PathBuf::from("assets/testing.jpg"),
            },
            Slide {
                title: "Step 3: Deployment".to_string(),
                content: "Deploy your project and finalize your work.".to_string(),
                image: PathBuf::from("assets/deployment.jpg"),
            },
        ];
        // The built-in deck is statically non-empty.
        Self { slides }
    }

    /// Build a deck from every recognised image file in `dir`, sorted by
    /// file name. Slide titles come from the file stems.
    pub fn from_directory(dir: &Path) -> anyhow::Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.context("failed to read directory entry")?;
            let path = entry.path();
            if path.is_file() && has_image_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if paths.is_empty() {
            bail!("no image files found in directory {}", dir.display());
        }

        let slides = paths
            .into_iter()
            .map(|path| {
                let title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Slide {
                    title,
                    content: String::new(),
                    image: path,
                }
            })
            .collect();
        Deck::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> &Slide {
        &self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

fn has_image_extension(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "bmp" | "gif"
        ),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn empty_deck_is_rejected() {
        assert!(Deck::new(Vec::new()).is_err());
    }

    #[test]
    fn tutorial_deck_has_three_slides() {
        let deck = Deck::tutorial();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.slide(0).title, "Step 1: Development");
        assert_eq!(deck.slide(2).title, "Step 3: Deployment");
    }

    #[test]
    fn directory_deck_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.jpg", "a.png", "notes.txt", "c.JPEG"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let deck = Deck::from_directory(dir.path()).unwrap();
        assert_eq!(deck.len(), 3);
        let titles: Vec<&str> = deck.slides().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn directory_without_images_fails() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        assert!(Deck::from_directory(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_fails() {
        assert!(Deck::from_directory(Path::new("/nonexistent/slides")).is_err());
    }
}
