use std::path::{Path, PathBuf};
use std::time::Duration;

use dialoguer::{Confirm, Input};
use indicatif::ProgressBar;

use business::domain::catalog::reconcile::reconciled_view;
use business::domain::detection::errors::DetectionError;
use business::domain::detection::use_cases::analyze::AnalyzeImageParams;
use business::domain::detection::value_objects::ImagePayload;

use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::media;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;

pub struct App;

impl App {
    pub async fn run(
        cli: Cli,
        config: AppConfig,
        container: DependencyContainer,
    ) -> anyhow::Result<()> {
        println!("snackscan: see beyond labels");
        println!("One snap to price your snacks and unlock their nutrition facts.\n");

        let mut preselected = cli.image.clone();

        loop {
            let path = match Self::select_photo(preselected.take()) {
                Ok(path) => path,
                Err(err) => {
                    // Dismissed picker: abort the round with the
                    // in-flight flag still at rest.
                    container.logger.debug(&format!("Nothing uploaded: {}", err));
                    break;
                }
            };

            if let Some(payload) = Self::load_photo(&container, &path) {
                Self::analyze_round(&cli, &config, &container, payload).await?;
            }

            if cli.once {
                break;
            }
            let again = Confirm::new()
                .with_prompt("Analyze another photo?")
                .default(true)
                .interact()?;
            if !again {
                break;
            }
        }

        Ok(())
    }

    /// Resolves the photo for this round: the command-line argument
    /// first, an interactive prompt after that. A blank answer means
    /// the picker was dismissed.
    fn select_photo(preselected: Option<PathBuf>) -> Result<PathBuf, DetectionError> {
        if let Some(path) = preselected {
            return Ok(path);
        }

        let answer: String = Input::new()
            .with_prompt("Photo to analyze (blank to quit)")
            .allow_empty(true)
            .interact_text()
            .map_err(|_| DetectionError::NoFileSelected)?;

        if answer.trim().is_empty() {
            return Err(DetectionError::NoFileSelected);
        }

        Ok(PathBuf::from(answer.trim()))
    }

    /// Reads the photo into an upload payload, refusing paths that do
    /// not look like images.
    fn load_photo(container: &DependencyContainer, path: &Path) -> Option<ImagePayload> {
        let Some(media_type) = media::media_type_for(path) else {
            container
                .logger
                .debug(&format!("Refused non-image path: {}", path.display()));
            println!(
                "{} is not an image file (jpg/png/webp/gif/bmp).",
                path.display()
            );
            return None;
        };

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                println!("Could not read {}: {}", path.display(), err);
                return None;
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Some(ImagePayload::new(bytes, media_type, file_name))
    }

    async fn analyze_round(
        cli: &Cli,
        config: &AppConfig,
        container: &DependencyContainer,
        payload: ImagePayload,
    ) -> anyhow::Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Analyzing photo...");
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = container
            .analyze_use_case
            .execute(AnalyzeImageParams { image: payload })
            .await;

        spinner.finish_and_clear();

        match outcome {
            Ok(_) => Self::present(cli, config, container).await,
            Err(DetectionError::AlreadyInFlight) => {
                println!("An upload is already in flight; let it settle first.");
                Ok(())
            }
            Err(err) => {
                // The previous results, if any, stay on screen.
                println!("Analysis failed ({}). Keeping earlier results.", err);
                Ok(())
            }
        }
    }

    /// Renders the current detection result: annotated image, matched
    /// items, total cost and the nutrition chart. The view is derived
    /// from the session on every call, never cached.
    async fn present(
        cli: &Cli,
        config: &AppConfig,
        container: &DependencyContainer,
    ) -> anyhow::Result<()> {
        let session = container.session.lock().await;
        let Some(result) = session.current() else {
            return Ok(());
        };

        match media::save_annotated(&result.annotated_image_ref, &config.output_dir) {
            Ok(Some(path)) => println!("Annotated image saved to {}", path.display()),
            Ok(None) => println!("Annotated image: {}", result.annotated_image_ref),
            Err(err) => container
                .logger
                .warn(&format!("Could not save annotated image: {}", err)),
        }

        let view = reconciled_view(&container.catalog, &result.detected_ids);

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        println!("\nWhat we found");
        println!("Total cost: {} rupees\n", view.total_cost);
        print!("{}", render::table::render(&view.matched_items));

        println!("\nNutritional overview");
        print!("{}", render::chart::render(&view.matched_items));

        Ok(())
    }
}
