use std::path::PathBuf;

use image::RgbaImage;

use crate::{
    assets::store::{AssetCategory, AssetStore},
    compose::card::{CardLayers, compose_card},
    config::model::{Member, load_members},
    foundation::error::CardResult,
    output::writer::write_card,
    text::render::NameFace,
};

/// Paths and behavior switches for one generation run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// YAML roster path.
    pub config_path: PathBuf,
    /// Root directory holding the per-category asset subdirectories.
    pub assets_root: PathBuf,
    /// TrueType font used to render names.
    pub font_path: PathBuf,
    /// Directory the cards are written into.
    pub out_dir: PathBuf,
    /// Abort on the first per-member failure instead of continuing.
    pub stop_on_error: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("./config.yaml"),
            assets_root: PathBuf::from("assets"),
            font_path: PathBuf::from("assets/font/mplus-1p-light.ttf"),
            out_dir: PathBuf::from("build/cards"),
            stop_on_error: false,
        }
    }
}

/// Outcome counts for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cards written successfully.
    pub generated: usize,
    /// Members whose card failed and was skipped.
    pub failed: usize,
}

/// Resolve, render and compose one member's card without writing it.
///
/// Any unresolvable asset fails the whole member; no layer is ever
/// substituted with an empty image.
pub fn generate_card(
    store: &mut AssetStore,
    face: &NameFace,
    member: &Member,
) -> CardResult<RgbaImage> {
    let frame = store.frame()?;
    let grade = store.grade(member.grade)?;
    let avatar = store.load(AssetCategory::Avatar, &member.id)?;

    let clubs = member
        .club
        .iter()
        .map(|key| store.load(AssetCategory::Club, key))
        .collect::<CardResult<Vec<_>>>()?;
    let specials = member
        .special
        .iter()
        .map(|key| store.load(AssetCategory::Special, key))
        .collect::<CardResult<Vec<_>>>()?;

    let name = face.render(&member.name);

    Ok(compose_card(&CardLayers {
        grade,
        frame,
        avatar,
        clubs,
        specials,
        name,
    }))
}

/// Generate one card per roster member, in file order.
///
/// Roster and font failures abort the run. Per-member failures are logged
/// and counted, and the run moves on to the next member, unless
/// `stop_on_error` is set.
#[tracing::instrument(skip(opts), fields(config = %opts.config_path.display()))]
pub fn run(opts: &RunOptions) -> CardResult<RunSummary> {
    let members = load_members(&opts.config_path)?;
    let face = NameFace::load(&opts.font_path)?;
    let mut store = AssetStore::new(&opts.assets_root);

    let mut summary = RunSummary::default();
    for member in &members {
        println!("Generate {} ...", member.id);
        let written = generate_card(&mut store, &face, member)
            .and_then(|card| write_card(&opts.out_dir, &member.id, &card));
        match written {
            Ok(_) => {
                summary.generated += 1;
                println!("done");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::error!(member = %member.id, error = %e, "card generation failed");
                if opts.stop_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
