//! Cardgen turns a YAML roster of members into fixed-layout PNG cards.
//!
//! Each card is composed from local PNG assets and a rasterized name string:
//!
//! 1. **Load**: `config.yaml -> Vec<Member>` (strict, fatal on parse failure)
//! 2. **Resolve**: `(AssetCategory, key) -> RgbaImage` via [`AssetStore`],
//!    with a per-run decode cache
//! 3. **Render**: member name -> 576x128 text image via [`NameFace`]
//! 4. **Compose**: grade, frame, avatar, club slots, special slots, name,
//!    painted source-over onto a canvas sized to the grade badge
//! 5. **Write**: one `<id>.png` per member under the output directory
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce identical card bytes.
//! - **Per-member failure isolation**: a missing or undecodable asset fails
//!   only that member's card; the run continues and reports a summary.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod config;
mod foundation;
mod output;
mod pipeline;
mod text;

pub use assets::decode::decode_png;
pub use assets::store::{AssetCategory, AssetStore};
pub use compose::card::{
    CLUB_SLOT_ORIGIN_X, CLUB_SLOT_STEP_Y, CardLayers, SPECIAL_SLOT_ORIGIN_Y, SPECIAL_SLOT_STEP_Y,
    club_slot_offset, compose_card, special_slot_offset,
};
pub use config::model::{MAX_ROSTER_LEN, Member, load_members};
pub use foundation::error::{CardError, CardResult};
pub use output::writer::write_card;
pub use pipeline::run::{RunOptions, RunSummary, generate_card, run};
pub use text::render::{
    NAME_BASELINE_Y, NAME_CANVAS_HEIGHT, NAME_CANVAS_WIDTH, NAME_SIZE_PX, NameFace,
};
