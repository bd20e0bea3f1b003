//! Board composition domain
//!
//! Pure logic that turns [`BoardRequirements`] and a registry of
//! [`ExpertProfile`]s into a [`ComposedBoard`]:
//!
//! ```text
//! BoardRequirements ──► select_board_members ──► assign_roles_and_weights ──► ComposedBoard
//!        ▲                     (score, rank,           (chair + weighted
//!        │                      truncate)                experts)
//! decode_requirements / fallback
//! ```

pub mod composed;
pub mod profile;
pub mod requirements;
pub mod selection;
pub mod weighting;

pub use composed::{BoardMemberConfig, ComposedBoard};
pub use profile::{BoardRole, ExpertProfile};
pub use requirements::{
    BoardFormat, BoardRequirements, Complexity, RequirementsDecodeError, decode_requirements,
    extract_json_object,
};
pub use selection::{rank_candidates, score_profile, select_board_members};
pub use weighting::{assign_roles_and_weights, calculate_voting_weight};
