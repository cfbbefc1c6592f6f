use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CropProgress, CropStage};

/// Stage codes seeded by the backend, in growing order.
pub const DEFAULT_STAGE_CODES: [&str; 5] =
    ["PLANTING", "FLOWERING", "FRUITING", "RIPENING", "HARVESTING"];

/// Code of the stage whose progress entry must carry an actual yield.
pub const HARVESTING_CODE: &str = "HARVESTING";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("No crop stages are defined")]
    NoStages,

    #[error("Progress references unknown stage {0}")]
    UnknownStage(Uuid),
}

/// Result of the next-stage calculation.
#[derive(Debug, Clone, PartialEq)]
pub enum NextStage<'a> {
    Stage(&'a CropStage),
    AllComplete,
}

impl<'a> NextStage<'a> {
    pub fn stage(&self) -> Option<&'a CropStage> {
        match self {
            NextStage::Stage(stage) => Some(*stage),
            NextStage::AllComplete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, NextStage::AllComplete)
    }
}

/// Returns `stages` ordered by `order_index`; equal indices keep their input order.
pub fn ordered_stages(stages: &[CropStage]) -> Vec<&CropStage> {
    let mut ordered: Vec<&CropStage> = stages.iter().collect();
    ordered.sort_by_key(|stage| stage.order_index);
    ordered
}

/// Determines the stage a user should record next for one crop-season detail.
///
/// `progress` must already be narrowed to a single detail; see
/// [`next_stage_for_detail`] for the filtering variant. The stage following the
/// furthest recorded stage is returned, so gaps behind it are not revisited.
/// A progress entry pointing at a stage missing from `stages` is an error.
pub fn next_stage<'a>(
    stages: &'a [CropStage],
    progress: &[CropProgress],
) -> Result<NextStage<'a>, StageError> {
    let ordered = ordered_stages(stages);
    if ordered.is_empty() {
        return Err(StageError::NoStages);
    }

    let position: HashMap<Uuid, usize> = ordered
        .iter()
        .enumerate()
        .map(|(pos, stage)| (stage.stage_id, pos))
        .collect();

    let mut furthest: Option<usize> = None;
    for entry in progress {
        let pos = *position
            .get(&entry.stage_id)
            .ok_or(StageError::UnknownStage(entry.stage_id))?;
        furthest = Some(furthest.map_or(pos, |f| f.max(pos)));
    }

    let next = match furthest {
        None => 0,
        Some(pos) => pos + 1,
    };

    Ok(ordered
        .get(next)
        .copied()
        .map(NextStage::Stage)
        .unwrap_or(NextStage::AllComplete))
}

/// Same as [`next_stage`], after keeping only progress recorded against `detail_id`.
pub fn next_stage_for_detail<'a>(
    stages: &'a [CropStage],
    progress: &[CropProgress],
    detail_id: Uuid,
) -> Result<NextStage<'a>, StageError> {
    let scoped: Vec<CropProgress> = progress
        .iter()
        .filter(|entry| entry.crop_season_detail_id == detail_id)
        .cloned()
        .collect();
    next_stage(stages, &scoped)
}

/// Whether `stage` is the harvesting step.
pub fn is_harvesting(stage: &CropStage) -> bool {
    stage.stage_code.eq_ignore_ascii_case(HARVESTING_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn stage(code: &str, order_index: i32) -> CropStage {
        CropStage {
            stage_id: Uuid::new_v4(),
            stage_code: code.to_string(),
            stage_name: code.to_string(),
            description: None,
            order_index,
        }
    }

    fn progress_at(stage: &CropStage, detail: Uuid) -> CropProgress {
        CropProgress {
            progress_id: Uuid::new_v4(),
            crop_season_detail_id: detail,
            stage_id: stage.stage_id,
            stage_code: Some(stage.stage_code.clone()),
            stage_name: None,
            progress_date: None,
            actual_yield: None,
            note: None,
            photo_url: None,
            video_url: None,
            updated_by_name: None,
        }
    }

    #[test]
    fn sorts_by_order_index_before_choosing() {
        let stages = vec![stage("FLOWERING", 1), stage("PLANTING", 0)];
        let next = next_stage(&stages, &[]).unwrap();
        assert_eq!(next.stage().unwrap().stage_code, "PLANTING");
    }

    #[test]
    fn follows_the_furthest_recorded_stage() {
        let stages: Vec<CropStage> = DEFAULT_STAGE_CODES
            .iter()
            .enumerate()
            .map(|(i, code)| stage(code, i as i32))
            .collect();
        let detail = Uuid::new_v4();
        let progress = vec![
            progress_at(&stages[0], detail),
            progress_at(&stages[3], detail),
        ];
        let next = next_stage(&stages, &progress).unwrap();
        assert_eq!(next.stage().unwrap().stage_code, "HARVESTING");
    }

    #[test]
    fn empty_stage_list_is_an_error() {
        assert_eq!(next_stage(&[], &[]), Err(StageError::NoStages));
    }

    #[test]
    fn dangling_stage_reference_is_reported() {
        let stages = vec![stage("PLANTING", 0)];
        let orphan = stage("PRUNING", 9);
        let progress = vec![progress_at(&orphan, Uuid::new_v4())];
        assert_matches!(
            next_stage(&stages, &progress),
            Err(StageError::UnknownStage(id)) if id == orphan.stage_id
        );
    }

    #[test]
    fn other_details_are_ignored() {
        let stages = vec![stage("PLANTING", 0), stage("FLOWERING", 1)];
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let progress = vec![progress_at(&stages[1], theirs)];
        let next = next_stage_for_detail(&stages, &progress, mine).unwrap();
        assert_eq!(next.stage().unwrap().stage_code, "PLANTING");
    }

    #[test]
    fn harvesting_is_matched_case_insensitively() {
        assert!(is_harvesting(&stage("harvesting", 4)));
        assert!(!is_harvesting(&stage("RIPENING", 3)));
    }
}
