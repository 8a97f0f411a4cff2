//! Pure draft updates
//!
//! Form handlers describe an edit as a [`DraftAction`] and [`reduce`] turns
//! the current draft into the next one. Indices that do not point at an
//! existing row leave the draft untouched.

use profilehub_domain::{
    CollaborationMemberDraft, ExperienceDraft, ImpactHighlightDraft, PipelineInsightDraft,
    PortfolioLinkDraft, ProfileDraft, QualificationDraft, ReferenceDraft, RowKind, TagList,
    TextField,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One edit to a profile draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DraftAction {
    SetText { field: TextField, value: String },
    AddTag { list: TagList, value: String },
    RemoveTag { list: TagList, value: String },
    AddRow { kind: RowKind },
    RemoveRow { kind: RowKind, index: usize },
    UpdateExperience { index: usize, row: ExperienceDraft },
    UpdateQualification { index: usize, row: QualificationDraft },
    UpdatePortfolioLink { index: usize, row: PortfolioLinkDraft },
    UpdateReference { index: usize, row: ReferenceDraft },
    UpdateCollaborator { index: usize, row: CollaborationMemberDraft },
    UpdateImpactHighlight { index: usize, row: ImpactHighlightDraft },
    UpdatePipelineInsight { index: usize, row: PipelineInsightDraft },
    /// Swap in a freshly built draft after a refetch
    Replace { draft: Box<ProfileDraft> },
}

/// Apply `action` to `draft`
pub fn reduce(mut draft: ProfileDraft, action: DraftAction) -> ProfileDraft {
    match action {
        DraftAction::SetText { field, value } => *draft.text_mut(field) = value,
        DraftAction::AddTag { list, value } => add_tag(draft.tags_mut(list), &value),
        DraftAction::RemoveTag { list, value } => {
            let needle = value.trim().to_lowercase();
            draft.tags_mut(list).retain(|tag| tag.trim().to_lowercase() != needle);
        }
        DraftAction::AddRow { kind } => add_row(&mut draft, kind),
        DraftAction::RemoveRow { kind, index } => remove_row(&mut draft, kind, index),
        DraftAction::UpdateExperience { index, row } => {
            replace_at(&mut draft.experiences, index, row)
        }
        DraftAction::UpdateQualification { index, row } => {
            replace_at(&mut draft.qualifications, index, row)
        }
        DraftAction::UpdatePortfolioLink { index, row } => {
            replace_at(&mut draft.portfolio_links, index, row)
        }
        DraftAction::UpdateReference { index, row } => {
            replace_at(&mut draft.references, index, row)
        }
        DraftAction::UpdateCollaborator { index, row } => {
            replace_at(&mut draft.collaboration_roster, index, row)
        }
        DraftAction::UpdateImpactHighlight { index, row } => {
            replace_at(&mut draft.impact_highlights, index, row)
        }
        DraftAction::UpdatePipelineInsight { index, row } => {
            replace_at(&mut draft.pipeline_insights, index, row)
        }
        DraftAction::Replace { draft: next } => return *next,
    }
    draft
}

fn add_tag(tags: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    let key = value.to_lowercase();
    if tags.iter().any(|tag| tag.trim().to_lowercase() == key) {
        return;
    }
    tags.push(value.to_string());
}

fn add_row(draft: &mut ProfileDraft, kind: RowKind) {
    match kind {
        RowKind::Experience => draft.experiences.push(ExperienceDraft::default()),
        RowKind::Qualification => draft.qualifications.push(QualificationDraft::default()),
        RowKind::PortfolioLink => draft.portfolio_links.push(PortfolioLinkDraft::default()),
        RowKind::Reference => draft.references.push(ReferenceDraft::default()),
        RowKind::CollaborationMember => {
            draft.collaboration_roster.push(CollaborationMemberDraft::default())
        }
        RowKind::ImpactHighlight => draft.impact_highlights.push(ImpactHighlightDraft::default()),
        RowKind::PipelineInsight => draft.pipeline_insights.push(PipelineInsightDraft::default()),
    }
}

fn remove_row(draft: &mut ProfileDraft, kind: RowKind, index: usize) {
    let removed = match kind {
        RowKind::Experience => remove_at(&mut draft.experiences, index),
        RowKind::Qualification => remove_at(&mut draft.qualifications, index),
        RowKind::PortfolioLink => remove_at(&mut draft.portfolio_links, index),
        RowKind::Reference => remove_at(&mut draft.references, index),
        RowKind::CollaborationMember => remove_at(&mut draft.collaboration_roster, index),
        RowKind::ImpactHighlight => remove_at(&mut draft.impact_highlights, index),
        RowKind::PipelineInsight => remove_at(&mut draft.pipeline_insights, index),
    };
    if !removed {
        debug!(kind = kind.as_str(), index, "Ignoring removal of missing row");
    }
}

fn remove_at<T>(rows: &mut Vec<T>, index: usize) -> bool {
    if index < rows.len() {
        rows.remove(index);
        true
    } else {
        false
    }
}

fn replace_at<T>(rows: &mut [T], index: usize, row: T) {
    match rows.get_mut(index) {
        Some(slot) => *slot = row,
        None => debug!(index, "Ignoring update of missing row"),
    }
}
