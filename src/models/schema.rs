use serde::{Deserialize, Serialize};

/// Logical fields of a tracking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Position,
    Tier,
    TierPrefix,
    DoD,
    Performance,
    CriteriaGroup,
    CriteriaTopic,
    CriteriaRef,
    Criteria,
    Progress,
    Notes,
    LinkedRef,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Position,
        Field::Tier,
        Field::TierPrefix,
        Field::DoD,
        Field::Performance,
        Field::CriteriaGroup,
        Field::CriteriaTopic,
        Field::CriteriaRef,
        Field::Criteria,
        Field::Progress,
        Field::Notes,
        Field::LinkedRef,
    ];
}

/// Mapping from logical fields to the column identifiers used by the store.
///
/// Loaded once with the configuration and passed by reference afterwards.
/// The `position` column doubles as the primary key for remote row matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub position: String,
    pub tier: String,
    pub tier_prefix: String,
    pub dod: String,
    pub performance: String,
    pub criteria_group: String,
    pub criteria_topic: String,
    pub criteria_ref: String,
    pub criteria: String,
    pub progress: String,
    pub notes: String,
    pub linked_ref: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            position: "Position".to_string(),
            tier: "Tier".to_string(),
            tier_prefix: "Tier Prefix".to_string(),
            dod: "DoD".to_string(),
            performance: "Performance".to_string(),
            criteria_group: "Criteria Group".to_string(),
            criteria_topic: "Criteria Topic".to_string(),
            criteria_ref: "Criteria Ref".to_string(),
            criteria: "Criteria".to_string(),
            progress: "Progress".to_string(),
            notes: "Notes".to_string(),
            linked_ref: "Linked Ref".to_string(),
        }
    }
}

impl ColumnSchema {
    pub fn column(&self, field: Field) -> &str {
        match field {
            Field::Position => &self.position,
            Field::Tier => &self.tier,
            Field::TierPrefix => &self.tier_prefix,
            Field::DoD => &self.dod,
            Field::Performance => &self.performance,
            Field::CriteriaGroup => &self.criteria_group,
            Field::CriteriaTopic => &self.criteria_topic,
            Field::CriteriaRef => &self.criteria_ref,
            Field::Criteria => &self.criteria,
            Field::Progress => &self.progress,
            Field::Notes => &self.notes,
            Field::LinkedRef => &self.linked_ref,
        }
    }

    /// Primary-key column name.
    pub fn primary_key(&self) -> &str {
        &self.position
    }

    /// Column identifiers in canonical order.
    pub fn headers(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .map(|f| self.column(*f).to_string())
            .collect()
    }
}
