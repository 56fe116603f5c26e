use serde::Serialize;

/// Progress of a tracked criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressState {
    ToDo,
    Wip,
    Done,
    Missed,
}

impl ProgressState {
    pub const ALL: [ProgressState; 4] = [
        ProgressState::ToDo,
        ProgressState::Wip,
        ProgressState::Done,
        ProgressState::Missed,
    ];

    /// Case-insensitive parse of a status token.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Some(Self::ToDo),
            "wip" => Some(Self::Wip),
            "done" => Some(Self::Done),
            "missed" => Some(Self::Missed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressState::ToDo => "ToDo",
            ProgressState::Wip => "WIP",
            ProgressState::Done => "Done",
            ProgressState::Missed => "Missed",
        }
    }

    /// Value written back to the store (upper-cased token).
    pub fn to_stored(&self) -> String {
        self.label().to_uppercase()
    }

    /// Definition-of-Done implied by this progress value alone.
    pub fn implied_dod(&self) -> DodState {
        match self {
            ProgressState::ToDo => DodState::Planned,
            ProgressState::Wip => DodState::InProgress,
            ProgressState::Done => DodState::Completed,
            ProgressState::Missed => DodState::Unfinished,
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.label()).collect()
    }
}

/// Definition-of-Done status, derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DodState {
    Planned,
    InProgress,
    Completed,
    Unfinished,
}

impl DodState {
    /// Accepts "In Progress" as well as "InProgress", any case.
    pub fn parse(s: &str) -> Option<Self> {
        let norm: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match norm.as_str() {
            "planned" => Some(Self::Planned),
            "inprogress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "unfinished" => Some(Self::Unfinished),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DodState::Planned => "Planned",
            DodState::InProgress => "In Progress",
            DodState::Completed => "Completed",
            DodState::Unfinished => "Unfinished",
        }
    }
}

/// DoD after moving to `progress`, guarded by the current DoD.
///
/// A row that is still `Planned` keeps `Planned` when it is marked missed;
/// only work that was `In Progress` records `Unfinished`.
pub fn next_dod(current: Option<DodState>, progress: ProgressState) -> DodState {
    let computed = progress.implied_dod();
    match (current, computed) {
        (Some(DodState::Planned), DodState::Unfinished) => DodState::Planned,
        (Some(DodState::InProgress), DodState::Unfinished) => DodState::Unfinished,
        (Some(DodState::Unfinished), DodState::Unfinished) => DodState::Unfinished,
        (_, computed) => computed,
    }
}
