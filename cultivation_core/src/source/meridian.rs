//! Meridian - Stats from opened meridians and trained acupoints

use super::{Bonus, BonusSource};
use crate::types::SourceKind;
use serde::{Deserialize, Serialize};

/// Crit rate granted per acupoint bonus point on crit meridians
const CRIT_PER_POINT: f64 = 0.001;

/// Highest level an acupoint can be trained to
pub const ACUPOINT_MAX_LEVEL: u32 = 10;

/// The twelve regular meridians plus the Ren and Du vessels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeridianKind {
    Lung,
    LargeIntestine,
    Stomach,
    Spleen,
    Heart,
    SmallIntestine,
    Bladder,
    Kidney,
    Pericardium,
    TripleBurner,
    Gallbladder,
    Liver,
    Ren,
    Du,
}

/// The single stat a meridian's acupoints feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeridianStat {
    Attack,
    Defense,
    Hp,
    Crit,
    Speed,
}

impl MeridianKind {
    pub fn all() -> &'static [MeridianKind] {
        use MeridianKind::*;
        &[
            Lung,
            LargeIntestine,
            Stomach,
            Spleen,
            Heart,
            SmallIntestine,
            Bladder,
            Kidney,
            Pericardium,
            TripleBurner,
            Gallbladder,
            Liver,
            Ren,
            Du,
        ]
    }

    /// Ren and Du are the extraordinary vessels
    pub fn is_vessel(&self) -> bool {
        matches!(self, MeridianKind::Ren | MeridianKind::Du)
    }

    /// Difficulty coefficient applied to opening and training costs
    pub fn coefficient(&self) -> f64 {
        if self.is_vessel() {
            2.5
        } else {
            1.5
        }
    }

    pub fn stat(&self) -> MeridianStat {
        use MeridianKind::*;
        match self {
            Gallbladder | Liver | Du => MeridianStat::Attack,
            Bladder | Kidney => MeridianStat::Defense,
            Stomach | Spleen | Ren => MeridianStat::Hp,
            Heart | SmallIntestine | Pericardium | TripleBurner => MeridianStat::Crit,
            Lung | LargeIntestine => MeridianStat::Speed,
        }
    }

    /// Bonus points per acupoint level
    pub fn acupoint_multiplier(&self) -> i64 {
        use MeridianKind::*;
        match self {
            Ren | Du => 4,
            Stomach | Spleen | Bladder | Kidney => 3,
            _ => 2,
        }
    }
}

/// A trainable point along a meridian
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acupoint {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
}

impl Acupoint {
    pub fn new(name: impl Into<String>) -> Self {
        Acupoint {
            name: name.into(),
            level: 0,
            max_level: ACUPOINT_MAX_LEVEL,
        }
    }

    pub fn at_level(mut self, level: u32) -> Self {
        self.level = level.min(self.max_level);
        self
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }
}

/// A meridian and its acupoints; contributes only once opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meridian {
    pub id: String,
    pub kind: MeridianKind,
    pub open: bool,
    pub acupoints: Vec<Acupoint>,
}

impl Meridian {
    pub fn new(id: impl Into<String>, kind: MeridianKind) -> Self {
        Meridian {
            id: id.into(),
            kind,
            open: false,
            acupoints: Vec::new(),
        }
    }

    pub fn with_acupoint(mut self, acupoint: Acupoint) -> Self {
        self.acupoints.push(acupoint);
        self
    }

    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }

    /// Bonus points of one acupoint at its current level
    pub fn acupoint_points(&self, acupoint: &Acupoint) -> i64 {
        acupoint.level as i64 * self.kind.acupoint_multiplier()
    }

    /// Bonus points summed over every acupoint
    pub fn total_points(&self) -> i64 {
        self.acupoints.iter().map(|a| self.acupoint_points(a)).sum()
    }
}

impl BonusSource for Meridian {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Meridian
    }

    fn contributes(&self) -> bool {
        self.open
    }

    fn bonus(&self) -> Bonus {
        let points = self.total_points();
        let mut bonus = Bonus::default();
        match self.kind.stat() {
            MeridianStat::Attack => bonus.attack = points,
            MeridianStat::Defense => bonus.defense = points,
            MeridianStat::Hp => bonus.hp = points,
            MeridianStat::Speed => bonus.speed = points,
            MeridianStat::Crit => bonus.crit_rate = points as f64 * CRIT_PER_POINT,
        }
        bonus
    }
}
