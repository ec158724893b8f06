//! Realm (cultivation stage) table

use serde::{Deserialize, Serialize};

/// One cultivation stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realm {
    /// 1-based ordinal; higher is further along
    pub stage: u32,
    pub name: String,
    /// Non-negative, increasing with stage
    pub coefficient: f64,
}

impl Realm {
    pub fn new(stage: u32, name: impl Into<String>, coefficient: f64) -> Self {
        Realm {
            stage,
            name: name.into(),
            coefficient,
        }
    }
}

/// Ordered list of realms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Realm>", into = "Vec<Realm>")]
pub struct RealmTable {
    realms: Vec<Realm>,
}

impl RealmTable {
    /// Build a table, sorting by stage
    pub fn new(mut realms: Vec<Realm>) -> Self {
        realms.sort_by_key(|r| r.stage);
        RealmTable { realms }
    }

    /// The built-in 22-stage ladder
    pub fn builtin() -> Self {
        let ladder = [
            ("Mortal", 0.0),
            ("Qi Refining", 0.5),
            ("Foundation Establishment", 1.2),
            ("Golden Core", 2.5),
            ("Nascent Soul", 4.0),
            ("Deity Transformation", 7.0),
            ("Void Refinement", 10.0),
            ("Body Integration", 14.0),
            ("Mahayana", 19.0),
            ("Tribulation Transcendence", 25.0),
            ("Human Immortal", 32.0),
            ("Earth Immortal", 40.0),
            ("Heavenly Immortal", 49.0),
            ("True Immortal", 59.0),
            ("Mystic Immortal", 70.0),
            ("Golden Immortal", 82.0),
            ("Taiyi Golden Immortal", 95.0),
            ("Daluo Golden Immortal", 109.0),
            ("Hunyuan Golden Immortal", 124.0),
            ("Hunyuan Daluo Golden Immortal", 140.0),
            ("Heavenly Dao", 160.0),
            ("Great Dao", 200.0),
        ];
        RealmTable::new(
            ladder
                .iter()
                .enumerate()
                .map(|(i, (name, coefficient))| Realm::new(i as u32 + 1, *name, *coefficient))
                .collect(),
        )
    }

    pub fn get(&self, stage: u32) -> Option<&Realm> {
        self.realms.iter().find(|r| r.stage == stage)
    }

    /// The first realm above `stage`
    pub fn next(&self, stage: u32) -> Option<&Realm> {
        self.realms.iter().find(|r| r.stage > stage)
    }

    pub fn first(&self) -> Option<&Realm> {
        self.realms.first()
    }

    /// Coefficient for a stage; unknown stages are treated as 0.0
    pub fn coefficient(&self, stage: u32) -> f64 {
        self.get(stage).map(|r| r.coefficient).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.realms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Realm> {
        self.realms.iter()
    }

    /// Stages must be unique and coefficients non-negative and non-decreasing
    pub fn validate(&self) -> Result<(), String> {
        if self.realms.is_empty() {
            return Err("realm table is empty".to_string());
        }
        for pair in self.realms.windows(2) {
            if pair[0].stage == pair[1].stage {
                return Err(format!("duplicate stage {}", pair[0].stage));
            }
            if pair[1].coefficient < pair[0].coefficient {
                return Err(format!(
                    "coefficient decreases from {} to {}",
                    pair[0].name, pair[1].name
                ));
            }
        }
        if self.realms.iter().any(|r| r.coefficient < 0.0) {
            return Err("negative realm coefficient".to_string());
        }
        Ok(())
    }
}

impl From<Vec<Realm>> for RealmTable {
    fn from(realms: Vec<Realm>) -> Self {
        RealmTable::new(realms)
    }
}

impl From<RealmTable> for Vec<Realm> {
    fn from(table: RealmTable) -> Self {
        table.realms
    }
}

impl Default for RealmTable {
    fn default() -> Self {
        RealmTable::builtin()
    }
}
