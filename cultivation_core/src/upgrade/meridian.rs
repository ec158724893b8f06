//! Opening meridians and training acupoints

use super::attempt::ResourcePool;
use crate::error::{CoreError, CoreResult};
use crate::progression::ProgressionState;
use crate::source::Meridian;
use serde::{Deserialize, Serialize};

/// Realm stage needed before any meridian can be opened
pub const MERIDIAN_MIN_STAGE: u32 = 3;

/// Open a meridian for floor(1000 × coefficient) spirit stones
pub fn open_meridian(
    meridian: &mut Meridian,
    progression: &ProgressionState,
    pool: &mut ResourcePool,
) -> CoreResult<u64> {
    if meridian.open {
        return Err(CoreError::refused("open_meridian", "meridian is already open"));
    }
    if progression.stage < MERIDIAN_MIN_STAGE {
        return Err(CoreError::refused_needing(
            "open_meridian",
            "realm too low to open meridians",
            MERIDIAN_MIN_STAGE as u64,
        ));
    }

    let cost = (1000.0 * meridian.kind.coefficient()).floor() as u64;
    pool.spend(cost);
    meridian.open = true;
    tracing::debug!(meridian = %meridian.id, cost, "meridian opened");
    Ok(cost)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcupointTraining {
    pub new_level: u32,
    pub experience_cost: u64,
    pub spirit_stone_cost: u64,
    /// Bonus points the acupoint now grants
    pub points: i64,
}

/// Train one acupoint of an open meridian by a level
pub fn train_acupoint(
    meridian: &mut Meridian,
    acupoint: usize,
    progression: &mut ProgressionState,
    pool: &mut ResourcePool,
) -> CoreResult<AcupointTraining> {
    if !meridian.open {
        return Err(CoreError::refused(
            "train_acupoint",
            "the meridian must be opened first",
        ));
    }
    let coefficient = meridian.kind.coefficient();
    let point = meridian
        .acupoints
        .get(acupoint)
        .ok_or_else(|| CoreError::invalid(format!("no acupoint at index {acupoint}")))?;
    if point.is_maxed() {
        return Err(CoreError::refused("train_acupoint", "acupoint is at max level"));
    }

    let experience_cost = (50.0 * (point.level + 1) as f64 * coefficient).floor() as u64;
    let spirit_stone_cost = (experience_cost as f64 * 0.5).floor() as u64;
    if progression.experience < experience_cost {
        return Err(CoreError::refused_needing(
            "train_acupoint",
            "not enough experience",
            experience_cost,
        ));
    }

    progression.experience -= experience_cost;
    pool.spend(spirit_stone_cost);
    let multiplier = meridian.kind.acupoint_multiplier();
    let point = &mut meridian.acupoints[acupoint];
    point.level += 1;

    Ok(AcupointTraining {
        new_level: point.level,
        experience_cost,
        spirit_stone_cost,
        points: point.level as i64 * multiplier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Acupoint, BonusSource, MeridianKind};

    fn state(stage: u32, experience: u64) -> ProgressionState {
        ProgressionState {
            stage,
            experience,
            ..Default::default()
        }
    }

    #[test]
    fn test_open_requires_stage() {
        let mut meridian = Meridian::new("lung", MeridianKind::Lung);
        let mut pool = ResourcePool::new(5000);

        let err = open_meridian(&mut meridian, &state(2, 0), &mut pool).unwrap_err();
        assert_eq!(err.needed(), Some(3));
        assert!(!meridian.open);

        assert_eq!(open_meridian(&mut meridian, &state(3, 0), &mut pool).unwrap(), 1500);
        assert!(meridian.open);
        assert_eq!(pool.spirit_stones, 3500);
    }

    #[test]
    fn test_vessel_costs_more() {
        let mut meridian = Meridian::new("ren", MeridianKind::Ren);
        let mut pool = ResourcePool::new(5000);
        assert_eq!(open_meridian(&mut meridian, &state(5, 0), &mut pool).unwrap(), 2500);
    }

    #[test]
    fn test_train_acupoint() {
        let mut meridian = Meridian::new("stomach", MeridianKind::Stomach)
            .with_acupoint(Acupoint::new("Zusanli"))
            .opened();
        let mut progression = state(3, 1000);
        let mut pool = ResourcePool::new(1000);

        let trained = train_acupoint(&mut meridian, 0, &mut progression, &mut pool).unwrap();
        // 50 × 1 × 1.5
        assert_eq!(trained.experience_cost, 75);
        assert_eq!(trained.spirit_stone_cost, 37);
        assert_eq!(trained.points, 3);
        assert_eq!(meridian.bonus().hp, 3);
        assert_eq!(progression.experience, 925);
    }

    #[test]
    fn test_train_requires_open_meridian() {
        let mut meridian = Meridian::new("stomach", MeridianKind::Stomach)
            .with_acupoint(Acupoint::new("Zusanli"));
        let mut progression = state(3, 1000);
        let mut pool = ResourcePool::new(1000);

        assert!(train_acupoint(&mut meridian, 0, &mut progression, &mut pool).is_err());
        assert_eq!(meridian.acupoints[0].level, 0);
    }

    #[test]
    fn test_train_refused_at_max() {
        let mut meridian = Meridian::new("du", MeridianKind::Du)
            .with_acupoint(Acupoint::new("Baihui").at_level(10))
            .opened();
        let mut progression = state(3, 100_000);
        let mut pool = ResourcePool::new(1000);

        let err = train_acupoint(&mut meridian, 0, &mut progression, &mut pool).unwrap_err();
        assert!(err.is_refusal());
    }

    #[test]
    fn test_unknown_acupoint_is_invalid() {
        let mut meridian = Meridian::new("du", MeridianKind::Du).opened();
        let mut progression = state(3, 100_000);
        let mut pool = ResourcePool::new(1000);

        let err = train_acupoint(&mut meridian, 4, &mut progression, &mut pool).unwrap_err();
        assert!(!err.is_refusal());
    }
}
