//! Slayer masters and their assignment tables.

use simplescape_types::MonsterKey;

/// One possible assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlayerAssignment {
    /// Monster to kill.
    pub monster: MonsterKey,
    /// Minimum Slayer level to receive it.
    pub level_req: u32,
    /// Inclusive `(min, max)` kill count.
    pub amount: (u32, u32),
}

/// A slayer master.
#[derive(Debug)]
pub struct SlayerMaster {
    /// Display name.
    pub name: &'static str,
    /// Assignments this master hands out.
    pub tasks: &'static [SlayerAssignment],
}

impl SlayerMaster {
    /// Assignments open to a player at `level`, in table order.
    pub fn eligible(&self, level: u32) -> Vec<SlayerAssignment> {
        self.tasks
            .iter()
            .filter(|task| level >= task.level_req)
            .copied()
            .collect()
    }
}

const fn task(monster: MonsterKey, level_req: u32, amount: (u32, u32)) -> SlayerAssignment {
    SlayerAssignment {
        monster,
        level_req,
        amount,
    }
}

/// The only slayer master.
pub static VANNAKA: SlayerMaster = SlayerMaster {
    name: "Vannaka",
    tasks: &[
        task(MonsterKey::Chicken, 1, (10, 25)),
        task(MonsterKey::Cow, 1, (10, 25)),
        task(MonsterKey::Goblin, 5, (15, 30)),
        task(MonsterKey::Skeleton, 15, (15, 30)),
        task(MonsterKey::Dwarf, 30, (20, 40)),
    ],
};
