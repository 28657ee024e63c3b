//! Everyday "life goals" priced as a fixed monthly cost in KRW

use serde::Serialize;

/// A spending target the dividends should cover
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeGoal {
    pub id: u32,
    pub title: &'static str,
    /// Monthly cost in KRW
    pub monthly_cost: f64,
    pub description: &'static str,
}

/// The fixed goal set, in display order
pub const LIFE_GOALS: [LifeGoal; 5] = [
    LifeGoal {
        id: 1,
        title: "Free streaming",
        monthly_cost: 17_000.0,
        description: "Premium streaming subscription",
    },
    LifeGoal {
        id: 2,
        title: "A coffee every day",
        monthly_cost: 150_000.0,
        description: "30 cafe coffees a month",
    },
    LifeGoal {
        id: 3,
        title: "Phone bill covered",
        monthly_cost: 80_000.0,
        description: "Unlimited data plan",
    },
    LifeGoal {
        id: 4,
        title: "Fuel for the car",
        monthly_cost: 300_000.0,
        description: "Average monthly fuel cost",
    },
    LifeGoal {
        id: 5,
        title: "Quarterly hotel getaway",
        monthly_cost: 500_000.0,
        description: "Five-star stay every 3 months, monthly equivalent",
    },
];

pub fn find_goal(id: u32) -> Option<&'static LifeGoal> {
    LIFE_GOALS.iter().find(|g| g.id == id)
}

/// The goal selected before the user picks one
pub fn default_goal() -> &'static LifeGoal {
    &LIFE_GOALS[0]
}
