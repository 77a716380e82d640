use super::types::Level;

const LOW_TIPS: [&str; 3] = [
    "Great job! Your carbon footprint is relatively low.",
    "Consider installing solar panels to further reduce your electricity emissions.",
    "Look into community garden projects to offset remaining emissions.",
];

const MEDIUM_TIPS: [&str; 4] = [
    "Your carbon footprint is average. Here are some ways to improve:",
    "Reduce car usage by carpooling or using public transportation.",
    "Switch to energy-efficient appliances and LED lighting.",
    "Consider reducing meat consumption further.",
];

const HIGH_TIPS: [&str; 5] = [
    "Your carbon footprint is higher than average. Here's how to reduce it:",
    "Significantly reduce air travel or offset your flights.",
    "Switch to renewable energy sources for your home.",
    "Consider a plant-based diet and reduce food waste.",
    "Improve home insulation to reduce heating/cooling needs.",
];

impl Level {
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Level::Low => &LOW_TIPS,
            Level::Medium => &MEDIUM_TIPS,
            Level::High => &HIGH_TIPS,
        }
    }

    /// One-line summary shown above the breakdown.
    pub fn headline(self) -> &'static str {
        match self {
            Level::Low => "Your carbon footprint is lower than average. Great job!",
            Level::Medium => {
                "Your carbon footprint is around average. There's room for improvement."
            }
            Level::High => "Your carbon footprint is higher than average. Consider making changes.",
        }
    }
}
